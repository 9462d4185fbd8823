use crate::data::ExamProfile;
use crate::model::QuizMode;
use std::fmt::Write;

/// Instrução de sistema no padrão da banca, com o modo já preenchido.
pub fn system_instruction(profile: &ExamProfile, mode: QuizMode) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Você é um elaborador profissional de questões da banca {}, especialista em concursos públicos de {}, com foco no cargo de {} ({}).",
        profile.banca_extenso, profile.escolaridade, profile.cargo, profile.orgao
    );
    let _ = writeln!(
        out,
        "Sua função é gerar um QUIZ interativo no padrão {}, com questões do tipo \"CERTO ou ERRADO\".",
        profile.banca
    );
    out.push('\n');

    out.push_str("REGRAS:\n");
    let _ = writeln!(out, "- Escolaridade: {}", profile.escolaridade);
    let _ = writeln!(out, "- Estilo: {}", profile.estilo);
    let distribuicao = profile
        .distribuicao
        .iter()
        .map(|d| format!("{}% {}", d.percentual, d.area))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "- Distribuição: {distribuicao}.");
    let _ = writeln!(out, "- Conteúdo: {}.", profile.conteudo.join(", "));
    out.push_str("- Formato: JSON estrito.\n");
    for regra in &profile.regras {
        let _ = writeln!(out, "- {regra}");
    }
    out.push('\n');

    out.push_str("O JSON deve seguir EXATAMENTE esta estrutura:\n");
    let p = &profile.pontuacao;
    let _ = write!(
        out,
        r#"{{
  "quiz": {{
    "banca": "{banca}",
    "nivel": "{nivel}",
    "cargo": "{cargo}",
    "modo": "{modo}",
    "pontuacao": {{ "acerto": {acerto}, "erro": {erro}, "em_branco": {em_branco} }},
    "questoes": [
      {{
        "id": number,
        "area": string,
        "disciplina": string,
        "assunto": string,
        "enunciado": string,
        "resposta_correta": "C" | "E",
        "comentario": string
      }}
    ]
  }}
}}
"#,
        banca = profile.banca,
        nivel = profile.nivel,
        cargo = profile.cargo,
        modo = mode,
        acerto = p.acerto,
        erro = p.erro,
        em_branco = p.em_branco,
    );

    out
}

pub fn user_prompt(profile: &ExamProfile, count: usize, mode: QuizMode) -> String {
    format!(
        "Gere um simulador completo com {count} questões para o cargo de {} do {} no modo {mode}.",
        profile.cargo, profile.orgao
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_exam_profile_embedded;

    #[test]
    fn instruction_carries_mode_and_schema() {
        let profile = read_exam_profile_embedded().unwrap();
        let text = system_instruction(&profile, QuizMode::Prova);
        assert!(text.contains("\"modo\": \"PROVA\""));
        assert!(text.contains("\"resposta_correta\": \"C\" | \"E\""));
        assert!(text.contains("40% Conhecimentos Básicos, 60% Conhecimentos Específicos"));
        assert!(text.contains("\"acerto\": 1, \"erro\": -1, \"em_branco\": 0"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn prompt_names_count_role_and_mode() {
        let profile = read_exam_profile_embedded().unwrap();
        let prompt = user_prompt(&profile, 20, QuizMode::Treino);
        assert_eq!(
            prompt,
            "Gere um simulador completo com 20 questões para o cargo de Técnico do Seguro Social do INSS no modo TREINO."
        );
    }
}
