use crate::model::{AnswerSheet, QuizPayload};

/// Resultado derivado de um simulado. Nunca é guardado, só recalculado.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultsSummary {
    pub total_questions: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub blank: usize,
    pub raw_score: f64,
    pub final_score: f64,
}

impl ResultsSummary {
    /// Nota líquida com uma casa decimal, como no cartão de resultado
    pub fn final_score_label(&self) -> String {
        format!("{:.1}", self.final_score)
    }
}

/// Corrige o simulado: certas, erradas e em branco, nota líquida >= 0.
pub fn score(quiz: &QuizPayload, answers: &AnswerSheet) -> ResultsSummary {
    let mut correct = 0;
    let mut incorrect = 0;
    let mut blank = 0;

    for q in &quiz.questoes {
        match answers.get(q.id) {
            None => blank += 1,
            Some(a) if a == q.resposta_correta => correct += 1,
            Some(_) => incorrect += 1,
        }
    }

    let rule = &quiz.pontuacao;
    let raw_score = correct as f64 * rule.acerto
        + incorrect as f64 * rule.erro
        + blank as f64 * rule.em_branco;
    // nunca negativa (nem -0.0)
    let final_score = if raw_score > 0.0 { raw_score } else { 0.0 };

    ResultsSummary {
        total_questions: quiz.questoes.len(),
        correct,
        incorrect,
        blank,
        raw_score,
        final_score,
    }
}
