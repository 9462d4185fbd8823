// src/view_models.rs

use crate::model::{Answer, AnswerSheet, QuizPayload};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Acertou,
    Errou,
    EmBranco,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Acertou => "ACERTOU",
            Outcome::Errou => "ERROU",
            Outcome::EmBranco => "EM BRANCO",
        }
    }
}

/// Linha da correção comentada (só no modo TREINO)
#[derive(Clone, Debug)]
pub struct ReviewRow {
    pub number: usize, // 1-based
    pub disciplina: String,
    pub enunciado: String,
    pub gabarito: Answer,
    pub user_answer: Option<Answer>,
    pub comentario: String,
    pub outcome: Outcome,
}

impl ReviewRow {
    pub fn user_answer_label(&self) -> &'static str {
        self.user_answer.map(Answer::symbol).unwrap_or("—")
    }
}

pub fn review_rows(quiz: &QuizPayload, answers: &AnswerSheet) -> Vec<ReviewRow> {
    quiz.questoes
        .iter()
        .enumerate()
        .map(|(idx, q)| {
            let user_answer = answers.get(q.id);
            let outcome = match user_answer {
                None => Outcome::EmBranco,
                Some(a) if a == q.resposta_correta => Outcome::Acertou,
                Some(_) => Outcome::Errou,
            };
            ReviewRow {
                number: idx + 1,
                disciplina: q.disciplina.clone(),
                enunciado: q.enunciado.clone(),
                gabarito: q.resposta_correta,
                user_answer,
                comentario: q.comentario.clone(),
                outcome,
            }
        })
        .collect()
}
