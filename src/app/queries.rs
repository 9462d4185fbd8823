use super::*;
use crate::model::{Answer, Question};
use crate::scoring::{ResultsSummary, score};
use crate::view_models::{ReviewRow, review_rows};

impl QuizSession {
    pub fn is_loading(&self) -> bool {
        matches!(self.screen, Screen::Loading { .. })
    }

    /// Mensagem de erro, só existe na tela de configuração
    pub fn error_message(&self) -> Option<&str> {
        match &self.screen {
            Screen::Configuring { error } => error.as_deref(),
            _ => None,
        }
    }

    pub fn quiz(&self) -> Option<&QuizPayload> {
        match &self.screen {
            Screen::InProgress { quiz, .. } | Screen::Results { quiz, .. } => Some(quiz),
            _ => None,
        }
    }

    pub fn answers(&self) -> Option<&AnswerSheet> {
        match &self.screen {
            Screen::InProgress { answers, .. } | Screen::Results { answers, .. } => Some(answers),
            _ => None,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.screen {
            Screen::InProgress { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.screen {
            Screen::InProgress { quiz, index, .. } => quiz.question(*index),
            _ => None,
        }
    }

    pub fn current_answer(&self) -> Option<Answer> {
        let q = self.current_question()?;
        self.answers()?.get(q.id)
    }

    pub fn is_last_question(&self) -> bool {
        match &self.screen {
            Screen::InProgress { quiz, index, .. } => *index + 1 >= quiz.len(),
            _ => false,
        }
    }

    /// Progresso em %, contando a questão atual
    pub fn progress_percent(&self) -> Option<f32> {
        match &self.screen {
            Screen::InProgress { quiz, index, .. } if !quiz.is_empty() => {
                Some((*index + 1) as f32 / quiz.len() as f32 * 100.0)
            }
            _ => None,
        }
    }

    /// Para cada questão, se já tem marcação (bolinhas de navegação)
    pub fn answered_flags(&self) -> Vec<bool> {
        match (self.quiz(), self.answers()) {
            (Some(quiz), Some(answers)) => quiz
                .questoes
                .iter()
                .map(|q| answers.is_answered(q.id))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Resultado final, só na tela de resultado
    pub fn results(&self) -> Option<ResultsSummary> {
        match &self.screen {
            Screen::Results { quiz, answers } => Some(score(quiz, answers)),
            _ => None,
        }
    }

    /// Correção comentada: só no modo TREINO
    pub fn review(&self) -> Option<Vec<ReviewRow>> {
        match &self.screen {
            Screen::Results { quiz, answers } if quiz.modo == QuizMode::Treino => {
                Some(review_rows(quiz, answers))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tests::payload_with_key;

    fn finished(mode: QuizMode, marks: &[Option<Answer>]) -> QuizSession {
        use crate::model::Answer::{Certo as C, Errado as E};
        let mut session = QuizSession::with_config(QuizConfig { count: 3, mode });
        session.request_start();
        session.finish_generation(Ok(payload_with_key(&[C, E, C], mode)));
        for m in marks {
            session.set_answer(*m);
            session.advance();
        }
        session
    }

    #[test]
    fn one_right_one_wrong_one_blank_scores_zero() {
        let session = finished(
            QuizMode::Prova,
            &[Some(Answer::Certo), Some(Answer::Certo), None],
        );
        let r = session.results().unwrap();
        assert_eq!((r.correct, r.incorrect, r.blank), (1, 1, 1));
        assert_eq!(r.final_score, 0.0);
    }

    #[test]
    fn review_only_in_practice_mode() {
        let marks = [Some(Answer::Certo), Some(Answer::Errado), Some(Answer::Certo)];
        assert!(finished(QuizMode::Prova, &marks).review().is_none());

        let rows = finished(QuizMode::Treino, &marks).review().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(finished(QuizMode::Treino, &marks).results().unwrap().final_score, 3.0);
    }

    #[test]
    fn progress_and_answered_flags_track_position() {
        let mut session = QuizSession::with_config(QuizConfig {
            count: 4,
            mode: QuizMode::Treino,
        });
        session.request_start();
        session.finish_generation(Ok(payload_with_key(&[Answer::Certo; 4], QuizMode::Treino)));

        assert_eq!(session.progress_percent(), Some(25.0));
        session.select_answer(Answer::Errado);
        session.advance();
        assert_eq!(session.progress_percent(), Some(50.0));
        assert_eq!(session.answered_flags(), vec![true, false, false, false]);
        assert!(session.results().is_none());
    }

    #[test]
    fn nothing_to_show_while_configuring() {
        let session = QuizSession::new();
        assert!(session.current_question().is_none());
        assert!(session.progress_percent().is_none());
        assert!(session.answered_flags().is_empty());
        assert!(!session.is_last_question());
    }
}
