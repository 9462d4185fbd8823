use super::*;
use crate::model::Answer;

impl QuizSession {
    /// Marca C ou E na questão atual. Marcar de novo o mesmo valor deixa em branco.
    pub fn select_answer(&mut self, answer: Answer) {
        match &mut self.screen {
            Screen::InProgress {
                quiz,
                index,
                answers,
            } => {
                if let Some(q) = quiz.question(*index) {
                    answers.toggle(q.id, answer);
                }
            }
            _ => self.ignored("select_answer"),
        }
    }

    /// "Deixar em branco": remove a marcação da questão atual.
    pub fn clear_answer(&mut self) {
        match &mut self.screen {
            Screen::InProgress {
                quiz,
                index,
                answers,
            } => {
                if let Some(q) = quiz.question(*index) {
                    answers.clear(q.id);
                }
            }
            _ => self.ignored("clear_answer"),
        }
    }

    /// Some(valor) segue a regra do toggle; None limpa.
    pub fn set_answer(&mut self, answer: Option<Answer>) {
        match answer {
            Some(a) => self.select_answer(a),
            None => self.clear_answer(),
        }
    }

    pub fn set_count(&mut self, count: usize) {
        if matches!(self.screen, Screen::Configuring { .. }) {
            self.config.count = count;
        } else {
            self.ignored("set_count");
        }
    }

    pub fn set_mode(&mut self, mode: QuizMode) {
        if matches!(self.screen, Screen::Configuring { .. }) {
            self.config.mode = mode;
        } else {
            self.ignored("set_mode");
        }
    }
}
