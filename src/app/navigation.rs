use super::*;

impl QuizSession {
    /// Próxima questão; na última, encerra e vai para o resultado.
    pub fn advance(&mut self) {
        match &mut self.screen {
            Screen::InProgress { quiz, index, .. } => {
                if *index + 1 < quiz.len() {
                    *index += 1;
                    return;
                }
            }
            _ => {
                self.ignored("advance");
                return;
            }
        }

        // era a última: InProgress -> Results sem mexer no índice
        if let Screen::InProgress { quiz, answers, .. } = std::mem::take(&mut self.screen) {
            log::info!("Simulado finalizado ({} respondidas)", answers.len());
            self.screen = Screen::Results { quiz, answers };
        }
    }

    /// Questão anterior. Na primeira não faz nada.
    pub fn go_back(&mut self) {
        match &mut self.screen {
            Screen::InProgress { index, .. } => {
                if *index > 0 {
                    *index -= 1;
                }
            }
            _ => self.ignored("go_back"),
        }
    }

    /// Results -> Configuring, descartando simulado e respostas.
    pub fn restart(&mut self) {
        if matches!(self.screen, Screen::Results { .. }) {
            self.screen = Screen::Configuring { error: None };
        } else {
            self.ignored("restart");
        }
    }
}
