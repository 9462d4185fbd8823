use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Modo do simulado: TREINO mostra gabarito comentado no final, PROVA só a nota.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuizMode {
    #[default]
    Treino,
    Prova,
}

impl QuizMode {
    pub fn as_str(self) -> &'static str {
        match self {
            QuizMode::Treino => "TREINO",
            QuizMode::Prova => "PROVA",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resposta Certo/Errado. No fio viaja como "C" ou "E".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Answer {
    #[serde(rename = "C")]
    Certo,
    #[serde(rename = "E")]
    Errado,
}

impl Answer {
    pub fn symbol(self) -> &'static str {
        match self {
            Answer::Certo => "C",
            Answer::Errado => "E",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: u32,
    pub area: String,
    pub disciplina: String,
    pub assunto: String,
    pub enunciado: String,
    pub resposta_correta: Answer,
    pub comentario: String,
}

/// Pesos da correção. CEBRASPE: uma errada anula uma certa.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScoringRule {
    pub acerto: f64,
    pub erro: f64,
    pub em_branco: f64,
}

impl Default for ScoringRule {
    fn default() -> Self {
        Self {
            acerto: 1.0,
            erro: -1.0,
            em_branco: 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizPayload {
    pub banca: String,
    pub nivel: String,
    pub cargo: String,
    pub modo: QuizMode,
    pub pontuacao: ScoringRule,
    pub questoes: Vec<Question>,
}

impl QuizPayload {
    pub fn len(&self) -> usize {
        self.questoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questoes.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questoes.get(index)
    }
}

/// Envelope externo que o modelo devolve: `{ "quiz": { ... } }`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizEnvelope {
    pub quiz: QuizPayload,
}

/// Par (questão, resposta marcada)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAnswer {
    pub question_id: u32,
    pub answer: Answer,
}

/// Folha de respostas: no máximo uma marcação por id de questão.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSheet {
    marks: BTreeMap<u32, Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: u32) -> Option<Answer> {
        self.marks.get(&question_id).copied()
    }

    /// Marca (ou troca) a resposta. Marcar de novo o mesmo valor deixa em branco.
    pub fn toggle(&mut self, question_id: u32, answer: Answer) {
        if self.get(question_id) == Some(answer) {
            self.marks.remove(&question_id);
        } else {
            self.marks.insert(question_id, answer);
        }
    }

    pub fn set(&mut self, question_id: u32, answer: Option<Answer>) {
        match answer {
            Some(a) => {
                self.marks.insert(question_id, a);
            }
            None => {
                self.marks.remove(&question_id);
            }
        }
    }

    pub fn clear(&mut self, question_id: u32) {
        self.marks.remove(&question_id);
    }

    pub fn is_answered(&self, question_id: u32) -> bool {
        self.marks.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = UserAnswer> + '_ {
        self.marks.iter().map(|(&question_id, &answer)| UserAnswer {
            question_id,
            answer,
        })
    }
}
