use crate::model::{AnswerSheet, QuizMode, QuizPayload};
use crate::source::GenerationError;
use log::debug;
use std::sync::mpsc::Receiver;

#[cfg(not(target_arch = "wasm32"))]
use crate::source::QuestionSource;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use crate::source::GeminiClient;

// Submódulos
pub mod actions;
pub mod generation;
pub mod navigation;
pub mod queries;

pub use generation::GenerationRequest;

/// Quantidades oferecidas na tela de configuração
pub const COUNT_OPTIONS: [usize; 4] = [10, 20, 50, 120];
pub const DEFAULT_COUNT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub count: usize,
    pub mode: QuizMode,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            mode: QuizMode::Treino,
        }
    }
}

/// As quatro telas. Cada variante carrega só o que faz sentido nela.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Configuring {
        error: Option<String>,
    },
    Loading {
        request: GenerationRequest,
    },
    InProgress {
        quiz: QuizPayload,
        index: usize,
        answers: AnswerSheet,
    },
    Results {
        quiz: QuizPayload,
        answers: AnswerSheet,
    },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Configuring { error: None }
    }
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Configuring { .. } => "Configuring",
            Screen::Loading { .. } => "Loading",
            Screen::InProgress { .. } => "InProgress",
            Screen::Results { .. } => "Results",
        }
    }
}

/// Estado de uma sessão de simulado
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizSession {
    pub config: QuizConfig,
    screen: Screen,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: QuizConfig) -> Self {
        Self {
            config,
            screen: Screen::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub(crate) fn ignored(&self, event: &str) {
        debug!("Evento '{event}' ignorado na tela {}", self.screen.name());
    }
}

/// Aplicação: a sessão mais a geração em segundo plano.
pub struct QuizApp {
    pub session: QuizSession,
    pending: Option<Receiver<Result<QuizPayload, GenerationError>>>,
    #[cfg(not(target_arch = "wasm32"))]
    source: Arc<dyn QuestionSource + Send + Sync>,
    #[cfg(target_arch = "wasm32")]
    client: Result<GeminiClient, String>,
}

impl QuizApp {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        let source: Arc<dyn QuestionSource + Send + Sync> = match crate::source::default_client() {
            Ok(client) => Arc::new(client),
            Err(err) => {
                log::error!("Não foi possível montar o cliente Gemini: {err}");
                Arc::new(crate::source::UnavailableSource {
                    reason: err.to_string(),
                })
            }
        };
        Self::with_source(source)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_source(source: Arc<dyn QuestionSource + Send + Sync>) -> Self {
        Self {
            session: QuizSession::new(),
            pending: None,
            source,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        let client = crate::source::default_client().map_err(|err| {
            log::error!("Não foi possível montar o cliente Gemini: {err}");
            err.to_string()
        });
        Self {
            session: QuizSession::new(),
            pending: None,
            client,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
