use crate::model::{QuizMode, QuizPayload};
use std::collections::HashSet;
use thiserror::Error;

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;

/// Mensagem única mostrada ao usuário, qualquer que seja a causa.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Falha ao gerar o simulado. Verifique sua conexão ou tente novamente.";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("chave da API do Gemini não configurada")]
    MissingApiKey,
    #[error("perfil do concurso inválido: {0}")]
    Profile(#[from] serde_yaml::Error),
    #[error("erro de transporte: {0}")]
    Transport(String),
    #[error("o serviço respondeu HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("o serviço não devolveu nenhum texto")]
    EmptyResponse,
    #[error("JSON inválido na resposta: {0}")]
    Json(#[from] serde_json::Error),
    #[error("simulado inválido: {0}")]
    InvalidPayload(String),
    #[error("a geração foi interrompida antes de responder")]
    Interrupted,
    #[error("fonte de questões indisponível: {0}")]
    Unavailable(String),
}

impl GenerationError {
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Transport(err.to_string())
    }
}

/// Fonte de questões: "gere N questões para este modo".
pub trait QuestionSource {
    fn generate(&self, count: usize, mode: QuizMode) -> Result<QuizPayload, GenerationError>;
}

/// Fonte que só falha; usada quando o cliente real não pôde ser montado.
#[derive(Debug, Clone)]
pub struct UnavailableSource {
    pub reason: String,
}

impl QuestionSource for UnavailableSource {
    fn generate(&self, _count: usize, _mode: QuizMode) -> Result<QuizPayload, GenerationError> {
        Err(GenerationError::Unavailable(self.reason.clone()))
    }
}

/// Cliente Gemini com a configuração do ambiente e o perfil embutido.
pub fn default_client() -> Result<GeminiClient, GenerationError> {
    let config = crate::config::GeminiConfig::resolve();
    if !config.has_api_key() {
        log::warn!("Nenhuma chave do Gemini configurada; a geração de simulados vai falhar.");
    }
    let profile = crate::data::read_exam_profile_embedded()?;
    GeminiClient::new(config, profile)
}

/// Confere o que veio do modelo antes de adotar o simulado.
/// Lista vazia, quantidade diferente, ids repetidos ou modo trocado: falha.
pub fn validate_payload(
    payload: QuizPayload,
    count: usize,
    mode: QuizMode,
) -> Result<QuizPayload, GenerationError> {
    if payload.questoes.is_empty() {
        return Err(GenerationError::InvalidPayload(
            "nenhuma questão retornada".into(),
        ));
    }
    if payload.questoes.len() != count {
        return Err(GenerationError::InvalidPayload(format!(
            "pedidas {count} questões, recebidas {}",
            payload.questoes.len()
        )));
    }
    if payload.modo != mode {
        return Err(GenerationError::InvalidPayload(format!(
            "modo {} pedido, modo {} recebido",
            mode, payload.modo
        )));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = payload.questoes.iter().find(|q| !seen.insert(q.id)) {
        return Err(GenerationError::InvalidPayload(format!(
            "id de questão repetido: {}",
            dup.id
        )));
    }

    Ok(payload)
}
