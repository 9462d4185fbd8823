use crate::config::GeminiConfig;
use crate::data::ExamProfile;
use crate::model::{QuizEnvelope, QuizMode, QuizPayload};
use crate::source::prompt::{system_instruction, user_prompt};
use crate::source::GenerationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
    // partes de "raciocínio" dos modelos com thinking
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    thought: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

fn text_content(text: String) -> Content {
    Content {
        role: None,
        parts: vec![Part {
            text,
            thought: false,
        }],
    }
}

/// Junta o texto do primeiro candidato, ignorando partes de raciocínio.
fn extract_text(resp: GenerateContentResponse) -> Result<String, GenerationError> {
    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|p| !p.thought)
                .map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(GenerationError::EmptyResponse)
    } else {
        Ok(text)
    }
}

/// Tira espaços e uma eventual cerca ```json ... ``` em volta do JSON.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn parse_quiz(text: &str) -> Result<QuizPayload, GenerationError> {
    let envelope: QuizEnvelope = serde_json::from_str(strip_code_fence(text))?;
    Ok(envelope.quiz)
}

fn parse_response_body(body: &str) -> Result<QuizPayload, GenerationError> {
    let resp: GenerateContentResponse = serde_json::from_str(body)?;
    let text = extract_text(resp)?;
    parse_quiz(&text)
}

fn http_error(status: u16, body: &str) -> GenerationError {
    GenerationError::Http {
        status,
        body: body.trim().chars().take(300).collect(),
    }
}

/// Cliente do `generateContent` do Gemini
#[derive(Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    profile: ExamProfile,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(config: GeminiConfig, profile: ExamProfile) -> Result<Self, GenerationError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            config,
            profile,
            http,
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(config: GeminiConfig, profile: ExamProfile) -> Result<Self, GenerationError> {
        Ok(Self { config, profile })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    fn api_key(&self) -> Result<&str, GenerationError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)
    }

    fn build_request(&self, count: usize, mode: QuizMode) -> GenerateContentRequest {
        let mut prompt = text_content(user_prompt(&self.profile, count, mode));
        prompt.role = Some("user".into());

        GenerateContentRequest {
            system_instruction: text_content(system_instruction(&self.profile, mode)),
            contents: vec![prompt],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".into(),
                temperature: self.config.temperature,
            },
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn generate_blocking(&self, count: usize, mode: QuizMode) -> Result<QuizPayload, GenerationError> {
        let api_key = self.api_key()?;
        let payload = self.build_request(count, mode);

        let response = self
            .http
            .post(self.endpoint_url())
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(http_error(status.as_u16(), &body));
        }

        parse_response_body(&body)
    }

    #[cfg(target_arch = "wasm32")]
    pub async fn generate_async(
        &self,
        count: usize,
        mode: QuizMode,
    ) -> Result<QuizPayload, GenerationError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::JsValue;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let js_err = |what: &str, err: JsValue| GenerationError::Transport(format!("{what}: {err:?}"));

        let api_key = self.api_key()?;
        let payload_json = serde_json::to_string(&self.build_request(count, mode))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&payload_json));

        let window = web_sys::window()
            .ok_or_else(|| GenerationError::Transport("não existe window no ambiente WASM".into()))?;

        let request = Request::new_with_str_and_init(&self.endpoint_url(), &opts)
            .map_err(|e| js_err("não foi possível criar o request", e))?;
        let headers = request.headers();
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| js_err("header Content-Type", e))?;
        headers
            .set("x-goog-api-key", api_key)
            .map_err(|e| js_err("header x-goog-api-key", e))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_err("fetch falhou", e))?;
        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| js_err("a resposta não é um Response", e))?;

        let promise = response
            .text()
            .map_err(|e| js_err("não foi possível ler o corpo", e))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| js_err("não foi possível ler o corpo", e))?
            .as_string()
            .ok_or(GenerationError::EmptyResponse)?;

        if !response.ok() {
            return Err(http_error(response.status(), &text));
        }

        parse_response_body(&text)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl crate::source::QuestionSource for GeminiClient {
    fn generate(&self, count: usize, mode: QuizMode) -> Result<QuizPayload, GenerationError> {
        self.generate_blocking(count, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_exam_profile_embedded;
    use crate::model::Answer;

    fn client(api_key: Option<&str>) -> GeminiClient {
        let config = GeminiConfig {
            api_key: api_key.map(str::to_string),
            ..GeminiConfig::default()
        };
        GeminiClient::new(config, read_exam_profile_embedded().unwrap()).unwrap()
    }

    fn quiz_json(mode: &str, ids: &[u32]) -> String {
        let questoes = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "area": "Conhecimentos Básicos",
                    "disciplina": "Língua Portuguesa",
                    "assunto": "Crase",
                    "enunciado": "Enunciado",
                    "resposta_correta": "E",
                    "comentario": "Comentário"
                })
            })
            .collect::<Vec<_>>();
        serde_json::json!({
            "quiz": {
                "banca": "CEBRASPE",
                "nivel": "Médio",
                "cargo": "Técnico do Seguro Social",
                "modo": mode,
                "pontuacao": { "acerto": 1, "erro": -1, "em_branco": 0 },
                "questoes": questoes
            }
        })
        .to_string()
    }

    fn response_body(parts: serde_json::Value) -> String {
        serde_json::json!({
            "candidates": [ { "content": { "role": "model", "parts": parts } } ]
        })
        .to_string()
    }

    #[test]
    fn request_body_uses_gemini_field_names() {
        let body = serde_json::to_value(client(Some("k")).build_request(10, QuizMode::Prova)).unwrap();
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["contents"][0]["role"], "user");
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("10 questões"));
        let system = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
        assert!(system.contains("\"modo\": \"PROVA\""));
        assert!(body["systemInstruction"].get("role").is_none());
        assert!(body["contents"][0]["parts"][0].get("thought").is_none());
    }

    #[test]
    fn endpoint_url_joins_model() {
        assert_eq!(
            client(None).endpoint_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn missing_api_key_is_reported() {
        assert!(matches!(client(None).api_key(), Err(GenerationError::MissingApiKey)));
    }

    #[test]
    fn parses_response_and_skips_thought_parts() {
        let body = response_body(serde_json::json!([
            { "text": "pensando...", "thought": true },
            { "text": quiz_json("TREINO", &[1, 2]) }
        ]));
        let quiz = parse_response_body(&body).unwrap();
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz.questoes[0].resposta_correta, Answer::Errado);
    }

    #[test]
    fn tolerates_code_fence_around_json() {
        let fenced = format!("```json\n{}\n```", quiz_json("PROVA", &[1]));
        let quiz = parse_quiz(&fenced).unwrap();
        assert_eq!(quiz.modo, QuizMode::Prova);
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let err = parse_response_body(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[test]
    fn malformed_quiz_json_is_an_error() {
        let body = response_body(serde_json::json!([{ "text": "{\"quiz\": {\"banca\": 3}}" }]));
        let err = parse_response_body(&body).unwrap_err();
        assert!(matches!(err, GenerationError::Json(_)));
    }

    #[test]
    fn non_json_text_is_an_error() {
        let body = response_body(serde_json::json!([{ "text": "Desculpe, não consigo." }]));
        assert!(parse_response_body(&body).is_err());
    }

    #[test]
    fn http_error_body_is_truncated() {
        let long = "x".repeat(1000);
        match http_error(503, &long) {
            GenerationError::Http { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body.len(), 300);
            }
            other => panic!("erro inesperado: {other:?}"),
        }
    }
}
