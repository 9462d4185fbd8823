// src/config.rs

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuração do cliente Gemini
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl GeminiConfig {
    /// Monta a configuração a partir de uma função de busca por chave
    /// (variáveis de ambiente, query string...). Valores inválidos caem no padrão.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).as_deref().and_then(normalize_value);
        let defaults = Self::default();

        Self {
            api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            model: get("GEMINI_MODEL").unwrap_or(defaults.model),
            endpoint: get("GEMINI_ENDPOINT")
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or(defaults.endpoint),
            temperature: get("GEMINI_TEMPERATURE")
                .and_then(|t| t.parse::<f32>().ok())
                .filter(|t| (0.0..=2.0).contains(t))
                .unwrap_or(defaults.temperature),
            timeout_secs: get("GEMINI_TIMEOUT_SECS")
                .and_then(|t| t.parse::<u64>().ok())
                .filter(|t| *t > 0)
                .unwrap_or(defaults.timeout_secs),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn resolve() -> Self {
        Self::from_lookup(browser_lookup)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

// No navegador: valor de build, depois ?gemini_api_key=, <meta> e localStorage
#[cfg(target_arch = "wasm32")]
fn browser_lookup(key: &str) -> Option<String> {
    value_from_build_env(key)
        .or_else(|| value_from_querystring(key))
        .or_else(|| value_from_meta(key))
        .or_else(|| value_from_local_storage(key))
}

#[cfg(target_arch = "wasm32")]
fn value_from_build_env(key: &str) -> Option<String> {
    let baked = match key {
        "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
        "GEMINI_MODEL" => option_env!("GEMINI_MODEL"),
        "GEMINI_ENDPOINT" => option_env!("GEMINI_ENDPOINT"),
        _ => None,
    };
    baked.and_then(normalize_value)
}

#[cfg(target_arch = "wasm32")]
fn value_from_querystring(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());
    let wanted = key.to_ascii_lowercase();

    for pair in query.split('&') {
        let (k, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };

        if k == wanted {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            let decoded = decoded.as_string()?;
            return normalize_value(&decoded);
        }
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn value_from_meta(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let name = format!("simulador-{}", key.to_ascii_lowercase().replace('_', "-"));
    let meta = document
        .query_selector(&format!("meta[name='{name}']"))
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_value)
}

#[cfg(target_arch = "wasm32")]
fn value_from_local_storage(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage
        .get_item(&format!("simulador_{}", key.to_ascii_lowercase()))
        .ok()?
        .as_deref()
        .and_then(normalize_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_lookup_gives_defaults() {
        let config = GeminiConfig::from_lookup(|_| None);
        assert_eq!(config, GeminiConfig::default());
        assert!(!config.has_api_key());
    }

    #[test]
    fn legacy_api_key_is_used_as_fallback() {
        let config = GeminiConfig::from_lookup(lookup_from(&[("API_KEY", " abc ")]));
        assert_eq!(config.api_key.as_deref(), Some("abc"));

        let config = GeminiConfig::from_lookup(lookup_from(&[
            ("API_KEY", "old"),
            ("GEMINI_API_KEY", "new"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("new"));
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let config = GeminiConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "   "),
            ("GEMINI_TEMPERATURE", "quente"),
            ("GEMINI_TIMEOUT_SECS", "0"),
        ]));
        assert_eq!(config.api_key, None);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let config = GeminiConfig::from_lookup(lookup_from(&[
            ("GEMINI_ENDPOINT", "http://127.0.0.1:8080/v1beta/"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("GEMINI_TEMPERATURE", "0.2"),
        ]));
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/v1beta");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.temperature, 0.2);
    }
}
