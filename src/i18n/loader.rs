/// Message table loader from embedded JSON files
use std::collections::HashMap;

use serde::Deserialize;

use super::language::Language;
use crate::error::TranslationError;

/// Message table JSON structure
#[derive(Debug, Deserialize)]
struct MessagesJson {
    #[allow(dead_code)]
    language: String,
    code: String,
    messages: HashMap<String, String>,
}

/// Embedded language files
const EN_JSON: &str = include_str!("../../assets/i18n/en.json");
const VI_JSON: &str = include_str!("../../assets/i18n/vi.json");

/// Load the message table for a language from embedded JSON
pub fn load_messages(language: Language) -> Result<HashMap<String, String>, TranslationError> {
    let json_str = match language {
        Language::English => EN_JSON,
        Language::Vietnamese => VI_JSON,
    };

    let table: MessagesJson =
        serde_json::from_str(json_str).map_err(|source| TranslationError::ParseFailed {
            code: language.code(),
            source,
        })?;

    if table.code != language.code() {
        tracing::warn!(
            "Message table for {} declares code {:?}",
            language.code(),
            table.code
        );
    }

    Ok(table.messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_all_languages() {
        for lang in Language::ALL {
            let result = load_messages(lang);
            assert!(result.is_ok(), "Failed to load {:?}", lang);
            assert!(result.unwrap().contains_key("game_timeout_message"));
        }
    }

    #[test]
    fn test_tables_share_keys() {
        let en = load_messages(Language::English).unwrap();
        let vi = load_messages(Language::Vietnamese).unwrap();

        let mut missing: Vec<_> = en.keys().filter(|k| !vi.contains_key(*k)).collect();
        missing.extend(vi.keys().filter(|k| !en.contains_key(*k)));
        assert!(missing.is_empty(), "Keys missing from a table: {:?}", missing);
    }
}
