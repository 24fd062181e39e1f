use std::collections::HashMap;

use super::language::Language;
use super::loader::load_messages;

/// Looks up localized text by message key.
///
/// A missing key yields the key itself so the gap stays visible on screen.
pub trait Translate {
    fn t(&self, key: &str) -> String;

    /// Translate and substitute `{name}` placeholders
    fn t_with(&self, key: &str, args: &[(&str, String)]) -> String {
        args.iter().fold(self.t(key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }
}

/// Message table for one language
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    messages: HashMap<String, String>,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        let messages = match load_messages(language) {
            Ok(messages) => messages,
            Err(e) => {
                tracing::warn!("Failed to load messages for {}: {}", language.code(), e);
                HashMap::new()
            }
        };

        Self { language, messages }
    }

    /// Build a translator from an explicit table
    pub fn from_messages(language: Language, messages: HashMap<String, String>) -> Self {
        Self { language, messages }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::Vietnamese)
    }
}

impl Translate for Translator {
    fn t(&self, key: &str) -> String {
        match self.messages.get(key) {
            Some(text) => text.clone(),
            None => {
                tracing::warn!(
                    "Translation key {:?} not found for lang {:?}",
                    key,
                    self.language.code()
                );
                key.to_string()
            }
        }
    }
}
