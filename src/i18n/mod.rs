/// Internationalization support
///
/// Message tables are embedded JSON assets, one per language. Lookups never
/// fail: an unknown key is returned as-is.
pub mod language;
pub mod loader;
pub mod translator;

pub use language::Language;
pub use loader::load_messages;
pub use translator::{Translate, Translator};
