pub mod cli;
pub mod cloud;
pub mod glossary;
pub mod pipeline;
pub mod translation;
pub mod utils;

pub use cli::{validate_arguments, CommandLineArgs};
pub use cloud::{CloudClients, GlossaryService, ObjectStore, TranslateService};
pub use glossary::{create_or_update_glossary, load_glossary_from_csv, GlossaryData};
pub use translation::{translate_text, translate_with_glossary, TranslationOptions};
pub use utils::{AppConfig, ErrorCode, Result, TranslatorError};
