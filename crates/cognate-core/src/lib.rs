pub mod cache;
pub mod error;
pub mod language;
pub mod lexicon;
pub mod pipeline;
pub mod preprocess;
pub mod rank;
pub mod similarity;
pub mod source;
pub mod types;

pub use error::ConfigurationError;
pub use language::Language;
pub use pipeline::{Pipeline, PipelineOptions};
pub use types::Flashcard;

#[cfg(test)]
mod tests;
