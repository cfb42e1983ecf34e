use std::sync::Arc;

use anyhow::Context;
use cognate_config::Config;
use cognate_config::translator::TranslatorConfig;
use cognate_core::{Pipeline, PipelineOptions};
use cognate_lexicon::MuseLoader;
use cognate_source::FrequencyWords;
use cognate_translator::{DeepLTranslator, GoogleTranslator, Translator};

pub struct AppState {
    pub pipeline: Pipeline,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let options = PipelineOptions::from_config(config).context("Invalid source config")?;
        let timeout = config.network.timeout();

        let source = FrequencyWords::new(&config.source, timeout)
            .context("Failed to build word source client")?;
        let lexicons = MuseLoader::new(config.lexicon.clone(), timeout)
            .context("Failed to build lexicon client")?;
        let translator = build_translator(&config.translator, timeout)?;

        tracing::info!("Meaning provider: {}", translator.metadata().name);

        let pipeline = Pipeline::new(
            Arc::new(source),
            Arc::new(lexicons),
            translator,
            options,
        );

        Ok(Self { pipeline })
    }
}

/// DeepL when selected and keyed, Google otherwise
fn build_translator(
    config: &TranslatorConfig,
    timeout: std::time::Duration,
) -> anyhow::Result<Arc<dyn Translator>> {
    if config.provider.eq_ignore_ascii_case("deepl") {
        if !config.api_key.is_empty() {
            let deepl = DeepLTranslator::new(config.api_key.clone(), config.api_url.clone(), timeout)
                .context("Failed to build DeepL client")?;
            return Ok(Arc::new(deepl));
        }
        tracing::warn!("DeepL selected without an API key, using Google");
    } else if !config.provider.eq_ignore_ascii_case("google") {
        tracing::warn!("Unknown translator '{}', using Google", config.provider);
    }

    let google = GoogleTranslator::new(config.google_url.clone(), timeout)
        .context("Failed to build Google client")?;
    Ok(Arc::new(google))
}
