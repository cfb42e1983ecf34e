use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cognate_config::lexicon::LexiconConfig;
use cognate_core::error::LexiconError;
use cognate_core::language::Language;
use cognate_core::lexicon::{Lexicon, LexiconLoader};

use crate::muse::MuseLexicon;

/// Resolves MUSE lexicons from local files first, then over HTTP.
/// MUSE mostly publishes pairs with English, so a missing pair is built by
/// chaining through English.
pub struct MuseLoader {
    client: reqwest::Client,
    config: LexiconConfig,
}

impl MuseLoader {
    pub fn new(config: LexiconConfig, timeout: Duration) -> Result<Self, LexiconError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LexiconError::Fetch(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn url_for(&self, from: Language, to: Language) -> String {
        format!(
            "{}/{from}-{to}.txt",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Merge every configured file that exists for the pair
    async fn load_local(&self, from: Language, to: Language) -> Option<MuseLexicon> {
        let mut merged: Option<MuseLexicon> = None;

        for path in self.config.paths_for(from.code(), to.code()) {
            let path_buf = PathBuf::from(&path);
            let loaded = tokio::task::spawn_blocking(move || {
                if !path_buf.exists() {
                    return None;
                }
                Some(MuseLexicon::load_from_file(from, to, &path_buf))
            })
            .await;

            match loaded {
                Ok(None) => {}
                Ok(Some(Ok(lexicon))) => {
                    merged = Some(match merged {
                        Some(base) => base.merge(lexicon),
                        None => lexicon,
                    });
                }
                Ok(Some(Err(e))) => tracing::warn!("Failed to load lexicon from {}: {}", path, e),
                Err(e) => tracing::warn!("Lexicon loader task failed for {}: {}", path, e),
            }
        }

        merged
    }

    async fn load_remote(&self, from: Language, to: Language) -> Result<MuseLexicon, LexiconError> {
        let url = self.url_for(from, to);
        tracing::info!("Fetching lexicon: {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                LexiconError::Timeout
            } else {
                LexiconError::Fetch(e.to_string())
            }
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(unavailable(from, to));
        }

        if !response.status().is_success() {
            return Err(LexiconError::Fetch(format!("HTTP {}", response.status())));
        }

        let text = response
            .text()
            .await
            .map_err(|e| LexiconError::Fetch(e.to_string()))?;

        Ok(MuseLexicon::from_text(from, to, &text))
    }

    /// Local files, then remote; an empty lexicon counts as unavailable
    async fn load_direct(&self, from: Language, to: Language) -> Result<MuseLexicon, LexiconError> {
        let lexicon = match self.load_local(from, to).await {
            Some(lexicon) => lexicon,
            None if self.config.remote => self.load_remote(from, to).await?,
            None => return Err(unavailable(from, to)),
        };

        if lexicon.entry_count() == 0 {
            return Err(unavailable(from, to));
        }

        Ok(lexicon)
    }

    async fn load_pivot(&self, from: Language, to: Language) -> Result<MuseLexicon, LexiconError> {
        tracing::info!("No direct lexicon {from} -> {to}, pivoting through English");

        let first = self.load_direct(from, Language::English).await?;
        let second = self.load_direct(Language::English, to).await?;
        let lexicon = MuseLexicon::pivot(&first, &second);

        if lexicon.entry_count() == 0 {
            return Err(unavailable(from, to));
        }

        Ok(lexicon)
    }
}

#[async_trait]
impl LexiconLoader for MuseLoader {
    async fn load(&self, from: Language, to: Language) -> Result<Arc<dyn Lexicon>, LexiconError> {
        let pivot_possible = from != Language::English && to != Language::English;

        let lexicon = match self.load_direct(from, to).await {
            Ok(lexicon) => lexicon,
            Err(LexiconError::Unavailable { .. }) if pivot_possible => {
                self.load_pivot(from, to).await.map_err(|e| match e {
                    LexiconError::Unavailable { .. } => unavailable(from, to),
                    e => e,
                })?
            }
            Err(e) => return Err(e),
        };

        Ok(Arc::new(lexicon))
    }
}

fn unavailable(from: Language, to: Language) -> LexiconError {
    LexiconError::Unavailable {
        from: from.code().to_string(),
        to: to.code().to_string(),
    }
}
