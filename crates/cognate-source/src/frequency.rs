use std::time::Duration;

use async_trait::async_trait;
use cognate_config::source::SourceConfig;
use cognate_core::error::SourceError;
use cognate_core::language::Language;
use cognate_core::source::FrequencySource;

/// Word lists from the FrequencyWords project (OpenSubtitles 2016)
#[derive(Clone)]
pub struct FrequencyWords {
    client: reqwest::Client,
    base_url: String,
}

impl FrequencyWords {
    pub fn new(config: &SourceConfig, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Fetch(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, language: Language) -> String {
        let code = language.code();
        format!("{}/{code}/{code}_50k.txt", self.base_url)
    }
}

#[async_trait]
impl FrequencySource for FrequencyWords {
    async fn fetch(&self, language: Language, count: usize) -> Result<Vec<String>, SourceError> {
        let url = self.url_for(language);
        tracing::debug!("Fetching word list: {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout
            } else {
                SourceError::Fetch(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| SourceError::Fetch(e.to_string()))?;

        Ok(parse_frequency_list(&text, count))
    }
}

/// First whitespace-delimited token of each line, in file order.
/// Lines look like `<word> <count>`; the count is discarded.
pub fn parse_frequency_list(text: &str, count: usize) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.split_whitespace().next())
        .take(count)
        .map(String::from)
        .collect()
}
