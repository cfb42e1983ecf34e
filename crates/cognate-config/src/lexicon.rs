use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "https://dl.fbaipublicfiles.com/arrival/dictionaries".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LexiconConfig {
    /// Allow fetching lexicons over HTTP
    #[serde(default = "default_enabled")]
    pub remote: bool,
    /// MUSE dictionary root, `{base_url}/{src}-{tgt}.txt`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Local lexicon files tried before the remote one.
    /// `{src}` and `{tgt}` are replaced with the language codes.
    #[serde(default)]
    pub paths: Vec<String>,
}

impl LexiconConfig {
    pub fn new() -> Self {
        let paths = std::env::var("COGNATE_LEXICON_PATHS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            paths,
            ..Self::default()
        }
    }

    /// Expand the configured local paths for a language pair
    pub fn paths_for(&self, src: &str, tgt: &str) -> Vec<String> {
        self.paths
            .iter()
            .map(|p| p.replace("{src}", src).replace("{tgt}", tgt))
            .collect()
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            remote: default_enabled(),
            base_url: default_base_url(),
            paths: vec![],
        }
    }
}
