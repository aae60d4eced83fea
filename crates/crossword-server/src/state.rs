pub struct AppState {
    pub http: reqwest::Client,
    pub config: Config,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Upstream completions API key. `None` switches the server to dev
    /// mode, serving built-in clue sets instead of calling out.
    pub api_key: Option<String>,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            model: std::env::var("CROSSWORD_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        }
    }
}
