use crossword_core::{Difficulty, ErrorResponse, GenerateRequest, GenerateResponse, RawClue};

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

fn server_url() -> String {
    std::env::var("CROSSWORD_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}

pub struct PuzzleClient;

impl PuzzleClient {
    /// One-shot clue generation request. Any failure aborts the whole
    /// attempt; the caller starts over from the menu, nothing partial
    /// is kept.
    pub async fn generate(
        topic: &str,
        difficulty: Difficulty,
    ) -> Result<Vec<RawClue>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/generate", server_url());
        let resp = reqwest::Client::new()
            .post(&url)
            .json(&GenerateRequest {
                topic: topic.to_string(),
                difficulty,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp
                .json::<ErrorResponse>()
                .await
                .map(|e| e.message)
                .unwrap_or_else(|_| format!("server returned {}", status));
            return Err(message.into());
        }

        let body = resp.json::<GenerateResponse>().await?;
        Ok(body.clues)
    }
}
