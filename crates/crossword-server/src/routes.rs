use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crossword_core::protocol::PUZZLE_WORD_COUNT;
use crossword_core::{ClueEntry, Difficulty, ErrorResponse, GenerateRequest, GenerateResponse, RawClue};

use crate::builtin;
use crate::state::AppState;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse { message: message.into() }))
}

// ── Health ──────────────────────────────────────────────────────────────

pub async fn health() -> &'static str {
    "ok"
}

// ── Generate ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Some(api_key) = state.config.api_key.as_deref() else {
        // Dev mode: no upstream call, serve a built-in set.
        println!("[generate] dev mode, topic={:?}", req.topic);
        return Ok(Json(GenerateResponse {
            clues: builtin::sample_clues(),
        }));
    };

    let prompt = build_prompt(&req.topic, req.difficulty);
    let body = serde_json::json!({
        "model": state.config.model,
        "messages": [{ "role": "user", "content": prompt }],
        "temperature": 0.7,
    });

    let resp = state
        .http
        .post(COMPLETIONS_URL)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, format!("upstream request failed: {}", e)))?;

    if !resp.status().is_success() {
        let status = resp.status();
        return Err(api_error(
            StatusCode::BAD_GATEWAY,
            format!("upstream returned {}", status),
        ));
    }

    let completion: ChatCompletion = resp
        .json()
        .await
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, format!("unreadable upstream response: {}", e)))?;

    let content = completion
        .choices
        .first()
        .and_then(|c| c.message.content.as_deref())
        .ok_or_else(|| api_error(StatusCode::BAD_GATEWAY, "upstream returned no content"))?;

    let parsed: GenerateResponse = serde_json::from_str(extract_json(content))
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, format!("malformed clue JSON: {}", e)))?;

    // Sanitize at the boundary: drop records the grid cannot hold, so
    // the placer never sees an invalid answer.
    let mut clues: Vec<RawClue> = Vec::with_capacity(parsed.clues.len());
    for raw in parsed.clues {
        match ClueEntry::from_raw(raw.clone()) {
            Ok(_) => clues.push(raw),
            Err(e) => eprintln!("[generate] dropping clue: {}", e),
        }
    }

    if clues.is_empty() {
        return Err(api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "model returned no usable clues",
        ));
    }

    println!(
        "[generate] topic={:?} difficulty={} clues={}",
        req.topic,
        req.difficulty.label(),
        clues.len()
    );

    Ok(Json(GenerateResponse { clues }))
}

fn build_prompt(topic: &str, difficulty: Difficulty) -> String {
    format!(
        "Generate a crossword puzzle about {} with {} difficulty level. \
         Create exactly {} clues and answers that can fit in a 12x12 grid. \
         The answers should be single words of 3-8 letters. \
         Format as JSON: {{\"clues\": [{{\"clue\": \"clue text\", \
         \"answer\": \"answer\", \"direction\": \"across or down\"}}]}}",
        topic,
        difficulty.label(),
        PUZZLE_WORD_COUNT
    )
}

/// Models often wrap the JSON body in a markdown code fence.
fn extract_json(content: &str) -> &str {
    let trimmed = content.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_strips_code_fences() {
        let fenced = "```json\n{\"clues\": []}\n```";
        assert_eq!(extract_json(fenced), "{\"clues\": []}");

        let bare = "{\"clues\": []}";
        assert_eq!(extract_json(bare), bare);

        let plain_fence = "```\n{\"clues\": []}\n```";
        assert_eq!(extract_json(plain_fence), "{\"clues\": []}");
    }

    #[test]
    fn prompt_names_topic_and_difficulty() {
        let prompt = build_prompt("Science", Difficulty::Hard);
        assert!(prompt.contains("Science"));
        assert!(prompt.contains("Hard"));
        assert!(prompt.contains("exactly 10 clues"));
    }
}
