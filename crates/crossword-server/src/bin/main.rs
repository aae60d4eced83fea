use crossword_server::build_app;
use crossword_server::state::Config;

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    let dev_mode = config.api_key.is_none();

    let (app, _state) = build_app(config);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{}", port);

    if dev_mode {
        println!("╔═════════════════════════════════════════════════╗");
        println!("║  CROSSWORD SERVER (DEV MODE)                    ║");
        println!("║  OPENAI_API_KEY unset. Serving built-in clues.  ║");
        println!("╚═════════════════════════════════════════════════╝");
        println!();
        println!("Run the client with:");
        println!("  CROSSWORD_SERVER_URL=http://localhost:{} cargo run -p crossword-tui", port);
        println!();
    }

    println!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
