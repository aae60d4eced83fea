mod client;

pub use client::PuzzleClient;
