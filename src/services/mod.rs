// 外部サービス連携のモジュール

pub mod gemini_client;

pub use gemini_client::GeminiClient;
