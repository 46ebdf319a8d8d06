pub mod environment;

pub use environment::{get_environment, Environment, EnvironmentConfig, GeminiConfig};
