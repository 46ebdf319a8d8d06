/// 共有エラー型とエラーハンドリング
pub mod errors;

// 便利な再エクスポート
pub use errors::{AppError, AppResult, ErrorSeverity};
