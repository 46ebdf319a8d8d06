/// アプリケーションの実行環境を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 開発環境
    Development,
    /// プロダクション環境
    Production,
}

/// 現在の実行環境を判定する
///
/// # 戻り値
/// 現在の実行環境（Development または Production）
///
/// # 判定ロジック
/// 1. コンパイル時埋め込み環境変数を最優先
/// 2. 実行時環境変数 ENVIRONMENT を確認
/// 3. デバッグビルドの場合は Development
/// 4. リリースビルドの場合は Production
pub fn get_environment() -> Environment {
    // コンパイル時埋め込み環境変数を最優先
    if let Some(embedded_env) = option_env!("EMBEDDED_ENVIRONMENT") {
        let env = match embedded_env {
            "production" => Environment::Production,
            _ => Environment::Development,
        };
        println!("環境判定: コンパイル時埋め込み値を使用 -> {embedded_env} -> {env:?}");
        return env;
    }

    // 実行時環境変数を確認
    if let Ok(env_var) = std::env::var("ENVIRONMENT") {
        let env = match env_var.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };
        println!("環境判定: 実行時環境変数を使用 -> {env_var} -> {env:?}");
        return env;
    }

    // フォールバック: ビルド設定に基づく判定
    let env = if cfg!(debug_assertions) {
        Environment::Development
    } else {
        Environment::Production
    };
    println!(
        "環境判定: ビルド設定を使用 -> debug_assertions={} -> {env:?}",
        cfg!(debug_assertions)
    );
    env
}

/// ログ設定を保持する構造体
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: Environment,
    pub log_level: String,
}

impl EnvironmentConfig {
    /// 環境変数から設定を読み込む
    ///
    /// # 戻り値
    /// 環境設定（LOG_LEVEL未指定時は"info"）
    pub fn from_env() -> Self {
        Self {
            environment: get_environment(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

}

/// Gemini APIのデフォルトモデル名
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Gemini APIのベースURL
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API設定を保持する構造体
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// APIキー（未設定の場合はNone。送信前の前提条件として検証される）
    pub api_key: Option<String>,
    /// 使用するモデル名
    pub model: String,
    /// APIのベースURL
    pub base_url: String,
}

impl GeminiConfig {
    /// 環境変数からGemini API設定を読み込む
    ///
    /// コンパイル時埋め込み値を優先し、無ければ実行時環境変数を参照する。
    ///
    /// # 戻り値
    /// Gemini API設定
    pub fn from_env() -> Self {
        let api_key = option_env!("EMBEDDED_GEMINI_API_KEY")
            .map(String::from)
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty());

        let model = option_env!("EMBEDDED_GEMINI_MODEL")
            .map(String::from)
            .or_else(|| std::env::var("GEMINI_MODEL").ok())
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        Self {
            api_key,
            model,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// generateContentエンドポイントのURLを組み立てる
    ///
    /// # 引数
    /// * `api_key` - リクエストに付与するAPIキー
    ///
    /// # 戻り値
    /// モデル名とAPIキーをパラメータ化したエンドポイントURL
    pub fn generate_content_url(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_equality() {
        // Environment列挙型の等価性をテスト
        assert_eq!(Environment::Development, Environment::Development);
        assert_eq!(Environment::Production, Environment::Production);
        assert_ne!(Environment::Development, Environment::Production);
    }

    #[test]
    fn test_get_environment() {
        // 現在の環境を取得（実際の値はビルド設定に依存）
        let env = get_environment();

        // デバッグビルドかリリースビルドかのいずれかであることを確認
        assert!(matches!(
            env,
            Environment::Development | Environment::Production
        ));
    }

    #[test]
    fn test_generate_content_url() {
        // エンドポイントURLの組み立てをテスト
        let config = GeminiConfig {
            api_key: Some("test-key".to_string()),
            model: "gemini-1.5-flash".to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
        };
        assert_eq!(
            config.generate_content_url("test-key"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=test-key"
        );
    }

    #[test]
    fn test_default_model() {
        assert_eq!(DEFAULT_GEMINI_MODEL, "gemini-1.5-flash");
    }
}
