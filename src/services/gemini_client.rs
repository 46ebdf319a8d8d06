use crate::config::GeminiConfig;
use crate::shared::errors::{AppError, AppResult};
use log::{info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// リクエストのタイムアウト（秒）
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// 生成リクエストのボディ
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

/// 生成パラメータ
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

/// 安全性フィルタの設定
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

/// 生成レスポンスのボディ
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

/// APIのエラーレスポンス
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// リクエストボディを組み立てる
///
/// # 引数
/// * `prompt` - ユーザーのプロンプト（前後の空白は除去される）
///
/// # 戻り値
/// generateContentリクエストのボディ
pub fn build_request_body(prompt: &str) -> GenerateContentRequest {
    let blocked_categories = [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ];

    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.trim().to_string(),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 8192,
        },
        safety_settings: blocked_categories
            .iter()
            .map(|category| SafetySetting {
                category: (*category).to_string(),
                threshold: "BLOCK_MEDIUM_AND_ABOVE".to_string(),
            })
            .collect(),
    }
}

/// HTTPステータスコードをユーザー向けメッセージに変換する
///
/// 既知のステータスごとに個別のメッセージを返す。
/// 未知のステータスはNoneを返し、レスポンスボディ側のメッセージに委ねる。
fn status_message(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("リクエストが不正です。入力内容を確認してください。"),
        401 => Some("APIキーが無効です。設定を確認してください。"),
        403 => Some("APIへのアクセス権がありません。APIキーとクォータを確認してください。"),
        429 => Some("リクエストが多すぎます。しばらく待ってから再試行してください。"),
        500 => Some("Googleのサーバーでエラーが発生しました。しばらくしてから再試行してください。"),
        _ => None,
    }
}

/// レスポンスから応答テキストを取り出す
///
/// # 引数
/// * `response` - generateContentレスポンスのボディ
///
/// # 戻り値
/// 応答テキスト、または失敗クラスごとのエラー
///
/// # エラー条件
/// - candidatesが空
/// - finishReasonが"SAFETY"（ブロックは成功扱いにしない）
/// - 応答パートが無い、またはテキストが空
pub fn extract_reply(response: GenerateContentResponse) -> AppResult<String> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(AppError::external_service("AIからの応答がありません"));
    };

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(AppError::external_service(
            "安全ポリシーに違反したため、コンテンツがブロックされました",
        ));
    }

    let text = candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text);

    match text {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        Some(_) => Err(AppError::external_service("AIからの応答が空です")),
        None => Err(AppError::external_service("応答の内容がありません")),
    }
}

/// Gemini APIクライアント
///
/// AIチャット機能専用。ストアはこのクライアントに依存しない。
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// 環境設定からクライアントを作成する
    pub fn new() -> AppResult<Self> {
        Self::new_with_config(GeminiConfig::from_env())
    }

    /// 設定を指定してクライアントを作成する
    pub fn new_with_config(config: GeminiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self { client, config })
    }

    /// プロンプトを送信して応答テキストを取得する
    ///
    /// # 引数
    /// * `prompt` - ユーザーのプロンプト
    ///
    /// # 戻り値
    /// AIの応答テキスト、または失敗クラスごとのユーザー向けエラー
    ///
    /// # 前提条件
    /// プロンプトが空でないこと、APIキーが設定されていること。
    /// どちらも送信前に検証され、違反時はリクエストを送らない。
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        if prompt.trim().is_empty() {
            return Err(AppError::validation("プロンプトは空にできません"));
        }

        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(AppError::configuration(
                "APIキーが設定されていません。.envファイルを確認してください。",
            ));
        };

        let url = self.config.generate_content_url(api_key);
        let body = build_request_body(prompt);

        info!("Gemini APIへリクエスト送信: model={}", self.config.model);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::external_service(
                        "接続がタイムアウトしました。再試行してください。",
                    )
                } else if e.is_connect() {
                    AppError::external_service(
                        "サーバーに接続できません。ネットワーク接続を確認してください。",
                    )
                } else {
                    AppError::external_service(format!("リクエストの送信に失敗しました: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_error_response(status.as_u16(), response).await);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("レスポンス解析エラー: {e}")))?;

        extract_reply(parsed)
    }

    /// エラーレスポンスをユーザー向けメッセージへ変換する
    async fn handle_error_response(&self, status: u16, response: reqwest::Response) -> AppError {
        if let Some(message) = status_message(status) {
            warn!("Gemini APIエラー: status={status}");
            return AppError::external_service(message);
        }

        // 既知のステータス以外はAPI側のエラーメッセージを転記する
        let detail = response
            .json::<ApiErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.error)
            .and_then(|error| error.message)
            .unwrap_or_else(|| "不明なエラー".to_string());

        warn!("Gemini APIエラー: status={status}, detail={detail}");
        AppError::external_service(format!("APIエラー: {detail}"))
    }
}
