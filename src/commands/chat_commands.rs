use crate::services::GeminiClient;
use log::{error, info};

/// AIチャットへメッセージを送信する
///
/// ストアには依存しない。失敗はクラスごとのユーザー向けメッセージとして
/// 返され、アプリケーションを停止させることはない。
///
/// # 引数
/// * `prompt` - ユーザーのプロンプト
///
/// # 戻り値
/// AIの応答テキスト、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn send_chat_message(prompt: String) -> Result<String, String> {
    let client = GeminiClient::new().map_err(String::from)?;

    match client.generate(&prompt).await {
        Ok(reply) => {
            info!("AIチャット応答を受信しました");
            Ok(reply)
        }
        Err(e) => {
            error!("AIチャットリクエストが失敗しました: {}", e.details());
            Err(e.into())
        }
    }
}
