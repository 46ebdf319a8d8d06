mod commands;
mod config;
pub mod models;
mod services;
pub mod shared;
pub mod store;

use commands::{
    chat_commands, dashboard_commands, notification_commands, profile_commands,
    subscription_commands,
};
use config::EnvironmentConfig;
use log::{info, warn};
use std::sync::Mutex;
use store::AppStore;
use tauri::Manager;

/// アプリケーション状態（インメモリストアを保持）
pub struct AppState {
    pub store: Mutex<AppStore>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // ログシステムを初期化
            initialize_logging_system();

            info!("アプリケーション初期化を開始します...");

            // 環境変数を読み込み（.envファイルがある場合）
            if dotenv::dotenv().is_err() {
                // .envファイルがない場合は無視（本番環境では環境変数が直接設定される）
                warn!(".envファイルが見つかりません。環境変数が直接設定されていることを確認してください。");
            } else {
                info!(".envファイルを読み込みました");
            }

            // アプリ起動時にストアをシードデータで初期化
            // 永続化は行わないため、起動のたびに固定セットへ戻る
            info!("ストアを初期化しています...");
            let app_store = store::initialize_store();
            info!(
                "ストアの初期化が完了しました: subscriptions={}, profiles={}, notifications={}",
                app_store.subscriptions().len(),
                app_store.profiles().len(),
                app_store.notifications().len()
            );

            // ストアをアプリ状態に保存
            app.manage(AppState {
                store: Mutex::new(app_store),
            });

            info!("アプリケーション初期化が完了しました");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // サブスクリプションコマンド
            subscription_commands::create_subscription,
            subscription_commands::get_subscriptions,
            subscription_commands::get_subscription,
            subscription_commands::update_subscription,
            subscription_commands::delete_subscription,
            // プロフィールコマンド
            profile_commands::get_profiles,
            profile_commands::get_profile,
            profile_commands::get_current_profile,
            profile_commands::set_current_profile,
            profile_commands::remove_subscription_from_profile,
            // 通知コマンド
            notification_commands::get_notifications,
            notification_commands::mark_notification_read,
            notification_commands::get_unread_notification_count,
            // ダッシュボードコマンド
            dashboard_commands::get_active_subscriptions,
            dashboard_commands::get_monthly_total,
            dashboard_commands::get_category_totals,
            dashboard_commands::get_top_category,
            dashboard_commands::get_upcoming_bills,
            dashboard_commands::get_next_bill,
            dashboard_commands::get_calendar_month,
            // AIチャットコマンド
            chat_commands::send_chat_message,
        ])
        .run(tauri::generate_context!())
        .expect("Tauriアプリケーションの実行中にエラーが発生しました");
}

/// ログシステムを初期化
fn initialize_logging_system() {
    // 環境設定を取得
    let env_config = EnvironmentConfig::from_env();

    // ログレベルを設定
    let log_level = match env_config.log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };

    // env_loggerを初期化
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .init();

    info!(
        "ログシステムを初期化しました: level={}, environment={:?}",
        env_config.log_level, env_config.environment
    );
}
