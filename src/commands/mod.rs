pub mod chat_commands;
pub mod dashboard_commands;
pub mod notification_commands;
pub mod profile_commands;
pub mod subscription_commands;
