//! # mm_tg
//!
//! Telegram notification layer for the market maker: formats engine events
//! into chat messages and serves a small operator command surface.

pub mod bot_commands;
pub mod commands;
pub mod config;
pub mod error_handling;
pub mod format;
pub mod handlers;
pub mod platform;
pub mod service;
pub mod telegram;

pub use bot_commands::Command;
pub use commands::InboundMessage;
pub use config::NotifierConfig;
pub use error_handling::NotifyError;
pub use handlers::EngineView;
pub use platform::MessagePlatform;
pub use platform::PlatformConnector;
pub use platform::TextMode;
pub use service::DisabledReason;
pub use service::NotificationService;
pub use telegram::TelegramConnector;
pub use telegram::TelegramPlatform;
pub use telegram::run_command_listener;
