use mm_types::Settings;

/// Notification slice of the settings snapshot
#[derive(Clone, PartialEq, Eq, Default)]
pub struct NotifierConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub enabled: bool,
}

impl NotifierConfig {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>, enabled: bool) -> Self {
        Self { bot_token: bot_token.into(), chat_id: chat_id.into(), enabled }
    }

    /// Flag set and both credentials present
    pub fn wants_enabled(&self) -> bool {
        self.enabled && !self.bot_token.is_empty() && !self.chat_id.is_empty()
    }
}

impl From<&Settings> for NotifierConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            bot_token: settings.telegram_bot_token.clone(),
            chat_id: settings.telegram_chat_id.clone(),
            enabled: settings.telegram_enabled,
        }
    }
}

impl std::fmt::Debug for NotifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifierConfig")
            .field("bot_token", &if self.bot_token.is_empty() { "<unset>" } else { "<redacted>" })
            .field("chat_id", &self.chat_id)
            .field("enabled", &self.enabled)
            .finish()
    }
}
