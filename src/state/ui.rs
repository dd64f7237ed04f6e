// UI state - presentation settings and transient notices
use crate::style::Theme;
use std::time::Instant;

pub struct UIState {
    pub theme: Theme,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
    pub notice_timeout_secs: u64,
}

impl UIState {
    pub fn new(theme: Theme, notice_timeout_secs: u64) -> Self {
        Self {
            theme,
            error_message: None,
            info_message: None,
            notice_timeout_secs,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self) {
        let timeout = self.notice_timeout_secs;
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout {
                self.info_message = None;
            }
        }
    }
}
