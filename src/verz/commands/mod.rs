use crate::commands::page::PageView;

pub mod navigate;
pub mod page;
pub mod random;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-visible status message with a severity level.
/// Presentation (color, destination stream) is left to the CLI layer.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of a browser operation, ready for a UI to present.
///
/// At most one of `page` / `spotlight` is set: a page render shows the
/// current chapter with navigation chrome, a spotlight shows a single verse
/// on its own (the random-verse display, which bypasses pagination).
#[derive(Debug, Default)]
pub struct CmdResult {
    pub page: Option<PageView>,
    pub spotlight: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_page(mut self, page: Option<PageView>) -> Self {
        self.page = page;
        self
    }

    pub fn with_spotlight(mut self, verse: String) -> Self {
        self.spotlight = Some(verse);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
