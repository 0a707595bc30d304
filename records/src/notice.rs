//! Status line shown beneath each form.

/// Tone of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Neutral progress text such as "Editing room #3".
    Info,
    Success,
    Error,
}

/// The single status message a form displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: Option<NoticeKind>,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: Some(NoticeKind::Info),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: Some(NoticeKind::Success),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: Some(NoticeKind::Error),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == Some(NoticeKind::Error)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == Some(NoticeKind::Success)
    }
}
