/// Severity of the alert banner shown above the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertKind {
    /// Style name used by the banner.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Info => "info",
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Danger => "danger",
        }
    }
}

/// Transient banner state: a message, its severity and whether it is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    pub message: String,
    pub kind: AlertKind,
    pub visible: bool,
}

impl AlertState {
    /// A visible alert.
    pub fn show(message: impl Into<String>, kind: AlertKind) -> Self {
        Self {
            message: message.into(),
            kind,
            visible: true,
        }
    }

    /// The same alert, dismissed.
    pub fn hidden(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }
}
