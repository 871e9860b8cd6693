use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    InvalidFile,
    UnsupportedVersion,
    UnsupportedGameMode,
    TruncatedInput,
    MalformedLayout,
    MalformedVarInt,
    Catalog,
    Io,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Re-labels a cursor truncation as a layout failure. Other codes are
    /// kept so a runaway var-int stays distinguishable.
    pub(crate) fn into_layout(self, context: &str) -> Self {
        match self.code {
            CoreErrorCode::TruncatedInput | CoreErrorCode::MalformedLayout => Self::new(
                CoreErrorCode::MalformedLayout,
                format!("{context}: {}", self.message),
            ),
            _ => Self::new(self.code, format!("{context}: {}", self.message)),
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for CoreError {}
