use std::fmt;

use serde::{Deserialize, Serialize};

/// Character difficulty byte stored in the player header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Classic,
    Mediumcore,
    Hardcore,
    /// Creative mode; the only mode that keeps a sacrifice list.
    Journey,
    /// A byte no known release writes.
    Unknown(u8),
}

impl GameMode {
    /// Softcore: drops coins on death.
    pub const CLASSIC_RAW: u8 = 0;
    /// Drops the whole inventory on death.
    pub const MEDIUMCORE_RAW: u8 = 1;
    /// Permadeath.
    pub const HARDCORE_RAW: u8 = 2;
    /// Added in release 230 (1.4.0). Any other byte means the player file
    /// carries no research data.
    pub const JOURNEY_RAW: u8 = 3;

    pub fn from_raw(raw: u8) -> Self {
        match raw {
            Self::CLASSIC_RAW => Self::Classic,
            Self::MEDIUMCORE_RAW => Self::Mediumcore,
            Self::HARDCORE_RAW => Self::Hardcore,
            Self::JOURNEY_RAW => Self::Journey,
            other => Self::Unknown(other),
        }
    }

    pub fn raw(&self) -> u8 {
        match *self {
            Self::Classic => Self::CLASSIC_RAW,
            Self::Mediumcore => Self::MEDIUMCORE_RAW,
            Self::Hardcore => Self::HARDCORE_RAW,
            Self::Journey => Self::JOURNEY_RAW,
            Self::Unknown(other) => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Classic => "Classic",
            Self::Mediumcore => "Mediumcore",
            Self::Hardcore => "Hardcore",
            Self::Journey => "Journey",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unknown(v) => write!(f, "Unknown ({})", v),
            _ => f.write_str(self.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameMode;

    #[test]
    fn journey_byte_is_three() {
        assert_eq!(GameMode::from_raw(3), GameMode::Journey);
        assert_eq!(GameMode::Journey.raw(), GameMode::JOURNEY_RAW);
    }

    #[test]
    fn unknown_byte_is_kept() {
        let mode = GameMode::from_raw(7);
        assert_eq!(mode, GameMode::Unknown(7));
        assert_eq!(mode.raw(), 7);
        assert_eq!(mode.to_string(), "Unknown (7)");
    }
}
