use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_api::{CoreError, CoreErrorCode};
use crate::game_mode::GameMode;
use crate::reader::{BitSet, ByteCursor};

pub const SIGNATURE: &[u8; 7] = b"relogic";
pub const PLAYER_FILE_TYPE: u8 = 3;
pub const HEADER_LEN: usize = 25;
const FAVORITE_FLAGS_LEN: usize = 8;
const FAVORITE_BIT: usize = 0;

/// First release of the 1.4 line. Older player files use a different
/// sacrifice model and are rejected.
pub const FIRST_SUPPORTED_RELEASE: i32 = 225;

#[rustfmt::skip]
const KNOWN_RELEASES: &[(i32, &str)] = &[
    (194, "1.3.5.3"),
    (225, "1.4.0.1"), (226, "1.4.0.2"), (227, "1.4.0.3"), (228, "1.4.0.4"), (230, "1.4.0.5"),
    (231, "1.4.1"),   (232, "1.4.1.1"), (234, "1.4.1.2"),
    (235, "1.4.2"),   (236, "1.4.2.1"), (237, "1.4.2.2"), (238, "1.4.2.3"),
    (242, "1.4.3"),   (243, "1.4.3.1"), (244, "1.4.3.2"), (245, "1.4.3.3"),
    (246, "1.4.3.4"), (247, "1.4.3.5"), (248, "1.4.3.6"),
    (269, "1.4.4"),   (270, "1.4.4.1"), (271, "1.4.4.2"), (272, "1.4.4.3"),
    (273, "1.4.4.4"), (274, "1.4.4.5"), (275, "1.4.4.6"), (276, "1.4.4.7"),
    (277, "1.4.4.8"), (278, "1.4.4.8.1"), (279, "1.4.4.9"),
];

/// Game version string for a release number, if it is a published one.
pub fn release_label(release: i32) -> Option<&'static str> {
    KNOWN_RELEASES
        .iter()
        .find(|(known, _)| *known == release)
        .map(|(_, label)| *label)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHeader {
    pub release: i32,
    pub revision: u32,
    pub favorite_flags: BitSet,
    pub game_mode: GameMode,
}

impl PlayerHeader {
    pub fn parse(r: &mut ByteCursor<'_>) -> Result<Self, CoreError> {
        if r.remaining() < HEADER_LEN {
            return Err(CoreError::new(
                CoreErrorCode::InvalidFile,
                format!(
                    "invalid player file: {} bytes is too short for the {HEADER_LEN}-byte header",
                    r.remaining()
                ),
            ));
        }

        let release = r.read_i32().map_err(invalid_file)?;
        let signature = r.read_bytes(SIGNATURE.len()).map_err(invalid_file)?;
        if signature != SIGNATURE {
            return Err(CoreError::new(
                CoreErrorCode::InvalidFile,
                "invalid player file: missing relogic signature",
            ));
        }
        let file_type = r.read_u8().map_err(invalid_file)?;
        if file_type != PLAYER_FILE_TYPE {
            return Err(CoreError::new(
                CoreErrorCode::InvalidFile,
                format!("invalid player file: file type {file_type} is not a player"),
            ));
        }
        let revision = r.read_u32().map_err(invalid_file)?;
        let favorite_flags = r.read_bit_set(FAVORITE_FLAGS_LEN).map_err(invalid_file)?;
        let game_mode = GameMode::from_raw(r.read_u8().map_err(invalid_file)?);

        if release < FIRST_SUPPORTED_RELEASE {
            let version = release_label(release).unwrap_or("pre-1.4");
            return Err(CoreError::new(
                CoreErrorCode::UnsupportedVersion,
                format!(
                    "release {release} ({version}) is not supported; this reader only supports 4.x (Terraria 1.4.*) player files"
                ),
            ));
        }
        if game_mode != GameMode::Journey {
            return Err(CoreError::new(
                CoreErrorCode::UnsupportedGameMode,
                format!("character is {game_mode}; research data only supports journey mode characters"),
            ));
        }

        debug!(release, revision, "validated player header");
        Ok(Self {
            release,
            revision,
            favorite_flags,
            game_mode,
        })
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite_flags.get(FAVORITE_BIT)
    }

    pub fn version_label(&self) -> Option<&'static str> {
        release_label(self.release)
    }
}

fn invalid_file(err: CoreError) -> CoreError {
    CoreError::new(
        CoreErrorCode::InvalidFile,
        format!("invalid player file header: {}", err.message),
    )
}

#[cfg(test)]
mod tests {
    use super::{HEADER_LEN, PlayerHeader, release_label};
    use crate::core_api::CoreErrorCode;
    use crate::game_mode::GameMode;
    use crate::reader::ByteCursor;

    fn header_bytes(release: i32, file_type: u8, mode: u8) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN);
        out.extend_from_slice(&release.to_le_bytes());
        out.extend_from_slice(b"relogic");
        out.push(file_type);
        out.extend_from_slice(&7u32.to_le_bytes());
        out.extend_from_slice(&1u64.to_le_bytes());
        out.push(mode);
        out
    }

    #[test]
    fn parses_journey_header() {
        let bytes = header_bytes(279, 3, 3);
        let mut cursor = ByteCursor::new(&bytes);
        let header = PlayerHeader::parse(&mut cursor).expect("header should parse");
        assert_eq!(header.release, 279);
        assert_eq!(header.revision, 7);
        assert_eq!(header.game_mode, GameMode::Journey);
        assert!(header.is_favorite());
        assert_eq!(header.version_label(), Some("1.4.4.9"));
        assert_eq!(cursor.position(), HEADER_LEN);
    }

    #[test]
    fn empty_and_short_buffers_are_invalid() {
        for bytes in [Vec::new(), header_bytes(279, 3, 3)[..HEADER_LEN - 1].to_vec()] {
            let err = PlayerHeader::parse(&mut ByteCursor::new(&bytes)).expect_err("too short");
            assert_eq!(err.code, CoreErrorCode::InvalidFile);
            assert!(err.message.contains("invalid"));
        }
    }

    #[test]
    fn wrong_file_type_is_invalid() {
        let bytes = header_bytes(279, 2, 3);
        let err = PlayerHeader::parse(&mut ByteCursor::new(&bytes)).expect_err("world file");
        assert_eq!(err.code, CoreErrorCode::InvalidFile);
    }

    #[test]
    fn version_is_checked_before_game_mode() {
        let bytes = header_bytes(194, 3, 0);
        let err = PlayerHeader::parse(&mut ByteCursor::new(&bytes)).expect_err("1.3 save");
        assert_eq!(err.code, CoreErrorCode::UnsupportedVersion);
        assert!(err.message.contains("only supports 4."));
        assert!(err.message.contains("1.3.5.3"));
    }

    #[test]
    fn non_journey_mode_is_rejected() {
        let bytes = header_bytes(244, 3, 2);
        let err = PlayerHeader::parse(&mut ByteCursor::new(&bytes)).expect_err("hardcore");
        assert_eq!(err.code, CoreErrorCode::UnsupportedGameMode);
        assert!(err.message.contains("only supports journey"));
    }

    #[test]
    fn unknown_release_has_no_label() {
        assert_eq!(release_label(240), None);
        assert_eq!(release_label(236), Some("1.4.2.1"));
    }
}
