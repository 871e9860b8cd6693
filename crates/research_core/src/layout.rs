//! Release-keyed layout rules for the part of a player file that sits
//! between the header and the sacrifice list.
//!
//! Nothing in the preamble is interpreted. Each rule lists the sections in
//! file order together with the widths needed to step over them, so adding
//! a release means adding one table row.

use serde::Serialize;
use tracing::{debug, trace};

use crate::core_api::{CoreError, CoreErrorCode};
use crate::header::{FIRST_SUPPORTED_RELEASE, release_label};
use crate::reader::ByteCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Encoding of an element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountField {
    U8,
    I32,
    VarInt,
}

impl CountField {
    pub fn read(self, r: &mut ByteCursor<'_>) -> Result<usize, CoreError> {
        match self {
            Self::U8 => r.read_u8().map(usize::from),
            Self::VarInt => r.read_var_u32().map(|v| v as usize),
            Self::I32 => {
                let offset = r.position();
                let count = r.read_i32()?;
                usize::try_from(count).map_err(|_| {
                    CoreError::new(
                        CoreErrorCode::MalformedLayout,
                        format!("negative element count {count} at offset {offset:#x}"),
                    )
                })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionShape {
    /// Var-int length followed by that many bytes.
    Text,
    Fixed(usize),
    /// Packed flag bytes.
    Flags(usize),
    List { count: CountField, width: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSkip {
    pub name: &'static str,
    pub shape: SectionShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairEncoding {
    /// Two little-endian i32 values.
    Fixed32,
    /// Two var-ints.
    VarInt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SacrificeEncoding {
    pub count: CountField,
    pub pair: PairEncoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSpan {
    pub name: &'static str,
    #[serde(flatten)]
    pub range: ByteRange,
}

#[derive(Debug)]
pub struct LayoutRule {
    pub label: &'static str,
    pub first_release: i32,
    pub last_release: i32,
    pub preamble: &'static [SectionSkip],
    pub sacrifice: SacrificeEncoding,
}

const NAME: SectionSkip = SectionSkip {
    name: "character name",
    shape: SectionShape::Text,
};
const APPEARANCE: SectionSkip = SectionSkip {
    name: "appearance",
    shape: SectionShape::Fixed(8),
};
const HIDDEN_ACCESSORIES_2: SectionSkip = SectionSkip {
    name: "hidden accessories",
    shape: SectionShape::Flags(2),
};
const HIDDEN_ACCESSORIES_3: SectionSkip = SectionSkip {
    name: "hidden accessories",
    shape: SectionShape::Flags(3),
};
const VITALS: SectionSkip = SectionSkip {
    name: "vitals",
    shape: SectionShape::Fixed(12),
};
const LOADOUTS: SectionSkip = SectionSkip {
    name: "loadouts",
    shape: SectionShape::List {
        count: CountField::U8,
        width: 24,
    },
};
const BUFFS: SectionSkip = SectionSkip {
    name: "buffs",
    shape: SectionShape::List {
        count: CountField::U8,
        width: 8,
    },
};
const SPAWN_POINTS_12: SectionSkip = SectionSkip {
    name: "spawn points",
    shape: SectionShape::List {
        count: CountField::I32,
        width: 12,
    },
};
const SPAWN_POINTS_16: SectionSkip = SectionSkip {
    name: "spawn points",
    shape: SectionShape::List {
        count: CountField::I32,
        width: 16,
    },
};
const JOURNEY_POWERS: SectionSkip = SectionSkip {
    name: "journey powers",
    shape: SectionShape::List {
        count: CountField::VarInt,
        width: 5,
    },
};

const FIXED_SACRIFICES: SacrificeEncoding = SacrificeEncoding {
    count: CountField::I32,
    pair: PairEncoding::Fixed32,
};
const VAR_COUNT_SACRIFICES: SacrificeEncoding = SacrificeEncoding {
    count: CountField::VarInt,
    pair: PairEncoding::Fixed32,
};
const PACKED_SACRIFICES: SacrificeEncoding = SacrificeEncoding {
    count: CountField::VarInt,
    pair: PairEncoding::VarInt,
};

#[rustfmt::skip]
pub static LAYOUT_RULES: &[LayoutRule] = &[
    LayoutRule {
        label: "1.4.0",
        first_release: 225,
        last_release: 234,
        preamble: &[NAME, APPEARANCE, HIDDEN_ACCESSORIES_2, VITALS, SPAWN_POINTS_12],
        sacrifice: FIXED_SACRIFICES,
    },
    LayoutRule {
        label: "1.4.2",
        first_release: 235,
        last_release: 235,
        preamble: &[NAME, APPEARANCE, HIDDEN_ACCESSORIES_2, VITALS, BUFFS, SPAWN_POINTS_12],
        sacrifice: FIXED_SACRIFICES,
    },
    LayoutRule {
        label: "1.4.2.1",
        first_release: 236,
        last_release: 237,
        preamble: &[NAME, APPEARANCE, HIDDEN_ACCESSORIES_3, VITALS, BUFFS, SPAWN_POINTS_12],
        sacrifice: FIXED_SACRIFICES,
    },
    LayoutRule {
        label: "1.4.2.3",
        first_release: 238,
        last_release: 241,
        preamble: &[NAME, APPEARANCE, HIDDEN_ACCESSORIES_3, VITALS, BUFFS, SPAWN_POINTS_12],
        sacrifice: VAR_COUNT_SACRIFICES,
    },
    LayoutRule {
        label: "1.4.3",
        first_release: 242,
        last_release: 243,
        preamble: &[NAME, APPEARANCE, HIDDEN_ACCESSORIES_3, VITALS, BUFFS, SPAWN_POINTS_16],
        sacrifice: VAR_COUNT_SACRIFICES,
    },
    LayoutRule {
        label: "1.4.3.2",
        first_release: 244,
        last_release: 268,
        preamble: &[
            NAME, APPEARANCE, HIDDEN_ACCESSORIES_3, VITALS, BUFFS, SPAWN_POINTS_16, JOURNEY_POWERS,
        ],
        sacrifice: PACKED_SACRIFICES,
    },
    LayoutRule {
        label: "1.4.4",
        first_release: 269,
        last_release: 279,
        preamble: &[
            NAME, APPEARANCE, HIDDEN_ACCESSORIES_3, VITALS, LOADOUTS, BUFFS, SPAWN_POINTS_16,
            JOURNEY_POWERS,
        ],
        sacrifice: PACKED_SACRIFICES,
    },
];

/// Pick the layout rule for a release. Releases outside the table are
/// rejected rather than guessed.
pub fn resolve(release: i32) -> Result<&'static LayoutRule, CoreError> {
    if let Some(rule) = LAYOUT_RULES
        .iter()
        .find(|rule| (rule.first_release..=rule.last_release).contains(&release))
    {
        debug!(release, layout = rule.label, "resolved layout rule");
        return Ok(rule);
    }

    let newest = LAYOUT_RULES
        .last()
        .map(|rule| rule.last_release)
        .unwrap_or(FIRST_SUPPORTED_RELEASE);
    let version = release_label(release).unwrap_or("unknown version");
    Err(CoreError::new(
        CoreErrorCode::UnsupportedVersion,
        format!(
            "release {release} ({version}) has no known layout; this reader only supports 4.x (Terraria 1.4.*) player files from release {FIRST_SUPPORTED_RELEASE} to {newest}"
        ),
    ))
}

impl LayoutRule {
    /// Step over every preamble section, leaving the cursor on the
    /// sacrifice-list count. Returns the byte range of each section.
    pub fn skip_preamble(&self, r: &mut ByteCursor<'_>) -> Result<Vec<SectionSpan>, CoreError> {
        let mut spans = Vec::with_capacity(self.preamble.len());
        for section in self.preamble {
            let start = r.position();
            skip_section(section.shape, r).map_err(|e| {
                e.into_layout(&format!(
                    "malformed {} layout while skipping {}",
                    self.label, section.name
                ))
            })?;
            let end = r.position();
            trace!(section = section.name, start, end, "skipped preamble section");
            spans.push(SectionSpan {
                name: section.name,
                range: ByteRange { start, end },
            });
        }
        Ok(spans)
    }
}

fn skip_section(shape: SectionShape, r: &mut ByteCursor<'_>) -> Result<(), CoreError> {
    match shape {
        SectionShape::Text => r.read_string().map(drop),
        SectionShape::Fixed(width) => r.skip(width),
        SectionShape::Flags(byte_count) => r.read_bit_set(byte_count).map(drop),
        SectionShape::List { count, width } => {
            let offset = r.position();
            let count = count.read(r)?;
            let total = count.checked_mul(width).ok_or_else(|| {
                CoreError::new(
                    CoreErrorCode::MalformedLayout,
                    format!("list of {count} x {width} bytes at offset {offset:#x} overflows"),
                )
            })?;
            r.skip(total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CountField, LAYOUT_RULES, SectionShape, resolve};
    use crate::core_api::CoreErrorCode;
    use crate::header::FIRST_SUPPORTED_RELEASE;
    use crate::reader::ByteCursor;

    #[test]
    fn rules_cover_a_contiguous_release_range() {
        assert_eq!(LAYOUT_RULES[0].first_release, FIRST_SUPPORTED_RELEASE);
        for pair in LAYOUT_RULES.windows(2) {
            assert!(pair[0].first_release <= pair[0].last_release);
            assert_eq!(pair[0].last_release + 1, pair[1].first_release);
        }
    }

    #[test]
    fn resolves_each_tested_sub_version() {
        let expected = [
            (235, "1.4.2"),
            (236, "1.4.2.1"),
            (237, "1.4.2.1"),
            (238, "1.4.2.3"),
            (242, "1.4.3"),
            (243, "1.4.3"),
            (244, "1.4.3.2"),
            (279, "1.4.4"),
        ];
        for (release, label) in expected {
            assert_eq!(resolve(release).expect("known release").label, label);
        }
    }

    #[test]
    fn releases_outside_the_table_are_unsupported() {
        for release in [224, 280, -1] {
            let err = resolve(release).expect_err("no rule");
            assert_eq!(err.code, CoreErrorCode::UnsupportedVersion);
            assert!(err.message.contains("only supports 4."));
        }
    }

    #[test]
    fn negative_list_count_is_malformed() {
        let rule = resolve(230).expect("1.4.0 rule");
        let mut bytes = vec![1u8, b'x'];
        bytes.extend_from_slice(&[0u8; 8]);
        bytes.extend_from_slice(&[0u8; 2]);
        bytes.extend_from_slice(&[0u8; 12]);
        bytes.extend_from_slice(&(-4i32).to_le_bytes());

        let err = rule
            .skip_preamble(&mut ByteCursor::new(&bytes))
            .expect_err("negative spawn count");
        assert_eq!(err.code, CoreErrorCode::MalformedLayout);
        assert!(err.message.contains("spawn points"));
    }

    #[test]
    fn truncated_section_becomes_malformed_layout() {
        let rule = resolve(279).expect("1.4.4 rule");
        let bytes = [4u8, b'a', b'b'];
        let err = rule
            .skip_preamble(&mut ByteCursor::new(&bytes))
            .expect_err("name runs past end");
        assert_eq!(err.code, CoreErrorCode::MalformedLayout);
        assert!(err.message.contains("character name"));
    }

    #[test]
    fn spans_cover_consumed_bytes() {
        let rule = resolve(235).expect("1.4.2 rule");
        let mut bytes = vec![2u8, b'h', b'i'];
        bytes.extend_from_slice(&[0u8; 8]);
        bytes.extend_from_slice(&[0u8; 2]);
        bytes.extend_from_slice(&[0u8; 12]);
        bytes.push(1);
        bytes.extend_from_slice(&[0u8; 8]);
        bytes.extend_from_slice(&2i32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 24]);

        let mut cursor = ByteCursor::new(&bytes);
        let spans = rule.skip_preamble(&mut cursor).expect("preamble should skip");
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(spans.len(), rule.preamble.len());
        assert_eq!(spans[0].range.len(), 3);
        assert_eq!(spans.last().map(|s| s.range.len()), Some(4 + 24));

        let mut expected = 0;
        for span in &spans {
            assert_eq!(span.range.start, expected);
            expected = span.range.end;
        }
    }

    #[test]
    fn every_list_count_field_is_readable() {
        let bytes = [0x81, 0x01];
        assert_eq!(
            CountField::VarInt.read(&mut ByteCursor::new(&bytes)).unwrap(),
            129
        );
        assert_eq!(CountField::U8.read(&mut ByteCursor::new(&bytes)).unwrap(), 0x81);
        assert!(matches!(
            LAYOUT_RULES[0].preamble[0].shape,
            SectionShape::Text
        ));
    }
}
