use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_api::{CoreError, CoreErrorCode};
use crate::layout::{PairEncoding, SacrificeEncoding};
use crate::reader::ByteCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SacrificeEntry {
    pub item_id: i32,
    pub amount: i32,
}

impl PairEncoding {
    fn min_width(self) -> usize {
        match self {
            Self::Fixed32 => 8,
            Self::VarInt => 2,
        }
    }

    fn read_pair(self, r: &mut ByteCursor<'_>) -> Result<SacrificeEntry, CoreError> {
        let (item_id, amount) = match self {
            Self::Fixed32 => (r.read_i32()?, r.read_i32()?),
            // Var-ints carry the raw 32-bit pattern of a signed value.
            Self::VarInt => (r.read_var_u32()? as i32, r.read_var_u32()? as i32),
        };
        Ok(SacrificeEntry { item_id, amount })
    }
}

/// Read the sacrifice list at the cursor. The list is returned in file
/// order; any failure discards everything read so far.
pub fn read_sacrifices(
    r: &mut ByteCursor<'_>,
    encoding: SacrificeEncoding,
) -> Result<Vec<SacrificeEntry>, CoreError> {
    let offset = r.position();
    let count = encoding
        .count
        .read(r)
        .map_err(|e| e.into_layout("malformed sacrifice list count"))?;

    let max_fit = r.remaining() / encoding.pair.min_width();
    if count > max_fit {
        return Err(CoreError::new(
            CoreErrorCode::MalformedLayout,
            format!(
                "sacrifice list at offset {offset:#x} claims {count} entries but only {} bytes remain",
                r.remaining()
            ),
        ));
    }

    let mut entries = Vec::with_capacity(count);
    for index in 0..count {
        let entry = encoding.pair.read_pair(r).map_err(|e| {
            e.into_layout(&format!("malformed sacrifice entry {index} of {count}"))
        })?;
        entries.push(entry);
    }

    debug!(count, trailing = r.remaining(), "decoded sacrifice list");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::{SacrificeEntry, read_sacrifices};
    use crate::core_api::CoreErrorCode;
    use crate::layout::{CountField, PairEncoding, SacrificeEncoding};
    use crate::reader::ByteCursor;

    const FIXED: SacrificeEncoding = SacrificeEncoding {
        count: CountField::I32,
        pair: PairEncoding::Fixed32,
    };
    const PACKED: SacrificeEncoding = SacrificeEncoding {
        count: CountField::VarInt,
        pair: PairEncoding::VarInt,
    };

    #[test]
    fn reads_fixed_width_pairs_in_order() {
        let mut bytes = 2i32.to_le_bytes().to_vec();
        for value in [6i32, 1, 2, 40] {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        let entries = read_sacrifices(&mut ByteCursor::new(&bytes), FIXED).unwrap();
        assert_eq!(
            entries,
            vec![
                SacrificeEntry {
                    item_id: 6,
                    amount: 1
                },
                SacrificeEntry {
                    item_id: 2,
                    amount: 40
                },
            ]
        );
    }

    #[test]
    fn reads_var_int_pairs() {
        let bytes = [0x01, 0xAC, 0x02, 0x64];
        let entries = read_sacrifices(&mut ByteCursor::new(&bytes), PACKED).unwrap();
        assert_eq!(
            entries,
            vec![SacrificeEntry {
                item_id: 300,
                amount: 100
            }]
        );
    }

    #[test]
    fn empty_list_is_valid() {
        let bytes = [0x00];
        let entries = read_sacrifices(&mut ByteCursor::new(&bytes), PACKED).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn count_larger_than_remaining_bytes_is_malformed() {
        let mut bytes = 1000i32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0u8; 16]);
        let err = read_sacrifices(&mut ByteCursor::new(&bytes), FIXED).expect_err("too many");
        assert_eq!(err.code, CoreErrorCode::MalformedLayout);
    }

    #[test]
    fn truncated_pair_is_malformed_layout() {
        let bytes = [0x02, 0x01, 0x01, 0x02, 0x80];
        let err = read_sacrifices(&mut ByteCursor::new(&bytes), PACKED).expect_err("half pair");
        assert_eq!(err.code, CoreErrorCode::MalformedLayout);
        assert!(err.message.contains("entry 1 of 2"));
    }

    #[test]
    fn negative_count_is_malformed_layout() {
        let bytes = (-1i32).to_le_bytes();
        let err = read_sacrifices(&mut ByteCursor::new(&bytes), FIXED).expect_err("negative");
        assert_eq!(err.code, CoreErrorCode::MalformedLayout);
    }

    #[test]
    fn runaway_var_int_count_keeps_its_code() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        let err = read_sacrifices(&mut ByteCursor::new(&bytes), PACKED).expect_err("runaway");
        assert_eq!(err.code, CoreErrorCode::MalformedVarInt);
    }
}
