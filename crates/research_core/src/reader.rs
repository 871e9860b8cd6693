use serde::{Deserialize, Serialize};

use crate::core_api::{CoreError, CoreErrorCode};

/// Longest 7-bit encoding of a 32-bit value.
pub const MAX_VAR_INT_BYTES: usize = 5;

/// Sequential little-endian reader over a borrowed save buffer.
///
/// Every read checks bounds first and only advances the offset once the
/// whole value is available.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn read_u8(&mut self) -> Result<u8, CoreError> {
        let bytes = self.read_array::<1>()?;
        Ok(bytes[0])
    }

    pub fn read_i16(&mut self) -> Result<i16, CoreError> {
        self.read_array().map(i16::from_le_bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32, CoreError> {
        self.read_array().map(i32::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, CoreError> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64, CoreError> {
        self.read_array().map(u64::from_le_bytes)
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CoreError> {
        self.ensure(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a 7-bit encoded integer: low bits first, high bit set on every
    /// byte except the last.
    pub fn read_var_u32(&mut self) -> Result<u32, CoreError> {
        let start = self.pos;
        let mut value: u32 = 0;
        for index in 0..MAX_VAR_INT_BYTES {
            let Some(&byte) = self.data.get(start + index) else {
                return Err(CoreError::new(
                    CoreErrorCode::TruncatedInput,
                    format!(
                        "var-int at offset {start:#x} runs past end of data ({} bytes)",
                        self.data.len()
                    ),
                ));
            };
            let bits = u32::from(byte & 0x7F);
            if index == MAX_VAR_INT_BYTES - 1 && bits > 0x0F {
                return Err(CoreError::new(
                    CoreErrorCode::MalformedVarInt,
                    format!("var-int at offset {start:#x} overflows 32 bits"),
                ));
            }
            value |= bits << (7 * index);
            if byte & 0x80 == 0 {
                self.pos = start + index + 1;
                return Ok(value);
            }
        }

        Err(CoreError::new(
            CoreErrorCode::MalformedVarInt,
            format!("var-int at offset {start:#x} is longer than {MAX_VAR_INT_BYTES} bytes"),
        ))
    }

    /// Read a var-int length followed by that many bytes of UTF-8 text.
    /// Invalid sequences are replaced rather than rejected.
    pub fn read_string(&mut self) -> Result<String, CoreError> {
        let start = self.pos;
        let len = self.read_var_u32()? as usize;
        match self.read_bytes(len) {
            Ok(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
            Err(e) => {
                self.pos = start;
                Err(e)
            }
        }
    }

    pub fn read_bit_set(&mut self, byte_count: usize) -> Result<BitSet, CoreError> {
        let bytes = self.read_bytes(byte_count)?;
        Ok(BitSet::from_bytes(bytes))
    }

    pub fn skip(&mut self, n: usize) -> Result<(), CoreError> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CoreError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn ensure(&self, n: usize) -> Result<(), CoreError> {
        if n > self.remaining() {
            return Err(CoreError::new(
                CoreErrorCode::TruncatedInput,
                format!(
                    "unexpected end of data at offset {:#x} (need {n} bytes, have {})",
                    self.pos,
                    self.remaining()
                ),
            ));
        }
        Ok(())
    }
}

/// Packed boolean flags, bit `i` of the set is bit `i % 8` of byte `i / 8`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitSet {
    bytes: Vec<u8>,
}

impl BitSet {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn get(&self, index: usize) -> bool {
        self.bytes
            .get(index / 8)
            .is_some_and(|byte| byte & (1 << (index % 8)) != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(|index| self.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{BitSet, ByteCursor};
    use crate::core_api::CoreErrorCode;

    #[test]
    fn fixed_width_reads_are_little_endian() {
        let bytes = [
            0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.read_u8().unwrap(), 1);
        assert_eq!(cursor.read_i16().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(cursor.read_i32().unwrap(), -1);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn truncated_read_leaves_position_unchanged() {
        let bytes = [0xAA, 0xBB, 0xCC];
        let mut cursor = ByteCursor::new(&bytes);
        cursor.skip(1).unwrap();

        let err = cursor.read_i32().expect_err("only two bytes remain");
        assert_eq!(err.code, CoreErrorCode::TruncatedInput);
        assert_eq!(cursor.position(), 1);

        let err = cursor.skip(3).expect_err("skip past end");
        assert_eq!(err.code, CoreErrorCode::TruncatedInput);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn var_int_decodes_multi_byte_values() {
        let bytes = [0x05, 0xAC, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0x0F];
        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.read_var_u32().unwrap(), 5);
        assert_eq!(cursor.read_var_u32().unwrap(), 300);
        assert_eq!(cursor.read_var_u32().unwrap(), u32::MAX);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn var_int_without_terminator_is_truncated() {
        let bytes = [0x80, 0x80];
        let mut cursor = ByteCursor::new(&bytes);
        let err = cursor.read_var_u32().expect_err("no terminating byte");
        assert_eq!(err.code, CoreErrorCode::TruncatedInput);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn var_int_longer_than_five_bytes_is_malformed() {
        let bytes = [0x80, 0x80, 0x80, 0x80, 0x80, 0x01];
        let mut cursor = ByteCursor::new(&bytes);
        let err = cursor.read_var_u32().expect_err("runaway continuation bits");
        assert_eq!(err.code, CoreErrorCode::MalformedVarInt);

        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0x1F];
        let mut cursor = ByteCursor::new(&bytes);
        let err = cursor.read_var_u32().expect_err("fifth byte overflows");
        assert_eq!(err.code, CoreErrorCode::MalformedVarInt);
    }

    #[test]
    fn string_reads_length_prefixed_text() {
        let mut bytes = vec![8u8];
        bytes.extend_from_slice(b"TestChar");
        bytes.push(0x7F);
        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.read_string().unwrap(), "TestChar");
        assert_eq!(cursor.read_u8().unwrap(), 0x7F);
    }

    #[test]
    fn string_shorter_than_prefix_is_truncated() {
        let bytes = [10u8, b'a', b'b'];
        let mut cursor = ByteCursor::new(&bytes);
        let err = cursor.read_string().expect_err("prefix claims ten bytes");
        assert_eq!(err.code, CoreErrorCode::TruncatedInput);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn bit_set_exposes_individual_flags() {
        let bytes = [0b0000_0101, 0b1000_0000];
        let mut cursor = ByteCursor::new(&bytes);
        let flags = cursor.read_bit_set(2).unwrap();
        assert_eq!(flags.len(), 16);
        assert!(flags.get(0));
        assert!(!flags.get(1));
        assert!(flags.get(2));
        assert!(flags.get(15));
        assert!(!flags.get(16));
        assert_eq!(flags.iter().filter(|&set| set).count(), 3);
        assert!(BitSet::default().is_empty());
    }
}
