// dgread/src/types.rs

use derive_more::Display;

use crate::{Error, Result};

/// Data group number (1..=16) - Newtype Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display(fmt = "DG{}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataGroup(u8);

impl DataGroup {
    pub const DG1: Self = Self(1);
    pub const DG2: Self = Self(2);
    pub const DG3: Self = Self(3);
    pub const DG4: Self = Self(4);
    pub const DG13: Self = Self(13);
    pub const DG14: Self = Self(14);
    pub const DG15: Self = Self(15);

    /// Validate and wrap a DG number.
    pub fn new(number: u8) -> Result<Self> {
        if !(1..=16).contains(&number) {
            return Err(Error::InvalidArgument(format!(
                "data group {} outside 1..=16",
                number
            )));
        }
        Ok(Self(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Map an LDS elementary-file tag to its data group.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x61 => Some(Self(1)),
            0x75 => Some(Self(2)),
            0x63 => Some(Self(3)),
            0x76 => Some(Self(4)),
            0x65..=0x70 => Some(Self(tag - 0x60)),
            _ => None,
        }
    }

    /// LDS elementary-file tag for this data group.
    pub fn tag(&self) -> u8 {
        match self.0 {
            1 => 0x61,
            2 => 0x75,
            3 => 0x63,
            4 => 0x76,
            n => 0x60 + n,
        }
    }

    /// DG3 (fingerprints) and DG4 (iris) need Extended Access Control.
    pub fn is_eac_protected(&self) -> bool {
        matches!(self.0, 3 | 4)
    }
}

impl TryFrom<u8> for DataGroup {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self> {
        Self::new(number)
    }
}

/// Card detected in the field, as reported by the driver's check-card call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    #[display(fmt = "no card")]
    NoCard,
    #[display(fmt = "Mifare S50")]
    MifareS50,
    #[display(fmt = "Mifare S70")]
    MifareS70,
    #[display(fmt = "Mifare UltraLight")]
    MifareUltralight,
    #[display(fmt = "contactless type A CPU card")]
    TypeACpu,
    #[display(fmt = "contactless type B CPU card")]
    TypeBCpu,
    #[display(fmt = "resident identity card")]
    IdentityCard,
    #[display(fmt = "unknown card ({})", _0)]
    Unknown(i32),
}

impl CardType {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::NoCard,
            1 => Self::MifareS50,
            2 => Self::MifareS70,
            3 => Self::MifareUltralight,
            4 => Self::TypeACpu,
            5 => Self::TypeBCpu,
            6 => Self::IdentityCard,
            other => Self::Unknown(other),
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Self::NoCard)
    }
}

/// RF protocol used to carry an APDU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApduKind {
    #[display(fmt = "A")]
    TypeA,
    #[display(fmt = "B")]
    TypeB,
}

impl ApduKind {
    /// Selector character the driver expects.
    pub fn as_char(&self) -> char {
        match self {
            Self::TypeA => 'A',
            Self::TypeB => 'B',
        }
    }
}

/// Fixed-capacity response buffer whose valid length is tracked separately.
///
/// Drivers write into [`ResponseBuffer::spare_mut`] and then report how many
/// bytes are valid; everything past `len` is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBuffer {
    buf: Vec<u8>,
    len: usize,
}

impl ResponseBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity],
            len: 0,
        }
    }

    /// Wrap bytes that are already fully valid.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            buf: bytes.to_vec(),
            len: bytes.len(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whole backing storage, for a driver to write into.
    pub fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Record how many bytes the driver wrote.
    pub fn set_len(&mut self, len: usize) -> Result<()> {
        if len > self.buf.len() {
            return Err(Error::InvalidLength {
                expected: self.buf.len(),
                actual: len,
            });
        }
        self.len = len;
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Backing storage including bytes past the valid length.
    pub fn raw(&self) -> &[u8] {
        &self.buf
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Log-friendly rendering of the valid bytes.
    pub fn to_hex_truncated(&self) -> String {
        // len <= capacity is upheld by set_len
        crate::utils::bytes_to_hex_truncated(&self.buf, self.len, true).unwrap_or_default()
    }
}
