// dgread/src/protocol/com.rs

use crate::constants::DG_COM_FLAGS_OFFSET;

const DG_COM_MAX_GROUPS: usize = 16;
use crate::types::DataGroup;
use crate::{Error, Result};

/// One data group's flag from the DG COM summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DgComEntry {
    pub data_group: DataGroup,
    pub flag: u8,
}

impl DgComEntry {
    pub fn is_present(&self) -> bool {
        self.flag != 0
    }
}

/// Decoded response of the read-DG-COM command.
///
/// The reader answers with a fixed header, one flag byte per data group
/// starting at DG1, and a trailing status byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DgComReport {
    entries: Vec<DgComEntry>,
}

impl DgComReport {
    /// Parse the first `len` bytes of `buf`. A response too short to carry
    /// any flag yields an empty report.
    pub fn parse(buf: &[u8], len: usize) -> Result<Self> {
        if len > buf.len() {
            return Err(Error::InvalidArgument(format!(
                "declared length {} exceeds buffer of {} bytes",
                len,
                buf.len()
            )));
        }

        let end = len.saturating_sub(1);
        let last = DG_COM_FLAGS_OFFSET + DG_COM_MAX_GROUPS;
        if end > last {
            log::debug!("ignoring {} DG COM flags past DG16", end - last);
        }

        let entries = buf[..end.min(last)]
            .iter()
            .enumerate()
            .skip(DG_COM_FLAGS_OFFSET)
            .map(|(i, &flag)| {
                let data_group = DataGroup::new((i - DG_COM_FLAGS_OFFSET + 1) as u8)?;
                Ok(DgComEntry { data_group, flag })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[DgComEntry] {
        &self.entries
    }

    /// Data groups whose flag is non-zero.
    pub fn present(&self) -> impl Iterator<Item = DataGroup> + '_ {
        self.entries
            .iter()
            .filter(|e| e.is_present())
            .map(|e| e.data_group)
    }

    pub fn flag(&self, dg: DataGroup) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.data_group == dg)
            .map(|e| e.flag)
    }
}
