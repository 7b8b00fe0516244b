// dgread/src/protocol/commands.rs

use crate::constants::{
    CMD_LED_PREFIX, CMD_READ_DG_COM, CMD_READ_DG_PREFIX, CMD_READ_DG_SUFFIX,
};
use crate::types::DataGroup;

/// Reader-private commands sent through the driver's exec-command call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Summary of the data groups present on the chip
    ReadDgCom,
    /// Read one data group (BAC is handled by the reader)
    ReadDg(DataGroup),
    /// Drive the reader's RGB status LED
    Led { red: u8, green: u8, blue: u8 },
}

impl Command {
    /// Encode the command into the raw bytes the reader expects.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::ReadDgCom => CMD_READ_DG_COM.to_vec(),
            Self::ReadDg(dg) => {
                let mut out = Vec::with_capacity(8);
                out.extend_from_slice(&CMD_READ_DG_PREFIX);
                out.push(dg.number());
                out.extend_from_slice(&CMD_READ_DG_SUFFIX);
                out
            }
            Self::Led { red, green, blue } => {
                let mut out = CMD_LED_PREFIX.to_vec();
                out.extend_from_slice(&[*red, *green, *blue]);
                out
            }
        }
    }

    /// Short label used in log lines.
    pub fn name(&self) -> String {
        match self {
            Self::ReadDgCom => "read DG COM".to_string(),
            Self::ReadDg(dg) => format!("read {}", dg),
            Self::Led { .. } => "LED control".to_string(),
        }
    }
}
