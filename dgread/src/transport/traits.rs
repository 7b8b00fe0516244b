// dgread/src/transport/traits.rs

use crate::state::DocumentKeys;
use crate::types::ApduKind;
use crate::Result;

/// Status and written length returned by a driver call. Status 0 means
/// success; anything else is a driver-specific error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub status: i32,
    pub len: usize,
}

impl Reply {
    pub fn ok(len: usize) -> Self {
        Self { status: 0, len }
    }

    pub fn status(status: i32) -> Self {
        Self { status, len: 0 }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 0
    }
}

/// Transport trait abstracts the vendor reader driver away from the session
/// and decoding logic.
///
/// Calls that fill a buffer write into the whole slice they are given and
/// report the valid length in the returned [`Reply`]. `Err` is reserved for
/// failures to reach the driver at all; driver-level failures come back as a
/// non-zero status.
pub trait Transport: Send {
    /// Open the reader
    fn connect(&mut self) -> Result<Reply>;

    /// Close the reader
    fn disconnect(&mut self) -> Result<Reply>;

    /// Probe the field; returns the driver's card type code
    fn check_card(&mut self) -> Result<i32>;

    /// Reset the reader, writing its identification text into `info`
    fn reset(&mut self, info: &mut [u8]) -> Result<Reply>;

    /// Raise the RF field and write the card's ATR into `atr`
    fn rf_activate(&mut self, atr: &mut [u8]) -> Result<Reply>;

    /// Drop the RF field
    fn rf_release(&mut self) -> Result<Reply>;

    /// Execute a reader-private command
    fn exec_command(&mut self, cmd: &[u8], resp: &mut [u8]) -> Result<Reply>;

    /// Exchange an APDU with the card over the given RF protocol
    fn send_apdu(&mut self, kind: ApduKind, cmd: &[u8], resp: &mut [u8]) -> Result<Reply>;

    /// Read the card's identity text, unlocked with the document number,
    /// birth date and expiry date printed on it
    fn read_card_info(&mut self, keys: &DocumentKeys, out: &mut [u8]) -> Result<Reply>;

    /// Text describing the driver's most recent failure. Default
    /// implementation returns an empty string for drivers that keep none.
    fn last_error(&mut self) -> String {
        String::new()
    }
}
