// dgread/src/transport/mock.rs

use std::collections::VecDeque;

use crate::state::DocumentKeys;
use crate::transport::traits::{Reply, Transport};
use crate::types::ApduKind;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent payloads and returns
/// queued responses for calls that fill a buffer.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Payloads passed to exec_command / send_apdu, in order
    pub sent: Vec<Vec<u8>>,
    /// RF protocol of each send_apdu call
    pub apdu_kinds: Vec<ApduKind>,
    /// Names of every driver call, in order
    pub calls: Vec<&'static str>,
    /// Queued (status, bytes) replies consumed by buffer-filling calls
    pub responses: VecDeque<(i32, Vec<u8>)>,
    /// Code returned by check_card
    pub card_code: i32,
    /// Text returned by last_error
    pub last_error: String,
    /// Status returned by connect
    pub connect_status: i32,
    /// Keys passed to read_card_info, in order
    pub card_info_keys: Vec<DocumentKeys>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply carrying `resp`.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back((0, resp));
    }

    /// Queue a failing reply with the given driver status.
    pub fn push_failure(&mut self, status: i32, message: &str) {
        self.responses.push_back((status, Vec::new()));
        self.last_error = message.to_string();
    }

    pub fn set_card_code(&mut self, code: i32) {
        self.card_code = code;
    }

    fn fill(&mut self, out: &mut [u8]) -> Result<Reply> {
        let (status, data) = self.responses.pop_front().ok_or(Error::Timeout)?;
        if status != 0 {
            return Ok(Reply::status(status));
        }
        let n = data.len().min(out.len());
        out[..n].copy_from_slice(&data[..n]);
        // Report the full length even if it did not fit, like a driver
        // that overruns its caller's buffer size.
        Ok(Reply::ok(data.len()))
    }
}

impl Transport for MockTransport {
    fn connect(&mut self) -> Result<Reply> {
        self.calls.push("connect");
        Ok(Reply::status(self.connect_status))
    }

    fn disconnect(&mut self) -> Result<Reply> {
        self.calls.push("disconnect");
        Ok(Reply::ok(0))
    }

    fn check_card(&mut self) -> Result<i32> {
        self.calls.push("check_card");
        Ok(self.card_code)
    }

    fn reset(&mut self, info: &mut [u8]) -> Result<Reply> {
        self.calls.push("reset");
        self.fill(info)
    }

    fn rf_activate(&mut self, atr: &mut [u8]) -> Result<Reply> {
        self.calls.push("rf_activate");
        self.fill(atr)
    }

    fn rf_release(&mut self) -> Result<Reply> {
        self.calls.push("rf_release");
        Ok(Reply::ok(0))
    }

    fn exec_command(&mut self, cmd: &[u8], resp: &mut [u8]) -> Result<Reply> {
        self.calls.push("exec_command");
        self.sent.push(cmd.to_vec());
        self.fill(resp)
    }

    fn send_apdu(&mut self, kind: ApduKind, cmd: &[u8], resp: &mut [u8]) -> Result<Reply> {
        self.calls.push("send_apdu");
        self.sent.push(cmd.to_vec());
        self.apdu_kinds.push(kind);
        self.fill(resp)
    }

    fn read_card_info(&mut self, keys: &DocumentKeys, out: &mut [u8]) -> Result<Reply> {
        self.calls.push("read_card_info");
        self.card_info_keys.push(keys.clone());
        self.fill(out)
    }

    fn last_error(&mut self) -> String {
        self.last_error.clone()
    }
}
