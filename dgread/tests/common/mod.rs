#![allow(dead_code)]

pub mod fixtures;

use std::sync::{Arc, Mutex};

use dgread::state::DocumentKeys;
use dgread::transport::{MockTransport, Reply, Transport};
use dgread::{ApduKind, Result};

/// Route `log` output through env_logger; safe to call from every test.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Transport handing every call to a shared MockTransport, so a test can
/// inspect what was sent after the Reader has taken ownership.
pub struct SharedMock {
    pub inner: Arc<Mutex<MockTransport>>,
}

impl SharedMock {
    pub fn new(mock: MockTransport) -> (Self, Arc<Mutex<MockTransport>>) {
        let inner = Arc::new(Mutex::new(mock));
        (
            Self {
                inner: Arc::clone(&inner),
            },
            inner,
        )
    }
}

impl Transport for SharedMock {
    fn connect(&mut self) -> Result<Reply> {
        self.inner.lock().unwrap().connect()
    }
    fn disconnect(&mut self) -> Result<Reply> {
        self.inner.lock().unwrap().disconnect()
    }
    fn check_card(&mut self) -> Result<i32> {
        self.inner.lock().unwrap().check_card()
    }
    fn reset(&mut self, info: &mut [u8]) -> Result<Reply> {
        self.inner.lock().unwrap().reset(info)
    }
    fn rf_activate(&mut self, atr: &mut [u8]) -> Result<Reply> {
        self.inner.lock().unwrap().rf_activate(atr)
    }
    fn rf_release(&mut self) -> Result<Reply> {
        self.inner.lock().unwrap().rf_release()
    }
    fn exec_command(&mut self, cmd: &[u8], resp: &mut [u8]) -> Result<Reply> {
        self.inner.lock().unwrap().exec_command(cmd, resp)
    }
    fn send_apdu(&mut self, kind: ApduKind, cmd: &[u8], resp: &mut [u8]) -> Result<Reply> {
        self.inner.lock().unwrap().send_apdu(kind, cmd, resp)
    }
    fn read_card_info(&mut self, keys: &DocumentKeys, out: &mut [u8]) -> Result<Reply> {
        self.inner.lock().unwrap().read_card_info(keys, out)
    }
    fn last_error(&mut self) -> String {
        self.inner.lock().unwrap().last_error()
    }
}
