// dgread/src/reader/builder.rs

use std::time::Duration;

use crate::reader::config::ReaderConfig;
use crate::reader::handle::{Disconnected, Reader};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dg_capacity(mut self, capacity: usize) -> Self {
        self.config.dg_capacity = capacity;
        self
    }

    pub fn apdu_capacity(mut self, capacity: usize) -> Self {
        self.config.apdu_capacity = capacity;
        self
    }

    pub fn rf_settle(mut self, settle: Duration) -> Self {
        self.config.rf_settle = settle;
        self
    }

    /// Consume the builder and return a disconnected Reader.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build(self) -> Result<Reader<Disconnected>> {
        match self.transport {
            Some(t) => Ok(Reader::with_config(t, self.config)),
            None => Err(Error::DeviceNotFound),
        }
    }
}
