// dgread/src/reader/worker.rs

//! Async front for a connected reader.
//!
//! Reader calls block on the driver, so each transaction runs on tokio's
//! blocking pool. The session sits behind one mutex, which keeps a single
//! transaction in flight no matter how many tasks share the worker.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::protocol::{DataGroupPayload, DgComReport};
use crate::reader::handle::{Connected, Reader};
use crate::types::DataGroup;
use crate::{Error, Result};

/// Source of decoded data groups for async callers.
#[async_trait]
pub trait DataGroupSource {
    async fn read_dg_com(&self) -> Result<DgComReport>;

    async fn read_data_group(&self, dg: DataGroup) -> Result<DataGroupPayload>;
}

/// Cloneable handle running reader transactions off the async executor.
#[derive(Clone)]
pub struct ReaderWorker {
    inner: Arc<Mutex<Reader<Connected>>>,
}

impl ReaderWorker {
    pub fn new(reader: Reader<Connected>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(reader)),
        }
    }

    /// Run `f` against the reader on the blocking pool and wait for it.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Reader<Connected>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let mut reader = inner
                .lock()
                .map_err(|_| Error::Worker("reader lock poisoned".into()))?;
            f(&mut *reader)
        })
        .await
        .map_err(|e| Error::Worker(e.to_string()))?
    }
}

#[async_trait]
impl DataGroupSource for ReaderWorker {
    async fn read_dg_com(&self) -> Result<DgComReport> {
        self.run(|reader| reader.read_dg_com()).await
    }

    async fn read_data_group(&self, dg: DataGroup) -> Result<DataGroupPayload> {
        self.run(move |reader| reader.read_dg(dg)).await
    }
}
