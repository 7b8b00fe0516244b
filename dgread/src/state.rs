// dgread/src/state.rs

//! State shared between the reader controller and its views.
//!
//! [`channel`] hands out exactly one [`StateWriter`] and a cloneable
//! [`StateReader`]. The writer is neither `Clone` nor constructible outside
//! this module, and every mutator takes `&mut self`, so all mutation goes
//! through one owner at a time.

use std::fmt::Display;
use std::sync::{Arc, PoisonError, RwLock};

use crate::protocol::FacialImage;
use crate::{Error, Result};

/// Document details read off the data page, used to derive reader keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentKeys {
    pub number: String,
    /// `yyyy/mm/dd`
    pub birth_date: String,
    /// `yyyy/mm/dd`
    pub expiry_date: String,
}

impl DocumentKeys {
    /// Build keys from OCR output whose dates are `dd/mm/yyyy`.
    pub fn from_ocr(number: &str, birth_date: &str, expiry_date: &str) -> Result<Self> {
        Ok(Self {
            number: number.trim().to_string(),
            birth_date: normalize_date(birth_date)?,
            expiry_date: normalize_date(expiry_date)?,
        })
    }

    pub fn is_complete(&self) -> bool {
        !self.number.is_empty() && !self.birth_date.is_empty() && !self.expiry_date.is_empty()
    }
}

/// Reorder `dd/mm/yyyy` into `yyyy/mm/dd`.
pub fn normalize_date(date: &str) -> Result<String> {
    let parts: Vec<&str> = date.trim().split('/').collect();
    match parts.as_slice() {
        [d, m, y] if !d.is_empty() && !m.is_empty() && !y.is_empty() => {
            Ok(format!("{}/{}/{}", y, m, d))
        }
        _ => Err(Error::InvalidArgument(format!(
            "expected dd/mm/yyyy, got {:?}",
            date
        ))),
    }
}

/// Everything the views display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoState {
    pub log: String,
    pub portrait: Option<FacialImage>,
    pub document: Option<DocumentKeys>,
}

/// Create the single writer and a reader over fresh state.
pub fn channel() -> (StateWriter, StateReader) {
    let shared = Arc::new(RwLock::new(DemoState::default()));
    (
        StateWriter {
            shared: Arc::clone(&shared),
        },
        StateReader { shared },
    )
}

/// Sole mutator of the shared state.
///
/// Mutation needs exclusive access to the writer:
///
/// ```compile_fail
/// let (writer, _view) = dgread::state::channel();
/// let shared = &writer;
/// shared.append_log("read DG1");
/// ```
#[derive(Debug)]
pub struct StateWriter {
    shared: Arc<RwLock<DemoState>>,
}

impl StateWriter {
    fn update(&mut self, f: impl FnOnce(&mut DemoState)) {
        let mut guard = self.shared.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
    }

    /// Append one line to the log.
    pub fn append_log(&mut self, line: &str) {
        self.update(|s| {
            s.log.push_str(line);
            if !line.ends_with('\n') {
                s.log.push('\n');
            }
        });
    }

    pub fn set_portrait(&mut self, image: FacialImage) {
        self.update(|s| s.portrait = Some(image));
    }

    pub fn set_document(&mut self, keys: DocumentKeys) {
        self.update(|s| s.document = Some(keys));
    }

    pub fn clear_log(&mut self) {
        self.update(|s| s.log.clear());
    }

    /// Log the outcome of a transaction. On failure only a log line is
    /// added; the portrait and document stay as they were.
    pub fn record<T: Display>(&mut self, what: &str, outcome: &Result<T>) {
        match outcome {
            Ok(v) => self.append_log(&format!("{}: {}", what, v)),
            Err(e) => {
                log::warn!("{} failed: {}", what, e);
                self.append_log(&format!("{} failed: {}", what, e));
            }
        }
    }

    /// A new reader view over the same state.
    pub fn subscribe(&self) -> StateReader {
        StateReader {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Read-only view of the shared state.
#[derive(Debug, Clone)]
pub struct StateReader {
    shared: Arc<RwLock<DemoState>>,
}

impl StateReader {
    fn view<T>(&self, f: impl FnOnce(&DemoState) -> T) -> T {
        let guard = self.shared.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    pub fn log_text(&self) -> String {
        self.view(|s| s.log.clone())
    }

    pub fn portrait(&self) -> Option<FacialImage> {
        self.view(|s| s.portrait.clone())
    }

    pub fn document(&self) -> Option<DocumentKeys> {
        self.view(|s| s.document.clone())
    }

    pub fn snapshot(&self) -> DemoState {
        self.view(DemoState::clone)
    }
}
