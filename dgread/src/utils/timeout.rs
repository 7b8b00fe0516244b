//! Delay helpers for reader sequencing.
//!
//! The reader needs a short pause between dropping and raising the RF field;
//! these helpers keep that value in one place.

use std::time::Duration;

use crate::constants::RF_SETTLE_MS;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default pause between RF release and RF activation.
pub fn default_rf_settle() -> Duration {
    ms(RF_SETTLE_MS)
}
