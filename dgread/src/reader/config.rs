// dgread/src/reader/config.rs

use std::time::Duration;

use crate::constants::{
    APDU_RESPONSE_CAPACITY, ATR_CAPACITY, CARD_INFO_CAPACITY, DG_RESPONSE_CAPACITY,
};
use crate::utils::default_rf_settle;

/// Buffer sizes and timing used by a reader session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// Response capacity for DG and DG COM reads
    pub dg_capacity: usize,
    /// Response capacity for APDU exchanges
    pub apdu_capacity: usize,
    /// ATR buffer capacity for RF activation
    pub atr_capacity: usize,
    /// Buffer for the identification text returned by reset
    pub info_capacity: usize,
    /// Buffer for the card-info text
    pub card_info_capacity: usize,
    /// Pause between RF release and re-activation
    pub rf_settle: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            dg_capacity: DG_RESPONSE_CAPACITY,
            apdu_capacity: APDU_RESPONSE_CAPACITY,
            atr_capacity: ATR_CAPACITY,
            info_capacity: 64,
            card_info_capacity: CARD_INFO_CAPACITY,
            rf_settle: default_rf_settle(),
        }
    }
}
