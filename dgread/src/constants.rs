// dgread/src/constants.rs
//! Reader command bytes, buffer sizes and display limits used across the crate

/// Vendor command class byte prefixed to every reader-private command
pub const CMD_CLASS: u8 = 0x43;

/// Read the DG COM summary: 43 60 84
pub const CMD_READ_DG_COM: [u8; 3] = [CMD_CLASS, 0x60, 0x84];

/// Read a data group: 43 60 82 <dg> 00 00 00 01
pub const CMD_READ_DG_PREFIX: [u8; 3] = [CMD_CLASS, 0x60, 0x82];
pub const CMD_READ_DG_SUFFIX: [u8; 4] = [0x00, 0x00, 0x00, 0x01];

/// LED control: 43 30 31 <r> <g> <b>
pub const CMD_LED_PREFIX: [u8; 3] = [CMD_CLASS, 0x30, 0x31];

/// SELECT by AID for the eMRTD application (A0 00 00 02 47 10 01)
pub const SELECT_EMRTD_APDU: [u8; 12] = [
    0x00, 0xA4, 0x04, 0x00, 0x07, 0xA0, 0x00, 0x00, 0x02, 0x47, 0x10, 0x01,
];

/// Offset of the first per-DG flag byte in a DG COM response
pub const DG_COM_FLAGS_OFFSET: usize = 6;

/// Response capacity for data-group reads (portraits can be large)
pub const DG_RESPONSE_CAPACITY: usize = 24 * 2024;
/// Response capacity for APDU exchanges
pub const APDU_RESPONSE_CAPACITY: usize = 256;
/// Capacity of the ATR buffer passed to RF activation
pub const ATR_CAPACITY: usize = 128;
/// Capacity of the text buffer filled by the card-info read
pub const CARD_INFO_CAPACITY: usize = 1024;
/// Delay between RF release and re-activation
pub const RF_SETTLE_MS: u64 = 150;

/// Bytes rendered from the head of a long buffer by the truncated hex form
pub const HEX_DISPLAY_HEAD: usize = 256;
/// Bytes rendered from the tail of a long buffer by the truncated hex form
pub const HEX_DISPLAY_TAIL: usize = 16;
/// Marker inserted between head and tail
pub const HEX_ELLIPSIS: &str = " ... ... ";

/// Inner tag wrapping the MRZ text inside DG1
pub const MRZ_TAG: [u8; 2] = [0x5F, 0x1F];

/// JPEG start-of-image marker
pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
/// JPEG 2000 codestream start (SOC + SIZ)
pub const JPEG2000_CODESTREAM: [u8; 4] = [0xFF, 0x4F, 0xFF, 0x51];
/// JPEG 2000 JP2 signature box header
pub const JPEG2000_SIGNATURE: [u8; 8] = [0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20];
