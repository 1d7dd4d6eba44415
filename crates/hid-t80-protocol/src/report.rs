//! Typed view over the T80 input report.
//!
//! The T80 sends one 49+ byte report per poll. Only a handful of fields are
//! meaningful to the driver; every one of them has a named offset here and
//! an accessor on [`T80RawReport`].
//!
//! | Offset  | Size | Field                                      |
//! |---------|------|--------------------------------------------|
//! | 5       | 1    | hat switch (low nibble), face buttons (high) |
//! | 6       | 1    | shoulder/trigger/select/start/stick clicks |
//! | 7..=9   | 3    | reserved, unmapped                         |
//! | 43..45  | 2    | steering, LE16, uncalibrated               |
//! | 45..47  | 2    | gas, LE16                                  |
//! | 47..49  | 2    | brake, LE16                                |

#![deny(static_mut_refs)]

/// Minimum length of a decodable T80 input report.
pub const T80_REPORT_LEN: usize = 49;

/// Byte offsets of the fields the driver reads.
pub mod offsets {
    pub const HAT_FACE: usize = 5;
    pub const BUTTONS: usize = 6;
    pub const RESERVED_START: usize = 7;
    pub const STEERING: usize = 43;
    pub const GAS: usize = 45;
    pub const BRAKE: usize = 47;
}

/// Borrowed, length-checked view of one T80 input report.
///
/// Trailing bytes past [`T80_REPORT_LEN`] are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct T80RawReport<'a> {
    bytes: &'a [u8; T80_REPORT_LEN],
}

impl<'a> T80RawReport<'a> {
    /// Returns `None` if `data` is shorter than [`T80_REPORT_LEN`].
    pub fn new(data: &'a [u8]) -> Option<Self> {
        data.first_chunk::<T80_REPORT_LEN>()
            .map(|bytes| Self { bytes })
    }

    pub fn as_bytes(&self) -> &'a [u8; T80_REPORT_LEN] {
        self.bytes
    }

    fn le16(&self, offset: usize) -> u16 {
        let lo = self.bytes.get(offset).copied().unwrap_or(0);
        let hi = self.bytes.get(offset + 1).copied().unwrap_or(0);
        u16::from_le_bytes([lo, hi])
    }

    /// Uncalibrated steering position.
    pub fn steering_raw(&self) -> u16 {
        self.le16(offsets::STEERING)
    }

    pub fn gas(&self) -> u16 {
        self.le16(offsets::GAS)
    }

    pub fn brake(&self) -> u16 {
        self.le16(offsets::BRAKE)
    }

    /// Byte 5: hat switch in the low nibble, face buttons in the high nibble.
    pub fn hat_face_byte(&self) -> u8 {
        self.bytes[offsets::HAT_FACE]
    }

    /// Byte 6: shoulder, trigger, select, start and stick-click buttons.
    pub fn buttons_byte(&self) -> u8 {
        self.bytes[offsets::BUTTONS]
    }

    /// Hat switch value, `0..=15`.
    pub fn hat_nibble(&self) -> u8 {
        self.hat_face_byte() & 0x0F
    }

    /// Bytes 7..=9, carried for diagnostics only.
    pub fn reserved(&self) -> [u8; 3] {
        [
            self.bytes[offsets::RESERVED_START],
            self.bytes[offsets::RESERVED_START + 1],
            self.bytes[offsets::RESERVED_START + 2],
        ]
    }

    /// Bytes 5..=9 as one block, for button-mapping diagnostics.
    pub fn button_block(&self) -> [u8; 5] {
        let [b7, b8, b9] = self.reserved();
        [self.hat_face_byte(), self.buttons_byte(), b7, b8, b9]
    }
}
