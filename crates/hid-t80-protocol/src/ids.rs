//! Thrustmaster T80 USB vendor and product ID constants.

#![deny(static_mut_refs)]

/// Thrustmaster USB Vendor ID.
pub const THRUSTMASTER_VENDOR_ID: u16 = 0x044F;

/// T80-family product IDs.
///
/// Both variants share the same 49-byte input report layout.
pub mod product_ids {
    /// T80 Racing Wheel (PS3/PS4 and PC, no force feedback).
    pub const T80: u16 = 0xB668;
    /// T80 Ferrari 488 GTB Edition.
    pub const T80_FERRARI_488: u16 = 0xB66A;
}

/// Human-readable model name for log output.
pub fn model_name(product_id: u16) -> &'static str {
    match product_id {
        product_ids::T80 => "Thrustmaster T80",
        product_ids::T80_FERRARI_488 => "Thrustmaster T80 Ferrari 488 GTB",
        _ => "Thrustmaster T80 (unknown variant)",
    }
}
