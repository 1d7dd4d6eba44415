//! Steering remap around a learned center.
//!
//! The physical center of a T80 rarely sits at exactly 0x7FFF. Each side of
//! the learned center is scaled independently so that the full output range
//! is reachable in both directions:
//!
//! ```text
//! raw:     0 ........ center ........ 65535
//! output:  0 ........ 32768  ........ 65535
//! ```
//!
//! All arithmetic is done in `u32`; the largest intermediate product is
//! `65535 * 32768`, well below `u32::MAX`.

#![deny(static_mut_refs)]

/// Output value at the learned center.
pub const STEERING_CENTER_OUT: u16 = 32768;

/// Maps a raw steering sample onto `0..=65535` with `center` at 32768.
///
/// Degenerate centers are clamped rather than rejected: a center of 0 is
/// treated as 1, and on the high side a center of 65535 is treated as 65534.
///
/// # Examples
///
/// ```
/// use racing_wheel_hid_t80_protocol::remap_steering;
///
/// assert_eq!(remap_steering(32767, 32767), 32768);
/// assert_eq!(remap_steering(0, 30000), 0);
/// assert_eq!(remap_steering(65535, 30000), 65535);
/// ```
pub fn remap_steering(raw: u16, center: u16) -> u16 {
    let raw = u32::from(raw);
    let out = if raw >= u32::from(center) {
        let center = u32::from(center.min(u16::MAX - 1));
        let span = u32::from(u16::MAX) - center;
        let offset = raw.saturating_sub(center) * 32767 / span;
        32768 + offset
    } else {
        let center = u32::from(center.max(1));
        let offset = (center - raw) * 32768 / center;
        32768 - offset
    };
    u16::try_from(out).unwrap_or(u16::MAX)
}
