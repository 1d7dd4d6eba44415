//! Input-layer abstractions consumed by protocol drivers.
//!
//! A protocol driver never owns the event delivery path. It registers what
//! it can emit through [`InputCapabilities`] and pushes a batch of values
//! through [`InputSink`] for every decoded report, closing the batch with
//! [`InputSink::sync`].
//!
//! Axis and key codes mirror Linux `input-event-codes.h` so that a host
//! bridging to evdev/uinput can forward them without a lookup table.

use crate::HidCommonResult;

/// Absolute axes a driver may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsAxis {
    X,
    Y,
    Z,
    Rx,
    Ry,
    Rz,
}

impl AbsAxis {
    /// Linux `ABS_*` code.
    pub const fn code(self) -> u16 {
        match self {
            Self::X => 0x00,
            Self::Y => 0x01,
            Self::Z => 0x02,
            Self::Rx => 0x03,
            Self::Ry => 0x04,
            Self::Rz => 0x05,
        }
    }
}

/// Gamepad-class keys a driver may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    South,
    East,
    North,
    West,
    TL,
    TR,
    TL2,
    TR2,
    Select,
    Start,
    ThumbL,
    ThumbR,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
}

impl Key {
    /// Linux `BTN_*` code.
    pub const fn code(self) -> u16 {
        match self {
            Self::South => 0x130,
            Self::East => 0x131,
            Self::North => 0x133,
            Self::West => 0x134,
            Self::TL => 0x136,
            Self::TR => 0x137,
            Self::TL2 => 0x138,
            Self::TR2 => 0x139,
            Self::Select => 0x13a,
            Self::Start => 0x13b,
            Self::ThumbL => 0x13d,
            Self::ThumbR => 0x13e,
            Self::DpadUp => 0x220,
            Self::DpadDown => 0x221,
            Self::DpadLeft => 0x222,
            Self::DpadRight => 0x223,
        }
    }
}

/// Range parameters for an absolute axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsInfo {
    pub minimum: i32,
    pub maximum: i32,
    pub fuzz: i32,
    pub flat: i32,
}

impl AbsInfo {
    /// Axis spanning `minimum..=maximum` with no fuzz and no flat zone.
    pub const fn new(minimum: i32, maximum: i32) -> Self {
        Self {
            minimum,
            maximum,
            fuzz: 0,
            flat: 0,
        }
    }

    /// Full unsigned 16-bit range, `0..=65535`.
    pub const fn full_u16() -> Self {
        Self::new(0, u16::MAX as i32)
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.minimum..=self.maximum).contains(&value)
    }
}

/// One event as delivered to an [`InputSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Abs { axis: AbsAxis, value: i32 },
    Key { key: Key, pressed: bool },
    Sync,
}

/// Destination for decoded input values.
pub trait InputSink {
    fn report_abs(&mut self, axis: AbsAxis, value: i32);

    fn report_key(&mut self, key: Key, pressed: bool);

    /// Marks the end of one report's batch.
    fn sync(&mut self);
}

/// Capability registration performed once while a device is configured.
pub trait InputCapabilities {
    /// Drops every capability the framework pre-populated.
    fn clear_capabilities(&mut self);

    fn set_abs_params(&mut self, axis: AbsAxis, info: AbsInfo) -> HidCommonResult<()>;

    fn set_key_capability(&mut self, key: Key) -> HidCommonResult<()>;
}
