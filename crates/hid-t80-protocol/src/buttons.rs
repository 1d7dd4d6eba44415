//! Button and hat-switch decoding.
//!
//! Every mapping is a table evaluated uniformly, so the byte/bit layout can
//! be audited (and tested) as data.

#![deny(static_mut_refs)]

use bitflags::bitflags;
use openracing_hid_common::Key;

bitflags! {
    /// Named T80 buttons.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct T80Buttons: u16 {
        const NORTH             = 1 << 0;
        const SOUTH             = 1 << 1;
        const EAST              = 1 << 2;
        const WEST              = 1 << 3;
        const LEFT_SHOULDER     = 1 << 4;
        const RIGHT_SHOULDER    = 1 << 5;
        const LEFT_TRIGGER      = 1 << 6;
        const RIGHT_TRIGGER     = 1 << 7;
        const SELECT            = 1 << 8;
        const START             = 1 << 9;
        const LEFT_STICK_CLICK  = 1 << 10;
        const RIGHT_STICK_CLICK = 1 << 11;
    }
}

/// Byte 5, high nibble. The low nibble is the hat switch.
pub const FACE_BUTTON_MASKS: [(u8, T80Buttons); 4] = [
    (0x10, T80Buttons::NORTH),
    (0x20, T80Buttons::SOUTH),
    (0x40, T80Buttons::EAST),
    (0x80, T80Buttons::WEST),
];

/// Byte 6.
pub const SHOULDER_BUTTON_MASKS: [(u8, T80Buttons); 8] = [
    (0x01, T80Buttons::LEFT_SHOULDER),
    (0x02, T80Buttons::RIGHT_SHOULDER),
    (0x04, T80Buttons::LEFT_TRIGGER),
    (0x08, T80Buttons::RIGHT_TRIGGER),
    (0x10, T80Buttons::SELECT),
    (0x20, T80Buttons::START),
    (0x40, T80Buttons::LEFT_STICK_CLICK),
    (0x80, T80Buttons::RIGHT_STICK_CLICK),
];

/// Input-layer key for each named button.
pub const KEY_BINDINGS: [(T80Buttons, Key); 12] = [
    (T80Buttons::WEST, Key::West),
    (T80Buttons::SOUTH, Key::South),
    (T80Buttons::EAST, Key::East),
    (T80Buttons::NORTH, Key::North),
    (T80Buttons::LEFT_SHOULDER, Key::TL),
    (T80Buttons::RIGHT_SHOULDER, Key::TR),
    (T80Buttons::LEFT_TRIGGER, Key::TL2),
    (T80Buttons::RIGHT_TRIGGER, Key::TR2),
    (T80Buttons::SELECT, Key::Select),
    (T80Buttons::START, Key::Start),
    (T80Buttons::RIGHT_STICK_CLICK, Key::ThumbR),
    (T80Buttons::LEFT_STICK_CLICK, Key::ThumbL),
];

fn decode_masks(byte: u8, table: &[(u8, T80Buttons)]) -> T80Buttons {
    table
        .iter()
        .filter(|(mask, _)| byte & mask != 0)
        .fold(T80Buttons::empty(), |acc, (_, button)| acc | *button)
}

/// Decodes the named buttons from report bytes 5 and 6.
pub fn decode_buttons(hat_face: u8, buttons: u8) -> T80Buttons {
    decode_masks(hat_face, &FACE_BUTTON_MASKS) | decode_masks(buttons, &SHOULDER_BUTTON_MASKS)
}

/// Hat switch position, clockwise from up. Discriminants index [`HAT_DIRECTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum HatSwitch {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    #[default]
    Neutral,
}

impl HatSwitch {
    /// Values `0..=7` are positions; anything else is neutral.
    pub fn from_raw(value: u8) -> Self {
        match value {
            0 => Self::Up,
            1 => Self::UpRight,
            2 => Self::Right,
            3 => Self::DownRight,
            4 => Self::Down,
            5 => Self::DownLeft,
            6 => Self::Left,
            7 => Self::UpLeft,
            _ => Self::Neutral,
        }
    }

    pub fn directions(self) -> DpadDirections {
        HAT_DIRECTIONS
            .get(self as usize)
            .copied()
            .unwrap_or(DpadDirections::NEUTRAL)
    }
}

/// Hat switch expanded into independent D-pad directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DpadDirections {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl DpadDirections {
    pub const NEUTRAL: Self = Self::new(false, false, false, false);

    pub const fn new(up: bool, right: bool, down: bool, left: bool) -> Self {
        Self {
            up,
            right,
            down,
            left,
        }
    }

    /// `(key, pressed)` for each direction, clockwise from up.
    pub fn key_states(self) -> [(Key, bool); 4] {
        [
            (Key::DpadUp, self.up),
            (Key::DpadRight, self.right),
            (Key::DpadDown, self.down),
            (Key::DpadLeft, self.left),
        ]
    }
}

/// Directions for hat values `0..=7`. Each direction is held for three
/// contiguous values, which yields the diagonals.
pub const HAT_DIRECTIONS: [DpadDirections; 8] = [
    DpadDirections::new(true, false, false, false),
    DpadDirections::new(true, true, false, false),
    DpadDirections::new(false, true, false, false),
    DpadDirections::new(false, true, true, false),
    DpadDirections::new(false, false, true, false),
    DpadDirections::new(false, false, true, true),
    DpadDirections::new(false, false, false, true),
    DpadDirections::new(true, false, false, true),
];
