//! Recording input device for driver tests.

use crate::input::{AbsAxis, AbsInfo, InputCapabilities, InputEvent, InputSink, Key};
use crate::{HidCommonError, HidCommonResult};

/// Input device that records every registration and event it receives.
#[derive(Debug, Default)]
pub struct RecordingInputDevice {
    abs_params: Vec<(AbsAxis, AbsInfo)>,
    keys: Vec<Key>,
    events: Vec<InputEvent>,
    clear_count: usize,
    fail_registration: bool,
}

impl RecordingInputDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Device whose capability registration always fails.
    pub fn failing() -> Self {
        Self {
            fail_registration: true,
            ..Self::default()
        }
    }

    pub fn abs_params(&self, axis: AbsAxis) -> Option<AbsInfo> {
        self.abs_params
            .iter()
            .find(|(a, _)| *a == axis)
            .map(|(_, info)| *info)
    }

    pub fn registered_axes(&self) -> Vec<AbsAxis> {
        self.abs_params.iter().map(|(axis, _)| *axis).collect()
    }

    pub fn registered_keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn has_key(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn sync_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, InputEvent::Sync))
            .count()
    }

    /// Most recent value reported for `axis`.
    pub fn last_abs(&self, axis: AbsAxis) -> Option<i32> {
        self.events.iter().rev().find_map(|e| match e {
            InputEvent::Abs { axis: a, value } if *a == axis => Some(*value),
            _ => None,
        })
    }

    /// Most recent state reported for `key`.
    pub fn last_key(&self, key: Key) -> Option<bool> {
        self.events.iter().rev().find_map(|e| match e {
            InputEvent::Key { key: k, pressed } if *k == key => Some(*pressed),
            _ => None,
        })
    }

    fn check_registration(&self, what: &str) -> HidCommonResult<()> {
        if self.fail_registration {
            return Err(HidCommonError::RegistrationFailed(what.to_string()));
        }
        Ok(())
    }
}

impl InputSink for RecordingInputDevice {
    fn report_abs(&mut self, axis: AbsAxis, value: i32) {
        self.events.push(InputEvent::Abs { axis, value });
    }

    fn report_key(&mut self, key: Key, pressed: bool) {
        self.events.push(InputEvent::Key { key, pressed });
    }

    fn sync(&mut self) {
        self.events.push(InputEvent::Sync);
    }
}

impl InputCapabilities for RecordingInputDevice {
    fn clear_capabilities(&mut self) {
        self.abs_params.clear();
        self.keys.clear();
        self.clear_count += 1;
    }

    fn set_abs_params(&mut self, axis: AbsAxis, info: AbsInfo) -> HidCommonResult<()> {
        self.check_registration("abs axis")?;
        self.abs_params.retain(|(a, _)| *a != axis);
        self.abs_params.push((axis, info));
        Ok(())
    }

    fn set_key_capability(&mut self, key: Key) -> HidCommonResult<()> {
        self.check_registration("key")?;
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
        Ok(())
    }
}
