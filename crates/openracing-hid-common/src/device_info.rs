//! Identity of a HID device as handed to a protocol driver.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HidDeviceInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    pub product_name: Option<String>,
    /// Host-specific node or topology path, e.g. `/dev/hidraw3`.
    pub path: String,
}

impl HidDeviceInfo {
    pub fn new(vendor_id: u16, product_id: u16, path: impl Into<String>) -> Self {
        Self {
            vendor_id,
            product_id,
            product_name: None,
            path: path.into(),
        }
    }

    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// `vvvv:pppp` in lowercase hex.
    pub fn usb_id(&self) -> String {
        format!("{:04x}:{:04x}", self.vendor_id, self.product_id)
    }

    pub fn display_name(&self) -> String {
        self.product_name.clone().unwrap_or_else(|| self.usb_id())
    }
}
