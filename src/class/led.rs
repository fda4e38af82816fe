//! Abstraction over LEDs exposed through the kernel LED class
//!
//! # Implementation
//!
//! See [the kernel documentation][1] for details on the underlying
//! attributes.
//!
//! [1]: https://www.kernel.org/doc/Documentation/ABI/testing/sysfs-class-led
use std::path::PathBuf;

use crate::{
    class::Class,
    error::{text::*, HwError, Result},
    props::{self, PropertyStore, SystemProperties},
    util::{read_line, write_line},
};

/// An indicator LED.
#[derive(Debug, Clone)]
pub struct Led {
    /// Attribute prefix out of the property table. Attribute names are
    /// appended verbatim, so this normally ends in `/`.
    prefix: String,
}

// Public
impl Led {
    /// The LED registered as `name` in the board property table.
    ///
    /// # Errors
    ///
    /// - [`HwError::Unresolved`] if nothing maps `name`
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_name_with(&SystemProperties, name)
    }

    /// Like [`Led::from_name`], reading `store` instead of the system
    /// property table.
    pub fn from_name_with(store: &impl PropertyStore, name: &str) -> Result<Self> {
        let prefix = props::resolve(store, Class::Led, name)?;
        Ok(Self { prefix })
    }

    /// Whether the LED is currently lit.
    ///
    /// Any brightness report other than a plain `0` reads as lit.
    ///
    /// # Errors
    ///
    /// - If the `brightness` attribute can't be read
    pub fn value(&self) -> Result<bool> {
        Ok(read_line(&self.attr("brightness"))? != "0")
    }

    /// Switch the LED fully on or off.
    ///
    /// # Note
    ///
    /// Switching off also clears any active trigger. That is the driver's
    /// doing, not this crate's.
    ///
    /// # Errors
    ///
    /// - If the `brightness` attribute can't be written
    pub fn set_value(&self, on: bool) -> Result<()> {
        log::debug!("Setting LED {} value: {}", self.prefix, on);
        write_line(&self.attr("brightness"), if on { "1" } else { "0" })
    }

    /// Raw brightness level.
    ///
    /// # Errors
    ///
    /// - If the `brightness` attribute can't be read
    /// - [`HwError::Parse`] if the attribute isn't an integer
    pub fn brightness(&self) -> Result<u32> {
        let raw = read_line(&self.attr("brightness"))?;
        raw.parse().map_err(|_| HwError::Parse(BRIGHTNESS, raw))
    }

    /// The active trigger.
    ///
    /// The kernel marks the active entry of the trigger list with brackets,
    /// `none [timer] heartbeat` means `timer` is active.
    ///
    /// # Errors
    ///
    /// - If the `trigger` attribute can't be read
    /// - [`HwError::Parse`] if the report has no bracketed entry
    pub fn trigger(&self) -> Result<String> {
        let raw = read_line(&self.attr("trigger"))?;
        match (raw.find('['), raw.find(']')) {
            (Some(start), Some(end)) if start < end => Ok(raw[start + 1..end].to_owned()),
            _ => Err(HwError::Parse(TRIGGER_LINE, raw)),
        }
    }

    /// Every trigger the driver offers, in the driver's order.
    ///
    /// The active entry is included, with its brackets stripped. Use
    /// [`Led::trigger`] to learn which one is active.
    ///
    /// # Errors
    ///
    /// - If the `trigger` attribute can't be read
    pub fn triggers(&self) -> Result<Vec<String>> {
        let raw = read_line(&self.attr("trigger"))?;
        let raw = raw.replace('[', "").replace(']', "");
        Ok(raw.split(' ').map(str::to_owned).collect())
    }

    /// Select the trigger named `trigger`.
    ///
    /// Names the driver doesn't offer are dropped by the kernel with
    /// nothing but a kernel log warning. [`Led::set_trigger_checked`]
    /// refuses them up front instead.
    ///
    /// # Errors
    ///
    /// - If the `trigger` attribute can't be written
    pub fn set_trigger(&self, trigger: &str) -> Result<()> {
        log::debug!("Setting LED {} trigger: {}", self.prefix, trigger);
        write_line(&self.attr("trigger"), trigger)
    }

    /// Select the trigger named `trigger`, refusing names the driver
    /// doesn't offer.
    ///
    /// The offered list is consulted first. An unknown name fails without
    /// touching the attribute.
    ///
    /// # Errors
    ///
    /// - If the `trigger` attribute can't be read or written
    /// - [`HwError::Rejected`] if the driver doesn't offer `trigger`
    pub fn set_trigger_checked(&self, trigger: &str) -> Result<()> {
        if !self.triggers()?.iter().any(|t| t == trigger) {
            return Err(HwError::Rejected(TRIGGER, trigger.into()));
        }
        self.set_trigger(trigger)
    }
}

// Private
impl Led {
    fn attr(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", self.prefix, name))
    }
}
