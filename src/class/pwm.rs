//! Abstraction over PWM channels exposed through sysfs
//!
//! # Implementation
//!
//! See [the kernel documentation][1] for details on the underlying
//! attributes.
//!
//! [1]: https://www.kernel.org/doc/Documentation/ABI/testing/sysfs-class-pwm
use std::path::PathBuf;

use crate::{
    class::Class,
    error::{text::*, HwError, Result},
    props::{self, PropertyStore, SystemProperties},
    util::{read_line, write_line},
};

/// Polarity of a [`Pwm`] channel.
///
/// [`Polarity::Inversed`] drives the duty portion of each period low
/// instead of high. `Inversed` is the kernel's spelling, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Normal,
    Inversed,
}

impl Polarity {
    /// The token the kernel uses in the `polarity` attribute.
    fn token(self) -> &'static str {
        match self {
            Polarity::Normal => "normal",
            Polarity::Inversed => "inversed",
        }
    }

    /// Decode a `polarity` report. Exactly `normal` reads as
    /// [`Polarity::Normal`], anything else reads as [`Polarity::Inversed`].
    fn decode(raw: &str) -> Self {
        if raw == "normal" {
            Polarity::Normal
        } else {
            Polarity::Inversed
        }
    }

    /// Decode a `polarity` report, rejecting unexpected tokens.
    fn decode_strict(raw: &str) -> Result<Self> {
        match raw {
            "normal" => Ok(Polarity::Normal),
            "inversed" => Ok(Polarity::Inversed),
            _ => Err(HwError::Unrecognized(POLARITY, raw.into())),
        }
    }
}

/// A PWM output channel.
///
/// All durations are in nanoseconds, the unit the kernel stores.
#[derive(Debug, Clone)]
pub struct Pwm {
    /// Attribute prefix out of the property table. Attribute names are
    /// appended verbatim, so this normally ends in `/`.
    prefix: String,
}

// Public
impl Pwm {
    /// The channel registered as `name` in the board property table.
    ///
    /// # Errors
    ///
    /// - [`HwError::Unresolved`] if nothing maps `name`
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_name_with(&SystemProperties, name)
    }

    /// Like [`Pwm::from_name`], reading `store` instead of the system
    /// property table.
    pub fn from_name_with(store: &impl PropertyStore, name: &str) -> Result<Self> {
        let prefix = props::resolve(store, Class::Pwm, name)?;
        Ok(Self { prefix })
    }

    /// Whether the channel is currently producing output.
    ///
    /// Anything other than a plain `1` reads as disabled. Use
    /// [`Pwm::enabled_strict`] to reject unexpected reports instead.
    ///
    /// # Errors
    ///
    /// - If the `enable` attribute can't be read
    pub fn enabled(&self) -> Result<bool> {
        Ok(read_line(&self.attr("enable"))? == "1")
    }

    /// Like [`Pwm::enabled`], but an unexpected report is an error.
    ///
    /// # Errors
    ///
    /// - If the `enable` attribute can't be read
    /// - [`HwError::Unrecognized`] for anything other than `0` or `1`
    pub fn enabled_strict(&self) -> Result<bool> {
        let raw = read_line(&self.attr("enable"))?;
        match raw.as_str() {
            "1" => Ok(true),
            "0" => Ok(false),
            _ => Err(HwError::Unrecognized(ENABLE_FLAG, raw)),
        }
    }

    /// Start or stop the channel.
    ///
    /// # Errors
    ///
    /// - If the `enable` attribute can't be written
    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        log::debug!("Setting PWM {} enable: {}", self.prefix, enabled);
        write_line(&self.attr("enable"), if enabled { "1" } else { "0" })
    }

    /// Current polarity of the channel.
    ///
    /// Anything the kernel reports other than `normal` reads as
    /// [`Polarity::Inversed`]. Use [`Pwm::polarity_strict`] to reject
    /// unexpected reports instead.
    ///
    /// # Errors
    ///
    /// - If the `polarity` attribute can't be read
    pub fn polarity(&self) -> Result<Polarity> {
        Ok(Polarity::decode(&read_line(&self.attr("polarity"))?))
    }

    /// Like [`Pwm::polarity`], but an unexpected report is an error.
    ///
    /// # Errors
    ///
    /// - If the `polarity` attribute can't be read
    /// - [`HwError::Unrecognized`] for anything other than `normal` or
    ///   `inversed`
    pub fn polarity_strict(&self) -> Result<Polarity> {
        Polarity::decode_strict(&read_line(&self.attr("polarity"))?)
    }

    /// Switch the channel to `polarity`.
    ///
    /// Most drivers refuse the switch while the channel is enabled.
    ///
    /// # Errors
    ///
    /// - If the `polarity` attribute can't be written
    pub fn set_polarity(&self, polarity: Polarity) -> Result<()> {
        log::debug!("Setting PWM {} polarity: {}", self.prefix, polarity.token());
        write_line(&self.attr("polarity"), polarity.token())
    }

    /// Current duty cycle, in nanoseconds.
    ///
    /// # Errors
    ///
    /// - If the `duty_cycle` attribute can't be read
    /// - [`HwError::Parse`] if the attribute isn't an integer
    pub fn duty_cycle(&self) -> Result<u64> {
        let raw = read_line(&self.attr("duty_cycle"))?;
        raw.parse().map_err(|_| HwError::Parse(DUTY_CYCLE, raw))
    }

    /// Set the duty cycle, in nanoseconds.
    ///
    /// The kernel refuses a duty cycle at or above the current period, and
    /// the refusal comes back as [`HwError::Io`] from the attribute write.
    ///
    /// # Errors
    ///
    /// - If the `duty_cycle` attribute can't be written
    pub fn set_duty_cycle(&self, ns: u64) -> Result<()> {
        log::debug!("Setting PWM {} duty_cycle: {}", self.prefix, ns);
        write_line(&self.attr("duty_cycle"), &ns.to_string())
    }

    /// Current period, in nanoseconds.
    ///
    /// # Errors
    ///
    /// - If the `period` attribute can't be read
    /// - [`HwError::Parse`] if the attribute isn't an integer
    pub fn period(&self) -> Result<u64> {
        let raw = read_line(&self.attr("period"))?;
        raw.parse().map_err(|_| HwError::Parse(PERIOD, raw))
    }

    /// Set the period, in nanoseconds.
    ///
    /// The kernel refuses a period at or below the current duty cycle, and
    /// values the driver can't represent. Refusals come back as
    /// [`HwError::Io`] from the attribute write.
    ///
    /// # Errors
    ///
    /// - If the `period` attribute can't be written
    pub fn set_period(&self, ns: u64) -> Result<()> {
        log::debug!("Setting PWM {} period: {}", self.prefix, ns);
        write_line(&self.attr("period"), &ns.to_string())
    }
}

// Private
impl Pwm {
    fn attr(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", self.prefix, name))
    }
}
