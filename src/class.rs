//! Facades over the classes of board hardware control points
//!
//! A "class" here is a kernel device class a control point can belong to.
//! Every facade follows the same two step pattern: resolve a sysfs location
//! out of the board property table, then read or write single-line text
//! attributes at that location.
//!
//! Within the kernel these classes have little in common, so each facade
//! decodes its own attributes.
pub mod gpio;
pub mod hwmon;
pub mod led;
pub mod pwm;

/// The classes with a `hw.*` property namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// Discrete digital IO pins.
    Gpio,

    /// Indicator LEDs.
    Led,

    /// Pulse width modulated outputs.
    Pwm,

    /// Voltage and temperature sensors.
    Hwmon,
}

impl Class {
    /// The `hw.<class>` namespace token.
    pub(crate) fn token(self) -> &'static str {
        match self {
            Class::Gpio => "gpio",
            Class::Led => "led",
            Class::Pwm => "pwm",
            Class::Hwmon => "hwmon",
        }
    }
}
