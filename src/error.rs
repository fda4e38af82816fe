//! Error handling stuff
use displaydoc::Display;
use std::io;
use thiserror::Error;

/// Error type for every hardware control point operation.
#[derive(Debug, Display, Error)]
pub enum HwError {
    /// IO Failed
    Io(#[from] io::Error),

    /// No sysfs path configured for `{0}`
    Unresolved(String),

    /// Couldn't parse {0}: `{1}`
    Parse(&'static str, String),

    /// Unrecognized {0}: `{1}`
    Unrecognized(&'static str, String),

    /// Driver offers no {0} named `{1}`
    Rejected(&'static str, String),
}

pub type Result<T, E = HwError> = std::result::Result<T, E>;

/// Error text.
pub(crate) mod text {
    pub const PIN_NUMBER: &str = "pin number";

    pub const PIN_VALUE: &str = "pin value";

    pub const DIRECTION: &str = "direction";

    pub const BRIGHTNESS: &str = "brightness";

    pub const TRIGGER_LINE: &str = "trigger line";

    pub const TRIGGER: &str = "trigger";

    pub const ENABLE_FLAG: &str = "enable flag";

    pub const POLARITY: &str = "polarity";

    pub const DUTY_CYCLE: &str = "duty cycle";

    pub const PERIOD: &str = "period";

    pub const SENSOR_VALUE: &str = "sensor value";
}
