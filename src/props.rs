//! Access to the board property table
//!
//! Boards supported by this crate publish the sysfs location of each named
//! hardware control point in the system property table, one property per
//! control point:
//!
//! ```text
//! hw.gpio.dio0 = /sys/class/gpio/gpio16/
//! hw.led.front-red = /sys/class/leds/front:red/
//! hw.pwm.fan = /sys/class/pwm/pwmchip0/pwm0/
//! hw.hwmon.vin = /sys/class/hwmon/hwmon0/in0_input
//! ```
//!
//! The table is populated by the platform init scripts, this module only
//! reads it.
use crate::{
    class::Class,
    error::{HwError, Result},
};

/// A `key = value` table describing the board.
///
/// The real table is the system property service, see [`SystemProperties`].
/// The trait exists so that a facade can be pointed at a fake table,
/// which the tests here use extensively.
pub trait PropertyStore {
    /// Value of `key`, or [`None`] if `key` is unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// The system property service, as seen by this process.
///
/// Equivalent to `getprop <key>` on a shell.
///
/// # Note
///
/// On anything that isn't Android there is no property service, and every
/// key reads as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProperties;

impl PropertyStore for SystemProperties {
    fn get(&self, key: &str) -> Option<String> {
        imp::get(key)
    }
}

#[cfg(target_os = "android")]
mod imp {
    use std::ffi::{CStr, CString};

    /// Hard limit on property values, from `<sys/system_properties.h>`.
    const PROP_VALUE_MAX: usize = 92;

    extern "C" {
        fn __system_property_get(
            name: *const libc::c_char,
            value: *mut libc::c_char,
        ) -> libc::c_int;
    }

    pub(super) fn get(key: &str) -> Option<String> {
        let name = CString::new(key).ok()?;
        let mut value = [0 as libc::c_char; PROP_VALUE_MAX];
        // Unset keys report a length of zero and leave `value` untouched.
        let len = unsafe { __system_property_get(name.as_ptr(), value.as_mut_ptr()) };
        if len <= 0 {
            return None;
        }
        let value = unsafe { CStr::from_ptr(value.as_ptr()) };
        Some(value.to_string_lossy().into_owned())
    }
}

#[cfg(not(target_os = "android"))]
mod imp {
    pub(super) fn get(_key: &str) -> Option<String> {
        None
    }
}

/// Resolve the sysfs location behind `hw.<class>.<name>`.
///
/// # Errors
///
/// - [`HwError::Unresolved`] if the property is unset or empty
pub(crate) fn resolve(store: &impl PropertyStore, class: Class, name: &str) -> Result<String> {
    let key = format!("hw.{}.{}", class.token(), name);
    match store.get(&key) {
        Some(path) if !path.is_empty() => Ok(path),
        _ => Err(HwError::Unresolved(key)),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::PropertyStore;

    /// In-memory property table.
    #[derive(Debug, Default)]
    pub(crate) struct Table(pub(crate) Vec<(String, String)>);

    impl Table {
        /// Table holding only `key = value`.
        pub(crate) fn with(key: &str, value: &str) -> Self {
            Self(vec![(key.into(), value.into())])
        }
    }

    impl PropertyStore for Table {
        fn get(&self, key: &str) -> Option<String> {
            self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        }
    }
}
