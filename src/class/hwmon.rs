//! Abstraction over hardware monitoring sensors exposed through sysfs
//!
//! Unlike the other classes, a hwmon property points at the sensor's value
//! file itself rather than at a device directory.
//!
//! # Implementation
//!
//! See [the kernel documentation][1] for the sensor file conventions.
//!
//! [1]: https://www.kernel.org/doc/Documentation/hwmon/sysfs-interface
use std::path::PathBuf;

use crate::{
    class::Class,
    error::{text::*, HwError, Result},
    props::{self, PropertyStore, SystemProperties},
    util::read_line,
};

/// A read only hardware monitoring sensor.
#[derive(Debug, Clone)]
pub struct Hwmon {
    /// The sensor's value file, out of the property table.
    path: PathBuf,
}

impl Hwmon {
    /// The sensor registered as `name` in the board property table.
    ///
    /// # Errors
    ///
    /// - [`HwError::Unresolved`] if nothing maps `name`
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_name_with(&SystemProperties, name)
    }

    /// Like [`Hwmon::from_name`], reading `store` instead of the system
    /// property table.
    pub fn from_name_with(store: &impl PropertyStore, name: &str) -> Result<Self> {
        let path = props::resolve(store, Class::Hwmon, name)?;
        Ok(Self {
            path: PathBuf::from(path),
        })
    }

    /// Current reading of the sensor.
    ///
    /// The unit depends on the sensor, millivolts for voltage inputs and
    /// degrees Celsius for temperatures. Which applies is a convention
    /// between the board files and the caller.
    ///
    /// # Errors
    ///
    /// - If the value file can't be read
    /// - [`HwError::Parse`] if the reading isn't an integer
    pub fn value(&self) -> Result<i64> {
        let raw = read_line(&self.path)?;
        raw.parse().map_err(|_| HwError::Parse(SENSOR_VALUE, raw))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use anyhow::Result;
    use tempfile::TempDir;

    use super::*;
    use crate::props::testing::Table;

    #[test]
    fn sensor_reading() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("in0_input");
        fs::write(&path, "42500\n")?;
        let sensor = Hwmon { path };
        assert_eq!(sensor.value()?, 42500);
        Ok(())
    }

    #[test]
    fn readings_can_go_negative() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("temp1_input");
        fs::write(&path, "-5000\n")?;
        let sensor = Hwmon { path };
        assert_eq!(sensor.value()?, -5000);
        Ok(())
    }

    #[test]
    fn reading_that_is_not_a_number() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("in0_input");
        fs::write(&path, "toasty\n")?;
        let sensor = Hwmon { path };
        match sensor.value() {
            Err(HwError::Parse(_, raw)) => assert_eq!(raw, "toasty"),
            other => panic!("expected Parse, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn missing_sensor_is_an_error() {
        let sensor = Hwmon {
            path: PathBuf::from("/this/does/not/exist/in0_input"),
        };
        assert!(matches!(sensor.value(), Err(HwError::Io(_))));
    }

    #[test]
    fn from_name_reads_the_configured_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("in1_input");
        fs::write(&path, "3300\n")?;
        let table = Table::with("hw.hwmon.vin", &path.display().to_string());
        let sensor = Hwmon::from_name_with(&table, "vin")?;
        assert_eq!(sensor.value()?, 3300);
        Ok(())
    }

    #[test]
    fn from_name_unresolved() {
        let table = Table::default();
        assert!(matches!(
            Hwmon::from_name_with(&table, "vin"),
            Err(HwError::Unresolved(_))
        ));
    }
}
