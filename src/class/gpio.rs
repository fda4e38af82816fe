//! Abstraction over GPIO pins exposed through sysfs
//!
//! On the boards this crate supports the user controllable pins come up
//! already exported, and the board property table names them, so this goes
//! through the old GPIO class interface rather than the character device.
//!
//! # Implementation
//!
//! The interface is deprecated but stable, see [the kernel documentation][1]
//! for details.
//!
//! [1]: https://www.kernel.org/doc/Documentation/ABI/obsolete/sysfs-gpio
use std::path::{Path, PathBuf};

use crate::{
    class::Class,
    error::{text::*, HwError, Result},
    props::{self, PropertyStore, SystemProperties},
    util::{read_line, write_line, GPIO_PATH},
};

/// Signal direction of a [`Gpio`] pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The pin reads an external signal.
    In,

    /// The pin drives its value outward.
    Out,
}

impl Direction {
    /// The token the kernel uses in the `direction` attribute.
    fn token(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }

    /// Decode a `direction` report. Exactly `in` reads as
    /// [`Direction::In`], anything else reads as [`Direction::Out`].
    fn decode(raw: &str) -> Self {
        if raw == "in" {
            Direction::In
        } else {
            Direction::Out
        }
    }

    /// Decode a `direction` report, rejecting unexpected tokens.
    fn decode_strict(raw: &str) -> Result<Self> {
        match raw {
            "in" => Ok(Direction::In),
            "out" => Ok(Direction::Out),
            _ => Err(HwError::Unrecognized(DIRECTION, raw.into())),
        }
    }
}

/// Pull the pin number out of a configured GPIO path.
///
/// Properties name the pin directory or an attribute below it,
/// `/sys/class/gpio/gpio<N>/<attr>`, and the number is whatever sits
/// between the last `gpio` token and the last `/`.
///
/// # Errors
///
/// - [`HwError::Parse`] if that slot isn't a bare pin number
pub(crate) fn pin_from_path(path: &str) -> Result<u64> {
    let err = || HwError::Parse(PIN_NUMBER, path.into());
    let start = path.rfind("gpio").map(|i| i + 4).ok_or_else(err)?;
    let end = path.rfind('/').filter(|&i| i >= start).ok_or_else(err)?;
    path[start..end].parse().map_err(|_| err())
}

/// A GPIO pin.
///
/// Reads and writes go straight to the pin's sysfs attributes, nothing is
/// cached, so a [`Gpio`] can be kept around indefinitely.
#[derive(Debug, Clone)]
pub struct Gpio {
    /// Global sysfs pin number.
    number: u64,

    /// Pin directory, `/sys/class/gpio/gpio<N>`.
    path: PathBuf,
}

// Public
impl Gpio {
    /// The pin with global sysfs number `number`.
    ///
    /// The pin is assumed to already be exported.
    pub fn new(number: u64) -> Self {
        Self::new_in(Path::new(GPIO_PATH), number)
    }

    /// The pin registered as `name` in the board property table.
    ///
    /// The configured path only contributes its pin number, attribute
    /// access goes through the canonical class directory.
    ///
    /// # Errors
    ///
    /// - [`HwError::Unresolved`] if nothing maps `name`
    /// - [`HwError::Parse`] if the configured path doesn't name a pin
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_name_with(&SystemProperties, name)
    }

    /// Like [`Gpio::from_name`], reading `store` instead of the system
    /// property table.
    pub fn from_name_with(store: &impl PropertyStore, name: &str) -> Result<Self> {
        let path = props::resolve(store, Class::Gpio, name)?;
        Ok(Self::new(pin_from_path(&path)?))
    }

    /// The global sysfs pin number.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Current level of the pin.
    ///
    /// # Errors
    ///
    /// - If the `value` attribute can't be read
    /// - [`HwError::Parse`] if the attribute isn't an integer
    pub fn value(&self) -> Result<u8> {
        let raw = read_line(&self.attr("value"))?;
        raw.parse().map_err(|_| HwError::Parse(PIN_VALUE, raw))
    }

    /// Drive the pin to `value`. Any nonzero `value` drives a logical 1.
    ///
    /// Only meaningful while the direction is [`Direction::Out`].
    ///
    /// # Errors
    ///
    /// - If the `value` attribute can't be written
    pub fn set_value(&self, value: u8) -> Result<()> {
        log::debug!("Setting gpio{} value: {}", self.number, value);
        write_line(&self.attr("value"), if value == 0 { "0" } else { "1" })
    }

    /// Current direction of the pin.
    ///
    /// Anything the kernel reports other than `in` reads as
    /// [`Direction::Out`]. Use [`Gpio::direction_strict`] to reject
    /// unexpected reports instead.
    ///
    /// # Errors
    ///
    /// - If the `direction` attribute can't be read
    pub fn direction(&self) -> Result<Direction> {
        Ok(Direction::decode(&read_line(&self.attr("direction"))?))
    }

    /// Like [`Gpio::direction`], but an unexpected report is an error.
    ///
    /// # Errors
    ///
    /// - If the `direction` attribute can't be read
    /// - [`HwError::Unrecognized`] for anything other than `in` or `out`
    pub fn direction_strict(&self) -> Result<Direction> {
        Direction::decode_strict(&read_line(&self.attr("direction"))?)
    }

    /// Switch the pin to `direction`.
    ///
    /// # Errors
    ///
    /// - If the `direction` attribute can't be written
    pub fn set_direction(&self, direction: Direction) -> Result<()> {
        log::debug!("Setting gpio{} direction: {}", self.number, direction.token());
        write_line(&self.attr("direction"), direction.token())
    }

    /// Configure `direction` and `value` in one call.
    ///
    /// The direction is always written first.
    ///
    /// # Errors
    ///
    /// - If either attribute can't be written. A failed value write leaves
    ///   the direction already switched.
    pub fn configure(&self, direction: Direction, value: u8) -> Result<()> {
        self.set_direction(direction)?;
        self.set_value(value)
    }
}

// Private
impl Gpio {
    fn new_in(base: &Path, number: u64) -> Self {
        Self {
            number,
            path: base.join(format!("gpio{}", number)),
        }
    }

    fn attr(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use anyhow::Result;
    use tempfile::TempDir;

    use super::*;
    use crate::props::testing::Table;

    /// A fake exported pin under `dir`, reading low and set to input.
    fn export(dir: &TempDir, number: u64) -> Result<Gpio> {
        let pin = dir.path().join(format!("gpio{}", number));
        fs::create_dir(&pin)?;
        fs::write(pin.join("value"), "0\n")?;
        fs::write(pin.join("direction"), "in\n")?;
        Ok(Gpio::new_in(dir.path(), number))
    }

    #[test]
    fn pin_number_from_configured_paths() {
        // Properties name an attribute below the pin directory, or the
        // directory itself. Whatever follows the last `/` is ignored.
        assert_eq!(pin_from_path("/sys/class/gpio/gpio12/value").unwrap(), 12);
        assert_eq!(pin_from_path("/sys/class/gpio/gpio7/direction").unwrap(), 7);
        assert_eq!(pin_from_path("/sys/class/gpio/gpio16/").unwrap(), 16);
        assert_eq!(pin_from_path("gpio0/").unwrap(), 0);
        // Only the text after the last `gpio` counts.
        assert_eq!(pin_from_path("/mnt/gpio-sys/class/gpio/gpio7/").unwrap(), 7);
    }

    #[test]
    fn pin_number_from_junk_paths() {
        for bad in [
            "",
            "/dev/null",
            "/sys/class/gpio/",
            "/sys/class/gpio/gpio12",
            "/sys/class/gpio/gpio12/value/extra",
            "gpioX/",
        ] {
            assert!(matches!(pin_from_path(bad), Err(HwError::Parse(_, _))), "{}", bad);
        }
    }

    #[test]
    fn value_round_trip() -> Result<()> {
        let dir = TempDir::new()?;
        let pin = export(&dir, 5)?;
        pin.set_value(1)?;
        assert_eq!(pin.value()?, 1);
        pin.set_value(0)?;
        assert_eq!(pin.value()?, 0);
        Ok(())
    }

    #[test]
    fn nonzero_values_drive_high() -> Result<()> {
        let dir = TempDir::new()?;
        let pin = export(&dir, 5)?;
        pin.set_value(42)?;
        assert_eq!(fs::read_to_string(dir.path().join("gpio5/value"))?, "1");
        Ok(())
    }

    #[test]
    fn value_that_is_not_a_number() -> Result<()> {
        let dir = TempDir::new()?;
        let pin = export(&dir, 5)?;
        fs::write(dir.path().join("gpio5/value"), "flapping\n")?;
        match pin.value() {
            Err(HwError::Parse(_, raw)) => assert_eq!(raw, "flapping"),
            other => panic!("expected Parse, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn direction_round_trip() -> Result<()> {
        let dir = TempDir::new()?;
        let pin = export(&dir, 2)?;
        pin.set_direction(Direction::Out)?;
        assert_eq!(pin.direction()?, Direction::Out);
        assert_eq!(pin.direction_strict()?, Direction::Out);
        pin.set_direction(Direction::In)?;
        assert_eq!(pin.direction()?, Direction::In);
        assert_eq!(pin.direction_strict()?, Direction::In);
        Ok(())
    }

    #[test]
    fn unexpected_direction_reports() -> Result<()> {
        let dir = TempDir::new()?;
        let pin = export(&dir, 2)?;
        fs::write(dir.path().join("gpio2/direction"), "sideways\n")?;
        assert_eq!(pin.direction()?, Direction::Out);
        assert!(matches!(
            pin.direction_strict(),
            Err(HwError::Unrecognized(_, _))
        ));
        Ok(())
    }

    #[test]
    fn configure_writes_direction_first() -> Result<()> {
        // No value attribute at all. The combined call must fail, but only
        // after the direction write went through.
        let dir = TempDir::new()?;
        let pin_dir = dir.path().join("gpio3");
        fs::create_dir(&pin_dir)?;
        fs::write(pin_dir.join("direction"), "in\n")?;
        let pin = Gpio::new_in(dir.path(), 3);
        assert!(pin.configure(Direction::Out, 1).is_err());
        assert_eq!(fs::read_to_string(pin_dir.join("direction"))?, "out");
        Ok(())
    }

    #[test]
    fn from_name_recovers_the_number() -> Result<()> {
        let table = Table::with("hw.gpio.dio0", "/sys/class/gpio/gpio16/");
        assert_eq!(Gpio::from_name_with(&table, "dio0")?.number(), 16);

        // Attribute-shaped values resolve the same way.
        let table = Table::with("hw.gpio.dio1", "/sys/class/gpio/gpio12/value");
        assert_eq!(Gpio::from_name_with(&table, "dio1")?.number(), 12);

        // The configured path contributes nothing but its number.
        let table = Table::with("hw.gpio.weird", "/mnt/other/gpio7/");
        assert_eq!(Gpio::from_name_with(&table, "weird")?.number(), 7);
        Ok(())
    }

    #[test]
    fn from_name_unresolved() {
        let table = Table::default();
        assert!(matches!(
            Gpio::from_name_with(&table, "dio0"),
            Err(HwError::Unresolved(_))
        ));
    }

    #[test]
    fn from_name_with_a_junk_path() {
        let table = Table::with("hw.gpio.dio0", "/dev/null");
        assert!(matches!(
            Gpio::from_name_with(&table, "dio0"),
            Err(HwError::Parse(_, _))
        ));
    }
}
