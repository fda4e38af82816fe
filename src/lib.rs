//! High level bindings to board hardware control points
//!
//! Supported boards describe their user controllable hardware, GPIO pins,
//! LEDs, PWM channels and hardware monitoring sensors, in the system
//! property table. Each `hw.<class>.<name>` property names the sysfs
//! location of one control point, and the facades in [`class`] turn those
//! names into typed reads and writes.
//!
//! # Implementation details
//!
//! All control points are provided through single-line text files in
//! `/sys`, so this library requires sysfs to exist, and the property
//! table to be populated by the platform init scripts.
//!
//! Most of these interfaces are sparsely documented, and some may change
//! between kernel versions.
//!
//! This crate attempts to correctly document these interfaces, and provide
//! kernel documentation sources where possible.
//! This is done on a best effort basis.
//!
//! # Example
//!
//! ```rust,no_run
//! use boardapi::class::gpio::{Direction, Gpio};
//!
//! # fn main() -> boardapi::error::Result<()> {
//! let dio = Gpio::from_name("dio0")?;
//! dio.configure(Direction::Out, 1)?;
//! # Ok(())
//! # }
//! ```
#![doc(html_root_url = "https://docs.rs/boardapi/0.3.0")]

pub mod class;
pub mod error;

pub mod props;
mod util;
