//! Non-blocking driver for the ST VL6180X time-of-flight range sensor.
//!
//! The driver is built on the `embedded-hal` 0.2 blocking I2C traits. With the
//! `linux` feature (default) [`Vl6180x::open`] talks to `/dev/i2c-<bus>`, and
//! the `python` feature builds a `vl6180x` extension module around it.

mod driver;
mod error;
#[cfg(feature = "python")]
mod python;
pub mod registers;

pub use driver::{BusError, Vl6180x};
pub use error::Error;
pub use registers::DEFAULT_ADDRESS;
