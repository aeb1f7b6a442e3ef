use std::fmt::Debug;

use embedded_hal::blocking::i2c::{Read, Write};
#[cfg(feature = "linux")]
use linux_embedded_hal::I2cdev;
use log::{debug, info, warn};

use crate::error::Error;
use crate::registers::{
    Register, FRESH_OUT_OF_RESET, INTERRUPT_CLEAR_ALL, MODEL_ID, RANGE_DEVICE_READY,
    RANGE_SAMPLE_READY, RANGE_START_SINGLE_SHOT, RANGE_UNKNOWN, TUNING_SETTINGS,
};

/// Error type of the bus a driver is built on.
pub type BusError<I2C> = <I2C as Write>::Error;

enum Link<I2C, E> {
    Connected { i2c: I2C, measuring: bool },
    // Terminal: a disconnected driver never talks to the bus again.
    Disconnected { i2c: Option<I2C>, cause: Error<E> },
}

/// VL6180X time-of-flight range sensor.
///
/// The handshake runs once in [`Vl6180x::new`]. If it fails the driver stays
/// disconnected for its whole lifetime and [`Vl6180x::get_range`] keeps
/// returning `0xFF`; build a new driver to try again.
///
/// Not meant for concurrent callers: wrap it in a `Mutex` to share it.
pub struct Vl6180x<I2C>
where
    I2C: Write + Read<Error = BusError<I2C>>,
{
    address: u8,
    last_range: u8,
    link: Link<I2C, BusError<I2C>>,
}

impl<I2C> Vl6180x<I2C>
where
    I2C: Write + Read<Error = BusError<I2C>>,
    BusError<I2C>: Debug,
{
    /// Identifies and, when fresh out of reset, initializes the device at
    /// `address` on an already opened bus.
    pub fn new(mut i2c: I2C, address: u8) -> Self {
        if address > 0x7F {
            return Self::disconnected(Some(i2c), address, Error::InvalidAddress(address));
        }

        match handshake(&mut i2c, address) {
            Ok(()) => Vl6180x {
                address,
                last_range: RANGE_UNKNOWN,
                link: Link::Connected {
                    i2c,
                    measuring: false,
                },
            },
            Err(cause) => Self::disconnected(Some(i2c), address, cause),
        }
    }

    fn disconnected(i2c: Option<I2C>, address: u8, cause: Error<BusError<I2C>>) -> Self {
        warn!("VL6180X {:#04x}: {}", address, cause);
        Vl6180x {
            address,
            last_range: RANGE_UNKNOWN,
            link: Link::Disconnected { i2c, cause },
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Whether the handshake succeeded.
    pub fn is_connected(&self) -> bool {
        matches!(self.link, Link::Connected { .. })
    }

    /// Whether a measurement has been started and not yet collected.
    pub fn is_measuring(&self) -> bool {
        matches!(self.link, Link::Connected { measuring: true, .. })
    }

    /// Why the handshake failed, if it did.
    pub fn connection_error(&self) -> Option<&Error<BusError<I2C>>> {
        match &self.link {
            Link::Connected { .. } => None,
            Link::Disconnected { cause, .. } => Some(cause),
        }
    }

    /// Returns the most recently completed range reading in mm.
    ///
    /// Never waits for the sensor. Each call starts a measurement if none is
    /// running and collects it once the device flags it ready, which may be
    /// in the same call. While a measurement is in flight the previous
    /// reading is returned again. `0xFF` means disconnected or no reading
    /// yet.
    pub fn get_range(&mut self) -> u8 {
        let address = self.address;
        let Link::Connected { i2c, measuring } = &mut self.link else {
            return RANGE_UNKNOWN;
        };

        if !*measuring {
            let status = or_zero(
                address,
                read_byte(i2c, address, Register::ResultRangeStatus.addr()),
            );
            if status & RANGE_DEVICE_READY != 0 {
                if let Err(e) = write_byte(
                    i2c,
                    address,
                    Register::SysrangeStart.addr(),
                    RANGE_START_SINGLE_SHOT,
                ) {
                    warn!("VL6180X {:#04x}: Failed to start ranging: {:?}", address, e);
                }
                *measuring = true;
            } else {
                warn!("VL6180X {:#04x}: Range status error {:#04x}", address, status);
            }
        }

        // Checked again so a fast device completes in the call that started it.
        if *measuring {
            let interrupt = or_zero(
                address,
                read_byte(i2c, address, Register::ResultInterruptStatusGpio.addr()),
            );
            if interrupt & RANGE_SAMPLE_READY != 0 {
                self.last_range = or_zero(
                    address,
                    read_byte(i2c, address, Register::ResultRangeVal.addr()),
                );
                if let Err(e) = write_byte(
                    i2c,
                    address,
                    Register::SystemInterruptClear.addr(),
                    INTERRUPT_CLEAR_ALL,
                ) {
                    warn!("VL6180X {:#04x}: Failed to clear interrupt: {:?}", address, e);
                }
                *measuring = false;
                debug!("VL6180X {:#04x}: range {} mm", address, self.last_range);
            }
        }

        self.last_range
    }

    /// Reads an 8-bit value from a 16-bit register. Returns 0 when
    /// disconnected or when the transaction fails.
    pub fn read_register(&mut self, reg: u16) -> u8 {
        let address = self.address;
        match &mut self.link {
            Link::Connected { i2c, .. } => or_zero(address, read_byte(i2c, address, reg)),
            Link::Disconnected { .. } => 0,
        }
    }

    /// Writes an 8-bit value to a 16-bit register. Does nothing when
    /// disconnected; a failed transaction is logged and dropped.
    pub fn write_register(&mut self, reg: u16, value: u8) {
        let address = self.address;
        if let Link::Connected { i2c, .. } = &mut self.link {
            if let Err(e) = write_byte(i2c, address, reg, value) {
                warn!("VL6180X {:#04x}: Failed to write {:#06x}: {:?}", address, reg, e);
            }
        }
    }

    /// Gives the bus back. `None` if it was never opened.
    pub fn release(self) -> Option<I2C> {
        match self.link {
            Link::Connected { i2c, .. } => Some(i2c),
            Link::Disconnected { i2c, .. } => i2c,
        }
    }
}

#[cfg(feature = "linux")]
impl Vl6180x<I2cdev> {
    /// Opens `/dev/i2c-<bus>` and runs the handshake against `address`.
    pub fn open(bus: u8, address: u8) -> Self {
        let path = format!("/dev/i2c-{}", bus);
        match I2cdev::new(&path) {
            Ok(i2c) => {
                info!("VL6180X: Opened I2C device at '{}'", path);
                Self::new(i2c, address)
            }
            Err(e) => Self::disconnected(None, address, Error::Open(e)),
        }
    }
}

fn handshake<I2C, E>(i2c: &mut I2C, address: u8) -> Result<(), Error<E>>
where
    I2C: Write<Error = E> + Read<Error = E>,
{
    let model_id =
        read_byte(i2c, address, Register::IdentificationModelId.addr()).map_err(Error::Bus)?;
    if model_id != MODEL_ID {
        return Err(Error::ModelId(model_id));
    }

    let fresh = read_byte(i2c, address, Register::SystemFreshOutOfReset.addr()).map_err(Error::Bus)?;
    if fresh & FRESH_OUT_OF_RESET == 0 {
        // Configured by an earlier run; the tuning registers survive until power-off.
        info!("VL6180X {:#04x}: Not fresh out of reset, skipping tuning", address);
        return Ok(());
    }

    write_byte(i2c, address, Register::SystemFreshOutOfReset.addr(), 0x00).map_err(Error::Bus)?;
    for &(reg, value) in TUNING_SETTINGS.iter() {
        write_byte(i2c, address, reg, value).map_err(Error::Bus)?;
    }

    info!("VL6180X {:#04x}: Initialized", address);
    Ok(())
}

fn read_byte<I2C, E>(i2c: &mut I2C, address: u8, reg: u16) -> Result<u8, E>
where
    I2C: Write<Error = E> + Read<Error = E>,
{
    let mut value = [0u8; 1];
    i2c.write(address, &reg.to_be_bytes())?;
    i2c.read(address, &mut value)?;
    Ok(value[0])
}

fn write_byte<I2C, E>(i2c: &mut I2C, address: u8, reg: u16, value: u8) -> Result<(), E>
where
    I2C: Write<Error = E>,
{
    let [hi, lo] = reg.to_be_bytes();
    i2c.write(address, &[hi, lo, value])
}

fn or_zero<E: Debug>(address: u8, result: Result<u8, E>) -> u8 {
    result.unwrap_or_else(|e| {
        warn!("VL6180X {:#04x}: I2C read failed: {:?}", address, e);
        0
    })
}
