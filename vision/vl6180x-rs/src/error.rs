use std::fmt::Debug;

/// Reasons a driver ends up disconnected. `E` is the bus error type.
#[derive(Debug)]
pub enum Error<E> {
    /// The bus device could not be opened.
    Open(E),
    /// The device address does not fit in 7 bits.
    InvalidAddress(u8),
    /// A bus transaction failed during the handshake.
    Bus(E),
    /// The identification register did not read back as a VL6180X.
    ModelId(u8),
}

impl<E: Debug> std::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Open(e) => write!(f, "Failed to open I2C bus: {:?}", e),
            Error::InvalidAddress(addr) => write!(f, "Invalid I2C address: {:#04x}", addr),
            Error::Bus(e) => write!(f, "I2C transaction failed: {:?}", e),
            Error::ModelId(id) => write!(f, "Invalid model ID: {:#04x}", id),
        }
    }
}

impl<E: Debug> std::error::Error for Error<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let e: Error<()> = Error::ModelId(0xB3);
        assert_eq!(e.to_string(), "Invalid model ID: 0xb3");

        let e: Error<()> = Error::InvalidAddress(0x80);
        assert_eq!(e.to_string(), "Invalid I2C address: 0x80");
    }
}
