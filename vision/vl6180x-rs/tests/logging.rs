use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use embedded_hal_mock::MockError;
use log::{Level, Log, Metadata, Record};
use std::io::ErrorKind;
use std::sync::Mutex;

use vl6180x::Vl6180x;

struct Capture(Mutex<Vec<(Level, String)>>);

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.0.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture(Mutex::new(Vec::new()));

// One test per binary: the logger is process-global.
#[test]
fn diagnostics_carry_the_device_address() {
    log::set_logger(&LOGGER).expect("logger already set");
    log::set_max_level(log::LevelFilter::Trace);

    let addr = 0x31;
    let mut expectations = vec![
        I2cTransaction::write(addr, vec![0x00, 0x00]),
        I2cTransaction::read(addr, vec![0xB4]),
        I2cTransaction::write(addr, vec![0x00, 0x16]),
        I2cTransaction::read(addr, vec![0x00]),
    ];
    // Failed status read, logged and counted as not ready.
    expectations.push(I2cTransaction::write(addr, vec![0x00, 0x4D]));
    expectations
        .push(I2cTransaction::read(addr, vec![0]).with_error(MockError::Io(ErrorKind::Other)));
    let mut i2c = I2cMock::new(&expectations);

    let mut sensor = Vl6180x::new(i2c.clone(), addr);
    assert_eq!(sensor.get_range(), 0xFF);
    i2c.done();

    let lines = LOGGER.0.lock().expect("log capture").clone();
    assert!(lines
        .iter()
        .any(|(level, msg)| *level == Level::Info && msg.contains("Not fresh out of reset")));
    assert!(lines
        .iter()
        .any(|(level, msg)| *level == Level::Warn && msg.contains("I2C read failed")));
    assert!(lines
        .iter()
        .any(|(level, msg)| *level == Level::Warn && msg.contains("Range status error")));
    assert!(lines
        .iter()
        .all(|(_, msg)| msg.starts_with("VL6180X 0x31:")));
}
