/// Default 7-bit I2C address of the VL6180X.
pub const DEFAULT_ADDRESS: u8 = 0x29;

/// Value of `IDENTIFICATION__MODEL_ID` on every VL6180X.
pub const MODEL_ID: u8 = 0xB4;

/// Register addresses used by the driver.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    IdentificationModelId = 0x0000,
    SystemInterruptClear = 0x0015,
    SystemFreshOutOfReset = 0x0016,
    SysrangeStart = 0x0018,
    ResultRangeStatus = 0x004D,
    ResultInterruptStatusGpio = 0x004F,
    ResultRangeVal = 0x0062,
}

impl Register {
    pub const fn addr(self) -> u16 {
        self as u16
    }
}

/// `SYSTEM__FRESH_OUT_OF_RESET` bit0: device has not been configured since power-up.
pub const FRESH_OUT_OF_RESET: u8 = 0x01;

/// `RESULT__RANGE_STATUS` bit0: device ready to start a new measurement.
pub const RANGE_DEVICE_READY: u8 = 0x01;

/// `RESULT__INTERRUPT_STATUS_GPIO` bit2: new range sample ready.
pub const RANGE_SAMPLE_READY: u8 = 0x04;

/// `SYSRANGE__START` value for a single-shot measurement.
pub const RANGE_START_SINGLE_SHOT: u8 = 0x01;

/// Clears the range, ALS and error interrupts.
pub const INTERRUPT_CLEAR_ALL: u8 = 0x07;

/// Sentinel range returned until a measurement completes, and by a
/// disconnected driver.
pub const RANGE_UNKNOWN: u8 = 0xFF;

/// Tuning writes applied once after power-up, in this order.
///
/// The first block is ST's mandatory private register settings (AN4545), the
/// second the recommended public defaults. Values are opaque and must not be
/// reordered.
pub const TUNING_SETTINGS: [(u16, u8); 39] = [
    // private
    (0x0207, 0x01),
    (0x0208, 0x01),
    (0x0096, 0x00),
    (0x0097, 0xfd),
    (0x00e3, 0x00),
    (0x00e4, 0x04),
    (0x00e5, 0x02),
    (0x00e6, 0x01),
    (0x00e7, 0x03),
    (0x00f5, 0x02),
    (0x00d9, 0x05),
    (0x00db, 0xce),
    (0x00dc, 0x03),
    (0x00dd, 0xf8),
    (0x009f, 0x00),
    (0x00a3, 0x3c),
    (0x00b7, 0x00),
    (0x00bb, 0x3c),
    (0x00b2, 0x09),
    (0x00ca, 0x09),
    (0x0198, 0x01),
    (0x01b0, 0x17),
    (0x01ad, 0x00),
    (0x00ff, 0x05),
    (0x0100, 0x05),
    (0x0199, 0x05),
    (0x01a6, 0x1b),
    (0x01ac, 0x3e),
    (0x01a7, 0x1f),
    (0x0030, 0x00),
    // public
    (0x0011, 0x10), // GPIO1 interrupt output, active high
    (0x010a, 0x30), // range averaging period
    (0x003f, 0x46), // ALS analogue gain
    (0x0031, 0xff), // auto-calibration period
    (0x0041, 0x63), // ALS integration time 100ms
    (0x002e, 0x01), // one-off temperature calibration
    (0x001b, 0x09), // ranging inter-measurement period 100ms
    (0x003e, 0x31), // ALS inter-measurement period 500ms
    (0x0014, 0x24), // new-sample-ready interrupt config
];
