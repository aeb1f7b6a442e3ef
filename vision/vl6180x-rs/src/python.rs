use linux_embedded_hal::I2cdev;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::sync::{Mutex, MutexGuard};

use crate::{Vl6180x, DEFAULT_ADDRESS};

// The VL6180X Time-of-Flight range sensor
#[pyclass]
#[doc = "VL6180X Time-of-Flight range sensor.\n\n\
         get_range() never blocks: it starts and collects measurements across\n\
         calls and returns the last completed reading in mm.\n\
         255 means disconnected or no reading yet."]
struct TofSensor {
    sensor: Mutex<Vl6180x<I2cdev>>,
}

impl TofSensor {
    fn sensor(&self) -> PyResult<MutexGuard<'_, Vl6180x<I2cdev>>> {
        self.sensor
            .lock()
            .map_err(|_| PyErr::new::<PyRuntimeError, _>("Sensor mutex poisoned".to_string()))
    }
}

#[pymethods]
impl TofSensor {
    #[new]
    #[pyo3(signature = (bus, address=None))]
    fn new(bus: u8, address: Option<u8>) -> PyResult<Self> {
        let address = address.unwrap_or(DEFAULT_ADDRESS);
        if address > 0x7F {
            return Err(PyErr::new::<PyValueError, _>(format!(
                "Invalid I2C address {:#04x}. Must be a 7-bit address",
                address
            )));
        }

        Ok(TofSensor {
            sensor: Mutex::new(Vl6180x::open(bus, address)),
        })
    }

    fn is_connected(&self) -> PyResult<bool> {
        Ok(self.sensor()?.is_connected())
    }

    fn get_range(&self) -> PyResult<u8> {
        Ok(self.sensor()?.get_range())
    }

    fn connection_error(&self) -> PyResult<Option<String>> {
        Ok(self.sensor()?.connection_error().map(|e| e.to_string()))
    }
}

// Register the module
#[pymodule]
fn vl6180x(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Forward driver diagnostics to Python's logging module
    pyo3_log::init();
    m.add_class::<TofSensor>()?;
    Ok(())
}
