mod ir_sensor;

pub use ir_sensor::{DEBOUNCE_US, IrSensor};

#[cfg(test)]
pub(crate) use ir_sensor::mock;
