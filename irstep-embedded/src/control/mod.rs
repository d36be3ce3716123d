mod motor;

pub use motor::{MotorController, MotorState};

#[cfg(test)]
pub(crate) use motor::mock;
