mod motor;
mod motor_4pin;
mod sequence;

pub use motor::Motor;
pub use motor_4pin::FourPinMotor;
pub use sequence::{HALF_STEP, STEPS_PER_CYCLE, StepPattern, StepSequence};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Stop,
    Clockwise,
    CounterClockwise,
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Stop => write!(f, "stop"),
            Direction::Clockwise => write!(f, "cw"),
            Direction::CounterClockwise => write!(f, "ccw"),
        }
    }
}
