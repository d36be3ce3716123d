use embedded_hal::digital::OutputPin;

use crate::stepper::motor::Motor;
use crate::stepper::sequence::StepPattern;

pub struct FourPinMotor<Pin>
where
    Pin: OutputPin,
{
    pins: [Pin; 4],
}

impl<Pin> FourPinMotor<Pin>
where
    Pin: OutputPin,
{
    pub fn new(pins: [Pin; 4]) -> Self {
        let mut motor = Self { pins };
        motor.release();
        motor
    }

    fn set_output_pins(&mut self, pattern: StepPattern) {
        for (i, pin) in self.pins.iter_mut().enumerate() {
            if pattern.coil(i) {
                pin.set_high().ok();
            } else {
                pin.set_low().ok();
            }
        }
    }
}

impl<Pin> Motor for FourPinMotor<Pin>
where
    Pin: OutputPin,
{
    fn energize(&mut self, pattern: StepPattern) {
        self.set_output_pins(pattern);
    }

    fn release(&mut self) {
        for pin in self.pins.iter_mut() {
            pin.set_low().ok();
        }
    }
}
