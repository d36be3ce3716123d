use super::StepPattern;

/// Coil driver of a unipolar stepper.
pub trait Motor {
    /// Drives every coil to the level given by `pattern`.
    fn energize(&mut self, pattern: StepPattern);

    /// Drives every coil low.
    fn release(&mut self);
}
