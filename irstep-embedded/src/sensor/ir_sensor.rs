use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::error::{Error, Result};

/// Time a falling edge has to persist before it counts.
pub const DEBOUNCE_US: u32 = 500;

/// IR interrupter on a pulled-up input: high when the beam is clear, low when blocked.
pub struct IrSensor<Pin>
where
    Pin: InputPin,
{
    pin: Pin,
    last_level: bool,
}

impl<Pin> IrSensor<Pin>
where
    Pin: InputPin,
{
    pub fn new(pin: Pin) -> Self {
        Self {
            pin,
            last_level: true,
        }
    }

    /// Forgets the previous sample so the next low reading is treated as an edge.
    pub fn reset(&mut self) {
        self.last_level = true;
    }

    pub fn last_level(&self) -> bool {
        self.last_level
    }

    /// Samples the input once and reports whether a debounced falling edge was seen.
    ///
    /// On a high-to-low transition the input is read again after [`DEBOUNCE_US`];
    /// the detection is confirmed only if it is still low. The stored level is the
    /// first raw sample either way.
    pub fn poll_falling_edge<D: DelayNs>(&mut self, delay: &mut D) -> Result<bool> {
        let level = self.read()?;

        let mut confirmed = false;
        if self.last_level && !level {
            delay.delay_us(DEBOUNCE_US);
            confirmed = !self.read()?;
        }

        self.last_level = level;
        Ok(confirmed)
    }

    fn read(&mut self) -> Result<bool> {
        self.pin.is_high().map_err(|_| Error::Gpio)
    }
}
