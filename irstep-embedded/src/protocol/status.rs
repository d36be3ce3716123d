use core::fmt::{self, Write};

use super::MOTOR_COUNT;

/// Length of `STATUS:M1=x,M2=x,M3=x\n`.
pub const STATUS_LINE_LEN: usize = 22;

pub type StatusLine = heapless::String<STATUS_LINE_LEN>;

/// Running flags of all motors at one instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub running: [bool; MOTOR_COUNT],
}

impl StatusSnapshot {
    pub fn new(running: [bool; MOTOR_COUNT]) -> Self {
        Self { running }
    }

    pub fn to_line(&self) -> StatusLine {
        let mut line = StatusLine::new();
        // The line is fixed length, so it always fits.
        write!(line, "{self}").ok();
        line
    }
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("STATUS:")?;
        for (i, running) in self.running.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "M{}={}", i + 1, u8::from(*running))?;
        }
        f.write_char('\n')
    }
}
