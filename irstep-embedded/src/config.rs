/// Upper bound for [`BoardConfig::command_capacity`].
pub const MAX_COMMAND_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Minimum milliseconds between two steps of one motor.
    pub motor_speed_ms: u64,
    /// Milliseconds between two status lines.
    pub status_interval_ms: u64,
    /// Longest command line kept, terminator excluded.
    pub command_capacity: usize,
    pub serial_baud_rate: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            motor_speed_ms: 1,
            status_interval_ms: 500,
            command_capacity: MAX_COMMAND_LEN,
            serial_baud_rate: 115200,
        }
    }
}
