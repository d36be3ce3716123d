use embassy_time::Instant;

use super::Clock;

#[derive(Debug, Clone)]
pub struct EmbassyClock {
    boot_instant: Instant,
}

impl EmbassyClock {
    pub fn new() -> Self {
        Self {
            boot_instant: Instant::now(),
        }
    }
}

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        self.boot_instant.elapsed().as_millis()
    }
}

impl Default for EmbassyClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_monotonic() {
        let clock = EmbassyClock::new();
        let time1 = clock.now_ms();

        for _ in 0..1000 {
            core::hint::spin_loop();
        }

        let time2 = clock.now_ms();

        assert!(time2 >= time1);
        assert_eq!(clock.elapsed_since(time2 + 10), 0);
    }
}
