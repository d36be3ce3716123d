use super::Direction;

pub const STEPS_PER_CYCLE: usize = 8;

/// Levels of the four coils, coil 0 in the most significant of the low four bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPattern(u8);

impl StepPattern {
    pub const OFF: StepPattern = StepPattern(0);

    pub const fn new(mask: u8) -> Self {
        Self(mask & 0b1111)
    }

    pub fn coil(&self, index: usize) -> bool {
        index < 4 && self.0 & (0b1000 >> index) != 0
    }

    pub fn mask(&self) -> u8 {
        self.0
    }
}

/// Half-step coil sequences for both rotation directions.
#[derive(Debug)]
pub struct StepSequence {
    pub clockwise: [StepPattern; STEPS_PER_CYCLE],
    pub counter_clockwise: [StepPattern; STEPS_PER_CYCLE],
}

const HALF_STEP_CCW: [StepPattern; STEPS_PER_CYCLE] = [
    StepPattern::new(0b1000),
    StepPattern::new(0b1100),
    StepPattern::new(0b0100),
    StepPattern::new(0b0110),
    StepPattern::new(0b0010),
    StepPattern::new(0b0011),
    StepPattern::new(0b0001),
    StepPattern::new(0b1001),
];

pub static HALF_STEP: StepSequence = StepSequence::from_counter_clockwise(HALF_STEP_CCW);

impl StepSequence {
    /// Builds both tables from the counter-clockwise one; clockwise is its reverse.
    pub const fn from_counter_clockwise(ccw: [StepPattern; STEPS_PER_CYCLE]) -> Self {
        let mut cw = [StepPattern::OFF; STEPS_PER_CYCLE];
        let mut i = 0;
        while i < STEPS_PER_CYCLE {
            cw[i] = ccw[STEPS_PER_CYCLE - 1 - i];
            i += 1;
        }
        Self {
            clockwise: cw,
            counter_clockwise: ccw,
        }
    }

    /// Pattern to energize at `index` (taken modulo the cycle length).
    ///
    /// Anything but `Clockwise` selects the counter-clockwise table, `Stop` included.
    pub fn pattern(&self, direction: Direction, index: usize) -> StepPattern {
        let index = index % STEPS_PER_CYCLE;
        match direction {
            Direction::Clockwise => self.clockwise[index],
            Direction::CounterClockwise | Direction::Stop => self.counter_clockwise[index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_clockwise_table() {
        let masks: Vec<u8> = HALF_STEP.counter_clockwise.iter().map(|p| p.mask()).collect();
        assert_eq!(
            masks,
            vec![0b1000, 0b1100, 0b0100, 0b0110, 0b0010, 0b0011, 0b0001, 0b1001]
        );
    }

    #[test]
    fn test_clockwise_is_reverse() {
        for i in 0..STEPS_PER_CYCLE {
            assert_eq!(
                HALF_STEP.pattern(Direction::Clockwise, i),
                HALF_STEP.pattern(Direction::CounterClockwise, STEPS_PER_CYCLE - 1 - i)
            );
        }
    }

    #[test]
    fn test_cycle_has_eight_distinct_patterns() {
        for direction in [Direction::Clockwise, Direction::CounterClockwise] {
            let mut seen: Vec<StepPattern> = Vec::new();
            for i in 0..STEPS_PER_CYCLE {
                let pattern = HALF_STEP.pattern(direction, i);
                assert!(!seen.contains(&pattern));
                seen.push(pattern);
            }
            assert_eq!(HALF_STEP.pattern(direction, STEPS_PER_CYCLE), seen[0]);
        }
    }

    #[test]
    fn test_stop_falls_back_to_counter_clockwise() {
        assert_eq!(
            HALF_STEP.pattern(Direction::Stop, 3),
            HALF_STEP.counter_clockwise[3]
        );
    }

    #[test]
    fn test_coil_bits() {
        let pattern = StepPattern::new(0b0110);
        assert!(!pattern.coil(0));
        assert!(pattern.coil(1));
        assert!(pattern.coil(2));
        assert!(!pattern.coil(3));
        assert!(!pattern.coil(4));
    }
}
