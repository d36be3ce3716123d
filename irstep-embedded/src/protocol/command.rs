use super::MOTOR_COUNT;

/// Inbound command line from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// One single-digit target count per motor, all clockwise.
    SetTargets([u8; MOTOR_COUNT]),
    StopAll,
    Unrecognized,
}

impl Command {
    /// Parses one line with its terminator already removed.
    ///
    /// Exactly three ASCII digits assign targets to motors 1..3; a lone `0` stops
    /// everything. Counts above 9 cannot be expressed.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let bytes = line.as_bytes();

        if bytes.len() == MOTOR_COUNT && bytes.iter().all(u8::is_ascii_digit) {
            let mut targets = [0u8; MOTOR_COUNT];
            for (target, digit) in targets.iter_mut().zip(bytes) {
                *target = digit - b'0';
            }
            return Command::SetTargets(targets);
        }

        if line == "0" {
            return Command::StopAll;
        }

        Command::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_targets() {
        assert_eq!(Command::parse("305"), Command::SetTargets([3, 0, 5]));
        assert_eq!(Command::parse("999"), Command::SetTargets([9, 9, 9]));
        assert_eq!(Command::parse("000"), Command::SetTargets([0, 0, 0]));
    }

    #[test]
    fn test_parse_every_three_digit_command() {
        for value in 0..1000u32 {
            let line = format!("{value:03}");
            let expected = [
                (value / 100) as u8,
                (value / 10 % 10) as u8,
                (value % 10) as u8,
            ];
            assert_eq!(Command::parse(&line), Command::SetTargets(expected));
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Command::parse("  123\t"), Command::SetTargets([1, 2, 3]));
        assert_eq!(Command::parse(" 0 "), Command::StopAll);
    }

    #[test]
    fn test_parse_stop_all() {
        assert_eq!(Command::parse("0"), Command::StopAll);
    }

    #[test]
    fn test_parse_unrecognized() {
        for line in ["", "1", "00", "12", "1234", "12a", "a12", "-12", "+12", "1 2", "stop", "١٢٣"] {
            assert_eq!(Command::parse(line), Command::Unrecognized, "{line:?}");
        }
    }
}
