//! Year source for code generation

use shared::util::{local_year, utc_year};

/// Supplies the calendar year a code belongs to
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn current_year(&self) -> i32;
}

/// Host local time (default)
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn current_year(&self) -> i32 {
        local_year()
    }
}

/// UTC calendar year
#[derive(Debug, Default, Clone, Copy)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn current_year(&self) -> i32 {
        utc_year()
    }
}

/// Always reports the same year
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(2025).current_year(), 2025);
    }

    #[test]
    fn test_system_clocks_agree_within_a_year() {
        // Local and UTC differ at most around New Year
        let diff = (LocalClock.current_year() - UtcClock.current_year()).abs();
        assert!(diff <= 1);
    }
}
