//! Domain Entities

/// Time left until the life-expectancy horizon.
///
/// Both fields are zero once the horizon has been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRemaining {
    pub years: u32,
    pub days: u32,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining { years: 0, days: 0 };

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Combined result of one age calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeData {
    /// Whole years elapsed since the birthdate
    pub age: u32,
    pub time_remaining: TimeRemaining,
}
