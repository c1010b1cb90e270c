//! Domain Value Objects
//!
//! Immutable value types for the age domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::{AgeError, AgeResult};

/// Gender category used to pick the life-expectancy horizon.
///
/// The set is closed: anything other than `MALE`, `FEMALE` or `OTHER` is
/// rejected by the deserializer before it reaches a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Gender::*;
        match self {
            Male => "MALE",
            Female => "FEMALE",
            Other => "OTHER",
        }
    }

    /// Life expectancy table, in whole years.
    #[inline]
    pub const fn life_expectancy_years(&self) -> u32 {
        use Gender::*;
        match self {
            Male => 85,
            Female => 90,
            Other => 87,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A date of birth that is known not to lie in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    /// Validate `date` against `today`. The birthdate may be today itself.
    pub fn new(date: NaiveDate, today: NaiveDate) -> AgeResult<Self> {
        if date > today {
            return Err(AgeError::FutureBirthdate);
        }
        Ok(Self(date))
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<Birthdate> for NaiveDate {
    fn from(b: Birthdate) -> Self {
        b.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_life_expectancy_table() {
        assert_eq!(Gender::Male.life_expectancy_years(), 85);
        assert_eq!(Gender::Female.life_expectancy_years(), 90);
        assert_eq!(Gender::Other.life_expectancy_years(), 87);
    }

    #[test]
    fn test_gender_serde_names() {
        for gender in Gender::ALL {
            let json = serde_json::to_string(&gender).unwrap();
            assert_eq!(json, format!("\"{}\"", gender.code()));
            let back: Gender = serde_json::from_str(&json).unwrap();
            assert_eq!(back, gender);
        }
    }

    #[test]
    fn test_gender_rejects_unknown_and_lowercase() {
        assert!(serde_json::from_str::<Gender>("\"INVALID\"").is_err());
        assert!(serde_json::from_str::<Gender>("\"male\"").is_err());
    }

    #[test]
    fn test_birthdate_today_is_valid() {
        let today = date(2026, 10, 16);
        let birthdate = Birthdate::new(today, today).unwrap();
        assert_eq!(birthdate.date(), today);
    }

    #[test]
    fn test_birthdate_tomorrow_is_rejected() {
        let today = date(2026, 10, 16);
        let result = Birthdate::new(date(2026, 10, 17), today);
        assert!(matches!(result, Err(AgeError::FutureBirthdate)));
    }
}
