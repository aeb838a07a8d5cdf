//! Divination methods, prophet availability and courses.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SeedError;
use crate::table::{Record, Table};
use crate::{CourseId, MethodId, ProphetId};

/// Length of one availability slot in minutes.
pub const SLOT_MINUTES: u32 = 15;

/// Life area a course focuses on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum HoroscopeSector {
    Love,
    Work,
    Study,
    Money,
    Luck,
    Family,
}

impl HoroscopeSector {
    /// All variants.
    pub const ALL: [Self; 6] = [
        Self::Love,
        Self::Work,
        Self::Study,
        Self::Money,
        Self::Luck,
        Self::Family,
    ];
}

/// A divination method (reference data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoroscopeMethod {
    /// Sequential method ID.
    pub id: MethodId,

    /// URL-safe slug.
    pub slug: String,

    /// Display name.
    pub name: String,
}

impl HoroscopeMethod {
    /// Create a method, deriving the slug from the name.
    #[must_use]
    pub fn new(id: MethodId, name: &str) -> Self {
        Self {
            id,
            slug: name.to_lowercase().replace([' ', '-'], "_"),
            name: name.to_string(),
        }
    }
}

impl Record for HoroscopeMethod {
    const TABLE: Table = Table::HoroscopeMethods;
}

/// Link between a prophet and a method they practise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProphetMethod {
    /// The prophet.
    pub prophet_id: ProphetId,

    /// The method.
    pub method_id: MethodId,
}

impl Record for ProphetMethod {
    const TABLE: Table = Table::ProphetMethods;
}

/// A single bookable slot of [`SLOT_MINUTES`] minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProphetAvailability {
    /// The prophet.
    pub prophet_id: ProphetId,

    /// Calendar date of the slot.
    pub date: NaiveDate,

    /// Slot start.
    pub start_time: NaiveTime,

    /// Slot end.
    pub end_time: NaiveTime,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl ProphetAvailability {
    /// Slot start as a date-time.
    #[must_use]
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }
}

impl Record for ProphetAvailability {
    const TABLE: Table = Table::ProphetAvailabilities;
}

/// A bookable consultation offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course ID.
    pub id: CourseId,

    /// The prophet offering the course.
    pub prophet_id: ProphetId,

    /// Display name.
    pub course_name: String,

    /// The method used.
    pub horoscope_method_id: MethodId,

    /// Life area covered.
    pub horoscope_sector: HoroscopeSector,

    /// Session length in minutes.
    pub duration_min: u32,

    /// Session price.
    pub price: Price,

    /// Whether the course can be booked.
    pub is_active: bool,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Number of consecutive slots a booking needs, if the duration is a
    /// positive multiple of [`SLOT_MINUTES`].
    #[must_use]
    pub fn slots_needed(&self) -> Option<usize> {
        if self.duration_min == 0 || self.duration_min % SLOT_MINUTES != 0 {
            return None;
        }
        usize::try_from(self.duration_min / SLOT_MINUTES).ok()
    }
}

impl Record for Course {
    const TABLE: Table = Table::Courses;
}

/// A price in satang (1/100 baht), written with two fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(u64);

impl Price {
    /// Create a price from satang.
    #[must_use]
    pub const fn from_satang(satang: u64) -> Self {
        Self(satang)
    }

    /// Create a price from whole baht.
    #[must_use]
    pub const fn from_baht(baht: u64) -> Self {
        Self(baht * 100)
    }

    /// The price in satang.
    #[must_use]
    pub const fn satang(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SeedError::InvalidPrice(s.to_string());
        let (whole, fraction) = s.split_once('.').unwrap_or((s, "0"));
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(whole) || !digits(fraction) || fraction.len() > 2 {
            return Err(invalid());
        }
        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let mut cents: u64 = fraction.parse().map_err(|_| invalid())?;
        if fraction.len() == 1 {
            cents *= 10;
        }
        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(cents))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_slug() {
        let method = HoroscopeMethod::new(MethodId::new(3), "Tea Leaf-Reading");
        assert_eq!(method.slug, "tea_leaf_reading");
        assert_eq!(method.name, "Tea Leaf-Reading");
    }

    #[test]
    fn price_formatting() {
        assert_eq!(Price::from_satang(30_000).to_string(), "300.00");
        assert_eq!(Price::from_satang(123_405).to_string(), "1234.05");
        assert_eq!(Price::from_baht(5).to_string(), "5.00");
    }

    #[test]
    fn price_parsing() {
        assert_eq!("1200.50".parse::<Price>().unwrap(), Price::from_satang(120_050));
        assert_eq!("7.5".parse::<Price>().unwrap(), Price::from_satang(750));
        assert_eq!("42".parse::<Price>().unwrap(), Price::from_baht(42));
        assert!("".parse::<Price>().is_err());
        assert!("1.234".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
        assert!("1.+5".parse::<Price>().is_err());
        assert!("+1.50".parse::<Price>().is_err());
        assert!("1.".parse::<Price>().is_err());
    }

    #[test]
    fn price_serializes_as_string() {
        let json = serde_json::to_string(&Price::from_satang(99_999)).unwrap();
        assert_eq!(json, "\"999.99\"");
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Price::from_satang(99_999));
    }

    #[test]
    fn slots_needed_requires_quarter_hours() {
        let mut course = Course {
            id: CourseId::generate(),
            prophet_id: ProphetId::generate(),
            course_name: "Basic Tarot Reading Session".into(),
            horoscope_method_id: MethodId::new(1),
            horoscope_sector: HoroscopeSector::Love,
            duration_min: 90,
            price: Price::from_baht(500),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(course.slots_needed(), Some(6));
        course.duration_min = 40;
        assert_eq!(course.slots_needed(), None);
        course.duration_min = 0;
        assert_eq!(course.slots_needed(), None);
    }
}
