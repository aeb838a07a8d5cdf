//! Account records and their role-specific profiles.
//!
//! Every user of the platform has one [`Account`] and one [`UserDetail`]. Depending
//! on the account [`Role`], exactly one of [`Customer`], [`Prophet`] or [`Admin`]
//! references it.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::{Record, Table};
use crate::{AccountId, AdminId, CustomerId, ProphetId};

/// Role of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Offers consultation courses.
    Prophet,
    /// Books courses.
    Customer,
    /// Handles customer reports.
    Admin,
}

impl Role {
    /// The role name in lower case, used as the username prefix.
    #[must_use]
    pub const fn as_lower_str(self) -> &'static str {
        match self {
            Self::Prophet => "prophet",
            Self::Customer => "customer",
            Self::Admin => "admin",
        }
    }
}

/// Gender stored in user details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    /// Male.
    Male,
    /// Female.
    Female,
    /// LGBTQ+.
    LgbtqPlus,
    /// Not specified.
    Undefined,
}

impl Sex {
    /// All variants.
    pub const ALL: [Self; 4] = [Self::Male, Self::Female, Self::LgbtqPlus, Self::Undefined];
}

/// Western zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Per month: first day of the second sign, the sign before it, the sign from it on.
const ZODIAC_CUTOFFS: [(u32, ZodiacSign, ZodiacSign); 12] = [
    (20, ZodiacSign::Capricorn, ZodiacSign::Aquarius),
    (19, ZodiacSign::Aquarius, ZodiacSign::Pisces),
    (21, ZodiacSign::Pisces, ZodiacSign::Aries),
    (20, ZodiacSign::Aries, ZodiacSign::Taurus),
    (21, ZodiacSign::Taurus, ZodiacSign::Gemini),
    (21, ZodiacSign::Gemini, ZodiacSign::Cancer),
    (23, ZodiacSign::Cancer, ZodiacSign::Leo),
    (23, ZodiacSign::Leo, ZodiacSign::Virgo),
    (23, ZodiacSign::Virgo, ZodiacSign::Libra),
    (23, ZodiacSign::Libra, ZodiacSign::Scorpio),
    (22, ZodiacSign::Scorpio, ZodiacSign::Sagittarius),
    (22, ZodiacSign::Sagittarius, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    /// The sign for a birth date.
    #[must_use]
    pub fn from_birth_date(date: NaiveDate) -> Self {
        let (cutoff, before, from) = ZODIAC_CUTOFFS[date.month0() as usize];
        if date.day() < cutoff {
            before
        } else {
            from
        }
    }
}

/// A platform account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,

    /// Login email, unique across accounts.
    pub email: String,

    /// Login username, unique across accounts.
    pub username: String,

    /// Placeholder password hash.
    pub password_hash: String,

    /// Account role.
    pub role: Role,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Record for Account {
    const TABLE: Table = Table::Accounts;
}

/// Personal details attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    /// The owning account.
    pub account_id: AccountId,

    /// First name.
    pub name: String,

    /// Last name.
    pub lastname: String,

    /// Profile picture URL.
    pub profile_url: String,

    /// Phone number in `+66` international form.
    pub phone_number: String,

    /// Gender.
    pub gender: Sex,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Record for UserDetail {
    const TABLE: Table = Table::UserDetails;
}

/// Customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer ID.
    pub id: CustomerId,

    /// The owning `CUSTOMER` account.
    pub account_id: AccountId,

    /// Date of birth.
    pub birth_date: NaiveDate,

    /// Time of birth.
    pub birth_time: NaiveTime,

    /// Zodiac sign.
    pub zodiac_sign: ZodiacSign,

    /// Whether the profile is visible to prophets.
    pub is_public: bool,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Record for Customer {
    const TABLE: Table = Table::Customers;
}

/// Prophet profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prophet {
    /// Prophet ID.
    pub id: ProphetId,

    /// The owning `PROPHET` account.
    pub account_id: AccountId,

    /// LINE messenger ID.
    pub line_id: String,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Record for Prophet {
    const TABLE: Table = Table::Prophets;
}

/// Admin profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// Admin ID.
    pub id: AdminId,

    /// The owning `ADMIN` account.
    pub account_id: AccountId,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Record for Admin {
    const TABLE: Table = Table::Admins;
}
