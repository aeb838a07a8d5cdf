//! Fixed value pools that random draws pick from.

/// First names for user details and bank account holders.
pub const FIRST_NAMES: [&str; 16] = [
    "John", "Jane", "Alice", "Bob", "Charlie", "Emma", "David", "Sarah", "Michael", "Emily",
    "Daniel", "Olivia", "James", "Sophia", "William", "Isabella",
];

/// Last names for user details and bank account holders.
pub const LAST_NAMES: [&str; 14] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson",
];

/// Divination methods, in id order.
pub const METHOD_NAMES: [&str; 10] = [
    "Tarot Reading",
    "Astrology Chart",
    "Palm Reading",
    "Crystal Ball",
    "Numerology",
    "Dream Analysis",
    "Rune Casting",
    "Tea Leaf Reading",
    "Pendulum Divination",
    "Aura Reading",
];

/// Course name prefixes.
pub const COURSE_TIERS: [&str; 4] = ["Basic", "Advanced", "Premium", "Deluxe"];

/// Course lengths in minutes.
pub const COURSE_DURATIONS: [u32; 4] = [30, 45, 60, 90];

/// Review texts. The empty entry stands for a review without text.
pub const REVIEW_DESCRIPTIONS: [&str; 6] = [
    "Amazing reading! Very insightful and accurate.",
    "Great experience, highly recommend this prophet.",
    "Professional service and detailed explanations.",
    "Wonderful session, helped me understand many things.",
    "Excellent guidance and spiritual insight.",
    "",
];

/// Report subject lines.
pub const REPORT_TOPICS: [&str; 6] = [
    "Booking Issue",
    "Payment Problem",
    "Technical Error",
    "Service Quality",
    "Prophet Behavior",
    "Website Bug",
];

/// Report bodies.
pub const REPORT_DESCRIPTIONS: [&str; 6] = [
    "Had trouble with the booking system.",
    "Payment was processed but booking wasn't confirmed.",
    "Prophet was late for the session.",
    "Website crashed during payment.",
    "Received poor quality service.",
    "Technical issues during the session.",
];

/// `[a-z]`
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// `[0-9]`
pub const DIGITS: &[u8] = b"0123456789";

/// `[0-9a-f]`
pub const HEX_LOWER: &[u8] = b"0123456789abcdef";

/// `[a-z0-9]`
pub const LOWER_ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
