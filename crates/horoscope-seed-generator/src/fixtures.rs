//! Fixed development records with stable ids.
//!
//! One customer, one prophet and one admin that developers can log in as,
//! plus everything the prophet needs to be bookable ([`DevFixtures`]), and a
//! fixed history of bookings, payments, reviews and reports around them
//! ([`DevActivity`]). None of it draws from the RNG, so enabling fixtures
//! leaves the random accounts and profiles of a seeded run unchanged.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use horoscope_seed_core::{
    Account, AccountId, Admin, AdminId, Bank, Booking, BookingId, BookingStatus, Course, Customer,
    CustomerId, HoroscopeMethod, HoroscopeSector, Price, Prophet, ProphetAvailability, ProphetId,
    ProphetMethod, Report, ReportId, ReportStatus, ReportType, Result, Review, ReviewId, Role, Sex,
    Transaction, TransactionAccount, TransactionId, TransactionStatus, UserDetail, ZodiacSign,
};

use crate::context::SeedContext;
use crate::generate::{expand_window, SlotIndex};

// ============================================================================
// Constants
// ============================================================================

/// Dev customer account and profile id.
pub const DEV_CUSTOMER_ID: &str = "dev_customer_001";

/// Dev prophet account and profile id.
pub const DEV_PROPHET_ID: &str = "dev_prophet_001";

/// Dev admin account and profile id.
pub const DEV_ADMIN_ID: &str = "dev_admin_001";

/// Methods linked to the dev prophet, taken from the start of the catalog.
pub const DEV_METHOD_COUNT: usize = 5;

/// Placeholder password hash in bcrypt format.
const DEV_PASSWORD_HASH: &str = "$2b$10$CwTycUXWue0Thq9StjUM0uJ8.jz9R7h1Z1cV6z3ZlO1Nf6E7hR4W2";

/// (name, sector, minutes, baht) for the dev prophet's courses.
const DEV_COURSES: [(&str, HoroscopeSector, u32, u64); 5] = [
    ("Basic Tarot Reading", HoroscopeSector::Love, 30, 500),
    ("Advanced Astrology Chart", HoroscopeSector::Work, 60, 1_200),
    ("Premium Palm Reading", HoroscopeSector::Money, 45, 800),
    ("Crystal Ball Consultation", HoroscopeSector::Family, 90, 1_500),
    ("Numerology Life Path", HoroscopeSector::Luck, 60, 1_000),
];

/// (bank, holder, number) for the dev prophet's payout accounts.
const DEV_PAYOUT_ACCOUNTS: [(Bank, &str, &str); 2] = [
    (Bank::Kbank, "Dev Prophet", "1234567890"),
    (Bank::Scb, "Dev Prophet 2", "0987654321"),
];

/// Booking status, payment status and review of the dev customer's bookings
/// with other prophets.
const DEV_CUSTOMER_BOOKINGS: [(BookingStatus, TransactionStatus, Option<(u8, &str)>); 3] = [
    (
        BookingStatus::Completed,
        TransactionStatus::Completed,
        Some((
            5,
            "Excellent reading! Very insightful and accurate. The prophet was professional and provided detailed explanations.",
        )),
    ),
    (BookingStatus::Scheduled, TransactionStatus::Processing, None),
    (BookingStatus::Failed, TransactionStatus::Failed, None),
];

/// Same for other customers' bookings with the dev prophet.
const DEV_PROPHET_BOOKINGS: [(BookingStatus, TransactionStatus, Option<(u8, &str)>); 5] = [
    (
        BookingStatus::Completed,
        TransactionStatus::Completed,
        Some((5, "Outstanding service! The dev prophet provided incredibly detailed insights.")),
    ),
    (
        BookingStatus::Completed,
        TransactionStatus::Completed,
        Some((4, "Very good reading, though could use more time for follow-up questions.")),
    ),
    (BookingStatus::Scheduled, TransactionStatus::Processing, None),
    (BookingStatus::Scheduled, TransactionStatus::Processing, None),
    (BookingStatus::Failed, TransactionStatus::Failed, None),
];

/// (type, topic, description, status) of reports filed by the dev customer.
/// Handled reports are assigned to the dev admin.
const DEV_CUSTOMER_REPORTS: [(ReportType, &str, &str, ReportStatus); 3] = [
    (
        ReportType::PaymentIssue,
        "Payment Processing Delay",
        "Payment was successful but booking confirmation took too long to appear in my account.",
        ReportStatus::Done,
    ),
    (
        ReportType::CourseIssue,
        "Course Duration Mismatch",
        "The actual session was shorter than the advertised duration. Expected 60 minutes but got 45.",
        ReportStatus::Pending,
    ),
    (
        ReportType::WebsiteIssue,
        "Profile Image Upload Failed",
        "Cannot upload profile image. Gets error message every time I try.",
        ReportStatus::Discard,
    ),
];

/// Reports filed by other customers, one each.
const DEV_ADMIN_REPORTS: [(ReportType, &str, &str, ReportStatus); 4] = [
    (
        ReportType::ProphetIssue,
        "Prophet was unprofessional during session",
        "The prophet arrived late and seemed unprepared for the session. Very disappointing experience.",
        ReportStatus::Done,
    ),
    (
        ReportType::WebsiteIssue,
        "Website crashed during checkout",
        "The website kept freezing when I tried to complete payment. Lost my booking slot.",
        ReportStatus::Discard,
    ),
    (
        ReportType::Other,
        "General inquiry about refund policy",
        "I would like to understand the refund policy for cancelled bookings.",
        ReportStatus::Pending,
    ),
    (
        ReportType::CourseIssue,
        "Course content not as advertised",
        "The course description mentioned detailed life guidance but session was very generic.",
        ReportStatus::Pending,
    ),
];

/// Development records, merged ahead of the generated ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevFixtures {
    /// Dev accounts, one per role.
    pub accounts: Vec<Account>,
    /// Their user details.
    pub user_details: Vec<UserDetail>,
    /// The dev customer profile.
    pub customers: Vec<Customer>,
    /// The dev prophet profile.
    pub prophets: Vec<Prophet>,
    /// The dev admin profile.
    pub admins: Vec<Admin>,
    /// Methods the dev prophet offers.
    pub prophet_methods: Vec<ProphetMethod>,
    /// The dev prophet's slots.
    pub availabilities: Vec<ProphetAvailability>,
    /// The dev prophet's courses, all active.
    pub courses: Vec<Course>,
    /// The dev prophet's payout accounts.
    pub transaction_accounts: Vec<TransactionAccount>,
}

fn fixture_id(prefix: &str, counter: u32) -> String {
    format!("d_{prefix}_{counter:03}")
}

impl DevFixtures {
    /// Build the fixtures against a method catalog, with availability for `days` days.
    ///
    /// # Errors
    ///
    /// Returns an error if a fixture id fails validation.
    pub fn build(ctx: &SeedContext, methods: &[HoroscopeMethod], days: u32) -> Result<Self> {
        let now = ctx.now();
        let mut fixtures = Self::default();

        let roles = [
            (DEV_CUSTOMER_ID, Role::Customer, "Customer", "+66812345678"),
            (DEV_PROPHET_ID, Role::Prophet, "Prophet", "+66812345679"),
            (DEV_ADMIN_ID, Role::Admin, "Admin", "+66812345680"),
        ];
        for (id, role, lastname, phone_number) in roles {
            let account_id: AccountId = id.parse()?;
            let username = format!("dev_{}", role.as_lower_str());
            fixtures.accounts.push(Account {
                id: account_id.clone(),
                email: format!("{username}@gmail.com"),
                username,
                password_hash: DEV_PASSWORD_HASH.to_string(),
                role,
                created_at: now,
                updated_at: now,
            });
            fixtures.user_details.push(UserDetail {
                account_id,
                name: "Dev".to_string(),
                lastname: lastname.to_string(),
                profile_url: format!("https://example.com/profile/{id}.jpg"),
                phone_number: phone_number.to_string(),
                gender: Sex::Undefined,
                created_at: now,
                updated_at: now,
            });
        }

        fixtures.customers.push(Customer {
            id: DEV_CUSTOMER_ID.parse()?,
            account_id: DEV_CUSTOMER_ID.parse()?,
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
            birth_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
            zodiac_sign: ZodiacSign::Aquarius,
            is_public: true,
            created_at: now,
            updated_at: now,
        });

        let prophet_id: ProphetId = DEV_PROPHET_ID.parse()?;
        fixtures.prophets.push(Prophet {
            id: prophet_id.clone(),
            account_id: DEV_PROPHET_ID.parse()?,
            line_id: "dev_prophet_line".to_string(),
            created_at: now,
            updated_at: now,
        });

        fixtures.admins.push(Admin {
            id: DEV_ADMIN_ID.parse()?,
            account_id: DEV_ADMIN_ID.parse()?,
            created_at: now,
            updated_at: now,
        });

        fixtures.prophet_methods = methods
            .iter()
            .take(DEV_METHOD_COUNT)
            .map(|method| ProphetMethod {
                prophet_id: prophet_id.clone(),
                method_id: method.id,
            })
            .collect();

        fixtures.availabilities = dev_availability(&prophet_id, ctx, days);

        for (n, ((name, sector, minutes, baht), link)) in
            (1..).zip(DEV_COURSES.into_iter().zip(&fixtures.prophet_methods))
        {
            fixtures.courses.push(Course {
                id: fixture_id("course", n).parse()?,
                prophet_id: prophet_id.clone(),
                course_name: name.to_string(),
                horoscope_method_id: link.method_id,
                horoscope_sector: sector,
                duration_min: minutes,
                price: Price::from_baht(baht),
                is_active: true,
                created_at: now,
                updated_at: now,
            });
        }

        for (n, (bank, holder, number)) in (1..).zip(DEV_PAYOUT_ACCOUNTS) {
            fixtures.transaction_accounts.push(TransactionAccount {
                id: fixture_id("txaccount", n).parse()?,
                prophet_id: prophet_id.clone(),
                account_name: holder.to_string(),
                account_number: number.to_string(),
                bank,
                created_at: now,
                updated_at: now,
            });
        }

        Ok(fixtures)
    }
}

fn hour(h: u32) -> NaiveTime {
    NaiveTime::default() + Duration::hours(i64::from(h))
}

fn day_at(ctx: &SeedContext, days_ahead: u32, h: u32) -> NaiveDateTime {
    (ctx.today() + Duration::days(i64::from(days_ahead))).and_time(hour(h))
}

/// Mornings every day, afternoons five days in seven, evenings every third day.
fn dev_availability(prophet_id: &ProphetId, ctx: &SeedContext, days: u32) -> Vec<ProphetAvailability> {
    let mut rows = Vec::new();
    for offset in 0..days {
        let date = ctx.today() + Duration::days(i64::from(offset));
        let mut windows = vec![(9, 12)];
        if offset % 7 < 5 {
            windows.push((14, 18));
        }
        if offset % 3 == 0 {
            windows.push((19, 21));
        }
        for (open, close) in windows {
            rows.extend(expand_window(prophet_id, date, hour(open), hour(close), ctx.now()));
        }
    }
    rows
}

/// Fixed activity around the dev accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevActivity {
    /// Bookings of the dev customer and with the dev prophet.
    pub bookings: Vec<Booking>,
    /// One transaction per booking.
    pub transactions: Vec<Transaction>,
    /// Reviews of the completed bookings.
    pub reviews: Vec<Review>,
    /// Reports filed by the dev customer or handled by the dev admin.
    pub reports: Vec<Report>,
}

impl DevActivity {
    /// Place the dev bookings in `index` and file the dev reports.
    ///
    /// The dev customer books the first active course of up to three other
    /// prophets, one day apart from tomorrow at 10:00; prophets without an
    /// active course or a free run are passed over. Up to five other
    /// customers book the dev prophet's courses from ten days out, at 14:00
    /// plus one hour per booking. A requested time that is not free moves to
    /// the next free run of the prophet's slots; a booking with no free run is
    /// left out.
    ///
    /// # Errors
    ///
    /// Returns an error if a fixture id fails validation.
    pub fn place(
        ctx: &SeedContext,
        index: &mut SlotIndex,
        customers: &[Customer],
        prophets: &[Prophet],
        courses: &[Course],
    ) -> Result<Self> {
        let now = ctx.now();
        let mut activity = Self::default();
        let dev_customer: CustomerId = DEV_CUSTOMER_ID.parse()?;
        let other_customers: Vec<&Customer> = customers
            .iter()
            .filter(|c| c.id != dev_customer)
            .collect();

        let mut plans = (1..).zip(DEV_CUSTOMER_BOOKINGS).peekable();
        let first_courses = prophets
            .iter()
            .filter(|p| p.id.as_str() != DEV_PROPHET_ID)
            .filter_map(|p| courses.iter().find(|c| c.prophet_id == p.id && c.is_active));
        for course in first_courses {
            let Some(&(n, (status, payment, review))) = plans.peek() else {
                break;
            };
            let id: BookingId = fixture_id("booking", n).parse()?;
            let wanted = day_at(ctx, n, 10);
            let placed = fixed_booking(index, id, &dev_customer, course, wanted, status, now);
            let Some(booking) = placed else {
                tracing::debug!(prophet = %course.prophet_id, "No free slots for dev booking");
                continue;
            };
            plans.next();
            activity.pay(&booking, payment, fixture_id("transact", n).parse()?, now);
            if let Some(review) = review {
                activity.review(&booking, review, fixture_id("review", n).parse()?, now);
            }
            activity.bookings.push(booking);
        }

        let dev_courses = courses
            .iter()
            .filter(|c| c.prophet_id.as_str() == DEV_PROPHET_ID && c.is_active);
        let pairs = other_customers.iter().zip(dev_courses).zip(DEV_PROPHET_BOOKINGS);
        for (n, ((customer, course), (status, payment, review))) in (1..).zip(pairs) {
            let id: BookingId = fixture_id("devbooking", n).parse()?;
            let wanted = day_at(ctx, n + 9, n + 13);
            let placed = fixed_booking(index, id, &customer.id, course, wanted, status, now);
            let Some(booking) = placed else {
                tracing::debug!(customer = %customer.id, "No free slots for dev booking");
                continue;
            };
            activity.pay(&booking, payment, fixture_id("dtransact", n).parse()?, now);
            if let Some(review) = review {
                activity.review(&booking, review, fixture_id("dreview", n).parse()?, now);
            }
            activity.bookings.push(booking);
        }

        for (n, fields) in (1..).zip(DEV_CUSTOMER_REPORTS) {
            let id: ReportId = fixture_id("report", n).parse()?;
            activity.file(id, dev_customer.clone(), fields, now)?;
        }
        for (n, (customer, fields)) in (1..).zip(other_customers.iter().zip(DEV_ADMIN_REPORTS)) {
            let id: ReportId = fixture_id("dreport", n).parse()?;
            activity.file(id, customer.id.clone(), fields, now)?;
        }

        Ok(activity)
    }

    fn pay(
        &mut self,
        booking: &Booking,
        status: TransactionStatus,
        id: TransactionId,
        now: DateTime<Utc>,
    ) {
        self.transactions.push(Transaction {
            id,
            booking_id: booking.id.clone(),
            status,
            created_at: now,
            updated_at: now,
        });
    }

    fn review(
        &mut self,
        booking: &Booking,
        (score, text): (u8, &str),
        id: ReviewId,
        now: DateTime<Utc>,
    ) {
        self.reviews.push(Review {
            id,
            customer_id: booking.customer_id.clone(),
            booking_id: booking.id.clone(),
            score,
            description: Some(text.to_string()),
            created_at: now,
            updated_at: now,
        });
    }

    fn file(
        &mut self,
        id: ReportId,
        customer_id: CustomerId,
        (report_type, topic, description, report_status): (ReportType, &str, &str, ReportStatus),
        now: DateTime<Utc>,
    ) -> Result<()> {
        let admin_id: Option<AdminId> = match report_status {
            ReportStatus::Pending => None,
            ReportStatus::Discard | ReportStatus::Done => Some(DEV_ADMIN_ID.parse()?),
        };
        self.reports.push(Report {
            id,
            customer_id,
            admin_id,
            report_type,
            topic: topic.to_string(),
            description: description.to_string(),
            report_status,
            created_at: now,
            updated_at: now,
        });
        Ok(())
    }
}

fn fixed_booking(
    index: &mut SlotIndex,
    id: BookingId,
    customer_id: &CustomerId,
    course: &Course,
    wanted: NaiveDateTime,
    status: BookingStatus,
    now: DateTime<Utc>,
) -> Option<Booking> {
    let needed = course.slots_needed()?;
    let (start, end) = index.reserve_from(&course.prophet_id, wanted, needed)?;
    Some(Booking {
        id,
        customer_id: customer_id.clone(),
        course_id: course.id.clone(),
        prophet_id: course.prophet_id.clone(),
        start_datetime: start,
        end_datetime: end,
        status,
        created_at: now,
    })
}
