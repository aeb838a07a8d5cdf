//! Role profiles: customers, prophets and admins.

use chrono::{Duration, NaiveDate, NaiveTime};
use horoscope_seed_core::{
    Account, Admin, AdminId, Customer, CustomerId, Prophet, ProphetId, Role, ZodiacSign,
};
use rand::Rng;

use crate::context::SeedContext;
use crate::pools::LOWER_ALPHANUMERIC;

/// Length of a generated LINE id.
pub const LINE_ID_LEN: usize = 20;

fn with_role(accounts: &[Account], role: Role) -> impl Iterator<Item = &Account> {
    accounts.iter().filter(move |account| account.role == role)
}

/// One customer profile per CUSTOMER account.
pub fn generate_customers(ctx: &mut SeedContext, accounts: &[Account]) -> Vec<Customer> {
    let now = ctx.now();
    with_role(accounts, Role::Customer)
        .map(|account| {
            let rng = ctx.rng();
            let birth_date =
                NaiveDate::from_ymd_opt(rng.gen_range(1950..=2005), rng.gen_range(1..=12), rng.gen_range(1..=28))
                    .unwrap_or_default();
            let birth_time = NaiveTime::default()
                + Duration::hours(rng.gen_range(0..24))
                + Duration::minutes(rng.gen_range(0..60));
            Customer {
                id: CustomerId::from_random_bytes(ctx.id_bytes()),
                account_id: account.id.clone(),
                birth_date,
                birth_time,
                zodiac_sign: ZodiacSign::from_birth_date(birth_date),
                is_public: ctx.chance(0.5),
                created_at: now,
                updated_at: now,
            }
        })
        .collect()
}

/// One prophet profile per PROPHET account.
pub fn generate_prophets(ctx: &mut SeedContext, accounts: &[Account]) -> Vec<Prophet> {
    let now = ctx.now();
    with_role(accounts, Role::Prophet)
        .map(|account| Prophet {
            id: ProphetId::from_random_bytes(ctx.id_bytes()),
            account_id: account.id.clone(),
            line_id: ctx.string_from(LOWER_ALPHANUMERIC, LINE_ID_LEN),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

/// One admin profile per ADMIN account.
pub fn generate_admins(ctx: &mut SeedContext, accounts: &[Account]) -> Vec<Admin> {
    let now = ctx.now();
    with_role(accounts, Role::Admin)
        .map(|account| Admin {
            id: AdminId::from_random_bytes(ctx.id_bytes()),
            account_id: account.id.clone(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}
