//! Accounts and user details.

use std::collections::HashSet;
use std::iter;

use horoscope_seed_core::{Account, AccountId, Role, Sex, UserDetail};
use rand::Rng;

use crate::context::SeedContext;
use crate::pools::{DIGITS, HEX_LOWER, LOWERCASE};

// ============================================================================
// Constants
// ============================================================================

/// Attempts at a random unique email before falling back to a timestamped one.
pub const EMAIL_ATTEMPTS: usize = 100;

/// Length of the placeholder password hash.
pub const PASSWORD_HASH_LEN: usize = 60;

/// Tracks emails and usernames already taken in this run.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    emails: HashSet<String>,
    usernames: HashSet<String>,
}

impl AccountRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an existing account's email and username as taken.
    pub fn reserve(&mut self, account: &Account) {
        self.emails.insert(account.email.clone());
        self.usernames.insert(account.username.clone());
    }

    #[cfg(test)]
    fn has_email(&self, email: &str) -> bool {
        self.emails.contains(email)
    }

    /// Claim `base`, or `base_1`, `base_2`, ... whichever is free first.
    pub fn claim_username(&mut self, base: &str) -> String {
        let mut username = base.to_string();
        let mut counter = 1;
        while self.usernames.contains(&username) {
            username = format!("{base}_{counter}");
            counter += 1;
        }
        self.usernames.insert(username.clone());
        username
    }

    /// Claim a random `<base><4 digits>@<5 letters>.com` email.
    ///
    /// After [`EMAIL_ATTEMPTS`] collisions, falls back to
    /// `user<microseconds>@example.com`, counting up from the reference time until free.
    pub fn claim_email(&mut self, ctx: &mut SeedContext, base: &str) -> String {
        self.claim_email_within(ctx, base, EMAIL_ATTEMPTS)
    }

    fn claim_email_within(&mut self, ctx: &mut SeedContext, base: &str, attempts: usize) -> String {
        for _ in 0..attempts {
            let suffix = ctx.string_from(DIGITS, 4);
            let domain = ctx.string_from(LOWERCASE, 5);
            let email = format!("{base}{suffix}@{domain}.com");
            if self.emails.insert(email.clone()) {
                return email;
            }
        }

        tracing::debug!(base, "Email attempts exhausted, using timestamp fallback");
        let mut stamp = ctx.now().timestamp_micros();
        loop {
            let email = format!("user{stamp}@example.com");
            if self.emails.insert(email.clone()) {
                return email;
            }
            stamp += 1;
        }
    }
}

/// Generate `customers` customer, then `prophets` prophet, then `admins` admin accounts.
///
/// Usernames are `<role><index>` with the index counting across all three groups.
pub fn generate_accounts(
    ctx: &mut SeedContext,
    registry: &mut AccountRegistry,
    customers: usize,
    prophets: usize,
    admins: usize,
) -> Vec<Account> {
    let roles = iter::repeat(Role::Customer)
        .take(customers)
        .chain(iter::repeat(Role::Prophet).take(prophets))
        .chain(iter::repeat(Role::Admin).take(admins));

    let now = ctx.now();
    roles
        .enumerate()
        .map(|(i, role)| {
            let base = format!("{}{i}", role.as_lower_str());
            let email = registry.claim_email(ctx, &base);
            let username = registry.claim_username(&base);
            Account {
                id: AccountId::from_random_bytes(ctx.id_bytes()),
                email,
                username,
                password_hash: ctx.string_from(HEX_LOWER, PASSWORD_HASH_LEN),
                role,
                created_at: now,
                updated_at: now,
            }
        })
        .collect()
}

/// One user detail row per account.
pub fn generate_user_details(ctx: &mut SeedContext, accounts: &[Account]) -> Vec<UserDetail> {
    let now = ctx.now();
    accounts
        .iter()
        .map(|account| {
            let (first, last) = ctx.person_name();
            let picture = AccountId::from_random_bytes(ctx.id_bytes());
            UserDetail {
                account_id: account.id.clone(),
                name: first.to_string(),
                lastname: last.to_string(),
                profile_url: format!("https://example.com/profile/{picture}.jpg"),
                phone_number: format!("+66{}", ctx.rng().gen_range(100_000_000..=999_999_999u32)),
                gender: ctx.pick(&Sex::ALL),
                created_at: now,
                updated_at: now,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ctx() -> SeedContext {
        SeedContext::new(11, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn roles_in_order_with_indexed_usernames() {
        let mut ctx = ctx();
        let mut registry = AccountRegistry::new();
        let accounts = generate_accounts(&mut ctx, &mut registry, 2, 1, 1);

        let roles: Vec<Role> = accounts.iter().map(|a| a.role).collect();
        assert_eq!(roles, [Role::Customer, Role::Customer, Role::Prophet, Role::Admin]);
        let usernames: Vec<&str> = accounts.iter().map(|a| a.username.as_str()).collect();
        assert_eq!(usernames, ["customer0", "customer1", "prophet2", "admin3"]);
    }

    #[test]
    fn email_shape() {
        let mut ctx = ctx();
        let mut registry = AccountRegistry::new();
        let accounts = generate_accounts(&mut ctx, &mut registry, 1, 0, 0);
        let email = &accounts[0].email;

        let (local, domain) = email.split_once('@').unwrap();
        assert!(local.starts_with("customer0"));
        assert_eq!(local.len(), "customer0".len() + 4);
        assert!(domain.ends_with(".com"));
        assert_eq!(domain.len(), 5 + ".com".len());
        assert_eq!(accounts[0].password_hash.len(), PASSWORD_HASH_LEN);
    }

    #[test]
    fn taken_usernames_get_counter_suffix() {
        let mut registry = AccountRegistry::new();
        assert_eq!(registry.claim_username("admin0"), "admin0");
        assert_eq!(registry.claim_username("admin0"), "admin0_1");
        assert_eq!(registry.claim_username("admin0"), "admin0_2");
    }

    #[test]
    fn exhausted_attempts_fall_back_to_timestamp() {
        let mut ctx = ctx();
        let mut registry = AccountRegistry::new();
        let stamp = ctx.now().timestamp_micros();
        registry.emails.insert(format!("user{stamp}@example.com"));

        let email = registry.claim_email_within(&mut ctx, "customer0", 0);
        assert_eq!(email, format!("user{}@example.com", stamp + 1));
        assert!(registry.has_email(&email));
    }

    #[test]
    fn user_details_cover_every_account() {
        let mut ctx = ctx();
        let mut registry = AccountRegistry::new();
        let accounts = generate_accounts(&mut ctx, &mut registry, 3, 2, 1);
        let details = generate_user_details(&mut ctx, &accounts);

        assert_eq!(details.len(), accounts.len());
        for (detail, account) in details.iter().zip(&accounts) {
            assert_eq!(detail.account_id, account.id);
            assert!(detail.phone_number.starts_with("+66"));
            assert_eq!(detail.phone_number.len(), 12);
            assert!(detail.profile_url.starts_with("https://example.com/profile/"));
        }
    }
}
