//! Booking transactions and prophet payout accounts.

use std::collections::HashSet;

use horoscope_seed_core::{
    Bank, Booking, BookingStatus, Prophet, ProphetId, Transaction, TransactionAccount,
    TransactionAccountId, TransactionId, TransactionStatus,
};
use rand::Rng;

use crate::context::SeedContext;
use crate::pools::DIGITS;

/// Attempts at a unique payout account before skipping it.
pub const ACCOUNT_ATTEMPTS: usize = 20;

/// One transaction per booking, with a status consistent with the booking.
pub fn generate_transactions(ctx: &mut SeedContext, bookings: &[Booking]) -> Vec<Transaction> {
    let now = ctx.now();
    bookings
        .iter()
        .map(|booking| {
            let status = match booking.status {
                BookingStatus::Completed => TransactionStatus::Completed,
                BookingStatus::Failed => TransactionStatus::Failed,
                BookingStatus::Scheduled if ctx.chance(0.5) => TransactionStatus::Processing,
                BookingStatus::Scheduled => TransactionStatus::Completed,
            };
            Transaction {
                id: TransactionId::from_random_bytes(ctx.id_bytes()),
                booking_id: booking.id.clone(),
                status,
                created_at: now,
                updated_at: now,
            }
        })
        .collect()
}

/// One or two payout accounts per prophet, unique per (prophet, bank, number).
pub fn generate_transaction_accounts(
    ctx: &mut SeedContext,
    prophets: &[Prophet],
) -> Vec<TransactionAccount> {
    let now = ctx.now();
    let mut taken: HashSet<(ProphetId, Bank, String)> = HashSet::new();
    let mut accounts = Vec::new();
    for prophet in prophets {
        let wanted = ctx.rng().gen_range(1..=2);
        for _ in 0..wanted {
            let found = (0..ACCOUNT_ATTEMPTS).find_map(|_| {
                let bank = ctx.pick(&Bank::ALL);
                let len = ctx.rng().gen_range(10..=12);
                let number = ctx.string_from(DIGITS, len);
                taken
                    .insert((prophet.id.clone(), bank, number.clone()))
                    .then_some((bank, number))
            });
            let Some((bank, account_number)) = found else {
                tracing::debug!(prophet = %prophet.id, "No unique payout account found");
                continue;
            };
            let (first, last) = ctx.person_name();
            accounts.push(TransactionAccount {
                id: TransactionAccountId::from_random_bytes(ctx.id_bytes()),
                prophet_id: prophet.id.clone(),
                account_name: format!("{first} {last}"),
                account_number,
                bank,
                created_at: now,
                updated_at: now,
            });
        }
    }
    accounts
}
