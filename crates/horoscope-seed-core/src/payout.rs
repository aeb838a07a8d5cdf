//! Prophet payout bank accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::{Record, Table};
use crate::{ProphetId, TransactionAccountId};

/// Thai bank receiving prophet payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bank {
    /// Bangkok Bank.
    Bbl,
    /// Krungthai Bank.
    Ktb,
    /// Kasikornbank.
    Kbank,
    /// Siam Commercial Bank.
    Scb,
    /// Bank of Ayudhya.
    Bay,
    /// TMBThanachart Bank.
    Ttb,
    /// CIMB Thai.
    Cimb,
    /// United Overseas Bank.
    Uob,
    /// Government Savings Bank.
    Gsb,
    /// Bank for Agriculture and Agricultural Cooperatives.
    Baac,
}

impl Bank {
    /// All variants.
    pub const ALL: [Self; 10] = [
        Self::Bbl,
        Self::Ktb,
        Self::Kbank,
        Self::Scb,
        Self::Bay,
        Self::Ttb,
        Self::Cimb,
        Self::Uob,
        Self::Gsb,
        Self::Baac,
    ];
}

/// A bank account a prophet is paid out to.
///
/// The combination (`prophet_id`, `bank`, `account_number`) is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionAccount {
    /// Account ID.
    pub id: TransactionAccountId,

    /// The receiving prophet.
    pub prophet_id: ProphetId,

    /// Name on the bank account.
    pub account_name: String,

    /// Bank account number (digits only).
    pub account_number: String,

    /// The bank.
    pub bank: Bank,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl TransactionAccount {
    /// The uniqueness key of this account.
    #[must_use]
    pub fn combination(&self) -> (ProphetId, Bank, String) {
        (self.prophet_id.clone(), self.bank, self.account_number.clone())
    }
}

impl Record for TransactionAccount {
    const TABLE: Table = Table::TransactionAccounts;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_codes() {
        let codes: Vec<String> = Bank::ALL
            .iter()
            .map(|b| serde_json::to_value(b).unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            codes,
            ["BBL", "KTB", "KBANK", "SCB", "BAY", "TTB", "CIMB", "UOB", "GSB", "BAAC"]
        );
    }
}
