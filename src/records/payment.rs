// SPDX-License-Identifier: MPL-2.0
//! Payments received from store owners.

use super::{contains_ignore_case, Searchable};
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Completed,
        PaymentStatus::Refunded,
        PaymentStatus::Failed,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "payment-status-pending",
            PaymentStatus::Completed => "payment-status-completed",
            PaymentStatus::Refunded => "payment-status-refunded",
            PaymentStatus::Failed => "payment-status-failed",
        }
    }
}

/// An amount in minor units (cents) of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    pub minor: i64,
    pub currency: &'static str,
}

impl Money {
    #[must_use]
    pub const fn usd(minor: i64) -> Self {
        Self {
            minor,
            currency: "USD",
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minor < 0 { "-" } else { "" };
        let abs = self.minor.unsigned_abs();
        write!(f, "{sign}{}.{:02} {}", abs / 100, abs % 100, self.currency)
    }
}

/// Why a refund was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundError {
    /// Only completed payments can be refunded.
    NotRefundable(PaymentStatus),
}

impl RefundError {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RefundError::NotRefundable(_) => "payment-error-not-refundable",
        }
    }
}

impl fmt::Display for RefundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefundError::NotRefundable(status) => {
                write!(f, "payment in state {status:?} cannot be refunded")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: u32,
    pub reference: String,
    /// Username of the paying store owner.
    pub owner: String,
    pub amount: Money,
    pub status: PaymentStatus,
    pub date: NaiveDate,
}

impl Payment {
    #[must_use]
    pub fn is_refundable(&self) -> bool {
        self.status == PaymentStatus::Completed
    }

    /// Marks a completed payment as refunded.
    pub fn refund(&mut self) -> Result<(), RefundError> {
        if !self.is_refundable() {
            return Err(RefundError::NotRefundable(self.status));
        }
        self.status = PaymentStatus::Refunded;
        Ok(())
    }

    /// Demo payments shown before any backend is connected.
    #[must_use]
    pub fn seed() -> Vec<Payment> {
        use PaymentStatus::{Completed, Failed, Pending, Refunded};
        [
            ("user1", 4_999, Completed, (2024, 9, 1)),
            ("user2", 12_500, Completed, (2024, 9, 3)),
            ("user3", 2_999, Pending, (2024, 9, 5)),
            ("user1", 7_450, Refunded, (2024, 9, 8)),
            ("user2", 1_999, Failed, (2024, 9, 9)),
            ("user3", 18_000, Completed, (2024, 9, 12)),
            ("user1", 3_300, Pending, (2024, 9, 15)),
        ]
        .into_iter()
        .zip(1..)
        .filter_map(|((owner, cents, status, (y, m, d)), id)| {
            Some(Payment {
                id,
                reference: format!("PAY-{:05}", 1000 + id),
                owner: owner.to_string(),
                amount: Money::usd(cents),
                status,
                date: NaiveDate::from_ymd_opt(y, m, d)?,
            })
        })
        .collect()
    }
}

impl Searchable for Payment {
    fn matches(&self, term: &str) -> bool {
        contains_ignore_case(&self.reference, term) || contains_ignore_case(&self.owner, term)
    }
}

/// Sums the amounts of payments in `status`, in minor units.
#[must_use]
pub fn total_minor(payments: &[Payment], status: PaymentStatus) -> i64 {
    payments
        .iter()
        .filter(|p| p.status == status)
        .map(|p| p.amount.minor)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formats_minor_units() {
        assert_eq!(Money::usd(4_999).to_string(), "49.99 USD");
        assert_eq!(Money::usd(5).to_string(), "0.05 USD");
        assert_eq!(Money::usd(-1_250).to_string(), "-12.50 USD");
    }

    #[test]
    fn only_completed_payments_refund() {
        let mut payments = Payment::seed();
        assert_eq!(payments[0].refund(), Ok(()));
        assert_eq!(payments[0].status, PaymentStatus::Refunded);

        assert_eq!(
            payments[0].refund(),
            Err(RefundError::NotRefundable(PaymentStatus::Refunded))
        );
        assert!(payments[2].refund().is_err());
    }

    #[test]
    fn totals_by_status() {
        let payments = Payment::seed();
        assert_eq!(total_minor(&payments, PaymentStatus::Completed), 35_499);
        assert_eq!(total_minor(&payments, PaymentStatus::Pending), 6_299);
    }

    #[test]
    fn references_are_searchable() {
        let payments = Payment::seed();
        assert_eq!(payments[0].reference, "PAY-01001");
        assert!(payments[0].matches("pay-01001"));
        assert!(payments[0].matches("user1"));
    }
}
