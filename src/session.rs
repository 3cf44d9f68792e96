//! Payment session state machine.
//!
//! A session tracks one user's accumulated total, in cents, from the moment
//! the machine is (re)started until enough has been inserted to cover the
//! fee. The session is a plain value owned by the caller: the core never
//! keeps a global store, it only operates on the session it is handed.
//!
//! # States
//!
//! `Collecting` while `total < fee`, `Complete` once `total >= fee`. The
//! state is derived from the total on every query, never cached. Inserting
//! more while already `Complete` is allowed — the total keeps growing and
//! the next evaluation reflects the larger change.

use crate::cents::Cents;
use crate::change::{make_change, ChangeBreakdown};
use crate::config::KioskConfig;
use crate::error::{KioskError, Result};
use std::fmt;

/// Whether the session is still collecting money or has covered the fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accumulated total is below the fee.
    Collecting,

    /// Accumulated total meets or exceeds the fee.
    Complete,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Collecting => write!(f, "collecting"),
            SessionState::Complete => write!(f, "complete"),
        }
    }
}

/// Confirmation returned by a successful insert.
///
/// The label is the one-shot confirmation message for the denomination the
/// user just inserted; the caller surfaces it once and discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertReceipt {
    /// Display label of the inserted denomination.
    pub label: String,

    /// Accumulated total after the insert.
    pub total: Cents,

    /// Session state recomputed from the new total.
    pub state: SessionState,
}

/// Result of evaluating a session against the fee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Still short of the fee.
    Collecting {
        paid: Cents,
        fee: Cents,
        remaining: Cents,
    },

    /// Fee covered; `change` holds the breakdown to dispense (zero entries
    /// when the payment was exact).
    Complete {
        paid: Cents,
        fee: Cents,
        change: ChangeBreakdown,
    },
}

/// One user's payment in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaymentSession {
    total: Cents,
}

impl PaymentSession {
    /// Starts a fresh session with nothing inserted.
    pub fn start() -> Self {
        PaymentSession { total: Cents::ZERO }
    }

    /// Accumulated total inserted so far.
    pub fn total(&self) -> Cents {
        self.total
    }

    /// Current state relative to the configured fee.
    pub fn state(&self, config: &KioskConfig) -> SessionState {
        if self.total >= config.fee() {
            SessionState::Complete
        } else {
            SessionState::Collecting
        }
    }

    /// Accepts an inserted denomination.
    ///
    /// `value` must exactly match one of the accepted denominations;
    /// anything else fails with [`KioskError::UnrecognizedDenomination`]
    /// and leaves the total untouched. On success the total grows by
    /// `value` and the receipt carries the denomination's label for
    /// confirmation messaging.
    pub fn insert(&mut self, config: &KioskConfig, value: Cents) -> Result<InsertReceipt> {
        let denom = config
            .accepted_by_value(value)
            .ok_or(KioskError::UnrecognizedDenomination { value })?;

        self.total += value;

        Ok(InsertReceipt {
            label: denom.singular.clone(),
            total: self.total,
            state: self.state(config),
        })
    }

    /// Evaluates the session against the fee.
    ///
    /// Read-only and idempotent: repeated calls without an intervening
    /// insert return identical results. While collecting, reports how much
    /// is still owed; once complete, reports the change breakdown.
    pub fn evaluate(&self, config: &KioskConfig) -> Evaluation {
        let fee = config.fee();

        match self.state(config) {
            SessionState::Collecting => Evaluation::Collecting {
                paid: self.total,
                fee,
                remaining: fee.saturating_sub(self.total),
            },
            SessionState::Complete => Evaluation::Complete {
                paid: self.total,
                fee,
                change: make_change(self.total, fee, config.change_denominations())
                    .unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::ChangeEntry;

    fn config() -> KioskConfig {
        KioskConfig::default()
    }

    #[test]
    fn test_fresh_session_is_collecting_with_full_fee_remaining() {
        let session = PaymentSession::start();
        let config = config();

        assert_eq!(session.total(), Cents::ZERO);
        assert_eq!(session.state(&config), SessionState::Collecting);
        assert_eq!(
            session.evaluate(&config),
            Evaluation::Collecting {
                paid: Cents::ZERO,
                fee: Cents::new(400),
                remaining: Cents::new(400),
            }
        );
    }

    #[test]
    fn test_accumulation_until_exact_fee() {
        let config = config();
        let mut session = PaymentSession::start();

        for _ in 0..3 {
            session.insert(&config, Cents::new(100)).unwrap();
        }

        assert_eq!(session.total(), Cents::new(300));
        assert_eq!(
            session.evaluate(&config),
            Evaluation::Collecting {
                paid: Cents::new(300),
                fee: Cents::new(400),
                remaining: Cents::new(100),
            }
        );

        let receipt = session.insert(&config, Cents::new(100)).unwrap();
        assert_eq!(receipt.total, Cents::new(400));
        assert_eq!(receipt.state, SessionState::Complete);

        assert_eq!(
            session.evaluate(&config),
            Evaluation::Complete {
                paid: Cents::new(400),
                fee: Cents::new(400),
                change: ChangeBreakdown::default(),
            }
        );
    }

    #[test]
    fn test_single_bill_overpayment() {
        let config = config();
        let mut session = PaymentSession::start();

        let receipt = session.insert(&config, Cents::new(2000)).unwrap();
        assert_eq!(receipt.label, "billete de $20");
        assert_eq!(receipt.state, SessionState::Complete);

        match session.evaluate(&config) {
            Evaluation::Complete { paid, fee, change } => {
                assert_eq!(paid, Cents::new(2000));
                assert_eq!(fee, Cents::new(400));
                assert_eq!(change.total, Cents::new(1600));
                assert_eq!(
                    change.entries,
                    vec![
                        ChangeEntry {
                            count: 1,
                            label: "billete de $10".to_string()
                        },
                        ChangeEntry {
                            count: 1,
                            label: "billete de $5".to_string()
                        },
                        ChangeEntry {
                            count: 1,
                            label: "moneda de $1".to_string()
                        },
                    ]
                );
            }
            other => panic!("expected Complete, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_denomination_leaves_total_unchanged() {
        let config = config();
        let mut session = PaymentSession::start();
        session.insert(&config, Cents::new(500)).unwrap();

        let err = session.insert(&config, Cents::new(123)).unwrap_err();
        assert!(matches!(
            err,
            KioskError::UnrecognizedDenomination { value } if value == Cents::new(123)
        ));
        assert_eq!(session.total(), Cents::new(500));
    }

    #[test]
    fn test_change_only_denomination_is_not_insertable() {
        // $100 bills exist in the change drawer but not the acceptor.
        let config = config();
        let mut session = PaymentSession::start();

        assert!(session.insert(&config, Cents::new(10000)).is_err());
        assert_eq!(session.total(), Cents::ZERO);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let config = config();
        let mut session = PaymentSession::start();
        session.insert(&config, Cents::new(500)).unwrap();

        let first = session.evaluate(&config);
        let second = session.evaluate(&config);
        assert_eq!(first, second);
        assert_eq!(session.total(), Cents::new(500));
    }

    #[test]
    fn test_inserting_past_complete_grows_the_change() {
        let config = config();
        let mut session = PaymentSession::start();

        session.insert(&config, Cents::new(500)).unwrap();
        assert_eq!(session.state(&config), SessionState::Complete);

        // The core does not forbid further inserts once complete.
        session.insert(&config, Cents::new(1000)).unwrap();

        match session.evaluate(&config) {
            Evaluation::Complete { change, .. } => {
                assert_eq!(change.total, Cents::new(1100));
            }
            other => panic!("expected Complete, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_returns_confirmation_label() {
        let config = config();
        let mut session = PaymentSession::start();

        let receipt = session.insert(&config, Cents::new(50)).unwrap();
        assert_eq!(receipt.label, "moneda de 50 centavos");
        assert_eq!(receipt.state, SessionState::Collecting);
    }
}
