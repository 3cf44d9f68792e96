//! Kiosk configuration: the fee and the two denomination sets.
//!
//! Fixed at construction for the life of the process. The accepted set
//! governs what a user may insert; the change set governs what the machine
//! may pay back. They are configured independently.

use crate::cents::Cents;
use crate::denomination::Denomination;
use crate::error::{KioskError, Result};
use std::collections::HashSet;

/// Immutable kiosk configuration.
///
/// # Invariants
///
/// - All denomination values are strictly positive
/// - Values are unique within each set
/// - The change set is held in strictly descending value order, as the
///   greedy calculator requires
#[derive(Debug, Clone)]
pub struct KioskConfig {
    fee: Cents,
    accepted: Vec<Denomination>,
    change: Vec<Denomination>,
}

impl KioskConfig {
    /// Builds a validated configuration.
    ///
    /// The change set is sorted into descending value order here so the
    /// calculator never has to re-check it. Zero-valued or duplicate
    /// denominations are rejected with [`KioskError::InvalidConfig`].
    pub fn new(
        fee: Cents,
        accepted: Vec<Denomination>,
        mut change: Vec<Denomination>,
    ) -> Result<Self> {
        validate_set("accepted", &accepted)?;
        validate_set("change", &change)?;

        change.sort_by(|a, b| b.value.cmp(&a.value));

        Ok(KioskConfig {
            fee,
            accepted,
            change,
        })
    }

    /// The fixed amount owed before change is computed.
    pub fn fee(&self) -> Cents {
        self.fee
    }

    /// Denominations a user may insert.
    pub fn accepted(&self) -> &[Denomination] {
        &self.accepted
    }

    /// Denominations the machine may dispense, largest first.
    pub fn change_denominations(&self) -> &[Denomination] {
        &self.change
    }

    /// Looks up an accepted denomination by its exact cent value.
    pub fn accepted_by_value(&self, value: Cents) -> Option<&Denomination> {
        self.accepted.iter().find(|d| d.value == value)
    }
}

impl Default for KioskConfig {
    /// The stock machine configuration: a $4.00 parking fee, five
    /// insertable denominations, and a change drawer from 50 centavos up
    /// to $100 bills.
    fn default() -> Self {
        let accepted = vec![
            Denomination::new(50, "moneda de 50 centavos", "monedas de 50 centavos"),
            Denomination::new(100, "moneda de $1", "monedas de $1"),
            Denomination::new(500, "billete de $5", "billetes de $5"),
            Denomination::new(1000, "billete de $10", "billetes de $10"),
            Denomination::new(2000, "billete de $20", "billetes de $20"),
        ];

        let change = vec![
            Denomination::new(10000, "billete de $100", "billetes de $100"),
            Denomination::new(5000, "billete de $50", "billetes de $50"),
            Denomination::new(2000, "billete de $20", "billetes de $20"),
            Denomination::new(1000, "billete de $10", "billetes de $10"),
            Denomination::new(500, "billete de $5", "billetes de $5"),
            Denomination::new(100, "moneda de $1", "monedas de $1"),
            Denomination::new(50, "moneda de 50 centavos", "monedas de 50 centavos"),
        ];

        // Safety: the built-in sets are positive and duplicate-free
        KioskConfig::new(Cents::new(400), accepted, change).expect("built-in config is valid")
    }
}

/// Rejects zero-valued or duplicate denominations within a set.
fn validate_set(name: &str, set: &[Denomination]) -> Result<()> {
    let mut seen = HashSet::new();

    for denom in set {
        if denom.value.is_zero() {
            return Err(KioskError::InvalidConfig {
                message: format!("{} set contains a zero-valued denomination", name),
            });
        }
        if !seen.insert(denom.value) {
            return Err(KioskError::InvalidConfig {
                message: format!(
                    "{} set contains duplicate denomination value {}",
                    name, denom.value
                ),
            });
        }
    }

    Ok(())
}
