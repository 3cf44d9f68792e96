//! Denomination value objects.
//!
//! A denomination couples a fixed cent value with display labels. The kiosk
//! keeps two independent sets: the denominations a user may insert, and the
//! denominations the machine may pay back as change. The sets need not match.

use crate::cents::Cents;
use serde::{Deserialize, Serialize};

/// A currency unit the kiosk knows how to accept or dispense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    /// Face value in cents. Strictly positive.
    pub value: Cents,

    /// Label used when exactly one unit is dispensed ("moneda de $1").
    pub singular: String,

    /// Label used when more than one unit is dispensed ("monedas de $1").
    pub plural: String,
}

impl Denomination {
    /// Creates a denomination from a cent value and its two labels.
    pub fn new(value: u64, singular: &str, plural: &str) -> Self {
        Denomination {
            value: Cents::new(value),
            singular: singular.to_string(),
            plural: plural.to_string(),
        }
    }

    /// Returns the label appropriate for dispensing `count` units.
    pub fn label_for(&self, count: u64) -> &str {
        if count == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}
