//! Kiosk event models for CSV parsing and internal representation.
//!
//! The simulator drives the machine from a CSV stream of user actions, one
//! row per button press: inserting money, asking for the display status, or
//! restarting the session.

use crate::cents::Cents;
use serde::Deserialize;
use std::str::FromStr;

/// Raw event record as read from CSV.
///
/// Uses string-based parsing for flexibility and handles the optional value
/// field, which is only present for insert events.
#[derive(Debug, Deserialize)]
pub struct EventRecord {
    /// Event action: insert, status, restart
    pub action: String,

    /// Denomination value in cents (present for insert, absent otherwise)
    pub value: Option<String>,
}

impl EventRecord {
    /// Parses the raw CSV record into a typed event.
    ///
    /// Returns `None` if the record is invalid (unknown action, missing or
    /// malformed value).
    pub fn parse(&self) -> Option<KioskEvent> {
        let action = self.action.trim().to_lowercase();

        match action.as_str() {
            "insert" => {
                let value = self.parse_value()?;
                Some(KioskEvent {
                    kind: EventKind::Insert(value),
                })
            }
            "status" => Some(KioskEvent {
                kind: EventKind::Status,
            }),
            "restart" => Some(KioskEvent {
                kind: EventKind::Restart,
            }),
            _ => None,
        }
    }

    /// Parses the value field into whole cents.
    fn parse_value(&self) -> Option<Cents> {
        let value_str = self.value.as_ref()?;
        let trimmed = value_str.trim();
        if trimmed.is_empty() {
            return None;
        }
        Cents::from_str(trimmed).ok()
    }
}

/// A parsed and validated kiosk event ready for processing.
#[derive(Debug, Clone)]
pub struct KioskEvent {
    /// Event type with associated data
    pub kind: EventKind,
}

/// Event type variants with associated data.
#[derive(Debug, Clone)]
pub enum EventKind {
    /// User inserted a denomination of the given cent value.
    Insert(Cents),

    /// User looked at the display; evaluates without mutating.
    Status,

    /// Session reset: accumulated total back to zero.
    Restart,
}
