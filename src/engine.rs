//! Kiosk simulation engine.
//!
//! Streams user events from CSV, feeds them through the payment session
//! state machine, and writes the machine's final state as a single CSV row.
//! The engine is the thin collaborator around the core: it owns the session
//! value, surfaces confirmation labels, and decides what to do with rows
//! the core rejects (log and skip).

use crate::config::KioskConfig;
use crate::error::Result;
use crate::event::{EventKind, EventRecord};
use crate::session::{Evaluation, PaymentSession};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::{Read, Write};

/// The kiosk simulation engine.
///
/// Holds the fixed configuration and the single session being simulated.
/// Events are processed in the order they are received.
///
/// # Output
///
/// The final state is written as one CSV row with a fixed header, so runs
/// are deterministic and diffable.
pub struct KioskEngine {
    config: KioskConfig,
    session: PaymentSession,
}

impl KioskEngine {
    /// Creates an engine with the default machine configuration.
    pub fn new() -> Self {
        Self::with_config(KioskConfig::default())
    }

    /// Creates an engine with a custom configuration.
    pub fn with_config(config: KioskConfig) -> Self {
        KioskEngine {
            config,
            session: PaymentSession::start(),
        }
    }

    /// Processes events from a CSV reader in streaming fashion.
    ///
    /// Records are read one at a time. Invalid records and unrecognized
    /// denominations are logged at warn level and skipped; the session is
    /// never left partially mutated by a bad row.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<EventRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => {
                    if let Some(event) = record.parse() {
                        self.process_event(event.kind, row_num);
                    } else {
                        warn!("Row {}: Failed to parse event record", row_num);
                    }
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Processes a single parsed event.
    fn process_event(&mut self, kind: EventKind, row: usize) {
        match kind {
            EventKind::Insert(value) => match self.session.insert(&self.config, value) {
                Ok(receipt) => {
                    debug!(
                        "Row {}: Inserted {} ({}), total now {}, state {}",
                        row, receipt.label, value, receipt.total, receipt.state
                    );
                }
                Err(e) => {
                    warn!("Row {}: {}", row, e);
                }
            },
            EventKind::Status => match self.session.evaluate(&self.config) {
                Evaluation::Collecting { paid, remaining, .. } => {
                    debug!(
                        "Row {}: Status: collecting, paid {}, remaining {}",
                        row, paid, remaining
                    );
                }
                Evaluation::Complete { paid, change, .. } => {
                    debug!(
                        "Row {}: Status: complete, paid {}, change due {}",
                        row, paid, change.total
                    );
                }
            },
            EventKind::Restart => {
                self.session = PaymentSession::start();
                debug!("Row {}: Session restarted", row);
            }
        }
    }

    /// Writes the final machine state to CSV.
    ///
    /// One row with a fixed header. `remaining` is zero once complete;
    /// `change` is zero while collecting. The breakdown column joins the
    /// dispensed entries as `"<count> <label>"` separated by `"; "`.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["paid", "fee", "state", "remaining", "change", "breakdown"])?;

        match self.session.evaluate(&self.config) {
            Evaluation::Collecting {
                paid,
                fee,
                remaining,
            } => {
                csv_writer.write_record([
                    paid.to_string(),
                    fee.to_string(),
                    "collecting".to_string(),
                    remaining.to_string(),
                    "0.00".to_string(),
                    String::new(),
                ])?;
            }
            Evaluation::Complete { paid, fee, change } => {
                let breakdown = change
                    .entries
                    .iter()
                    .map(|e| format!("{} {}", e.count, e.label))
                    .collect::<Vec<_>>()
                    .join("; ");

                csv_writer.write_record([
                    paid.to_string(),
                    fee.to_string(),
                    "complete".to_string(),
                    "0.00".to_string(),
                    change.total.to_string(),
                    breakdown,
                ])?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Returns the current session (for testing).
    #[cfg(test)]
    pub fn session(&self) -> &PaymentSession {
        &self.session
    }
}

impl Default for KioskEngine {
    fn default() -> Self {
        Self::new()
    }
}
