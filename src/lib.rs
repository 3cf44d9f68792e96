//! # Parking Kiosk
//!
//! A parking payment kiosk simulator: a user inserts denominations until the
//! accumulated total covers a fixed fee, after which the machine computes
//! the change breakdown using the fewest denominations.
//!
//! ## Design Principles
//!
//! - **Integer cents**: All money is whole smallest-currency units; no
//!   floating point in the arithmetic path
//! - **Pure core**: The change calculator and session state machine do no
//!   I/O; the engine wraps them with streaming CSV in and CSV out
//! - **Greedy change**: Largest-first selection, optimal for the canonical
//!   denomination set the machine carries
//! - **Caller-owned state**: A session is a value handed to the core, never
//!   a process-wide store
//!
//! ## Example
//!
//! ```no_run
//! use parking_kiosk::KioskEngine;
//! use std::io::Cursor;
//!
//! let csv = "action,value\ninsert,2000\n";
//! let mut engine = KioskEngine::new();
//! engine.process_csv(Cursor::new(csv)).unwrap();
//! engine.write_output(std::io::stdout()).unwrap();
//! ```

pub mod cents;
pub mod change;
pub mod config;
pub mod denomination;
pub mod engine;
pub mod error;
pub mod event;
pub mod session;

pub use cents::Cents;
pub use change::{make_change, ChangeBreakdown, ChangeEntry};
pub use config::KioskConfig;
pub use denomination::Denomination;
pub use engine::KioskEngine;
pub use error::{KioskError, Result};
pub use event::{EventKind, EventRecord, KioskEvent};
pub use session::{Evaluation, InsertReceipt, PaymentSession, SessionState};
