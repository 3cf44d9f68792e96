//! Greedy change calculator.
//!
//! Pure function mapping (amount paid, fee owed) to an ordered breakdown of
//! change denominations. Greedy largest-first selection is the contract: it
//! minimizes the number of dispensed units only because the configured
//! denomination set is canonical (each value divides cleanly into the next).
//! No dynamic-programming fallback is attempted for arbitrary sets.

use crate::cents::Cents;
use crate::denomination::Denomination;

/// One line of a change breakdown: how many units of a denomination to
/// dispense, with the grammatically matching label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    /// Number of units dispensed. Always positive.
    pub count: u64,

    /// Singular label when `count == 1`, plural otherwise.
    pub label: String,
}

/// Change owed for a completed payment, broken down by denomination in
/// strictly descending value order.
///
/// # Remainder policy
///
/// `total` is the full amount owed (`paid - fee`). If that amount is not
/// exactly representable by the configured change set, the residue is
/// silently dropped from the breakdown: the dispensed sum may be strictly
/// less than `total`. This matches the physical machine's behavior and is a
/// documented limitation, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangeBreakdown {
    /// Total change owed in cents.
    pub total: Cents,

    /// Dispensed units per denomination, largest value first.
    pub entries: Vec<ChangeEntry>,
}

/// Computes the change breakdown for a payment of `paid` against `fee`.
///
/// Returns `None` when `paid <= fee`: no change is due. That is the normal
/// outcome while a payment is still accumulating, not a failure.
///
/// `denominations` must be sorted in strictly descending value order with
/// strictly positive values; [`KioskConfig`](crate::KioskConfig) guarantees
/// both at construction.
pub fn make_change(
    paid: Cents,
    fee: Cents,
    denominations: &[Denomination],
) -> Option<ChangeBreakdown> {
    if paid <= fee {
        return None;
    }

    let total = paid - fee;
    let mut remaining = total;
    let mut entries = Vec::new();

    for denom in denominations {
        if remaining.is_zero() {
            break;
        }

        let count = remaining / denom.value;
        if count > 0 {
            remaining = remaining % denom.value;
            entries.push(ChangeEntry {
                count,
                label: denom.label_for(count).to_string(),
            });
        }
    }

    // Any residue left here is smaller than the smallest denomination and
    // is dropped from the breakdown.
    Some(ChangeBreakdown { total, entries })
}
