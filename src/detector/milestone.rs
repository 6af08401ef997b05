//! Threshold-crossing detection for cumulative statistics.

use crate::model::MilestoneKind;

/// Thresholds crossed when a statistic moved from `previous` to `current`.
///
/// A threshold counts as crossed when `previous < threshold <= current`, so
/// landing exactly on a threshold announces it and sitting on it does not
/// announce it again. Several thresholds crossed in one jump come back in
/// ascending order.
pub fn crossed(kind: MilestoneKind, previous: i64, current: i64) -> Vec<i64> {
    kind.thresholds()
        .iter()
        .copied()
        .filter(|threshold| previous < *threshold && *threshold <= current)
        .collect()
}
