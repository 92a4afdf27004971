//! Aggregation over a batch of day balances.
//!
//! Everything here is pure and read-only over [`BalanceRow`]s: report-wide
//! summaries, per-branch rollups, punctuality classification and multi-key
//! row ordering.

mod branch;
mod punctuality;
mod row;
mod sorting;
mod summary;

pub use branch::{BranchRollup, rollup_by_branch};
pub use punctuality::{Punctuality, classify_punctuality};
pub use row::BalanceRow;
pub use sorting::{SortDirection, SortKey, SortSpec, sort_rows};
pub use summary::{BalanceSummary, PunctualityCounts, StateCounts, summarize};
