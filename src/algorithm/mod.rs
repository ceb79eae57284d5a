//! Algorithm implementations for screening estimation
//!
//! This module contains the estimation pipeline itself, the prioritized
//! fallback lookups it resolves inputs through, burden-based ranking, and
//! plain-text summary generation.

pub mod estimation;
pub mod lookup;
pub mod ranking;
pub mod summary;

pub use estimation::compute_all;
pub use ranking::{merge_focus_list, rank_groups};
pub use summary::generate_summary;
