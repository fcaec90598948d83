//! Algorithm implementations for list merging.
//!
//! - `merge`: stable list merge with updates
//! - `lis`: kept-in-place detection for matched entries

mod lis;
mod merge;

pub use merge::{
    check_snapshot, merge, merge_with_config, try_merge, MergeConfig, MergeStats, MovePolicy,
};
