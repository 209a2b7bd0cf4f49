//! Access control list evaluation and diffing.

pub mod diff;
pub mod evaluator;

pub use diff::{PermissionDiff, added_readers, diff, removed_readers};
pub use evaluator::{
    AccessDecision, can_manage, can_read, evaluate, is_read_capable, managers, readers,
    user_readers,
};
