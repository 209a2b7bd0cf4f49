//! Reader delta between two snapshots of the same grant list.
//!
//! Only user grants take part. A change to a group grant does not show up
//! as a change for the group's members, since membership is not known here.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use tessera_entity::permission::PermissionSet;

use super::evaluator::user_readers;

/// Users who gained or lost read access through an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDiff {
    /// Users that can read after the edit but could not before.
    pub added_readers: BTreeSet<String>,
    /// Users that could read before the edit but cannot after.
    pub removed_readers: BTreeSet<String>,
}

impl PermissionDiff {
    /// Whether nobody's read access changed.
    pub fn is_empty(&self) -> bool {
        self.added_readers.is_empty() && self.removed_readers.is_empty()
    }
}

/// Compare a grant list before and after an edit.
///
/// When either snapshot is missing (the resource was just created or is
/// about to be deleted) there is nothing to compare and the diff is empty.
pub fn diff(before: Option<&PermissionSet>, after: Option<&PermissionSet>) -> PermissionDiff {
    match (before, after) {
        (Some(before), Some(after)) => {
            let before = user_readers(before);
            let after = user_readers(after);
            PermissionDiff {
                added_readers: after.difference(&before).cloned().collect(),
                removed_readers: before.difference(&after).cloned().collect(),
            }
        }
        _ => PermissionDiff::default(),
    }
}

/// Users that became readers.
pub fn added_readers(
    before: Option<&PermissionSet>,
    after: Option<&PermissionSet>,
) -> BTreeSet<String> {
    diff(before, after).added_readers
}

/// Users that stopped being readers.
pub fn removed_readers(
    before: Option<&PermissionSet>,
    after: Option<&PermissionSet>,
) -> BTreeSet<String> {
    diff(before, after).removed_readers
}
