//! Role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A capability flag a grant may hold.
///
/// Roles are independent: a grant holds any subset of them and no role
/// is ordered above another. `Manage` still confers read visibility on
/// its own (see `tessera_auth::acl::evaluator::is_read_capable`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// See the resource.
    Read,
    /// Modify the resource content.
    Write,
    /// Administer the resource, including its grant list.
    Manage,
    /// Share the resource with other principals.
    Share,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [Role::Read, Role::Write, Role::Manage, Role::Share];

    /// Return the role as an upper-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Manage => "MANAGE",
            Self::Share => "SHARE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = tessera_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "READ" => Ok(Self::Read),
            "WRITE" => Ok(Self::Write),
            "MANAGE" => Ok(Self::Manage),
            "SHARE" => Ok(Self::Share),
            _ => Err(tessera_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: READ, WRITE, MANAGE, SHARE"
            ))),
        }
    }
}
