//! In-memory implementations of every storage capability.

pub mod notification;
pub mod snapshot;
pub mod workspace;

pub use notification::MemoryNotificationStore;
pub use snapshot::WorkspaceSnapshot;
pub use workspace::MemoryWorkspace;
