//! Capabilities the services consume from storage.
//!
//! Every search takes the caller's manager flag: when it is set the search
//! skips grant filtering; otherwise only entities the user can read, directly
//! or through a group, are considered.

pub mod collection;
pub mod link_type;
pub mod notification;
pub mod scope;
pub mod view;

pub use collection::CollectionRepository;
pub use link_type::LinkTypeRepository;
pub use notification::NotificationRepository;
pub use scope::ScopeRepository;
pub use view::ViewRepository;
