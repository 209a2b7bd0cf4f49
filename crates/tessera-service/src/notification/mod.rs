//! Access-change notifications and their recipient rules.

pub mod rules;
pub mod service;

pub use rules::AccessChangeRules;
pub use service::NotificationService;
