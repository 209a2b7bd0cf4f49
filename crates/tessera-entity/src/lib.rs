//! # tessera-entity
//!
//! Domain entity models for Tessera. Every resource kind owns a
//! [`PermissionSet`](permission::PermissionSet) and exposes it through the
//! [`Resource`](resource::Resource) capability, so permission logic is
//! written once against the trait rather than against a concrete kind.

pub mod notification;
pub mod permission;
pub mod resource;
pub mod suggestion;
