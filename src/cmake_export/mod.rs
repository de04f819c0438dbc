//! Core export logic: domain model, classification policies, and the
//! services that turn a resolved dependency graph into an export document.

pub mod domain;
pub mod policies;
pub mod services;
