//! Core use-case services.
//!
//! # Responsibility
//! - Drive the quick-log flow from picker open to incident commit.
//! - Project stored incidents and life events into the home view.
//!
//! # See also
//! - `crate::repo` for the collaborator contracts these services consume.

pub mod commit_gateway;
pub mod home_service;
pub mod quick_log;
pub mod selection;
pub mod timeline;
