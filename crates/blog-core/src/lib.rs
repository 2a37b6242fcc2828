//! # Blog Core
//!
//! The domain layer of the blog.
//! This crate contains the post and user entities, their invariants and the
//! repository ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
