//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;

pub use repository::{
    BaseRepository, DEFAULT_PAGE_SIZE, PostQuery, PostRepository, UserRepository,
};
