//! Domain entities - the core business objects.

mod post;
mod slug;
mod status;
mod user;

pub use post::{Post, PostRecord, TITLE_MAX_LEN};
pub use slug::{SLUG_MAX_LEN, Slug};
pub use status::PostStatus;
pub use user::{USERNAME_MAX_LEN, User};
