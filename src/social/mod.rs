//! Social posting demo domain: users, text/photo posts, like and comment
//! capabilities, and the injected platform registry that holds them.

pub mod platform;
pub mod post;
pub mod user;

pub use platform::{MAX_POSTS_PER_USER, SocialPlatform};
pub use post::{Comment, Commentable, Likeable, PhotoPost, Post, TextPost};
pub use user::SocialUser;
