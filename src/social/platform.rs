use crate::error::{PlatformError, Result};
use crate::social::post::Post;
use crate::social::user::SocialUser;

/// Upper bound on posts per author; publishing past it is rejected.
pub const MAX_POSTS_PER_USER: usize = 50;

/// The injected registry of users and posts.
///
/// Constructed once and passed to whoever needs it; there is no global
/// instance.
#[derive(Default)]
pub struct SocialPlatform {
    users: Vec<SocialUser>,
    posts: Vec<Post>,
}

impl SocialPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_user(&mut self, name: &str, email: &str) {
        tracing::info!(name, "user registered");
        self.users.push(SocialUser::new(name, email));
    }

    pub fn user(&self, name: &str) -> Option<&SocialUser> {
        self.users.iter().find(|u| u.name == name)
    }

    /// Records both edges of the relationship: `follower` starts following
    /// `followee`, and `followee` gains a follower.
    pub fn follow(&mut self, follower: &str, followee: &str) {
        if let Some(user) = self.users.iter_mut().find(|u| u.name == follower) {
            user.following.push(followee.to_string());
        }
        if let Some(user) = self.users.iter_mut().find(|u| u.name == followee) {
            user.followers.push(follower.to_string());
        }
        tracing::info!(follower, followee, "follow recorded");
    }

    pub fn publish(&mut self, post: Post) -> Result<()> {
        let author = post.author();
        let count = self.posts.iter().filter(|p| p.author() == author).count();
        if count >= MAX_POSTS_PER_USER {
            return Err(PlatformError::TooManyPosts {
                user: author.to_string(),
                limit: MAX_POSTS_PER_USER,
            });
        }
        tracing::info!(author, "post published");
        self.posts.push(post);
        Ok(())
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn posts_mut(&mut self) -> &mut [Post] {
        &mut self.posts
    }

    /// Rendered lines of the user's posts, newest first. `limit` truncates
    /// the result when given.
    pub fn feed(&self, user: &str, limit: Option<usize>) -> Vec<String> {
        let mut lines: Vec<String> = self
            .posts
            .iter()
            .filter(|p| p.author() == user)
            .map(Post::render)
            .collect();
        lines.reverse();
        if let Some(limit) = limit {
            lines.truncate(limit);
        }
        lines
    }
}
