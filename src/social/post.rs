use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A user's remark attached to a commentable post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            at: Utc::now(),
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.author, self.text)
    }
}

/// Capability contract for posts that count likes.
pub trait Likeable {
    fn add_like(&mut self, user: &str);
    fn like_count(&self) -> u32;
}

/// Capability contract for posts that accept comments.
pub trait Commentable {
    fn add_comment(&mut self, comment: Comment);
    fn comments(&self) -> &[Comment];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPost {
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    likes: u32,
    comments: Vec<Comment>,
}

impl TextPost {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            created_at: Utc::now(),
            likes: 0,
            comments: Vec::new(),
        }
    }
}

impl Likeable for TextPost {
    fn add_like(&mut self, user: &str) {
        self.likes += 1;
        tracing::debug!(user, "liked text post");
    }

    fn like_count(&self) -> u32 {
        self.likes
    }
}

impl Commentable for TextPost {
    fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoPost {
    pub author: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    likes: u32,
}

impl PhotoPost {
    pub fn new(author: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            image_url: image_url.into(),
            created_at: Utc::now(),
            likes: 0,
        }
    }
}

impl Likeable for PhotoPost {
    /// Double-tap: a like on a photo counts twice.
    fn add_like(&mut self, user: &str) {
        self.likes += 2;
        tracing::debug!(user, "double-tapped photo post");
    }

    fn like_count(&self) -> u32 {
        self.likes
    }
}

/// A published post of any kind.
///
/// Callers probe for capabilities through the `as_*_mut` accessors instead
/// of downcasting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Post {
    Text(TextPost),
    Photo(PhotoPost),
}

impl Post {
    pub fn author(&self) -> &str {
        match self {
            Post::Text(p) => &p.author,
            Post::Photo(p) => &p.author,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Post::Text(p) => p.created_at,
            Post::Photo(p) => p.created_at,
        }
    }

    /// Human-readable line used for feeds.
    pub fn render(&self) -> String {
        match self {
            Post::Text(p) => format!("Text post by {}: {}", p.author, p.content),
            Post::Photo(p) => format!("Photo by {} -> {}", p.author, p.image_url),
        }
    }

    /// Every post kind supports likes.
    pub fn as_likeable_mut(&mut self) -> &mut dyn Likeable {
        match self {
            Post::Text(p) => p,
            Post::Photo(p) => p,
        }
    }

    pub fn like_count(&self) -> u32 {
        match self {
            Post::Text(p) => p.like_count(),
            Post::Photo(p) => p.like_count(),
        }
    }

    /// Only text posts accept comments.
    pub fn as_commentable_mut(&mut self) -> Option<&mut dyn Commentable> {
        match self {
            Post::Text(p) => Some(p),
            Post::Photo(_) => None,
        }
    }
}
