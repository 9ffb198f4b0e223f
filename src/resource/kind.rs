//! Resource kinds and their field schemas.
//!
//! Each kind names the upstream collection it lives in and the exact set of
//! fields its outbound payload carries, in the order they are serialized.

/// The category of entity being forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    User,
    Post,
}

impl ResourceKind {
    /// Payload fields for this kind, in serialization order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::User => &["name", "email", "gender", "status"],
            ResourceKind::Post => &["user_id", "title", "body"],
        }
    }

    /// Upstream collection path segment for this kind.
    pub fn collection_path(&self) -> &'static str {
        match self {
            ResourceKind::User => "users",
            ResourceKind::Post => "posts",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::User => write!(f, "user"),
            ResourceKind::Post => write!(f, "post"),
        }
    }
}
