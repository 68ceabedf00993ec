use anvaya_types::CommentData;

use crate::domains::comments::models::CommentWithAuthor;

impl CommentWithAuthor {
    /// Converts to the wire shape. The fallback display name differs by
    /// endpoint ("System" on create, "Unknown" on list), so the caller
    /// supplies it.
    pub fn into_data(self, author_fallback: &str) -> CommentData {
        CommentData {
            id: self.comment.id.into_uuid(),
            comment_text: self.comment.comment_text,
            author: self
                .author_name
                .unwrap_or_else(|| author_fallback.to_string()),
            created_at: self.comment.created_at,
        }
    }
}
