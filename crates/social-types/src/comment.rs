//! Comment types

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// Incoming comment payload (`CommentIn`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentIn {
    pub body: String,
    pub post_id: RecordId,
}

/// Stored comment, always attached to a post that existed when it was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: RecordId,
    pub body: String,
    pub post_id: RecordId,
}

impl Comment {
    pub fn new(id: RecordId, body: impl Into<String>, post_id: RecordId) -> Self {
        Self {
            id,
            body: body.into(),
            post_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_in_accepts_any_integer_post_id() {
        let input: CommentIn =
            serde_json::from_str(r#"{"body": "hi", "post_id": -1}"#).unwrap();
        assert_eq!(input.post_id, -1);

        let err = serde_json::from_str::<CommentIn>(r#"{"body": "hi", "post_id": "one"}"#)
            .unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_comment_in_parses() {
        let input: CommentIn =
            serde_json::from_str(r#"{"body": "nice post", "post_id": 7}"#).unwrap();
        assert_eq!(input.body, "nice post");
        assert_eq!(input.post_id, 7);
    }
}
