//! Post types

use crate::{Comment, RecordId};
use serde::{Deserialize, Serialize};

/// Incoming post payload (`UserPostIn`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPostIn {
    pub body: String,
}

/// Stored post (`UserPost`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    pub body: String,
}

impl Post {
    pub fn new(id: RecordId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}

/// A post joined with its comments (`UserPostWithComments`).
///
/// Derived on read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_in_requires_body() {
        let err = serde_json::from_str::<UserPostIn>("{}").unwrap_err();
        assert!(err.to_string().contains("body"));

        let err = serde_json::from_str::<UserPostIn>(r#"{"body": 42}"#).unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_post_with_comments_shape() {
        let view = PostWithComments {
            post: Post::new(3, "hello"),
            comments: vec![Comment::new(0, "first", 3)],
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["post"]["id"], 3);
        assert_eq!(json["post"]["body"], "hello");
        assert_eq!(json["comments"][0]["post_id"], 3);
        assert_eq!(json["comments"].as_array().unwrap().len(), 1);
    }
}
