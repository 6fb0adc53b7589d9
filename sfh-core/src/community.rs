//! Community board: posts, comments, likes, reports and notifications.

use serde::{Deserialize, Serialize};

/// Post list ordering accepted by `GET /api/posts?sort=`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostSort {
    #[default]
    New,
    Popular,
}

impl PostSort {
    pub fn as_str(self) -> &'static str {
        match self {
            PostSort::New => "new",
            PostSort::Popular => "popular",
        }
    }
}

impl std::str::FromStr for PostSort {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "new" => Ok(PostSort::New),
            "popular" => Ok(PostSort::Popular),
            other => Err(format!("unknown sort mode: {}", other)),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub nickname: String,
    /// Written date as sent by the server
    #[serde(default)]
    pub wdate: String,
    #[serde(default)]
    pub view: u32,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_author: bool,
    #[serde(default)]
    pub report: u32,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub commenter: String,
    #[serde(default)]
    pub cdate: String,
    #[serde(default)]
    pub formatted_date: Option<String>,
    #[serde(default)]
    pub is_author: bool,
    #[serde(default)]
    pub report: u32,
}

impl Comment {
    pub fn display_date(&self) -> &str {
        self.formatted_date.as_deref().unwrap_or(&self.cdate)
    }
}

/// Body of `GET /api/posts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostList {
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Body of `GET /api/posts/{id}`.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct PostDetail {
    pub post: Post,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Body of `POST /api/posts/{id}/like`.
#[derive(Debug, PartialEq, Clone, Copy, Deserialize)]
pub struct LikeState {
    pub like_count: u32,
    pub is_liked: bool,
}

/// Body of `POST /report/...`.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct ReportAck {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct NewComment {
    pub content: String,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_post_detail() {
        let detail: PostDetail = serde_json::from_value(json!({
            "post": {"id": 5, "title": "Aphids?", "nickname": "kim", "like_count": 2, "is_liked": true},
            "comments": [{"id": 1, "content": "neem oil", "commenter": "lee", "cdate": "2024-05-01"}]
        }))
        .unwrap();
        assert_eq!(detail.post.report, 0);
        assert!(detail.post.is_liked);
        assert_eq!(detail.comments[0].display_date(), "2024-05-01");
    }

    #[test]
    fn sort_round_trips_through_str() {
        assert_eq!("popular".parse::<PostSort>().unwrap(), PostSort::Popular);
        assert_eq!(PostSort::default().as_str(), "new");
        assert!("oldest".parse::<PostSort>().is_err());
    }
}
