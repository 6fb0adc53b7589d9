//! Community board state: post list, post detail and the notification bell.

use log::warn;
use sfh_core::community::{Comment, LikeState, Notification, Post, PostDetail, PostSort, ReportAck};
use sfh_core::error::{ApiError, Result};
use std::time::Duration;

/// How often the notification bell polls while logged in.
pub const NOTIFICATION_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Delay before a missing post sends the reader back to the list.
pub const NOT_FOUND_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Text for an alert after a failed call: the server's own message for a
/// rejected request, `fallback` when the request never got an answer.
pub fn failure_message(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::Status { message, .. } | ApiError::Validation(message) => message.clone(),
        ApiError::Network(_) | ApiError::Decode(_) => fallback.to_string(),
    }
}

/// Post list with its sort order and search box.
///
/// Typing into the search box changes nothing until the search is
/// submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    sort: PostSort,
    search_input: String,
    search: String,
    posts: Vec<Post>,
    loading: bool,
    error: Option<String>,
}

impl BoardState {
    pub fn sort(&self) -> PostSort {
        self.sort
    }

    /// Change the order. Returns `true` when the list must be re-fetched.
    pub fn set_sort(&mut self, sort: PostSort) -> bool {
        let changed = self.sort != sort;
        self.sort = sort;
        changed
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Apply the typed search. Returns `true` when the query changed.
    pub fn submit_search(&mut self) -> bool {
        let submitted = self.search_input.trim().to_string();
        let changed = submitted != self.search;
        self.search = submitted;
        changed
    }

    /// `(sort, search)` to pass to the posts endpoint.
    pub fn query(&self) -> (PostSort, String) {
        (self.sort, self.search.clone())
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_posts(&mut self, posts: Result<Vec<Post>>) {
        self.loading = false;
        match posts {
            Ok(posts) => self.posts = posts,
            Err(e) => {
                warn!("Failed to load posts: {}", e);
                self.posts.clear();
                self.error = Some(failure_message(&e, "게시글을 불러오는 중 오류가 발생했습니다."));
            }
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// One post with its comments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostView {
    detail: Option<PostDetail>,
    error: Option<String>,
    redirect_after: Option<Duration>,
    comment_input: String,
}

impl PostView {
    pub fn apply_detail(&mut self, detail: Result<PostDetail>) {
        match detail {
            Ok(detail) => {
                self.detail = Some(detail);
                self.error = None;
                self.redirect_after = None;
            }
            Err(e) => {
                warn!("Failed to load post: {}", e);
                self.detail = None;
                self.error = Some(match &e {
                    ApiError::Status { status, message } if message.starts_with("HTTP ") => {
                        format!("오류가 발생했습니다 ({})", status)
                    }
                    ApiError::Status { message, .. } => message.clone(),
                    _ => "게시글을 불러오는 중 오류가 발생했습니다.".to_string(),
                });
                if e.is_not_found() {
                    self.redirect_after = Some(NOT_FOUND_REDIRECT_DELAY);
                }
            }
        }
    }

    pub fn detail(&self) -> Option<&PostDetail> {
        self.detail.as_ref()
    }

    pub fn post(&self) -> Option<&Post> {
        self.detail.as_ref().map(|d| &d.post)
    }

    pub fn comments(&self) -> &[Comment] {
        self.detail
            .as_ref()
            .map(|d| d.comments.as_slice())
            .unwrap_or(&[])
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Set when the post is gone and the page should return to the list.
    pub fn redirect_after(&self) -> Option<Duration> {
        self.redirect_after
    }

    /// The server's like count and flag replace the local ones.
    pub fn apply_like(&mut self, like: Result<LikeState>) -> Option<String> {
        match like {
            Ok(state) => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.post.like_count = state.like_count;
                    detail.post.is_liked = state.is_liked;
                }
                None
            }
            Err(e) => {
                warn!("Like failed: {}", e);
                Some(failure_message(&e, "좋아요 처리 중 오류가 발생했습니다."))
            }
        }
    }

    pub fn comment_input(&self) -> &str {
        &self.comment_input
    }

    pub fn set_comment_input(&mut self, text: impl Into<String>) {
        self.comment_input = text.into();
    }

    /// Trimmed comment to post, or `None` when the box is blank.
    pub fn comment_to_send(&self) -> Option<String> {
        let text = self.comment_input.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    /// After a successful comment the box is cleared; the caller re-fetches
    /// the post to show it.
    pub fn apply_comment_added(&mut self, result: Result<()>) -> Option<String> {
        match result {
            Ok(()) => {
                self.comment_input.clear();
                None
            }
            Err(e) => Some(failure_message(&e, "댓글 작성 중 오류가 발생했습니다.")),
        }
    }

    pub fn apply_comment_deleted(&mut self, comment_id: i64, result: Result<()>) -> Option<String> {
        match result {
            Ok(()) => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.comments.retain(|c| c.id != comment_id);
                }
                None
            }
            Err(e) => Some(failure_message(&e, "댓글 삭제 중 오류가 발생했습니다.")),
        }
    }
}

/// Alert text for a report answer.
pub fn report_message(ack: Result<ReportAck>) -> String {
    match ack {
        Ok(ack) => ack.message,
        Err(ApiError::Status { message, .. }) => format!("신고 실패: {}", message),
        Err(e) => {
            warn!("Report failed: {}", e);
            "신고 중 오류 발생".to_string()
        }
    }
}

/// Notifications shown under the bell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inbox {
    items: Vec<Notification>,
}

impl Inbox {
    /// A failed poll keeps what is already shown.
    pub fn apply(&mut self, notifications: Result<Vec<Notification>>) {
        match notifications {
            Ok(items) => self.items = items,
            Err(e) => warn!("Failed to fetch notifications: {}", e),
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread(&self) -> usize {
        self.items.len()
    }

    /// Remove a clicked notification and return where it points.
    pub fn dismiss(&mut self, notification_id: i64) -> Option<String> {
        let index = self.items.iter().position(|n| n.id == notification_id)?;
        Some(self.items.remove(index).url)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
