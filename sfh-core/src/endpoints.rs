//! Backend paths, relative to the API base URL.

pub fn farm(farm_id: i64) -> String {
    format!("/api/farms/{}", farm_id)
}

pub fn greenhouse_list(farm_id: i64) -> String {
    format!("/api/greenhouses/list/{}", farm_id)
}

pub const WEATHER: &str = "/api/weather";
pub const GRID: &str = "/api/greenhouses/api/grid";

pub fn groups(greenhouse_id: i64) -> String {
    format!("/api/greenhouses/{}/groups", greenhouse_id)
}

pub const SENSOR_LATEST: &str = "/api/sensor/latest";

pub fn greenhouse_update(greenhouse_id: i64) -> String {
    format!("/api/greenhouses/update/{}", greenhouse_id)
}

pub fn greenhouse(greenhouse_id: i64) -> String {
    format!("/api/greenhouses/{}", greenhouse_id)
}

pub const IOT_LIST: &str = "/product/api/iot/list";
pub const CAPTURE: &str = "/api/greenhouses/crop_groups/read";
pub const UPLOAD_ANALYZE: &str = "/api/greenhouses/crop_groups/upload_analyze";

/// Where analyzed crop images are served from.
pub fn crop_image(filename: &str) -> String {
    format!("/static/uploads/crop_images/{}", filename)
}

pub const CHECK_LOGIN: &str = "/check_login";
pub const LOGIN: &str = "/login";
pub const LOGOUT: &str = "/logout";
pub const SEND_CODE: &str = "/send_code";
pub const CHECK_CODE: &str = "/check_code";
pub const REGISTER: &str = "/register";

pub const POSTS: &str = "/api/posts";

pub fn post(post_id: i64) -> String {
    format!("/api/posts/{}", post_id)
}

pub fn post_like(post_id: i64) -> String {
    format!("/api/posts/{}/like", post_id)
}

pub fn post_comments(post_id: i64) -> String {
    format!("/api/posts/{}/comments", post_id)
}

pub fn comment(comment_id: i64) -> String {
    format!("/api/comments/{}", comment_id)
}

pub fn report_post(post_id: i64) -> String {
    format!("/report/post/{}", post_id)
}

pub fn report_comment(comment_id: i64) -> String {
    format!("/report/comment/{}", comment_id)
}

pub const NOTIFICATIONS: &str = "/api/notifications";

pub fn notification(notification_id: i64) -> String {
    format!("/api/notifications/{}", notification_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greenhouse_paths() {
        assert_eq!(groups(9), "/api/greenhouses/9/groups");
        assert_eq!(greenhouse_update(9), "/api/greenhouses/update/9");
        assert_eq!(greenhouse(9), "/api/greenhouses/9");
        assert_eq!(crop_image("a.jpg"), "/static/uploads/crop_images/a.jpg");
    }
}
