//! Login, logout and registration payloads.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

pub const MIN_ID_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 4;

/// Body of `GET /check_login`.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct LoginStatus {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

/// Successful `POST /login` response.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct LoginResponse {
    pub user_id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub admin: bool,
}

/// The logged-in user as seen by the client.
#[derive(Debug, PartialEq, Clone)]
pub struct Session {
    pub user_id: String,
    pub nickname: String,
    pub admin: bool,
}

impl From<LoginResponse> for Session {
    fn from(r: LoginResponse) -> Self {
        Self {
            user_id: r.user_id,
            nickname: r.nickname,
            admin: r.admin,
        }
    }
}

impl LoginStatus {
    pub fn into_session(self) -> Option<Session> {
        if !self.logged_in {
            return None;
        }
        Some(Session {
            user_id: self.user_id.unwrap_or_default(),
            nickname: self.nickname.unwrap_or_default(),
            admin: false,
        })
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct SendCodeRequest {
    pub email: String,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct CheckCodeRequest {
    pub code: String,
}

/// Body of `POST /check_code`.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct CodeCheck {
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /register`.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct RegisterRequest {
    pub id: String,
    pub password: String,
    pub password_confirm: String,
    pub nickname: String,
    pub email: String,
    pub name: String,
}

/// Registration form as the user fills it in.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct RegisterForm {
    pub id: String,
    pub password: String,
    pub password_confirm: String,
    pub nickname: String,
    pub email_local: String,
    pub email_domain: String,
    pub name: String,
}

impl RegisterForm {
    pub fn email(&self) -> String {
        let local = self.email_local.trim();
        let domain = self.email_domain.trim();
        if local.is_empty() || domain.is_empty() {
            return String::new();
        }
        format!("{}@{}", local, domain)
    }

    /// Check the form and build the request, trimming text fields.
    pub fn validate(&self, email_verified: bool) -> Result<RegisterRequest> {
        let email = self.email();
        let required = [
            &self.id,
            &self.password,
            &self.password_confirm,
            &self.nickname,
            &email,
            &self.name,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(ApiError::Validation("모든 필드를 입력해주세요.".into()));
        }
        if self.password != self.password_confirm {
            return Err(ApiError::Validation("비밀번호가 일치하지 않습니다.".into()));
        }
        if self.id.trim().chars().count() < MIN_ID_LEN {
            return Err(ApiError::Validation(format!(
                "아이디는 {}글자 이상이어야 합니다.",
                MIN_ID_LEN
            )));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "비밀번호는 {}글자 이상이어야 합니다.",
                MIN_PASSWORD_LEN
            )));
        }
        if !email_verified {
            return Err(ApiError::Validation("이메일 인증이 필요합니다.".into()));
        }
        Ok(RegisterRequest {
            id: self.id.trim().to_string(),
            password: self.password.clone(),
            password_confirm: self.password_confirm.clone(),
            nickname: self.nickname.trim().to_string(),
            email,
            name: self.name.trim().to_string(),
        })
    }
}

/// Social login is a full-page redirect handled by the backend.
pub fn kakao_login_url(base_url: &str) -> String {
    format!("{}/auth/kakao", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterForm {
        RegisterForm {
            id: " farmer ".into(),
            password: "abcd".into(),
            password_confirm: "abcd".into(),
            nickname: "Kim".into(),
            email_local: "kim".into(),
            email_domain: "example.com".into(),
            name: "Kim Farmer".into(),
        }
    }

    #[test]
    fn valid_form_builds_trimmed_request() {
        let req = filled().validate(true).unwrap();
        assert_eq!(req.id, "farmer");
        assert_eq!(req.email, "kim@example.com");
    }

    #[test]
    fn rejects_mismatched_passwords() {
        let mut form = filled();
        form.password_confirm = "abce".into();
        assert!(matches!(form.validate(true), Err(ApiError::Validation(_))));
    }

    #[test]
    fn rejects_short_id_and_password() {
        let mut form = filled();
        form.id = "ab".into();
        assert!(form.validate(true).is_err());

        let mut form = filled();
        form.password = "abc".into();
        form.password_confirm = "abc".into();
        assert!(form.validate(true).is_err());
    }

    #[test]
    fn rejects_unverified_email_and_missing_fields() {
        assert!(filled().validate(false).is_err());
        let mut form = filled();
        form.email_domain.clear();
        assert!(form.validate(true).is_err());
    }

    #[test]
    fn logged_out_status_has_no_session() {
        assert_eq!(LoginStatus::default().into_session(), None);
        let status = LoginStatus {
            logged_in: true,
            user_id: Some("farmer".into()),
            nickname: None,
        };
        assert_eq!(status.into_session().unwrap().user_id, "farmer");
    }

    #[test]
    fn kakao_url() {
        assert_eq!(
            kakao_login_url("http://localhost:5000/"),
            "http://localhost:5000/auth/kakao"
        );
    }
}
