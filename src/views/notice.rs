//! Transient notifications.
//!
//! A notice set by a mutation survives exactly one redirect: it is stored in
//! a cookie, shown by the next dashboard render and removed there.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;

/// Cookie carrying the pending notice.
pub const NOTICE_COOKIE_NAME: &str = "studio_notice";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

impl std::str::FromStr for NoticeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            _ => Err(format!("Unknown notice kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    fn encode(&self) -> String {
        format!(
            "{}:{}",
            self.kind.as_str(),
            urlencoding::encode(&self.message)
        )
    }

    fn decode(value: &str) -> Option<Self> {
        let (kind, message) = value.split_once(':')?;
        let kind = kind.parse().ok()?;
        let message = urlencoding::decode(message).ok()?.into_owned();
        Some(Self { kind, message })
    }
}

/// Store a notice for the next render.
pub fn set_notice(jar: CookieJar, notice: &Notice) -> CookieJar {
    jar.add(
        Cookie::build((NOTICE_COOKIE_NAME, notice.encode()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Take the pending notice, removing its cookie.
pub fn take_notice(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let Some(cookie) = jar.get(NOTICE_COOKIE_NAME) else {
        return (jar, None);
    };
    let notice = Notice::decode(cookie.value());
    let jar = jar.remove(Cookie::build(NOTICE_COOKIE_NAME).path("/"));
    (jar, notice)
}
