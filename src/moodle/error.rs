extern crate reqwest;
extern crate serde_yaml;
extern crate thiserror;
extern crate url;

use reqwest::{header::InvalidHeaderValue, StatusCode, Url};
use std::result::Result as StdResult;
use thiserror::Error;

fn describe(reason: &Option<String>) -> String {
    match reason {
        Some(r) => format!(": {}", r),
        None => String::new(),
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Login failed{}", describe(.reason))]
    Login { reason: Option<String> },
    #[error("Attendance update failed{}", describe(.reason))]
    AttendanceUpdate { reason: Option<String> },
    /// A marker the target page is expected to carry was not found.
    #[error("Unexpected page structure: {0}")]
    Structure(&'static str),
    #[error("Request failed with status code {status}")]
    Status {
        status: StatusCode,
        url: Url,
        body: String,
    },
    #[error("Error sending request: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Too many redirects, stopped at {0}")]
    TooManyRedirects(Url),
    #[error("Invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("Invalid attendance link: {0}")]
    InvalidLink(String),
    #[error("Invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),
    #[error("Error loading account: {0}")]
    Account(#[from] serde_yaml::Error),
}

pub type Result<T> = StdResult<T, Error>;

impl Error {
    /// Failures raised by the transport, as opposed to page or setup problems.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Status { .. } | Error::Network(_) | Error::TooManyRedirects(_)
        )
    }
    pub fn reason(&self) -> Option<&str> {
        match self {
            Error::Login { reason } | Error::AttendanceUpdate { reason } => reason.as_deref(),
            _ => None,
        }
    }
    pub(crate) fn body(&self) -> Option<&str> {
        match self {
            Error::Status { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_message_includes_reason() {
        let err = Error::Login {
            reason: Some(String::from("Invalid login, please try again")),
        };
        assert_eq!(
            err.to_string(),
            "Login failed: Invalid login, please try again"
        );
        assert_eq!(err.reason(), Some("Invalid login, please try again"));
    }

    #[test]
    fn attendance_message_without_reason() {
        let err = Error::AttendanceUpdate { reason: None };
        assert_eq!(err.to_string(), "Attendance update failed");
        assert_eq!(err.reason(), None);
    }

    #[test]
    fn status_is_transport_and_keeps_body() {
        let err = Error::Status {
            status: StatusCode::NOT_FOUND,
            url: Url::parse("https://moodle.example.edu/missing").unwrap(),
            body: String::from("<p>gone</p>"),
        };
        assert!(err.is_transport());
        assert_eq!(err.body(), Some("<p>gone</p>"));
        assert_eq!(
            err.to_string(),
            "Request failed with status code 404 Not Found"
        );
    }

    #[test]
    fn structure_is_not_transport() {
        let err = Error::Structure("Could not find login token");
        assert!(!err.is_transport());
        assert_eq!(err.body(), None);
    }
}
