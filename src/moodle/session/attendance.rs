extern crate log;
extern crate regex;

use super::{search::failure_reason, Session};
use crate::{
    config::path::ATTENDANCE,
    error::{Error, Result},
};
use log::{info, warn};
use regex::Regex;
use reqwest::Url;

pub(super) struct RegexSet {
    error: Regex,
}
impl RegexSet {
    pub(super) fn new() -> Self {
        Self {
            error: Regex::new(r#"(?i)<p class="errormessage">([^"]*)</p>"#).unwrap(),
        }
    }
}

/// The `qrpass`/`sessid` pair a session's QR code points at.
///
/// Values are kept exactly as they appear in the query string and are sent
/// back without re-encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceLink {
    pub qr_pass: String,
    pub sess_id: String,
}
impl AttendanceLink {
    pub fn new<T: Into<String>, U: Into<String>>(qr_pass: T, sess_id: U) -> Self {
        Self {
            qr_pass: qr_pass.into(),
            sess_id: sess_id.into(),
        }
    }
    /// Reads the pair from a full attendance url such as
    /// `https://moodle.example.edu/mod/attendance/attendance.php?qrpass=x&sessid=1`.
    pub fn parse(link: &str) -> Result<Self> {
        let url = Url::parse(link.trim())?;
        let mut qr_pass = None;
        let mut sess_id = None;
        for pair in url.query().unwrap_or_default().split('&') {
            match pair.split_once('=') {
                Some(("qrpass", v)) => qr_pass = Some(v),
                Some(("sessid", v)) => sess_id = Some(v),
                _ => {}
            }
        }
        match (qr_pass, sess_id) {
            (Some(q), Some(s)) => Ok(Self::new(q, s)),
            (None, _) => Err(Error::InvalidLink(String::from("missing qrpass"))),
            (_, None) => Err(Error::InvalidLink(String::from("missing sessid"))),
        }
    }
}

impl Session {
    /// Marks attendance. Only an error response counts as failure; the body of
    /// a 2xx response is not inspected.
    pub async fn update_attendance(&self, qr_pass: &str, sess_id: &str) -> Result<()> {
        let url = self.build_url(&format!(
            "{}?qrpass={}&sessid={}",
            ATTENDANCE, qr_pass, sess_id
        ))?;
        match self.execute(self.client.get(url)).await {
            Ok(response) => {
                info!("Attendance updated at {}", response.url());
                Ok(())
            }
            Err(err) if err.is_transport() => {
                warn!("Attendance update for session {} failed: {}", sess_id, err);
                Err(Error::AttendanceUpdate {
                    reason: failure_reason(&err, &self.regex.attendance.error),
                })
            }
            Err(err) => Err(err),
        }
    }
    pub async fn update_attendance_link(&self, link: &AttendanceLink) -> Result<()> {
        self.update_attendance(link.qr_pass.as_str(), link.sess_id.as_str())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_link_keeping_raw_values() {
        let link = AttendanceLink::parse(
            "https://moodle.example.edu/mod/attendance/attendance.php?qrpass=a%2Bb&sessid=42",
        )
        .unwrap();
        assert_eq!(link, AttendanceLink::new("a%2Bb", "42"));
    }

    #[test]
    fn parses_link_with_parameters_swapped() {
        let link = AttendanceLink::parse(
            "https://moodle.example.edu/mod/attendance/attendance.php?sessid=9&foo=bar&qrpass=xyz",
        )
        .unwrap();
        assert_eq!(link, AttendanceLink::new("xyz", "9"));
    }

    #[test]
    fn link_without_sessid() {
        let err = AttendanceLink::parse("https://moodle.example.edu/?qrpass=xyz").unwrap_err();
        assert_eq!(err.to_string(), "Invalid attendance link: missing sessid");
    }

    #[test]
    fn link_must_be_absolute() {
        assert!(matches!(
            AttendanceLink::parse("attendance.php?qrpass=1&sessid=2"),
            Err(Error::Url(_))
        ));
    }

    #[test]
    fn error_paragraph_text() {
        let set = RegexSet::new();
        let page = r#"<div role="main"><p class="errormessage">Session expired</p></div>"#;
        assert_eq!(
            super::super::search::search_text(page, &set.error).as_deref(),
            Some("Session expired")
        );
    }
}
