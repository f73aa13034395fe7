extern crate regex;

use crate::error::Error;
use regex::Regex;

pub(super) fn search_text(text: &str, regex: &Regex) -> Option<String> {
    regex
        .captures(text)
        .and_then(|v| v.get(1))
        .map(|v| v.as_str().to_owned())
}

/// Text of the page's error element when the failing response carried one,
/// otherwise the message of the error itself.
pub(super) fn failure_reason(err: &Error, regex: &Regex) -> Option<String> {
    err.body()
        .and_then(|body| search_text(body, regex))
        .or_else(|| Some(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{StatusCode, Url};

    fn paragraph() -> Regex {
        Regex::new(r#"<p class="note">([^"]*)</p>"#).unwrap()
    }

    #[test]
    fn captures_first_group() {
        assert_eq!(
            search_text(r#"<div><p class="note">hello</p></div>"#, &paragraph()),
            Some(String::from("hello"))
        );
        assert_eq!(search_text("<div></div>", &paragraph()), None);
    }

    #[test]
    fn reason_prefers_page_text() {
        let err = Error::Status {
            status: StatusCode::FORBIDDEN,
            url: Url::parse("https://moodle.example.edu/").unwrap(),
            body: String::from(r#"<p class="note">Denied</p>"#),
        };
        assert_eq!(failure_reason(&err, &paragraph()), Some(String::from("Denied")));
    }

    #[test]
    fn reason_falls_back_to_message() {
        let err = Error::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: Url::parse("https://moodle.example.edu/").unwrap(),
            body: String::from("oops"),
        };
        assert_eq!(
            failure_reason(&err, &paragraph()),
            Some(String::from(
                "Request failed with status code 500 Internal Server Error"
            ))
        );
    }
}
