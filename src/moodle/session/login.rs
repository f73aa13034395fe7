extern crate log;
extern crate regex;

use super::{
    search::{failure_reason, search_text},
    Session,
};
use crate::{
    config::path::LOGIN,
    error::{Error, Result},
};
use log::{debug, info, warn};
use regex::Regex;

pub(super) struct RegexSet {
    token: Regex,
    error: Regex,
}
impl RegexSet {
    pub(super) fn new() -> Self {
        RegexSet {
            token: Regex::new(r#"(?i)<input type="hidden" name="logintoken" value="([^"]*)">"#)
                .unwrap(),
            error: Regex::new(
                r##"(?i)<a href="#" id="loginerrormessage" class="sr-only">([^"]*)</a>"##,
            )
            .unwrap(),
        }
    }
}

impl Session {
    pub(super) fn find_login_token(&self, page: &str) -> Result<String> {
        search_text(page, &self.regex.login.token)
            .ok_or(Error::Structure("Could not find login token"))
    }
    fn login_failure(&self, err: Error) -> Error {
        if err.is_transport() {
            let reason = failure_reason(&err, &self.regex.login.error);
            warn!("Login to {} failed: {}", self.base, err);
            Error::Login { reason }
        } else {
            err
        }
    }

    /// Fetches the login token, submits the credentials and checks that the
    /// redirect chain ends at the site root.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let url = self.build_url(LOGIN)?;
        let page = self
            .get_text(url.clone())
            .await
            .map_err(|e| self.login_failure(e))?;
        let token = self.find_login_token(&page)?;
        debug!("Got login token from {}", url);

        let response = self
            .execute(self.client.post(url).form(&[
                ("username", username),
                ("password", password),
                ("logintoken", token.as_str()),
            ]))
            .await
            .map_err(|e| self.login_failure(e))?;
        if response.url() == &self.root {
            info!("Logged into {} as {}", self.base, username);
            return Ok(());
        }
        let landed = response.url().clone();
        let page = response
            .text()
            .await
            .map_err(|e| self.login_failure(e.into()))?;
        let reason = search_text(&page, &self.regex.login.error);
        warn!("Login to {} ended at {}", self.base, landed);
        Err(Error::Login { reason })
    }
}
