extern crate log;
extern crate reqwest;

use super::Session;
use crate::{
    config::session::MAX_REDIRECTS,
    error::{Error, Result},
};
use log::debug;
use reqwest::{
    cookie::CookieStore,
    header::{COOKIE, LOCATION, SET_COOKIE},
    Request, RequestBuilder, Response, StatusCode, Url,
};

const REDIRECT_STATUS: [StatusCode; 5] = [
    StatusCode::MOVED_PERMANENTLY,
    StatusCode::FOUND,
    StatusCode::SEE_OTHER,
    StatusCode::TEMPORARY_REDIRECT,
    StatusCode::PERMANENT_REDIRECT,
];

enum Hop {
    Done,
    Redirect(Url),
    Failed,
}

fn redirect_target(response: &Response) -> Option<Url> {
    let location = response.headers().get(LOCATION)?.to_str().ok()?;
    response.url().join(location).ok()
}
fn classify(response: &Response) -> Hop {
    let status = response.status();
    if status.is_success() {
        Hop::Done
    } else if REDIRECT_STATUS.contains(&status) {
        redirect_target(response).map_or(Hop::Failed, Hop::Redirect)
    } else {
        Hop::Failed
    }
}
async fn status_error(response: Response) -> Error {
    let status = response.status();
    let url = response.url().clone();
    match response.text().await {
        Ok(body) => Error::Status { status, url, body },
        Err(e) => Error::Network(e),
    }
}

impl Session {
    fn attach_cookies(&self, request: &mut Request) {
        match self.cookies.cookies(request.url()) {
            Some(value) => {
                request.headers_mut().insert(COOKIE, value);
            }
            None => {
                request.headers_mut().remove(COOKIE);
            }
        }
    }
    fn store_cookies(&self, response: &Response, url: &Url) {
        self.cookies
            .set_cookies(&mut response.headers().get_all(SET_COOKIE).iter(), url);
    }

    /// Sends `builder` and follows redirects by hand, returning the response of
    /// the last hop. Cookies set by any hop, including failing ones, are stored
    /// before the next request is built. A final status outside 2xx comes back
    /// as [`Error::Status`] carrying the page body.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let mut request = builder.build()?;
        for _ in 0..=MAX_REDIRECTS {
            self.attach_cookies(&mut request);
            let url = request.url().clone();
            debug!("{} {}", request.method(), url);
            let response = self.client.execute(request).await?;
            debug!("{} <- {}", response.status(), url);
            self.store_cookies(&response, &url);
            request = match classify(&response) {
                Hop::Done => return Ok(response),
                Hop::Redirect(target) => {
                    debug!("Redirected to {}", target);
                    self.client.get(target).build()?
                }
                Hop::Failed => return Err(status_error(response).await),
            };
        }
        Err(Error::TooManyRedirects(request.url().clone()))
    }
}
