extern crate regex;
extern crate reqwest;
extern crate serde;

mod attendance;
mod login;
mod redirect;
mod search;

pub use attendance::AttendanceLink;

use crate::{
    config::{
        path::ROOT,
        session::{FIREFOX_UA, VERBOSE},
    },
    error::{Error, Result},
};
use reqwest::{
    cookie::Jar,
    header::{HeaderMap, HeaderValue, HOST},
    redirect::Policy,
    Client, ClientBuilder, Method, Proxy, RequestBuilder, Response, Url,
};
use serde::Serialize;

struct UtilityRegex {
    login: login::RegexSet,
    attendance: attendance::RegexSet,
}
impl UtilityRegex {
    fn new() -> Self {
        Self {
            login: login::RegexSet::new(),
            attendance: attendance::RegexSet::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub base_url: String,
    pub proxy: Option<String>,
}
impl SessionOptions {
    pub fn new<T: Into<String>>(base_url: T) -> Self {
        Self {
            base_url: base_url.into(),
            proxy: None,
        }
    }
}

/// A logged in (or about to be) browser-like session against one moodle site.
///
/// Redirects are never followed by the transport; every hop goes through
/// [`Session::execute`] so cookies are captured on each response.
pub struct Session {
    client: Client,
    cookies: Jar,
    base: String,
    root: Url,
    regex: UtilityRegex,
}

/// `host[:port]` as sent in the `Host` header.
fn authority(url: &Url) -> Result<String> {
    let host = url
        .host_str()
        .ok_or(Error::Url(url::ParseError::EmptyHost))?;
    Ok(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_owned(),
    })
}

impl Session {
    fn from_client(builder: ClientBuilder, base_url: &str) -> Result<Self> {
        let base = base_url.trim_end_matches('/').to_owned();
        let root = Url::parse(&format!("{}{}", base, ROOT))?;
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_str(&authority(&root)?)?);
        Ok(Session {
            client: builder
                .user_agent(FIREFOX_UA)
                .redirect(Policy::none())
                .default_headers(headers)
                .connection_verbose(VERBOSE)
                .build()?,
            cookies: Jar::default(),
            base,
            root,
            regex: UtilityRegex::new(),
        })
    }
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_client(Client::builder(), base_url)
    }
    pub fn with_options(options: &SessionOptions) -> Result<Self> {
        let builder = match &options.proxy {
            Some(p) => Client::builder().proxy(Proxy::https(p.as_str())?),
            None => Client::builder(),
        };
        Self::from_client(builder, options.base_url.as_str())
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
    pub fn cookies(&self) -> &Jar {
        &self.cookies
    }
    /// Site root; a login is complete once a request lands here.
    pub fn root(&self) -> &Url {
        &self.root
    }
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// Resolves `path` (which may carry a query string) against the base url.
    pub fn build_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}/{}",
            self.base,
            path.trim_start_matches('/')
        ))?)
    }
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        Ok(self.client.request(method, self.build_url(path)?))
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        self.execute(self.request(Method::GET, path)?).await
    }
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Result<Response> {
        self.execute(self.request(Method::POST, path)?.form(form))
            .await
    }
    pub async fn put<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Result<Response> {
        self.execute(self.request(Method::PUT, path)?.form(form))
            .await
    }
    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.execute(self.request(Method::DELETE, path)?).await
    }

    pub(super) async fn get_text(&self, url: Url) -> Result<String> {
        Ok(self.execute(self.client.get(url)).await?.text().await?)
    }
}
