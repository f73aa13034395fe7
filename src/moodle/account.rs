extern crate serde;
extern crate serde_yaml;

use crate::{
    error::Result,
    session::{Session, SessionOptions},
};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub proxy: Option<String>,
}
impl Account {
    pub fn options(&self) -> SessionOptions {
        SessionOptions {
            base_url: self.base_url.clone(),
            proxy: self.proxy.clone(),
        }
    }
}

pub fn from_reader<R: Read>(rdr: R) -> Result<Account> {
    Ok(serde_yaml::from_reader(rdr)?)
}
pub fn to_writer<W: Write>(wdr: W, account: &Account) -> Result<()> {
    serde_yaml::to_writer(wdr, account)?;
    Ok(())
}

impl Session {
    pub async fn from_account(account: &Account) -> Result<Self> {
        let ret = Self::with_options(&account.options())?;
        ret.login(account.username.as_str(), account.password.as_str())
            .await?;
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = r#"
base_url: https://moodle.example.edu
username: alice
password: hunter2
"#;

    #[test]
    fn reads_account_without_proxy() {
        let account = from_reader(ACCOUNT.as_bytes()).unwrap();
        assert_eq!(account.base_url, "https://moodle.example.edu");
        assert_eq!(account.username, "alice");
        assert_eq!(account.password, "hunter2");
        assert_eq!(account.proxy, None);
    }

    #[test]
    fn written_account_reads_back() {
        let account = Account {
            base_url: String::from("https://moodle.example.edu/"),
            username: String::from("bob"),
            password: String::from("pa:ss"),
            proxy: Some(String::from("http://127.0.0.1:3128")),
        };
        let mut buf = Vec::new();
        to_writer(&mut buf, &account).unwrap();
        assert_eq!(from_reader(buf.as_slice()).unwrap(), account);
    }

    #[test]
    fn missing_field_is_account_error() {
        let err = from_reader("username: alice\n".as_bytes()).unwrap_err();
        assert!(matches!(err, crate::Error::Account(_)));
    }
}
