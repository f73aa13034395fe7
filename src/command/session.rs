extern crate termcolor;

use crate::read::{read_line, read_writer};
use moodle_attend::{
    account::{self, Account},
    Session,
};
use std::io::{Read, Write};
use termcolor::StandardStream;

pub async fn login<R: Read>(stdout: &mut StandardStream, rdr: R) -> Option<Session> {
    let account = match account::from_reader(rdr) {
        Ok(v) => v,
        Err(e) => {
            write_error!(stdout, "Error", "{}", e);
            return None;
        }
    };
    write_info!(stdout, "Info", "Logging into {}...", account.base_url);
    match Session::from_account(&account).await {
        Ok(v) => {
            write_ok!(stdout, "Success", "Logged into {}", account.base_url);
            Some(v)
        }
        Err(e) => {
            write_error!(stdout, "Error", "login: {}", e);
            None
        }
    }
}

/// Prompts for an account and saves it. Gives up silently at end of input.
pub fn create_account(stdout: &mut StandardStream) -> Option<()> {
    let account = Account {
        base_url: read_line(stdout, b"Site url: ")?,
        username: read_line(stdout, b"Username: ")?,
        password: read_line(stdout, b"Password: ")?,
        proxy: Some(read_line(stdout, b"Https proxy (empty for none): ")?)
            .filter(|p| !p.is_empty()),
    };
    let wdr = read_writer(stdout)?;
    match account::to_writer(wdr, &account) {
        Ok(_) => write_ok!(stdout, "Success", "Written to file"),
        Err(e) => write_error!(stdout, "Error", "Error write file: {}", e),
    }
    Some(())
}
