extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, Arg, Command};
use moodle_attend::{AttendanceLink, Session};
use pretty_env_logger::init_timed;
use std::{fs::File, io::Write};
use termcolor::{ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod attendance;
    pub mod session;
}
mod read;

use command::{
    attendance::attend,
    session::{create_account, login},
};
use read::{read_line, read_link, read_reader};

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(Arg::new("account").help("Path to account file"))
        .arg(
            Arg::new("link")
                .long("link")
                .takes_value(true)
                .requires("account")
                .help("Attendance url to open after logging in, then exit"),
        )
        .arg(
            Arg::new("qrpass")
                .long("qrpass")
                .takes_value(true)
                .requires_all(&["account", "sessid"])
                .conflicts_with("link")
                .help("Attendance pass to submit after logging in, then exit"),
        )
        .arg(
            Arg::new("sessid")
                .long("sessid")
                .takes_value(true)
                .requires("qrpass")
                .help("Attendance session id that goes with --qrpass"),
        )
        .get_matches();
    let mut session: Option<Session> = None;
    if let Some(f) = app.value_of("account") {
        match File::open(f) {
            Ok(v) => session = login(&mut stdout, v).await,
            Err(e) => write_error!(&mut stdout, "Error", "Error open {}: {}", f, e),
        }
        stdout.reset();
    }
    let link = match (app.value_of("link"), app.value_of("qrpass"), app.value_of("sessid")) {
        (Some(l), _, _) => Some(AttendanceLink::parse(l)),
        (None, Some(q), Some(s)) => Some(Ok(AttendanceLink::new(q, s))),
        _ => None,
    };
    if let Some(link) = link {
        match (&session, link) {
            (Some(s), Ok(l)) => attend(&mut stdout, s, &l).await,
            (None, _) => write_error!(&mut stdout, "Error", "Not logged in"),
            (_, Err(e)) => write_error!(&mut stdout, "Error", "parse: {}", e),
        }
        stdout.reset();
        return;
    }
    while let Some(line) = read_line(&mut stdout, b"moodle-attend> ") {
        match line.trim() {
            "attend" => match &session {
                Some(s) => match read_link(&mut stdout) {
                    Some(link) => attend(&mut stdout, s, &link).await,
                    None => break,
                },
                None => write_error!(&mut stdout, "Error", "Not logged in!"),
            },
            "login" => match read_reader(&mut stdout) {
                Some(rdr) => {
                    if let Some(s) = login(&mut stdout, rdr).await {
                        session = Some(s);
                    }
                }
                None => break,
            },
            "new" => {
                if create_account(&mut stdout).is_none() {
                    break;
                }
            }
            "exit" => break,
            unknown => write_error!(
                &mut stdout,
                "Error",
                r#"moodle-attend: unknown command "{}""#,
                unknown
            ),
        }
        stdout.reset();
    }
}
