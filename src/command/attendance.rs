extern crate termcolor;

use moodle_attend::{AttendanceLink, Session};
use std::io::Write;
use termcolor::StandardStream;

pub async fn attend(stdout: &mut StandardStream, session: &Session, link: &AttendanceLink) {
    write_info!(stdout, "Info", "Marking attendance for session {}", link.sess_id);
    match session.update_attendance_link(link).await {
        Ok(_) => write_ok!(stdout, "Success", "Attendance updated"),
        Err(e) => write_error!(stdout, "Error", "attend: {}", e),
    }
}
