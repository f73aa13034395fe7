extern crate termcolor;

use moodle_attend::AttendanceLink;
use std::{
    fs::File,
    io::{self, stdin, BufRead, Read, Write},
};
use termcolor::{StandardStream, WriteColor};

/// Reads one line into `dest` without the line ending. `Ok(false)` means the
/// input is exhausted.
fn next_line<R: BufRead>(input: &mut R, dest: &mut String) -> io::Result<bool> {
    dest.clear();
    if input.read_line(dest)? == 0 {
        return Ok(false);
    }
    dest.truncate(dest.trim_end().len());
    Ok(true)
}

/// Prompts until a line is read. Returns `false` at end of input.
#[allow(unused_must_use)]
pub fn read_line_to(stdout: &mut StandardStream, prompt: &[u8], dest: &mut String) -> bool {
    loop {
        stdout.write(prompt);
        stdout.flush();
        match next_line(&mut stdin().lock(), dest) {
            Ok(v) => return v,
            Err(e) => write_error!(stdout, "Error", "Read: {}", e),
        }
        stdout.reset();
    }
}
pub fn read_line(stdout: &mut StandardStream, prompt: &[u8]) -> Option<String> {
    let mut ret = String::new();
    if read_line_to(stdout, prompt, &mut ret) {
        Some(ret)
    } else {
        None
    }
}

/// Accepts either a scanned attendance url or the two values typed separately.
#[allow(unused_must_use)]
pub fn read_link(stdout: &mut StandardStream) -> Option<AttendanceLink> {
    let mut buf = String::new();
    loop {
        if !read_line_to(stdout, b"Link or qrpass: ", &mut buf) {
            return None;
        }
        if !buf.contains("://") {
            let sess_id = read_line(stdout, b"Session id: ")?;
            return Some(AttendanceLink::new(buf, sess_id));
        }
        match AttendanceLink::parse(&buf) {
            Ok(v) => return Some(v),
            Err(e) => write_error!(stdout, "Error", "parse: {}", e),
        }
        stdout.reset();
    }
}

#[allow(unused_must_use)]
fn read_file_path<F: Fn(&String) -> Result<Ret, io::Error>, Ret>(
    stdout: &mut StandardStream,
    fun: F,
) -> Option<Ret> {
    let mut path = String::new();
    loop {
        if !read_line_to(stdout, b"File path: ", &mut path) {
            return None;
        }
        match fun(&path) {
            Ok(v) => return Some(v),
            Err(e) => write_error!(stdout, "Error", "Error open {}: {}", path, e),
        }
        stdout.reset();
    }
}

pub fn read_reader(stdout: &mut StandardStream) -> Option<impl Read> {
    read_file_path(stdout, |x| File::open(x))
}

pub fn read_writer(stdout: &mut StandardStream) -> Option<impl Write> {
    read_file_path(stdout, |x| File::create(x))
}

#[cfg(test)]
mod tests {
    use super::next_line;

    #[test]
    fn lines_lose_their_endings() {
        let mut input: &[u8] = b"attend\r\nexit\n";
        let mut buf = String::new();
        assert!(next_line(&mut input, &mut buf).unwrap());
        assert_eq!(buf, "attend");
        assert!(next_line(&mut input, &mut buf).unwrap());
        assert_eq!(buf, "exit");
    }

    #[test]
    fn blank_line_is_not_end_of_input() {
        let mut input: &[u8] = b"\n";
        let mut buf = String::from("stale");
        assert!(next_line(&mut input, &mut buf).unwrap());
        assert_eq!(buf, "");
        assert!(!next_line(&mut input, &mut buf).unwrap());
    }

    #[test]
    fn empty_input_ends() {
        let mut input: &[u8] = b"";
        let mut buf = String::new();
        assert!(!next_line(&mut input, &mut buf).unwrap());
        assert!(buf.is_empty());
    }
}
