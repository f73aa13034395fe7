extern crate termcolor;

use std::io::Write;
use termcolor::{Color, ColorSpec, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    Ok,
    Info,
    Error,
}
impl Level {
    fn color(self) -> Color {
        match self {
            Level::Ok => Color::Green,
            Level::Info => Color::Blue,
            Level::Error => Color::Red,
        }
    }
}

/// Writes the right aligned, colored `label: ` prefix of a status line.
pub fn write_label<W: WriteColor>(dest: &mut W, level: Level, label: &str) {
    dest.set_color(ColorSpec::new().set_fg(Some(level.color())).set_intense(true))
        .expect("Error: can't set output color");
    write!(dest, "{:>7}: ", label).expect("Failed to write output");
    dest.reset().expect("Error: Can't reset color");
}

// Expression position safe: each expands to a block of type `()`.
macro_rules! write_status {
    ($dest:expr, $level:expr, $label:expr, $($arg:tt)*) => {{
        $crate::color::write_label($dest, $level, $label);
        writeln!($dest, $($arg)*).expect("Failed to write output")
    }};
}

macro_rules! write_error {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_status!($dest, $crate::color::Level::Error, $label, $($arg)*)
    };
}

macro_rules! write_info {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_status!($dest, $crate::color::Level::Info, $label, $($arg)*)
    };
}

macro_rules! write_ok {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_status!($dest, $crate::color::Level::Ok, $label, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use termcolor::Buffer;

    fn report(buf: &mut Buffer, ok: bool) {
        match ok {
            true => write_ok!(buf, "Success", "done {}", 1),
            false => write_error!(buf, "Error", "failed {}", 2),
        }
    }

    #[test]
    fn status_macros_work_as_match_arms() {
        let mut buf = Buffer::no_color();
        report(&mut buf, true);
        report(&mut buf, false);
        write_info!(&mut buf, "Info", "plain");
        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "Success: done 1\n  Error: failed 2\n   Info: plain\n"
        );
    }
}
