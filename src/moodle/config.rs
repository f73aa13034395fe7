pub mod session {
    pub const VERBOSE: bool = false;
    pub const FIREFOX_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";
    pub const MAX_REDIRECTS: usize = 10;
}
pub mod path {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login/index.php";
    pub const ATTENDANCE: &str = "/mod/attendance/attendance.php";
}
