pub mod account;
pub(crate) mod config;
pub mod error;
pub mod session;

pub use error::{Error, Result};
pub use session::{AttendanceLink, Session, SessionOptions};
