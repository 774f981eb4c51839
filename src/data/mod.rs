//! Persistent data: session files

pub mod session;

pub use session::{load_session, save_session, Session};
