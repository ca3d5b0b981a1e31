//! Campus redressal core: the session-to-role gate and the complaint
//! lifecycle, with Postgres and in-memory adapters behind async ports.

pub mod domain;
pub mod application;
pub mod infrastructure;
