pub mod client;
pub mod commands;
pub mod types;

pub use client::wait_until_ready;
pub use commands::{key_type, replace_set, smembers};

