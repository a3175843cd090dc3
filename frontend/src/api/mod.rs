pub mod auth;
pub mod client;
pub mod types;

pub use auth::*;
pub use client::*;
pub use types::*;
