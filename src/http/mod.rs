//! HTTP gateway module
//!
//! One generic request method over `reqwest`. Each call sends exactly one
//! request: there is no retry, backoff, caching or rate limiting.

mod client;
mod response;

pub use client::Gateway;
pub use response::{ApiResponse, ResponseBody};
