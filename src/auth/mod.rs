//! Authentication module
//!
//! Requests carry an `x-application-id` header, an `x-api-key` header, or
//! both, depending on which tokens the client was configured with.

mod credentials;

pub use credentials::{Credentials, API_KEY_HEADER, APPLICATION_ID_HEADER};

#[cfg(test)]
mod tests;
