//! UniHelp Client - async REST client for the campus backend
//!
//! Thin typed wrappers over the Request Directory, Work Assignment, Funding,
//! and Member services. Client-side preconditions (empty completion report,
//! out-of-range rating, joining a non-group-fundable request) are rejected
//! before a request is ever sent; backend errors are passed through with
//! their status and body unchanged, no retries.

pub mod client;
pub mod error;
pub mod funding;
pub mod profile;
pub mod requests;
pub mod session;
pub mod work;

pub use client::UniHelpClient;
pub use error::{ClientError, Result};
pub use session::Session;
