//! bookreview_client - Typed client and CLI for the bookreview API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::BookReviewClient;
pub use error::{ClientError, Result};
