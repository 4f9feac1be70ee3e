//! Data transfer objects for the shortening service API.

pub mod shorten;

pub use shorten::{ShortenRequest, ShortenResponse};
