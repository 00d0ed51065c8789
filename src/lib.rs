/// Lambda Pipeline — Shared Library
///
/// This crate contains the version resolution and response
/// composition shared by the API handlers.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and logic reusable.

pub mod response;
pub mod version;
