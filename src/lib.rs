//! Fetch a GitHub organization's metadata and list its public repositories,
//! optionally keeping only those under a given license.

pub mod client;
pub mod error;
pub mod transport;
pub mod utils;

pub use client::GithubOrgClient;
pub use error::{Error, Result};
pub use transport::{JsonTransport, ReqwestTransport};
pub use utils::{Memo, access_nested_map, get_json};
