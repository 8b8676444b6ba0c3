//! ghkit - GitHub profile lookup and password strength checks
//!
//! Two independent pieces shared by the `ghkit` and `pwcheck` binaries.

pub mod config;
pub mod github;
pub mod password;

#[cfg(test)]
mod test_utils;

pub use github::{fetch_user, FetchError, GithubClient, UserProfile};
pub use password::validate_password;
