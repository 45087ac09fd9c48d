//! Canonical github.com links for the URLs the GitHub API hands out.

pub mod data;
pub mod github;
pub mod links;
pub mod output;
pub mod platform;
pub mod url;

pub use platform::{ByContext, ContextProvider, RenderingContext, select};
pub use url::{GitHubUrlOptions, fix_url, github_html_url_from_api_url};
