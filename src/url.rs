//! Mapping GitHub REST API URLs to the pages a person would open in a browser.
//!
//! Every function here is total: malformed or partial input yields an empty string
//! (or `None` for the id extractors), never an error.

use std::fmt::Display;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::data::GitHubRepo;
use crate::platform::{ByContext, ContextProvider, select};

pub const BASE_URL: &str = "https://github.com";

/// Hints for [`github_html_url_from_api_url`] and [`fix_url`].
///
/// Zero ids are treated the same as missing ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GitHubUrlOptions {
    /// Scroll to the end of the page unless the url already has a fragment.
    pub add_bottom_anchor: bool,
    pub comment_id: Option<u64>,

    /// Where comment urls should point to, since the API url of a comment doesn't say.
    pub issue_or_pull_request_number: Option<u64>,
}

impl GitHubUrlOptions {
    fn comment_id(&self) -> Option<u64> {
        self.comment_id.filter(|&id| id != 0)
    }

    fn issue_or_pull_request_number(&self) -> Option<u64> {
        self.issue_or_pull_request_number.filter(|&number| number != 0)
    }
}

fn group<'a>(captures: &Captures<'a>, index: usize) -> Option<&'a str> {
    captures.get(index).map(|m| m.as_str())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// `/comments/123` or `/comments/123?query`
pub fn get_comment_id_from_url(url: &str) -> Option<u64> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"/comments/([0-9]+)([?].+)?$").unwrap());

    let captures = re.captures(url)?;
    group(&captures, 1)?.parse().ok().filter(|&id: &u64| id != 0)
}

/// `/commits/{sha}` or `/commits/{sha}?query`
pub fn get_commit_sha_from_url(url: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"/commits/([a-zA-Z0-9]+)([?].+)?$").unwrap());

    let captures = re.captures(url)?;
    group(&captures, 1).map(str::to_owned)
}

/// `/issues/42` or `/pulls/42`, optionally followed by a query string.
pub fn get_issue_or_pull_request_number_from_url(url: &str) -> Option<u64> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"/(issues|pulls)/([0-9]+)([?].+)?$").unwrap());

    let captures = re.captures(url)?;
    group(&captures, 2)?
        .parse()
        .ok()
        .filter(|&number: &u64| number != 0)
}

/// The numeric id of `/releases/{id}`, kept as text.
pub fn get_release_id_from_url(url: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"/releases/([0-9]+)([?].+)?$").unwrap());

    let captures = re.captures(url)?;
    group(&captures, 1).map(str::to_owned)
}

/// Extract `owner/name` from the first github url in `url`.
///
/// Works for both `github.com/owner/name` and `api.github.com/repos/owner/name`.
pub fn get_repo_full_name_from_url(url: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?i)github\.com/(repos/)?([a-zA-Z0-9\-._]+/[a-zA-Z0-9\-._]+)").unwrap()
    });

    re.captures(url)
        .and_then(|captures| group(&captures, 2))
        .unwrap_or_default()
        .to_owned()
}

pub fn get_repo_full_name_from_object(repo: Option<&GitHubRepo>) -> String {
    let Some(repo) = repo else {
        return String::new();
    };

    if let Some(name) = non_empty(repo.full_name.as_deref()).or(non_empty(repo.name.as_deref()))
    {
        return name.to_owned();
    }

    [repo.html_url.as_deref(), repo.url.as_deref()]
        .into_iter()
        .flatten()
        .map(get_repo_full_name_from_url)
        .find(|full_name| !full_name.is_empty())
        .unwrap_or_default()
}

pub fn get_github_url_for_user(user: &str) -> String {
    if user.is_empty() {
        String::new()
    } else {
        format!("{BASE_URL}/{user}")
    }
}

/// `https://github.com/search?k1=v1&k2=v2`
///
/// Keys and values are inserted as-is; encoding them is up to the caller.
pub fn get_github_search_url<K: Display, V: Display>(query_params: Option<&[(K, V)]>) -> String {
    let Some(query_params) = query_params else {
        return String::new();
    };

    let query = query_params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{BASE_URL}/search?{query}")
}

pub fn get_github_url_for_branch(repo_full_name: &str, branch: &str) -> String {
    if repo_full_name.is_empty() || branch.is_empty() {
        String::new()
    } else {
        format!("{BASE_URL}/{repo_full_name}/tree/{branch}")
    }
}

pub fn get_github_url_for_repo_invitation(repo_full_name: &str) -> String {
    if repo_full_name.is_empty() {
        String::new()
    } else {
        format!("{BASE_URL}/{repo_full_name}/invitations")
    }
}

/// Append `#bottom` (native) or `#partial-timeline` (web) unless `uri` already has a fragment.
///
/// An undeterminable context gets `#bottom`.
pub fn app_bottom_anchor_if_possible(uri: &str, platform: &impl ContextProvider) -> String {
    if uri.is_empty() || uri.contains('#') {
        return uri.to_owned();
    }

    let anchor_id = select(
        platform.rendering_context(),
        ByContext {
            default: "bottom",
            web: "partial-timeline",
        },
        false,
    );
    format!("{uri}#{anchor_id}")
}

/// Convert an `api.github.com` url to its `github.com` counterpart.
///
/// Returns an empty string if `api_url` doesn't look like an API url.
///
/// Release urls resolve to the repository's release listing: the API only gives us the
/// numeric release id, and the web page of a single release is keyed by tag name.
pub fn github_html_url_from_api_url(
    api_url: &str,
    options: &GitHubUrlOptions,
    platform: &impl ContextProvider,
) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"api\.github\.com/([a-zA-Z]+)/(.*)").unwrap());

    let Some(captures) = re.captures(api_url) else {
        debug!(api_url, "not an API url");
        return String::new();
    };
    let (Some(kind), Some(rest_of_url)) = (
        non_empty(group(&captures, 1)),
        non_empty(group(&captures, 2)),
    ) else {
        return String::new();
    };

    if kind == "repos" {
        if let Some(url) = repo_resource_html_url(api_url, rest_of_url, options, platform) {
            return url;
        }
    }

    let uri = format!("{BASE_URL}/{rest_of_url}");
    if options.add_bottom_anchor {
        app_bottom_anchor_if_possible(&uri, platform)
    } else {
        uri
    }
}

/// `None` when the url names a repository but no resource inside it.
fn repo_resource_html_url(
    api_url: &str,
    rest_of_url: &str,
    options: &GitHubUrlOptions,
    platform: &impl ContextProvider,
) -> Option<String> {
    let repo_full_name = get_repo_full_name_from_url(api_url);
    let separator = format!("/repos/{repo_full_name}/");
    let remainder = api_url.split(separator.as_str()).nth(1).unwrap_or_default();

    let mut segments = remainder.split('/');
    let resource = segments.next().unwrap_or_default();
    let rest: Vec<&str> = segments.collect();
    let first = non_empty(rest.first().copied())?;
    let path = rest.join("/");

    let context = platform.rendering_context();
    let comment_id = options.comment_id();

    let url = match resource {
        "commits" => match comment_id {
            Some(comment_id) => {
                let element_id = select(
                    context,
                    ByContext {
                        default: format!("comment-{comment_id}"),
                        web: format!("commitcomment-{comment_id}"),
                    },
                    true,
                );
                format!("{BASE_URL}/{repo_full_name}/commit/{first}#{element_id}")
            }
            None => format!("{BASE_URL}/{repo_full_name}/commit/{path}"),
        },

        "issues" | "pulls" => {
            let (web_path, web_prefix) = if resource == "issues" {
                ("issues", "issuecomment-")
            } else {
                ("pull", "discussion_r")
            };

            let target_comment = comment_id.map(|id| id.to_string()).or_else(|| {
                if first == "comments" {
                    non_empty(rest.get(1).copied()).map(str::to_owned)
                } else {
                    None
                }
            });

            match (options.issue_or_pull_request_number(), target_comment) {
                (Some(number), Some(comment)) => {
                    let element_id = select(
                        context,
                        ByContext {
                            default: format!("comment-{comment}"),
                            web: format!("{web_prefix}{comment}"),
                        },
                        true,
                    );
                    format!("{BASE_URL}/{repo_full_name}/{web_path}/{number}#{element_id}")
                }
                _ => format!("{BASE_URL}/{repo_full_name}/{web_path}/{path}"),
            }
        }

        "releases" => format!("{BASE_URL}/{repo_full_name}/releases/?{path}"),

        _ => {
            debug!(api_url, resource, "unknown repository resource");
            format!("{BASE_URL}/{rest_of_url}")
        }
    };

    Some(url)
}

/// Turn whatever url GitHub handed us into one that opens the right page.
///
/// Accepts API urls, root-relative paths like `/facebook/react`, and web urls.
pub fn fix_url(url: &str, options: &GitHubUrlOptions, platform: &impl ContextProvider) -> String {
    if url.is_empty() {
        return String::new();
    }

    let mut uri = if url.starts_with('/') && !url.contains("github.com") {
        format!("{BASE_URL}{url}")
    } else {
        url.to_owned()
    };

    if uri.contains("api.github.com") {
        uri = github_html_url_from_api_url(&uri, options, platform);
    }

    if options.add_bottom_anchor {
        app_bottom_anchor_if_possible(&uri, platform)
    } else {
        uri
    }
}
