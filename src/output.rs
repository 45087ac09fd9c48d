use std::collections::HashSet;

use colored::Colorize as _;

use crate::url::get_repo_full_name_from_url;

/// A resolved feed item
#[derive(Debug, Clone)]
pub struct Link {
    pub title: String,
    pub url: String,
}

/// Number of distinct repositories the links point into
pub fn count_repos(links: &[Link]) -> usize {
    links
        .iter()
        .map(|link| get_repo_full_name_from_url(&link.url))
        .filter(|full_name| !full_name.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Print resolved links with optional verbose output
pub fn print_links(label: &str, links: &[Link], verbose: bool) {
    if verbose {
        println!("{:19}{}", label.cyan().bold(), links.len().to_string().green().bold());
        for link in links {
            println!("  - {}", link.title);
            if link.url.is_empty() {
                println!("    {}", "(no link)".dimmed());
            } else {
                println!("    {}", link.url.bright_blue());
            }
        }
    } else {
        let repo_count = count_repos(links);
        let repo_suffix = if repo_count == 1 {
            "repository"
        } else {
            "repositories"
        };
        println!(
            "{:19}{} across {} {}",
            label.cyan().bold(),
            links.len().to_string().green().bold(),
            repo_count.to_string().yellow(),
            repo_suffix.dimmed()
        );
    }
}

/// Print one `label: value` line, dimming missing values
pub fn print_field(label: &str, value: Option<&str>) {
    match value.filter(|value| !value.is_empty()) {
        Some(value) => println!("{:19}{}", label.cyan().bold(), value),
        None => println!("{:19}{}", label.cyan().bold(), "-".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str) -> Link {
        Link {
            title: String::new(),
            url: url.to_owned(),
        }
    }

    #[test]
    fn repos_are_counted_once() {
        let links = [
            link("https://github.com/facebook/react/issues/1"),
            link("https://github.com/facebook/react/pull/2#discussion_r3"),
            link("https://github.com/rust-lang/rust"),
            link(""),
        ];
        assert_eq!(count_repos(&links), 2);
    }
}
