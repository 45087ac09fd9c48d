use crate::data::{GitHubEvent, Linked, Notification};
use crate::platform::ContextProvider;
use crate::url::{
    BASE_URL, GitHubUrlOptions, fix_url, get_comment_id_from_url,
    get_github_url_for_branch, get_issue_or_pull_request_number_from_url,
    get_repo_full_name_from_object,
};

fn repo_page(full_name: &str) -> String {
    if full_name.is_empty() {
        String::new()
    } else {
        format!("{BASE_URL}/{full_name}")
    }
}

/// The page a notification should open, scrolled to the latest comment when there is one.
pub fn notification_html_url(notification: &Notification, platform: &impl ContextProvider) -> String {
    let subject_url = notification.subject.url.as_deref().unwrap_or_default();
    let comment_url = notification
        .subject
        .latest_comment_url
        .as_deref()
        .unwrap_or_default();

    let comment_id = get_comment_id_from_url(comment_url);
    let number = get_issue_or_pull_request_number_from_url(subject_url);

    // Issue comments on pull requests live under /issues/comments, and github.com
    // redirects /issues/{n} to /pull/{n}, so the comment url gives the right anchor.
    if comment_id.is_some() && comment_url != subject_url {
        let options = GitHubUrlOptions {
            comment_id,
            issue_or_pull_request_number: number,
            ..Default::default()
        };
        return fix_url(comment_url, &options, platform);
    }

    if !subject_url.is_empty() {
        let options = GitHubUrlOptions {
            add_bottom_anchor: true,
            issue_or_pull_request_number: number,
            ..Default::default()
        };
        return fix_url(subject_url, &options, platform);
    }

    repo_page(&get_repo_full_name_from_object(Some(&notification.repository)))
}

fn linked_html_url(linked: &Linked) -> Option<&str> {
    linked.html_url.as_deref().filter(|url| !url.is_empty())
}

/// The page an activity event is about.
pub fn event_html_url(event: &GitHubEvent, platform: &impl ContextProvider) -> String {
    let payload = &event.payload;
    let options = GitHubUrlOptions::default();

    let linked = [
        &payload.comment,
        &payload.review,
        &payload.pull_request,
        &payload.issue,
        &payload.release,
    ]
    .into_iter()
    .flatten()
    .find_map(linked_html_url);
    if let Some(url) = linked {
        return fix_url(url, &options, platform);
    }

    let repo_full_name = get_repo_full_name_from_object(Some(&event.repo));

    if event.kind == "PushEvent" {
        if let Some(url) = payload.commits.last().and_then(|commit| commit.url.as_deref()) {
            return fix_url(url, &options, platform);
        }
    }

    if event.kind == "CreateEvent" && payload.ref_type.as_deref() == Some("branch") {
        let branch = payload.git_ref.as_deref().unwrap_or_default();
        let url = get_github_url_for_branch(&repo_full_name, branch);
        if !url.is_empty() {
            return url;
        }
    }

    repo_page(&repo_full_name)
}
