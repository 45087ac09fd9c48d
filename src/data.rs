use serde::{Deserialize, Serialize};

/// Anything that identifies a repository.
///
/// GitHub payloads are inconsistent about which of these they carry, so all are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GitHubRepo {
    pub full_name: Option<String>,
    pub name: Option<String>,
    pub html_url: Option<String>,
    pub url: Option<String>,
}

/// One entry of `GET /notifications`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Notification {
    pub id: String,
    pub reason: Option<String>,
    #[serde(default)]
    pub unread: bool,
    pub updated_at: Option<String>,
    pub subject: NotificationSubject,
    #[serde(default)]
    pub repository: GitHubRepo,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationSubject {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub latest_comment_url: Option<String>,
}

/// One entry of `GET /users/{user}/received_events`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub repo: GitHubRepo,
    #[serde(default)]
    pub payload: EventPayload,
    pub created_at: Option<String>,
}

/// The parts of an event payload we know how to link to.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EventPayload {
    pub comment: Option<Linked>,
    pub review: Option<Linked>,
    pub pull_request: Option<Linked>,
    pub issue: Option<Linked>,
    pub release: Option<Linked>,
    #[serde(default)]
    pub commits: Vec<EventCommit>,
    pub ref_type: Option<String>,
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
}

/// A payload object with an API url and, usually, a web url.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Linked {
    pub html_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventCommit {
    pub sha: String,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_notification() {
        let json = r#"[{
            "id": "1",
            "unread": true,
            "reason": "mention",
            "updated_at": "2024-05-01T10:00:00Z",
            "subject": {
                "title": "Fix the thing",
                "type": "PullRequest",
                "url": "https://api.github.com/repos/facebook/react/pulls/42",
                "latest_comment_url": "https://api.github.com/repos/facebook/react/issues/comments/7"
            },
            "repository": {
                "name": "react",
                "full_name": "facebook/react",
                "html_url": "https://github.com/facebook/react",
                "private": false
            }
        }]"#;

        let notifications: Vec<Notification> = serde_json::from_str(json).unwrap();
        assert_eq!(notifications.len(), 1);
        let notification = &notifications[0];
        assert!(notification.unread);
        assert_eq!(notification.subject.kind, "PullRequest");
        assert_eq!(
            notification.repository.full_name.as_deref(),
            Some("facebook/react")
        );
        assert_eq!(notification.repository.url, None);
    }

    #[test]
    fn parse_event_with_sparse_payload() {
        let json = r#"{
            "id": "99",
            "type": "CreateEvent",
            "repo": { "id": 1, "name": "rust-lang/rust", "url": "https://api.github.com/repos/rust-lang/rust" },
            "payload": { "ref": "feature", "ref_type": "branch" }
        }"#;

        let event: GitHubEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, "CreateEvent");
        assert_eq!(event.payload.git_ref.as_deref(), Some("feature"));
        assert!(event.payload.commits.is_empty());
        assert!(event.payload.comment.is_none());
    }
}
