use assert_cmd::Command;
use predicates::prelude::*;

fn devhub_url() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_devhub-url"));
    cmd.env_remove("DEVHUB_CONTEXT").env("NO_COLOR", "1");
    cmd
}

#[test]
fn fix_relative_path() {
    devhub_url()
        .args(["fix", "/facebook/react"])
        .assert()
        .success()
        .stdout("https://github.com/facebook/react\n");
}

#[test]
fn fix_comment_url_defaults_to_web_anchors() {
    devhub_url()
        .args([
            "fix",
            "https://api.github.com/repos/facebook/react/issues/comments/7",
            "--issue",
            "10",
        ])
        .assert()
        .success()
        .stdout("https://github.com/facebook/react/issues/10#issuecomment-7\n");
}

#[test]
fn fix_with_native_context_from_env() {
    devhub_url()
        .env("DEVHUB_CONTEXT", "native")
        .args([
            "fix",
            "https://api.github.com/repos/facebook/react/pulls/comments/3",
            "--issue",
            "42",
            "--comment-id",
            "3",
        ])
        .assert()
        .success()
        .stdout("https://github.com/facebook/react/pull/42#comment-3\n");
}

#[test]
fn fix_several_urls_with_bottom_anchor() {
    devhub_url()
        .args([
            "--context",
            "native",
            "fix",
            "--bottom-anchor",
            "https://api.github.com/repos/facebook/react/issues/1",
            "https://github.com/facebook/react#readme",
            "",
        ])
        .assert()
        .success()
        .stdout(
            "https://github.com/facebook/react/issues/1#bottom\n\
             https://github.com/facebook/react#readme\n\
             \n",
        );
}

#[test]
fn fix_requires_a_url() {
    devhub_url().arg("fix").assert().failure();
}

#[test]
fn inspect_lists_extracted_parts() {
    devhub_url()
        .args([
            "inspect",
            "https://api.github.com/repos/facebook/react/pulls/42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("facebook/react"))
        .stdout(predicate::str::contains("42"))
        .stdout(predicate::str::contains("https://github.com/facebook/react/pull/42"));
}

#[test]
fn link_builders() {
    devhub_url()
        .args(["user", "octocat"])
        .assert()
        .success()
        .stdout("https://github.com/octocat\n");

    devhub_url()
        .args(["branch", "facebook/react", "main"])
        .assert()
        .success()
        .stdout("https://github.com/facebook/react/tree/main\n");

    devhub_url()
        .args(["invitation", "facebook/react"])
        .assert()
        .success()
        .stdout("https://github.com/facebook/react/invitations\n");
}

#[test]
fn search_keeps_param_order() {
    devhub_url()
        .args(["search", "q=is:open", "type=issues"])
        .assert()
        .success()
        .stdout("https://github.com/search?q=is:open&type=issues\n");
}

#[test]
fn search_rejects_malformed_params() {
    devhub_url()
        .args(["search", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}
