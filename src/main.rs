use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use jiff::{ToSpan, Zoned, civil::Date, tz::TimeZone};
use tracing_subscriber::EnvFilter;

use devhub_url::github;
use devhub_url::links::{event_html_url, notification_html_url};
use devhub_url::output::{Link, print_field, print_links};
use devhub_url::platform::RenderingContext;
use devhub_url::url::{
    GitHubUrlOptions, fix_url, get_comment_id_from_url, get_commit_sha_from_url,
    get_github_search_url, get_github_url_for_branch, get_github_url_for_repo_invitation,
    get_github_url_for_user, get_issue_or_pull_request_number_from_url,
    get_release_id_from_url, get_repo_full_name_from_url,
};

/// Turn GitHub API URLs into canonical github.com links
#[derive(Parser)]
#[command(name = "devhub-url")]
#[command(about = "Turn GitHub API URLs into canonical github.com links")]
#[command(long_about = r#"devhub-url - Turn GitHub API URLs into canonical github.com links

The notifications and events commands need the GitHub CLI (gh),
installed and authenticated. Run 'gh auth login' if not already authenticated."#)]
struct Args {
    /// Where the links will be opened; picks GitHub's anchor conventions
    #[arg(long, global = true, value_enum, env = "DEVHUB_CONTEXT", default_value_t = ContextArg::Web)]
    context: ContextArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ContextArg {
    /// Unknown; comment anchors fall back to the web variant
    Auto,
    Native,
    Web,
}

impl ContextArg {
    fn rendering_context(self) -> Option<RenderingContext> {
        match self {
            Self::Auto => None,
            Self::Native => Some(RenderingContext::Native),
            Self::Web => Some(RenderingContext::Web),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite API urls and relative paths into github.com links
    Fix {
        #[arg(required = true)]
        urls: Vec<String>,

        /// Anchor to this comment
        #[arg(long, value_name = "ID")]
        comment_id: Option<u64>,

        /// Issue or pull request that comment urls belong to
        #[arg(long, value_name = "NUMBER")]
        issue: Option<u64>,

        /// Scroll to the bottom of the page unless the url has a fragment
        #[arg(short, long)]
        bottom_anchor: bool,
    },

    /// Show what can be extracted from a url
    Inspect { url: String },

    /// Link to a user's profile
    User { login: String },

    /// Link to a branch of a repository
    Branch { repo: String, branch: String },

    /// Link to a repository's pending invitations
    Invitation { repo: String },

    /// Link to a GitHub search, from KEY=VALUE pairs
    Search {
        #[arg(required = true, value_parser = parse_query_param)]
        params: Vec<(String, String)>,
    },

    /// Links for your notifications
    Notifications {
        /// Show notifications since date (YYYY-MM-DD format, default: one week ago)
        #[arg(short, long, value_name = "DATE")]
        since: Option<String>,

        /// Include notifications already marked as read
        #[arg(short, long)]
        all: bool,

        /// Show every link instead of a summary
        #[arg(short, long)]
        verbose: bool,
    },

    /// Links for the activity feed of a user (default: you)
    Events {
        login: Option<String>,

        /// Show every link instead of a summary
        #[arg(short, long)]
        verbose: bool,
    },
}

fn parse_query_param(param: &str) -> Result<(String, String), String> {
    let (key, value) = param
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{param}`"))?;
    Ok((key.to_owned(), value.to_owned()))
}

/// RFC 3339 timestamp for the notifications API
fn since_timestamp(since: Option<&str>) -> anyhow::Result<String> {
    let timestamp = match since {
        Some(date) => {
            let date: Date = date
                .parse()
                .with_context(|| format!("Invalid date {date:?}, expected YYYY-MM-DD"))?;
            date.to_zoned(TimeZone::UTC)?.timestamp()
        }
        None => Zoned::now().checked_sub(7_i32.days())?.timestamp(),
    };
    Ok(timestamp.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "devhub_url=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let context = args.context.rendering_context();

    match args.command {
        Commands::Fix {
            urls,
            comment_id,
            issue,
            bottom_anchor,
        } => {
            let options = GitHubUrlOptions {
                add_bottom_anchor: bottom_anchor,
                comment_id,
                issue_or_pull_request_number: issue,
            };
            for url in urls {
                println!("{}", fix_url(&url, &options, &context));
            }
        }

        Commands::Inspect { url } => inspect(&url, context),

        Commands::User { login } => println!("{}", get_github_url_for_user(&login)),

        Commands::Branch { repo, branch } => {
            println!("{}", get_github_url_for_branch(&repo, &branch));
        }

        Commands::Invitation { repo } => {
            println!("{}", get_github_url_for_repo_invitation(&repo));
        }

        Commands::Search { params } => {
            println!("{}", get_github_search_url(Some(params.as_slice())));
        }

        Commands::Notifications {
            since,
            all,
            verbose,
        } => {
            let since = since_timestamp(since.as_deref())?;
            let notifications = github::get_notifications(&since, all)
                .context("Failed to fetch notifications")?;

            println!("Notifications since {since}:");
            println!("{}", "=".repeat(50));

            let (unread, read): (Vec<_>, Vec<_>) =
                notifications.iter().partition(|notification| notification.unread);
            for (label, group) in [("Unread:", unread), ("Read:", read)] {
                let links: Vec<Link> = group
                    .into_iter()
                    .map(|notification| Link {
                        title: notification.subject.title.clone(),
                        url: notification_html_url(notification, &context),
                    })
                    .collect();
                print_links(label, &links, verbose);
            }

            println!("{}", "=".repeat(50));
        }

        Commands::Events { login, verbose } => {
            let login = match login {
                Some(login) => login,
                None => github::get_current_user().context(
                    "Failed to get the current user. Make sure you're authenticated with 'gh auth login'",
                )?,
            };

            let events = github::get_received_events(&login)
                .with_context(|| format!("Failed to fetch events for {login}"))?;

            println!("Activity for {login}:");
            println!("{}", "=".repeat(50));

            let links: Vec<Link> = events
                .iter()
                .map(|event| Link {
                    title: event.kind.clone(),
                    url: event_html_url(event, &context),
                })
                .collect();
            print_links("Events:", &links, verbose);

            println!("{}", "=".repeat(50));
        }
    }

    Ok(())
}

fn inspect(url: &str, context: Option<RenderingContext>) {
    let comment_id = get_comment_id_from_url(url).map(|id| id.to_string());
    let number = get_issue_or_pull_request_number_from_url(url).map(|n| n.to_string());

    print_field("Repository:", Some(get_repo_full_name_from_url(url).as_str()));
    print_field("Comment id:", comment_id.as_deref());
    print_field("Commit:", get_commit_sha_from_url(url).as_deref());
    print_field("Issue/PR number:", number.as_deref());
    print_field("Release id:", get_release_id_from_url(url).as_deref());
    print_field(
        "Web url:",
        Some(fix_url(url, &GitHubUrlOptions::default(), &context).as_str()),
    );
}
