use chrono::{TimeDelta, Utc};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rbtv_api::types::{Season, Show};
use rbtv_api::{
    ApiError, Client, ClientConfig, DEFAULT_HOST, DEFAULT_SCHEME, MAX_SCHEDULE_RANGE_DAYS, Order,
    ShowFilter, ShowSortBy,
};
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "rbtv")]
#[command(about = "Browse the Rocket Beans TV API from the command line", long_about = None)]
struct Cli {
    /// URL scheme of the API
    #[arg(long, default_value = DEFAULT_SCHEME)]
    scheme: String,

    /// API host name
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "60")]
    timeout: u64,

    /// OAuth access token for authenticated endpoints
    #[arg(long, env = "RBTV_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all shows
    Shows {
        /// Only list shows of this kind (podcast)
        #[arg(long)]
        only: Option<ShowFilter>,
    },
    /// Show details and seasons of a show
    Show { id: u64 },
    /// List the episodes of a show
    Episodes {
        show_id: u64,

        /// Sort order (ASC or DESC)
        #[arg(long, default_value = "ASC")]
        order: Order,
    },
    /// List the newest blog posts
    Blog {
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Print a blog post as plain text
    BlogPost { id: u64 },
    /// List all team members
    Bohnen,
    /// Profile of a team member, looked up by name
    Bohne { name: String },
    /// Program schedule starting today
    Schedule {
        #[arg(long, default_value = "1")]
        days: i64,
    },
    /// Current viewer numbers
    Viewers,
    /// Search shows, episodes and blog posts
    Search { term: String },
    /// The currently running community event
    Event,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .filter_module("reqwest", LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}

fn display_id(id: Option<u64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_show(show: &Show) {
    println!(
        "{:>6}  {}",
        display_id(show.id),
        show.title.as_deref().unwrap_or("(untitled)")
    );
}

fn season_label(season: &Season) -> String {
    season.display_name("Season {}", "Unsorted")
}

fn run(cli: Cli) -> Result<(), ApiError> {
    let mut config = ClientConfig::default()
        .with_scheme(cli.scheme)
        .with_host(cli.host)
        .with_timeout(Duration::from_secs(cli.timeout));
    if let Some(token) = cli.token {
        config = config.with_access_token(token);
    }
    let client = Client::with_config(config)?;

    match cli.command {
        Command::Shows { only } => {
            for show in client.shows(ShowSortBy::LastEpisode, only) {
                print_show(&show?);
            }
        }
        Command::Show { id } => {
            let show = client.show(id)?;
            print_show(&show);
            if let Some(genre) = &show.genre {
                println!("Genre: {}", genre);
            }
            if let Some(description) = &show.description {
                println!("\n{}\n", description.trim());
            }
            println!("Found {} season(s)", show.seasons.len());
            for season in &show.seasons {
                println!("  {:>6}  {}", display_id(season.id), season_label(season));
            }
        }
        Command::Episodes { show_id, order } => {
            for page in client.episodes_by_show(show_id, order) {
                for episode in page?.episodes {
                    println!(
                        "{:>7}  {}  {}",
                        display_id(episode.id),
                        episode.first_broadcastdate.as_deref().unwrap_or("-"),
                        episode.title.as_deref().unwrap_or("(untitled)")
                    );
                }
            }
        }
        Command::Blog { limit } => {
            for post in client.blog_posts_preview().take(limit) {
                let post = post?;
                println!("{:>6}  {}  {}", post.id, post.publish_date, post.title);
            }
        }
        Command::BlogPost { id } => {
            let post = client.blog_post(id)?;
            println!("{}", post.title.as_deref().unwrap_or("(untitled)"));
            if let Some(subtitle) = &post.subtitle {
                println!("{}", subtitle);
            }
            if let Some(text) = post.plain_text() {
                println!("\n{}", text);
            }
        }
        Command::Bohnen => {
            for bohne in client.bohnen_portraits()? {
                println!(
                    "{:>6}  {:<24} {} episode(s)",
                    bohne.mgmtid, bohne.name, bohne.episode_count
                );
            }
        }
        Command::Bohne { name } => {
            let id = client.bohne_name_to_id(&name)?;
            let bohne = client.bohne(id)?;
            let full_name = [bohne.firstname.as_deref(), bohne.lastname.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            println!(
                "{} ({})",
                bohne.nickname.as_deref().unwrap_or(&name),
                full_name
            );
            if let Some(count) = bohne.episode_count {
                println!("Appears in {} episode(s)", count);
            }
            if let Some(html) = &bohne.content_html {
                println!("\n{}", nanohtml2text::html2text(html).trim());
            }
        }
        Command::Schedule { days } => {
            if days < 1 || days > MAX_SCHEDULE_RANGE_DAYS {
                return Err(ApiError::InvalidArgument(format!(
                    "--days must be between 1 and {}",
                    MAX_SCHEDULE_RANGE_DAYS
                )));
            }
            let start = Utc::now();
            let end = start + TimeDelta::days(days - 1);
            for day in client.schedule(start, end)? {
                println!("=== {} ===", day.date);
                for item in day.elements {
                    println!(
                        "  {}  {}{}",
                        item.time_start.as_deref().unwrap_or("-"),
                        item.title.as_deref().unwrap_or("(untitled)"),
                        item.topic
                            .as_deref()
                            .filter(|topic| !topic.is_empty())
                            .map(|topic| format!(" - {}", topic))
                            .unwrap_or_default()
                    );
                }
            }
        }
        Command::Viewers => {
            let count = client.viewer_count()?;
            println!("YouTube: {}", count.youtube.unwrap_or(0));
            println!("Twitch:  {}", count.twitch.unwrap_or(0));
            println!("Total:   {}", count.total.unwrap_or(0));
        }
        Command::Search { term } => {
            let result = client.search(&term)?;
            if result.is_empty() {
                println!("No results for '{}'", term);
            }
            for show in &result.shows {
                println!("show     {:>7}  {}", show.id, show.title);
            }
            for episode in &result.episodes {
                println!(
                    "episode  {:>7}  {} - {}",
                    episode.id, episode.show_name, episode.title
                );
            }
            for post in &result.blog {
                println!("blog     {:>7}  {}", post.id, post.title);
            }
        }
        Command::Event => match client.current_event()? {
            Some(event) => {
                println!("{}", event.name.as_deref().unwrap_or("(unnamed event)"));
                for team in event.teams.unwrap_or_default() {
                    println!(
                        "  {:>6}  {}",
                        display_id(team.id),
                        team.name.as_deref().unwrap_or("-")
                    );
                }
            }
            None => println!("No event is running right now."),
        },
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
