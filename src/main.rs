use anyhow::{anyhow, Context, Result};
use clap::Parser;
use ghkit::config::{Config, API_URL_ENV, DEFAULT_API_URL};
use ghkit::{GithubClient, UserProfile};
use serde_json::Value;

/// Fetch a GitHub user profile and print it as JSON
#[derive(Parser)]
#[command(name = "ghkit", version, about = "Fetch a GitHub user profile")]
struct Args {
    #[arg(help = "GitHub username to look up")]
    username: String,

    #[arg(
        long = "api-url",
        env = API_URL_ENV,
        default_value = DEFAULT_API_URL,
        help = "API base URL (e.g., a GitHub Enterprise /api/v3 endpoint)"
    )]
    api_url: String,

    #[arg(long, value_name = "KEY", help = "Print only this top-level field")]
    field: Option<String>,

    #[arg(long, help = "Verbose output")]
    verbose: bool,
}

/// Format the profile, or one field of it, for stdout.
/// String fields print bare; everything else prints as JSON.
fn render(profile: &UserProfile, field: Option<&str>) -> Result<String> {
    match field {
        None => Ok(serde_json::to_string_pretty(profile)?),
        Some(key) => match profile.get(key) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Ok(serde_json::to_string_pretty(other)?),
            None => Err(anyhow!("Field '{}' not present in profile", key)),
        },
    }
}

fn config_from_args(args: &Args) -> Config {
    Config::default().with_api_url(&args.api_url)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let cfg = config_from_args(&args);

    if args.verbose {
        eprintln!("[ghkit] API base: {}", cfg.api_base_url);
    }

    let client = GithubClient::from_config(&cfg)?.verbose(args.verbose);
    let profile = client
        .fetch_user(&args.username)
        .with_context(|| format!("Failed to fetch user '{}'", args.username))?;

    println!("{}", render(&profile, args.field.as_deref())?);
    Ok(())
}
