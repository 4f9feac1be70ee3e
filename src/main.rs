//! Command-line front end for the mkrl URL shortener.
//!
//! # Usage
//!
//! ```bash
//! # Shorten one URL (prompts when the argument is omitted)
//! mkrl shorten github.com
//!
//! # Print the result as JSON
//! mkrl shorten github.com --json
//!
//! # Keep submitting URLs until an empty line
//! mkrl interactive
//!
//! # Show the effective configuration
//! mkrl config
//! ```
//!
//! # Environment Variables
//!
//! See [`mkrl::config`]. A `.env` file in the working directory is loaded first.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use tracing_subscriber::EnvFilter;

use mkrl::application::services::UrlSubmissionController;
use mkrl::config::{self, Config};
use mkrl::domain::Outcome;
use mkrl::infrastructure::http::HttpShorteningClient;

type Controller = UrlSubmissionController<HttpShorteningClient>;

/// Shorten URLs with the mkrl service.
#[derive(Parser)]
#[command(name = "mkrl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a single URL
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Shorten URLs one after another
    Interactive,

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);

    match cli.command {
        Commands::Shorten { url, json } => {
            let controller = build_controller(&config)?;
            shorten_once(&controller, url, json).await
        }
        Commands::Interactive => {
            let controller = build_controller(&config)?;
            run_interactive(&controller).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config => {
            print!("{}", render_config(&config));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initializes the global subscriber. Logs go to stderr so stdout stays pipeable.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_controller(config: &Config) -> Result<Controller> {
    let client =
        HttpShorteningClient::from_config(config).context("Failed to create HTTP client")?;

    Ok(UrlSubmissionController::new(
        Arc::new(client),
        config.redirect_origin(),
        config.page_origin(),
    ))
}

/// Shortens one URL and maps the outcome to the exit status.
async fn shorten_once(controller: &Controller, url: Option<String>, json: bool) -> Result<ExitCode> {
    let raw = match url {
        Some(url) => url,
        None => prompt_url("")?,
    };

    let outcome = controller.shorten(&raw).await?;
    print_outcome(&outcome, json)?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prompts for URLs until the user leaves the prompt empty and confirms.
///
/// After a failure the previous input is offered again, so it can be fixed
/// instead of retyped.
async fn run_interactive(controller: &Controller) -> Result<()> {
    println!("{}", "mkrl - URL shortener".bright_blue().bold());
    println!("{}", "Leave the prompt empty to quit.".bright_black());
    println!();

    let mut initial = String::new();

    loop {
        let raw = prompt_url(&initial)?;

        match next_step(&raw, confirm_quit)? {
            Step::Quit => break,
            Step::Reprompt => continue,
            Step::Submit => {}
        }

        let outcome = controller.shorten(&raw).await?;
        print_outcome(&outcome, false)?;
        println!();

        initial = if outcome.is_success() {
            String::new()
        } else {
            controller.state().input
        };
    }

    Ok(())
}

/// What the interactive loop does with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Quit,
    Reprompt,
    Submit,
}

/// Blank input asks for confirmation; declining it prompts again without
/// submitting.
fn next_step(raw: &str, confirm: impl FnOnce() -> Result<bool>) -> Result<Step> {
    if !raw.trim().is_empty() {
        return Ok(Step::Submit);
    }
    if confirm()? {
        Ok(Step::Quit)
    } else {
        Ok(Step::Reprompt)
    }
}

fn confirm_quit() -> Result<bool> {
    let quit = Confirm::new()
        .with_prompt("Quit?")
        .default(true)
        .interact()?;
    Ok(quit)
}

fn prompt_url(initial: &str) -> Result<String> {
    let raw = Input::<String>::new()
        .with_prompt("Enter long URL")
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(raw)
}

fn print_outcome(outcome: &Outcome, json: bool) -> Result<()> {
    match outcome {
        Outcome::Success(shortened) if json => {
            println!("{}", serde_json::to_string_pretty(shortened)?);
        }
        Outcome::Success(shortened) => {
            println!("{}", "Your shortened URL:".bright_white());
            println!("  {}", shortened.short().bright_cyan().bold());
            println!(
                "  {} {}",
                "Original URL:".bright_black(),
                shortened.original().bright_black()
            );
        }
        Outcome::ValidationFailure(e) => {
            eprintln!("{}", e.to_string().yellow());
        }
        Outcome::RequestFailure(e) => {
            eprintln!("{}", e.user_message().red());
        }
    }

    Ok(())
}

fn render_config(config: &Config) -> String {
    let rows = [
        ("Shorten endpoint:", config.shorten_endpoint().cyan()),
        ("Redirect origin:", display_origin(&config.redirect_origin())),
        ("Page origin:", display_origin(&config.page_origin())),
        (
            "Request timeout:",
            format!("{}s", config.request_timeout_secs).normal(),
        ),
        ("User agent:", config.user_agent.normal()),
    ];

    let mut out = format!("{}\n", "Configuration".bright_blue().bold());
    for (label, value) in rows {
        out.push_str(&format!("  {label:<18} {value}\n"));
    }
    out
}

fn display_origin(origin: &str) -> ColoredString {
    if origin.is_empty() {
        "(same as page)".bright_black()
    } else {
        origin.cyan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_step_submits_non_blank_input() {
        let step = next_step("example.com", || panic!("confirm must not be asked")).unwrap();
        assert_eq!(step, Step::Submit);
    }

    #[test]
    fn test_next_step_quits_when_confirmed() {
        assert_eq!(next_step("  ", || Ok(true)).unwrap(), Step::Quit);
    }

    #[test]
    fn test_next_step_reprompts_when_quit_declined() {
        assert_eq!(next_step("", || Ok(false)).unwrap(), Step::Reprompt);
    }

    #[test]
    fn test_render_config_lists_each_field_once() {
        colored::control::set_override(false);
        let config = Config {
            api_base_url: "https://mkrl.app/api".to_string(),
            ..Config::default()
        };

        let rendered = render_config(&config);

        assert_eq!(rendered.matches("Configuration").count(), 1);
        for label in [
            "Shorten endpoint:",
            "Redirect origin:",
            "Page origin:",
            "Request timeout:",
            "User agent:",
        ] {
            assert_eq!(rendered.matches(label).count(), 1, "label {label}");
        }
        assert!(rendered.contains("https://mkrl.app/api/shorten"));
    }
}
