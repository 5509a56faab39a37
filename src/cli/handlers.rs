use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::cli::args::PrintArgs;
use crate::config::AppConfig;
use crate::models::{AuthMethod, Credentials, StatsBundle};
use crate::session::{HttpStatSource, SessionController};
use crate::slides::{badges, format, summarize, PageKind, StatStyle, DECK};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const ORANGE: &str = "\x1b[38;2;249;115;22m";

// ─── Print ───────────────────────────────────────────────────────────────────

pub fn handle_print(args: &PrintArgs, config: &AppConfig) -> Result<()> {
    let credentials = credentials_from_args(args, config.session.default_year)?;
    let source = HttpStatSource::new(&config.backend)?;
    let mut session = SessionController::new(Arc::new(source));

    println!();
    println_colored!(
        DIM,
        "  Fetching league {} ({}) from {} …",
        credentials.league_id,
        credentials.year,
        config.backend.base_url
    );

    let bundle = match session.initialize(&credentials) {
        Ok(bundle) => bundle,
        Err(e) => {
            println_colored!(RED, "  ✗ {}", e);
            return Err(anyhow!("Could not load league {}", credentials.league_id));
        }
    };

    print_deck(bundle);
    Ok(())
}

fn print_deck(bundle: &StatsBundle) {
    for page in DECK.iter() {
        match page.kind {
            PageKind::Welcome | PageKind::Closing => {
                println!();
                println_colored!(ORANGE, "  {}", page.title);
                println_colored!(DIM, "  {}", page.subtitle);
            }
            PageKind::Stat { id, style } => {
                println!();
                println_colored!(BOLD, "  {}", page.title);
                println_colored!(DIM, "  {}", page.subtitle);
                println_colored!(AMBER, "    {}", summarize(bundle, id, style));
                if style == StatStyle::Badges {
                    for badge in badges(&format(bundle.get(id))) {
                        if let Some(explanation) = badge.explanation {
                            println_colored!(DIM, "      {}: {}", badge.display_text, explanation);
                        }
                    }
                }
            }
            // The recap repeats every stat above; only report gaps here.
            PageKind::Recap => {
                let failed = bundle.failed_count();
                println!();
                if failed == 0 {
                    println_colored!(GREEN, "  ✓ All stats loaded");
                } else {
                    println_colored!(RED, "  ✗ {} stat(s) could not be loaded", failed);
                }
            }
        }
    }
    println!();
}

fn credentials_from_args(args: &PrintArgs, default_year: i32) -> Result<Credentials> {
    let auth = match (&args.espn_s2, &args.swid, &args.username, &args.password) {
        (Some(espn_s2), Some(swid), None, None) => AuthMethod::Cookies {
            espn_s2: espn_s2.clone(),
            swid: swid.clone(),
        },
        (None, None, Some(username), Some(password)) => AuthMethod::Login {
            username: username.clone(),
            password: password.clone(),
        },
        _ => {
            return Err(anyhow!(
                "Provide either --espn-s2 and --swid, or --username and --password"
            ))
        }
    };

    Ok(Credentials {
        league_id: args.league_id,
        year: args.year.unwrap_or(default_year),
        auth,
    })
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path()?;
    if init {
        if path.exists() {
            println_colored!(AMBER, "  Config already exists at {}", path.display());
            return Ok(());
        }
        let written = config.save()?;
        println_colored!(GREEN, "  ✓ Wrote default config to {}", written.display());
        return Ok(());
    }
    show_config(config, &path)
}

fn show_config(config: &AppConfig, path: &Path) -> Result<()> {
    println!();
    if path.exists() {
        println_colored!(DIM, "  # {}", path.display());
    } else {
        println_colored!(DIM, "  # defaults (no file at {})", path.display());
    }
    let body = toml::to_string_pretty(config).context("Serializing config")?;
    for line in body.lines() {
        println!("  {}", line);
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PrintArgs {
        PrintArgs {
            league_id: 42,
            year: None,
            espn_s2: None,
            swid: None,
            username: None,
            password: None,
        }
    }

    #[test]
    fn cookie_args_become_cookie_auth() {
        let mut a = args();
        a.espn_s2 = Some("s2".into());
        a.swid = Some("{ABC}".into());
        let creds = credentials_from_args(&a, 2025).unwrap();
        assert_eq!(creds.year, 2025);
        assert_eq!(creds.auth.label(), "ESPN cookies");
    }

    #[test]
    fn missing_auth_is_rejected() {
        assert!(credentials_from_args(&args(), 2025).is_err());
        let mut a = args();
        a.username = Some("me".into());
        assert!(credentials_from_args(&a, 2025).is_err());
    }
}
