use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fantasy-wrapped", version, author, about = "Your ESPN fantasy basketball season, wrapped up in the terminal")]
pub struct Cli {
    /// Stats backend to talk to (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every stat for a league and print the slides as plain text
    Print(PrintArgs),
    /// Show the config file, or write the defaults with --init
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    /// ESPN league id
    #[arg(long)]
    pub league_id: i64,

    /// Season year (defaults to the configured year)
    #[arg(long)]
    pub year: Option<i32>,

    /// espn_s2 cookie (private leagues)
    #[arg(long, requires = "swid", conflicts_with_all = ["username", "password"])]
    pub espn_s2: Option<String>,

    /// SWID cookie (private leagues)
    #[arg(long, requires = "espn_s2")]
    pub swid: Option<String>,

    /// ESPN account username
    #[arg(long, requires = "password")]
    pub username: Option<String>,

    /// ESPN account password
    #[arg(long, requires = "username")]
    pub password: Option<String>,
}
