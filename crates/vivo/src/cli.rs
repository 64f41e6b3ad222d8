use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct VivoArgs {
    /// Path to the config file. Built-in defaults apply when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the built app under its base path (the default).
    Serve,
    /// Render the login page in its initial state.
    Render {
        /// Write the page here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
