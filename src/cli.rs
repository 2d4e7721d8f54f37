use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::core::ViewerContext;
use crate::models::Controls;

#[derive(Parser, Debug)]
#[command(name = "treeview")]
#[command(
    about = "Fetch a directory tree from a tree service and render it",
    long_about = None
)]
pub struct Cli {
    /// Path to list on the server (defaults to the home directory, "~")
    pub path: Option<String>,

    /// Recursion depth, passed to the server as given
    #[arg(short = 'L', long, default_value = "3")]
    pub depth: String,

    /// Include hidden entries
    #[arg(short = 'a', long)]
    pub hidden: bool,

    /// Base URL of the tree service
    #[arg(long, env = "TREEVIEW_URL", default_value = "http://localhost:5000")]
    pub url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep reading paths and commands from stdin after the first load
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    Text,
    Html,
}

impl Cli {
    pub fn context(&self) -> ViewerContext {
        ViewerContext {
            controls: Controls {
                path: self.path.clone().unwrap_or_default(),
                depth: self.depth.clone(),
                show_hidden: self.hidden,
            },
            base_url: self.url.clone(),
        }
    }
}

/// One stdin line in interactive mode.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Plain line: set the path field and commit it.
    Path(String),
    Depth(String),
    Hidden(bool),
    Refresh,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Ok(Command::Path(line.to_owned()));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match (name, arg) {
            ("depth", "") => bail!(":depth needs a value"),
            ("depth", value) => Ok(Command::Depth(value.to_owned())),
            ("hidden", "on" | "true") => Ok(Command::Hidden(true)),
            ("hidden", "off" | "false") => Ok(Command::Hidden(false)),
            ("hidden", other) => bail!(":hidden expects on or off, got {other:?}"),
            ("refresh", _) => Ok(Command::Refresh),
            ("quit" | "q", _) => Ok(Command::Quit),
            _ => bail!("unknown command :{name}"),
        }
    }
}
