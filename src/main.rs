use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use treeview::cli::{Cli, Command, Format};
use treeview::core::text::write_tree;
use treeview::core::{LoadOutcome, Trigger, TreeViewer};
use treeview::source::TreeSource;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("treeview: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the last settled load produced a tree.
async fn run(cli: &Cli) -> Result<bool> {
    let viewer = TreeViewer::connect(cli.context());

    let mut outcome = viewer.load(Trigger::Initial).await;
    emit(cli, &viewer).await?;

    if cli.interactive {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
            let settled = match Command::parse(&line) {
                Ok(Command::Path(path)) => {
                    viewer.set_path(path).await;
                    viewer.key_pressed("Enter").await
                }
                Ok(Command::Depth(depth)) => {
                    viewer.set_depth(depth).await;
                    None
                }
                Ok(Command::Hidden(show_hidden)) => {
                    viewer.set_show_hidden(show_hidden).await;
                    None
                }
                Ok(Command::Refresh) => Some(viewer.load(Trigger::Refresh).await),
                Ok(Command::Quit) => break,
                Err(err) => {
                    eprintln!("treeview: {err}");
                    None
                }
            };

            if let Some(settled) = settled {
                outcome = settled;
                emit(cli, &viewer).await?;
            }
        }
    }

    Ok(!matches!(outcome, LoadOutcome::Failed(_)))
}

async fn emit<S: TreeSource>(cli: &Cli, viewer: &TreeViewer<S>) -> Result<()> {
    let view = viewer.view().await;
    let mut rendered = Vec::new();

    match cli.format {
        Format::Html => rendered.extend_from_slice(view.to_html().as_bytes()),
        Format::Text => {
            if !view.error_area.is_empty() {
                eprintln!("{}", view.error_area);
            }
            if let Some(root) = &view.root {
                write_tree(&mut rendered, root)?;
            }
        }
    }

    match &cli.output {
        Some(path) => std::fs::write(path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
