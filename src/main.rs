use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dirtree::cli::Cli;
use dirtree::core::TreeRenderer;
use dirtree::fs::RealFileSystem;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(if cli.verbose { "debug" } else { "warn" }))
        .with_writer(io::stderr)
        .init();

    match run(&cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("dirtree: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = cli.filter_config()?;
    let root_path = &cli.directory;

    let metadata = match std::fs::metadata(root_path) {
        Ok(metadata) => metadata,
        Err(err) => {
            eprintln!("dirtree: {}: {}", root_path.display(), err);
            return Ok(ExitCode::from(1));
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());

    if !metadata.is_dir() {
        writeln!(out, "{}", dirtree::base_name(root_path))?;
        out.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let root = dirtree::resolve_root(root_path)
        .with_context(|| root_path.display().to_string())?;
    writeln!(out, "{}", dirtree::root_line(&root))?;

    let fs = RealFileSystem;
    TreeRenderer::new(&fs, &config)
        .render(&root, &mut out, &mut io::stderr())
        .await?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
