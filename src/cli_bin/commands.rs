//! Command handler bridging CLI arguments to library operations

use crate::cli_bin::args::Cli;
use anyhow::{Context, Result};
use log::debug;
use postindex::IndexBuilder;

/// Build the index, then either print it or write it
pub fn run(cli: &Cli) -> Result<()> {
    let builder = IndexBuilder::new(cli.index_config());
    let config = builder.config();
    debug!("Using configuration: {:?}", config);

    if cli.dry_run {
        let index = builder
            .build()
            .with_context(|| format!("failed to index {}", config.posts_dir.display()))?;
        print!("{}", index.to_json()?);
        return Ok(());
    }

    let index = builder
        .write_index()
        .with_context(|| format!("failed to index {}", config.posts_dir.display()))?;
    if !cli.quiet {
        println!(
            "Wrote {} with {} posts.",
            config.output_path.display(),
            index.len()
        );
    }
    Ok(())
}

/// Exit status for a failed run: 3 format error, 4 validation error, 1 otherwise
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<postindex::IndexError>()
        .map(postindex::IndexError::exit_code)
        .unwrap_or(1)
}
