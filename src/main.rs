use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use documint_layout::config::LayoutConfig;
use documint_layout::persistence::{FileStore, KeyValueStore, MemoryStore};

mod cli;
mod runtime;

use cli::{CliArgs, StoreChoice};
use runtime::App;

fn open_store(choice: &StoreChoice) -> Result<Box<dyn KeyValueStore>> {
    Ok(match choice {
        StoreChoice::Ephemeral => Box::new(MemoryStore::new()),
        StoreChoice::Directory(dir) => Box::new(FileStore::new(dir)),
        StoreChoice::Default => Box::new(
            FileStore::default_location()
                .map_err(|e| anyhow!("{}; pass --store-dir or --ephemeral", e))?,
        ),
    })
}

fn main() -> Result<()> {
    documint_layout::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    let config = match &startup.config_path {
        Some(path) => LayoutConfig::load_from(path),
        None => LayoutConfig::load(),
    };
    let store = open_store(&startup.store)?;

    let stdout = io::stdout();
    let mut app = App::new(config, store, stdout.lock(), startup.echo, startup.reset);
    app.startup(startup.container, startup.viewport)?;

    match &startup.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            app.run(BufReader::new(file))?;
        }
        None => app.run(io::stdin().lock())?,
    }

    tracing::debug!(saves = app.save_count(), "Session finished");
    Ok(())
}
