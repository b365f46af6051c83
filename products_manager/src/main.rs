use anyhow::Context;
use parking_lot::Mutex;
use products_manager::app;
use products_manager::config::Config;
use products_manager::console::{Console, ConsolePresenter, Palette};
use products_manager::store::{SharedStore, SqliteStore};
use std::io;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .init();

    let sqlite = SqliteStore::open(&config.database).with_context(|| {
        format!("Could not open the product database at {}", config.database.display())
    })?;
    let store: SharedStore = Arc::new(Mutex::new(sqlite));

    let catalog = app::load_catalog(&store).context("Could not load products")?;
    let presenter = Arc::new(Mutex::new(ConsolePresenter::default()));
    let notifier = app::create_notifier(store.clone(), catalog, presenter.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = Console::new(notifier, presenter)
        .with_palette(Palette::detect())
        .run(stdin.lock(), &mut stdout);

    if let Err(e) = store.lock().close() {
        log::error!("Product database did not shut down normally: {}", e);
    }

    result
}
