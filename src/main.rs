mod config;
mod form;
mod logging;
mod models;
mod run;
mod storage;
mod store;
mod ui;
mod views;

use anyhow::Result;

use crate::config::Config;
use crate::storage::SqliteStorage;
use crate::store::TransactionStore;
use crate::ui::app::App;

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_args(&args)?;
    config.ensure_parent_dir()?;

    let storage = SqliteStorage::open(&config.db_path)?;
    let store = TransactionStore::load(storage)?;
    let mut app = App::new(store);

    run::as_cli(&config.args, &mut app)
}
