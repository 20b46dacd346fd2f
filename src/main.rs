#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

use gettextrs::*;
use std::sync::Arc;
use tokio::time::timeout;

mod api;
mod app;
mod settings;

use crate::api::{
    FixtureRestaurantsClient, GetPagedRestaurantsList, RefreshPagedRestaurantsList, SourceError,
};
use crate::app::{RestaurantList, RestaurantListModel, Worker};
use crate::settings::FoodieSettings;

const GETTEXT_PACKAGE: &str = "foodie";
const MAX_ROWS: usize = 20;

fn main() {
    let settings = match FoodieSettings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    env_logger::Builder::new()
        .parse_filters(&settings.log_level)
        .parse_default_env()
        .init();

    setup_gettext(&settings.locale_dir);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("Could not start runtime: {}", err);
            std::process::exit(1);
        }
    };

    let worker = Worker::new(runtime.handle().clone());
    if let Err(err) = runtime.block_on(run(settings, worker)) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn setup_gettext(locale_dir: &str) {
    setlocale(LocaleCategory::LcAll, "");
    if let Err(err) = bindtextdomain(GETTEXT_PACKAGE, locale_dir) {
        warn!("Could not bind text domain: {}", err);
    }
    if let Err(err) = bind_textdomain_codeset(GETTEXT_PACKAGE, "UTF-8") {
        warn!("Could not set text domain codeset: {}", err);
    }
    if let Err(err) = textdomain(GETTEXT_PACKAGE) {
        warn!("Could not switch text domain: {}", err);
    }
}

fn make_client(settings: &FoodieSettings) -> Result<FixtureRestaurantsClient, SourceError> {
    match settings.fixture.as_ref() {
        Some(path) => {
            info!("loading restaurants from {}", path.display());
            FixtureRestaurantsClient::from_file(path, settings.batch_size)
        }
        None => FixtureRestaurantsClient::bundled(settings.batch_size),
    }
}

async fn run(settings: FoodieSettings, worker: Worker) -> Result<(), SourceError> {
    let client = Arc::new(make_client(&settings)?);
    let model = RestaurantListModel::new(
        worker,
        Arc::new(GetPagedRestaurantsList(Arc::clone(&client))),
        Arc::new(RefreshPagedRestaurantsList(client)),
    );
    let view = RestaurantList::new(MAX_ROWS);
    let mut ui_state = model.ui_state();

    model.on_location_requested(settings.location_granted);
    if settings.refresh_on_start {
        model.on_refresh();
    }

    // The list is considered settled once nothing has been published for a while
    loop {
        match timeout(settings.idle_timeout, ui_state.changed()).await {
            Ok(Ok(())) => {}
            _ => break,
        }
        let state = ui_state.borrow_and_update().clone();
        for line in view.render(&state) {
            println!("{}", line);
        }
        println!();
    }

    debug!("restaurant list settled");
    Ok(())
}
