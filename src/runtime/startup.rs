use tracing::{info, warn};

use crate::account::{AccountStore, JsonFileStore, KeyValueStore, MemoryStore};
use crate::app::App;
use crate::audio::AudioPlayer;
use crate::catalog::{Catalog, CatalogError};
use crate::config;
use crate::playback::{PlaybackEngine, Placeholders};
use crate::progress::ProgressController;
use crate::shell::NoticeKind;

/// The application as the binary runs it.
pub type Player = App<AudioPlayer, Box<dyn KeyValueStore>>;

/// Open the account store at the configured location.
///
/// Without a usable store, accounts live in memory for this session only;
/// the second value is a message for the user when that happens.
pub fn open_store(settings: &config::Settings) -> (Box<dyn KeyValueStore>, Option<String>) {
    let Some(path) = settings.storage_path() else {
        warn!("no data directory, accounts will not be saved");
        return (
            Box::new(MemoryStore::default()),
            Some("No data directory: accounts will not be saved.".to_string()),
        );
    };

    match JsonFileStore::open(&path) {
        Ok(store) => {
            info!(path = %store.path().display(), "opened account store");
            (Box::new(store), None)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot open account store");
            (
                Box::new(MemoryStore::default()),
                Some(format!("Accounts will not be saved: {e}")),
            )
        }
    }
}

/// Build the catalog, audio backend and controller, then apply the startup
/// volume and restore the saved session.
pub fn build_app(settings: &config::Settings) -> Result<Player, CatalogError> {
    let catalog = Catalog::from_settings(&settings.catalog)?;
    info!(tracks = catalog.len(), "catalog ready");

    let audio_player = AudioPlayer::new(settings.audio.clone());
    let engine = PlaybackEngine::new(catalog, audio_player, Placeholders::from(&settings.ui));
    let progress = ProgressController::new(settings.audio.default_volume);
    let (store, store_warning) = open_store(settings);

    let mut app = App::new(
        engine,
        progress,
        AccountStore::new(store),
        settings.controls.clone(),
    );
    app.start();
    if let Some(msg) = store_warning {
        app.shell.notify(NoticeKind::Error, msg);
    }
    Ok(app)
}
