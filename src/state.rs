use log::info;
use std::sync::Arc;

use crate::config::Config;
use crate::directory::{DirectorySource, HttpDirectoryClient};
use crate::errors::AppError;
use crate::listing::ListingViewModel;
use crate::storage::{Credentials, FavoriteStore, FileStore, KeyValueStore, SessionStore};

/// Everything the handlers share. Built once at process start and torn down
/// after the server stops.
pub struct AppState {
    pub listing: ListingViewModel,
    pub favorites: FavoriteStore,
    pub session: SessionStore,
}

impl AppState {
    pub fn init(config: &Config) -> Result<Self, AppError> {
        let kv: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.storage_dir)?);
        let directory = HttpDirectoryClient::new(config.directory_base_url.clone(), config.directory_timeout)?;
        info!(
            "Using directory at {} and storage in {}",
            config.directory_base_url,
            config.storage_dir.display()
        );
        Ok(Self::from_parts(
            kv,
            Arc::new(directory),
            config.page_size,
            config.credentials.clone(),
        ))
    }

    pub fn from_parts(
        kv: Arc<dyn KeyValueStore>,
        directory: Arc<dyn DirectorySource>,
        page_size: usize,
        credentials: Credentials,
    ) -> Self {
        AppState {
            listing: ListingViewModel::new(directory, page_size),
            favorites: FavoriteStore::load(kv.clone()),
            session: SessionStore::new(kv, credentials),
        }
    }

    pub fn shutdown(&self) -> Result<(), AppError> {
        self.favorites.flush()?;
        info!("Saved {} bookmarks on shutdown", self.favorites.len());
        Ok(())
    }
}
