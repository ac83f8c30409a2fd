//! Settings store over the key-value boundary.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::constants::SETTINGS_STORAGE_KEY;
use crate::errors::Result;
use crate::storage::KvStoreTrait;

use super::settings_model::{Settings, SettingsUpdate};

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Current settings; defaults when nothing is stored yet.
    fn get_settings(&self) -> Result<Settings>;

    /// Read-merge-write update. Returns the merged settings.
    async fn update_settings(&self, update: SettingsUpdate) -> Result<Settings>;

    fn get_base_currency(&self) -> Result<String>;
}

pub struct SettingsService {
    store: Arc<dyn KvStoreTrait>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn KvStoreTrait>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        match self.store.get(SETTINGS_STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => Ok(settings),
                Err(e) => {
                    warn!("Stored settings are unreadable ({}), using defaults", e);
                    Ok(Settings::default())
                }
            },
            None => Ok(Settings::default()),
        }
    }

    async fn update_settings(&self, update: SettingsUpdate) -> Result<Settings> {
        let mut settings = self.get_settings()?;

        if let Some(currency) = update.currency {
            settings.currency = currency;
        }
        if let Some(theme) = update.theme {
            settings.theme = theme;
        }
        if let Some(refresh_interval_secs) = update.refresh_interval_secs {
            settings.refresh_interval_secs = refresh_interval_secs;
        }
        if let Some(notifications_enabled) = update.notifications_enabled {
            settings.notifications_enabled = notifications_enabled;
        }
        if let Some(sound_enabled) = update.sound_enabled {
            settings.sound_enabled = sound_enabled;
        }

        let raw = serde_json::to_string(&settings)?;
        self.store.set(SETTINGS_STORAGE_KEY, &raw)?;
        Ok(settings)
    }

    fn get_base_currency(&self) -> Result<String> {
        Ok(self.get_settings()?.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;

    fn service_with_store() -> (SettingsService, Arc<MemoryKvStore>) {
        let store = Arc::new(MemoryKvStore::new());
        (SettingsService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn defaults_when_unset() {
        let (service, _store) = service_with_store();
        let settings = service.get_settings().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(service.get_base_currency().unwrap(), "USD");
    }

    #[tokio::test]
    async fn update_merges_and_persists() {
        let (service, store) = service_with_store();

        let updated = service
            .update_settings(SettingsUpdate {
                currency: Some("EUR".to_string()),
                refresh_interval_secs: Some(60),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.currency, "EUR");
        assert_eq!(updated.refresh_interval_secs, 60);
        // Untouched fields keep their defaults
        assert_eq!(updated.theme, "dark");

        let reloaded = SettingsService::new(store);
        assert_eq!(reloaded.get_base_currency().unwrap(), "EUR");
    }

    #[tokio::test]
    async fn corrupt_stored_value_falls_back_to_defaults() {
        let (service, store) = service_with_store();
        store.set(SETTINGS_STORAGE_KEY, "{broken").unwrap();
        assert_eq!(service.get_settings().unwrap(), Settings::default());
    }
}
