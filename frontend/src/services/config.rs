use gloo::storage::{errors::StorageError, LocalStorage, Storage};
use shared::ClientConfig;

use super::logging::Logger;

/// localStorage key holding a JSON override of [`ClientConfig`]
pub const CONFIG_STORAGE_KEY: &str = "financial-nudger.config";

/// Load the stored config override, falling back to defaults when the key
/// is absent or unreadable.
pub fn load_config() -> ClientConfig {
    match LocalStorage::get::<ClientConfig>(CONFIG_STORAGE_KEY) {
        Ok(config) => {
            Logger::info_with_component(
                "config",
                &format!("Loaded stored config (api base: '{}')", config.api_base_url),
            );
            config
        }
        Err(StorageError::KeyNotFound(_)) => ClientConfig::default(),
        Err(e) => {
            Logger::warn_with_component(
                "config",
                &format!("Ignoring stored config {}: {}", CONFIG_STORAGE_KEY, e),
            );
            ClientConfig::default()
        }
    }
}
