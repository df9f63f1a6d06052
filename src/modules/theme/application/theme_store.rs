use crate::modules::persistence::{PersistenceAdapter, StorageKey};
use crate::modules::theme::domain::{PlatformThemeProbe, ThemeMode, ThemeTokens};
use crate::{log_info, log_warn};
use std::sync::{PoisonError, RwLock};

/// Light/dark preference. Initial mode: persisted value, then the platform
/// preference, then light.
pub struct ThemeStore {
    persistence: PersistenceAdapter,
    mode: RwLock<ThemeMode>,
}

impl ThemeStore {
    pub fn new(persistence: PersistenceAdapter, platform: &dyn PlatformThemeProbe) -> Self {
        let mode = Self::initial_mode(&persistence, platform);
        log_info!("Theme initialized in {} mode", mode);

        Self {
            persistence,
            mode: RwLock::new(mode),
        }
    }

    fn initial_mode(
        persistence: &PersistenceAdapter,
        platform: &dyn PlatformThemeProbe,
    ) -> ThemeMode {
        let persisted = persistence
            .load_text(StorageKey::Theme)
            .and_then(|raw| match raw.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    log_warn!("Ignoring stored theme: {}", e);
                    None
                }
            });

        persisted
            .or_else(|| platform.preferred_mode())
            .unwrap_or_default()
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Flip the mode and persist it; returns the new mode
    pub fn toggle(&self) -> ThemeMode {
        let mut mode = self.mode.write().unwrap_or_else(PoisonError::into_inner);
        *mode = mode.toggled();
        self.persistence.save_text(StorageKey::Theme, mode.as_str());
        *mode
    }

    pub fn set_mode(&self, next: ThemeMode) {
        let mut mode = self.mode.write().unwrap_or_else(PoisonError::into_inner);
        if *mode != next {
            *mode = next;
            self.persistence.save_text(StorageKey::Theme, next.as_str());
        }
    }

    pub fn tokens(&self) -> ThemeTokens {
        ThemeTokens::for_mode(self.mode())
    }
}
