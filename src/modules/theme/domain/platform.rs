use super::theme_mode::ThemeMode;
use crate::log_debug;

/// Source of the host's preferred color scheme
pub trait PlatformThemeProbe: Send + Sync {
    fn preferred_mode(&self) -> Option<ThemeMode>;
}

/// Fixed answer, typically read from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticThemeProbe {
    mode: Option<ThemeMode>,
}

impl StaticThemeProbe {
    pub fn new(mode: Option<ThemeMode>) -> Self {
        Self { mode }
    }

    /// Unparseable values count as "no preference"
    pub fn from_setting(setting: Option<&str>) -> Self {
        let mode = setting.and_then(|raw| match raw.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                log_debug!("Ignoring platform theme setting: {}", e);
                None
            }
        });
        Self { mode }
    }
}

impl PlatformThemeProbe for StaticThemeProbe {
    fn preferred_mode(&self) -> Option<ThemeMode> {
        self.mode
    }
}
