// Theme bounded context: light/dark preference and derived presentation tokens
pub mod application;
pub mod domain;

pub use application::ThemeStore;
pub use domain::{PlatformThemeProbe, StaticThemeProbe, ThemeMode, ThemeTokens};
