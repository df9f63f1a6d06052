pub mod platform;
pub mod theme_mode;
pub mod theme_tokens;

pub use platform::{PlatformThemeProbe, StaticThemeProbe};
pub use theme_mode::ThemeMode;
pub use theme_tokens::{PaletteColor, ThemeTokens};
