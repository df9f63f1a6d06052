pub mod theme_store;

pub use theme_store::ThemeStore;
