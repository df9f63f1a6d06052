use std::fmt;

/// The logical keys this application persists, one writer each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Favorites,
    User,
    Theme,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Favorites => "movieExplorer_favorites",
            StorageKey::User => "movieExplorer_user",
            StorageKey::Theme => "movieExplorer_theme",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
