use tracing::debug;

use folio_core::Theme;

use crate::adapter::ShelfStorage;
use crate::error::StoreResult;

/// The persisted theme preference.
#[derive(Debug)]
pub struct PreferenceStore {
    storage: ShelfStorage,
    theme: Theme,
}

impl PreferenceStore {
    /// Loads the theme; dark unless `"darkMode"` is exactly `"false"`.
    pub fn load(storage: ShelfStorage) -> StoreResult<Self> {
        let theme = storage.load_theme()?;
        debug!(?theme, "Theme loaded");
        Ok(PreferenceStore { storage, theme })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches dark/light and persists. The theme is unchanged on failure.
    pub fn toggle_theme(&mut self) -> StoreResult<Theme> {
        let next = self.theme.toggled();
        self.storage.save_theme(next)?;
        self.theme = next;
        debug!(theme = ?next, "Theme toggled");
        Ok(next)
    }
}
