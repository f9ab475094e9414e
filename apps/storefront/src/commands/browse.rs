//! # Browse Commands
//!
//! Search box, category chips, theme switch and the current view.

use tracing::debug;

use folio_core::{CategoryFilter, StorefrontView, Theme};

use crate::error::{ApiError, ApiResult};
use crate::storefront::Storefront;

impl Storefront {
    /// Updates the search term and re-renders.
    ///
    /// The term is matched case-insensitively against title and author, and
    /// is not trimmed.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        debug!(term = %term, "set_search_term command");

        let view = self.state.with_state_mut(|s| {
            s.search_term = term;
            s.view()
        });
        self.publish(&view, None);
    }

    /// Selects a category chip and re-renders.
    ///
    /// `"all"` (any case) or a blank token shows every book; any other token
    /// is matched case-insensitively against book categories.
    pub fn set_category(&self, token: &str) {
        let category = CategoryFilter::from_token(token);
        debug!(category = %category, "set_category command");

        let view = self.state.with_state_mut(|s| {
            s.category = category;
            s.view()
        });
        self.publish(&view, None);
    }

    /// Switches between dark and light, persists the choice and re-renders.
    ///
    /// ## Errors
    /// `STORAGE_ERROR` when the preference cannot be saved (theme unchanged).
    pub fn toggle_theme(&self) -> ApiResult<Theme> {
        debug!("toggle_theme command");

        let (theme, view) = self.state.with_state_mut(|s| {
            let theme = s.preferences.toggle_theme()?;
            Ok::<_, ApiError>((theme, s.view()))
        })?;

        self.publish(&view, None);
        Ok(theme)
    }

    /// The current view, without notifying render sinks.
    pub fn view(&self) -> StorefrontView {
        self.state.with_state(|s| s.view())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::{seeded, Recorder};
    use crate::config::StorefrontConfig;
    use crate::storefront::Storefront;
    use folio_core::{BookDraft, Theme};
    use folio_store::adapter::DARK_MODE_KEY;
    use folio_store::{KeyValueStorage, MemoryStorage};
    use std::sync::Arc;

    fn titles(storefront: &Storefront) -> Vec<String> {
        storefront.view().books.into_iter().map(|b| b.title).collect()
    }

    #[test]
    fn test_search_matches_title_or_author_case_insensitively() {
        let storefront = seeded();

        storefront.set_search_term("HERBERT");
        assert_eq!(titles(&storefront), vec!["Dune"]);

        storefront.set_search_term("the");
        assert_eq!(titles(&storefront), vec!["The Great Gatsby", "The Alchemist"]);

        storefront.set_search_term("");
        assert_eq!(titles(&storefront).len(), 5);
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let storefront = seeded();
        storefront.set_search_term(" dune");

        let view = storefront.view();
        assert!(view.books.is_empty());
        assert!(view.show_empty_message);
        assert_eq!(view.search_term, " dune");
    }

    #[test]
    fn test_category_chips() {
        let storefront = seeded();

        storefront.set_category("fiction");
        assert_eq!(titles(&storefront), vec!["The Great Gatsby", "The Alchemist"]);

        storefront.set_category("non-fiction");
        assert_eq!(titles(&storefront), vec!["Atomic Habits"]);

        storefront.set_category("poetry");
        assert!(storefront.view().show_empty_message);
        assert_eq!(storefront.view().category, "poetry");

        storefront.set_category("ALL");
        assert_eq!(titles(&storefront).len(), 5);
        assert_eq!(storefront.view().category, "all");
    }

    #[test]
    fn test_search_and_category_combine() {
        let storefront = seeded();
        storefront.set_category("fiction");
        storefront.set_search_term("alch");
        assert_eq!(titles(&storefront), vec!["The Alchemist"]);
    }

    #[test]
    fn test_uncategorized_book_only_under_all() {
        let storefront = seeded();
        storefront
            .submit_new_book(BookDraft::new("Untitled", "Anon", "1.00", "  "))
            .unwrap();

        let card = storefront.view().books.pop().unwrap();
        assert_eq!(card.category, "Uncategorized");

        storefront.set_category("fiction");
        assert!(!titles(&storefront).contains(&"Untitled".to_string()));
    }

    #[test]
    fn test_every_command_rerenders() {
        let storefront = seeded();
        let recorder = Recorder::attach(&storefront);

        storefront.set_search_term("a");
        storefront.set_category("fiction");
        storefront.toggle_theme().unwrap();

        assert_eq!(recorder.render_count(), 3);
        assert!(recorder.names().is_empty());
        assert_eq!(recorder.last_view().unwrap(), storefront.view());
    }

    #[test]
    fn test_theme_defaults_dark_and_persists() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let config = StorefrontConfig::in_memory();

        let storefront = Storefront::with_storage(storage.clone(), &config).unwrap();
        assert_eq!(storefront.view().theme, Theme::Dark);

        assert_eq!(storefront.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(storage.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));

        let reopened = Storefront::with_storage(storage, &config).unwrap();
        assert_eq!(reopened.view().theme, Theme::Light);
    }

    #[test]
    fn test_malformed_dark_mode_means_dark() {
        let storage: Arc<dyn KeyValueStorage> =
            Arc::new(MemoryStorage::with_entries([(DARK_MODE_KEY, "yes please")]));
        let storefront = Storefront::with_storage(storage, &StorefrontConfig::in_memory()).unwrap();
        assert_eq!(storefront.view().theme, Theme::Dark);
    }

    #[test]
    fn test_view_is_idempotent() {
        let storefront = seeded();
        storefront.set_search_term("e");
        assert_eq!(storefront.view(), storefront.view());
    }
}
