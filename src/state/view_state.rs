// ============================================================================
// VIEW STATE - Estado efímero de las vistas (búsqueda y acordeón)
// ============================================================================

use crate::models::RestaurantSummary;
use crate::utils::constants::NO_MATCH_MESSAGE;

/// Entrada filtrable por nombre
pub trait Searchable {
    fn search_name(&self) -> &str;
}

impl Searchable for RestaurantSummary {
    fn search_name(&self) -> &str {
        &self.name
    }
}

/// Texto de búsqueda pendiente + último resultado confirmado.
/// El resultado solo cambia con `commit()`, no con cada tecla.
#[derive(Debug, Clone)]
pub struct SearchFilter<T> {
    source: Vec<T>,
    text: String,
    committed: Vec<T>,
}

impl<T: Searchable + Clone> SearchFilter<T> {
    pub fn new() -> Self {
        Self {
            source: Vec::new(),
            text: String::new(),
            committed: Vec::new(),
        }
    }

    /// Nueva lista completa: el resultado confirmado vuelve a ser la lista entera
    pub fn set_source(&mut self, source: Vec<T>) {
        self.committed = source.clone();
        self.source = source;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Recalcula el resultado: substring sin distinguir mayúsculas
    pub fn commit(&mut self) -> &[T] {
        let needle = self.text.to_lowercase();
        self.committed = self
            .source
            .iter()
            .filter(|entry| entry.search_name().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        log::debug!("🔍 [SEARCH] '{}' → {} resultados", self.text, self.committed.len());
        &self.committed
    }

    /// Último resultado confirmado
    pub fn visible(&self) -> &[T] {
        &self.committed
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn fallback_message(&self) -> Option<&'static str> {
        self.committed.is_empty().then_some(NO_MATCH_MESSAGE)
    }
}

impl<T: Searchable + Clone> Default for SearchFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Acordeón de una sola categoría abierta
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: usize,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: usize) {
        self.open = index;
    }

    pub fn open_index(&self) -> usize {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry(&'static str);

    impl Searchable for Entry {
        fn search_name(&self) -> &str {
            self.0
        }
    }

    fn filter() -> SearchFilter<Entry> {
        let mut filter = SearchFilter::new();
        filter.set_source(vec![Entry("Pizza Hut"), Entry("Burger King"), Entry("La Pino'z Pizza")]);
        filter
    }

    #[test]
    fn typing_does_not_change_result_until_commit() {
        let mut filter = filter();
        filter.set_text("burger");
        assert_eq!(filter.visible().len(), 3);

        filter.commit();
        assert_eq!(filter.visible(), &[Entry("Burger King")]);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let mut filter = filter();
        filter.set_text("PIZZA");
        assert_eq!(filter.commit(), &[Entry("Pizza Hut"), Entry("La Pino'z Pizza")]);
    }

    #[test]
    fn empty_text_returns_full_list() {
        let mut filter = filter();
        filter.set_text("king");
        filter.commit();
        filter.set_text("");
        let full = filter.source().to_vec();
        assert_eq!(filter.commit(), full.as_slice());
        assert_eq!(filter.fallback_message(), None);
    }

    #[test]
    fn no_match_yields_empty_list_and_fallback() {
        let mut filter = filter();
        filter.set_text("sushi");
        assert!(filter.commit().is_empty());
        assert_eq!(filter.fallback_message(), Some(NO_MATCH_MESSAGE));
    }

    #[test]
    fn accordion_defaults_to_first_category() {
        let accordion = Accordion::new();
        assert_eq!(accordion.open_index(), 0);
        assert!(accordion.is_open(0));
    }

    #[test]
    fn accordion_keeps_only_latest_selection_open() {
        let mut accordion = Accordion::new();
        for (a, b) in [(1, 3), (3, 0), (2, 1)] {
            accordion.select(a);
            accordion.select(b);
            let open: Vec<_> = (0..5).filter(|i| accordion.is_open(*i)).collect();
            assert_eq!(open, vec![b]);
        }
    }

    proptest! {
        #[test]
        fn only_the_last_selection_is_open(selections in prop::collection::vec(0usize..12, 1..30)) {
            let mut accordion = Accordion::new();
            for index in &selections {
                accordion.select(*index);
            }

            let last = selections[selections.len() - 1];
            let open: Vec<usize> = (0..12).filter(|i| accordion.is_open(*i)).collect();
            prop_assert_eq!(open, vec![last]);
        }

        #[test]
        fn second_of_two_distinct_selections_wins(a in 0usize..12, b in 0usize..12) {
            prop_assume!(a != b);
            let mut accordion = Accordion::new();
            accordion.select(a);
            accordion.select(b);

            prop_assert!(accordion.is_open(b));
            prop_assert!(!accordion.is_open(a));
        }
    }
}
