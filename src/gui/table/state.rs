use std::ops::Range;

use super::{
    pagination::{
        self,
        DEFAULT_PAGE_SIZE,
    },
    search,
    sort::{
        self,
        SortField,
        SortState,
    },
};
use crate::core::Member;

/// Search, sort and page position of the member list. Visible indices are
/// recomputed lazily after anything that affects them changes.
pub struct ListState {
    sort: SortState,
    search: String,
    page: usize,
    page_size: usize,
    visible_indices: Vec<usize>,
    dirty: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            sort: SortState::default(),
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            visible_indices: Vec::new(),
            dirty: true,
        }
    }
}

impl ListState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self { page_size: pagination::normalize_page_size(page_size), ..Self::default() }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: String) {
        if self.search != search {
            self.search = search;
            self.page = 1;
            self.dirty = true;
        }
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle_or_set(field);
        self.dirty = true;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = pagination::normalize_page_size(page_size);
        if self.page_size != page_size {
            self.page_size = page_size;
            self.page = 1;
        }
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.visible_indices.len(), self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    pub fn filtered_count(&self) -> usize {
        self.visible_indices.len()
    }

    pub fn caption(&self) -> String {
        pagination::caption(self.page, self.page_size, self.visible_indices.len())
    }

    pub fn ensure_indices(&mut self, members: &[Member]) {
        let needs_rebuild =
            self.dirty || self.visible_indices.iter().any(|&idx| idx >= members.len());

        if needs_rebuild {
            self.recompute_indices(members);
        }
    }

    /// Member indices of the current page, in display order.
    pub fn page_indices(&self) -> &[usize] {
        let range: Range<usize> =
            pagination::page_range(self.page, self.page_size, self.visible_indices.len());
        &self.visible_indices[range]
    }

    fn recompute_indices(&mut self, members: &[Member]) {
        self.visible_indices = members
            .iter()
            .enumerate()
            .filter(|(_, member)| search::matches_search(member, &self.search))
            .map(|(idx, _)| idx)
            .collect();

        if let Some(field) = self.sort.field {
            sort::sort_indices(&mut self.visible_indices, members, field, self.sort.direction);
        }

        // A shrunk collection (after a delete) must not strand the view past its last page.
        self.page = self.page.min(self.total_pages().max(1));
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::table::sort::SortDirection;

    fn roster(count: usize) -> Vec<Member> {
        (0..count)
            .map(|i| Member {
                nombres_completos: if i % 2 == 0 { format!("Ana {i}") } else { format!("Luis {i}") },
                apellidos_completos: format!("Apellido {:02}", count - i),
                cedula: format!("09{:08}", i),
                ..Member::default()
            })
            .collect()
    }

    #[test]
    fn test_paging_through_twenty_three() {
        let members = roster(23);
        let mut state = ListState::default();
        state.ensure_indices(&members);

        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.page_indices().len(), 10);
        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 3);
        assert_eq!(state.page_indices(), &[20, 21, 22]);
        assert!(!state.has_next());
        state.next_page();
        assert_eq!(state.page(), 3);
        assert_eq!(state.caption(), "Mostrando 21 a 23 de 23");
    }

    #[test]
    fn test_search_and_page_size_reset_page() {
        let members = roster(23);
        let mut state = ListState::default();
        state.ensure_indices(&members);
        state.next_page();

        state.set_search("ana".to_string());
        assert_eq!(state.page(), 1);
        state.ensure_indices(&members);
        assert_eq!(state.filtered_count(), 12);

        state.next_page();
        state.set_page_size(5);
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_sorting_reorders_pages() {
        let members = roster(23);
        let mut state = ListState::default();
        state.toggle_sort(SortField::Apellidos);
        state.ensure_indices(&members);
        assert_eq!(state.page_indices()[0], 22);

        state.toggle_sort(SortField::Apellidos);
        assert_eq!(state.sort_state().direction, SortDirection::Descending);
        state.ensure_indices(&members);
        assert_eq!(state.page_indices()[0], 0);
    }

    #[test]
    fn test_page_clamped_when_collection_shrinks() {
        let mut members = roster(23);
        let mut state = ListState::default();
        state.ensure_indices(&members);
        state.next_page();
        state.next_page();

        members.truncate(20);
        state.mark_dirty();
        state.ensure_indices(&members);
        assert_eq!(state.page(), 2);
        assert_eq!(state.page_indices().len(), 10);
    }

    #[test]
    fn test_invalid_page_size_defaults() {
        let state = ListState::with_page_size(7);
        assert_eq!(state.page_size(), 10);
    }
}
