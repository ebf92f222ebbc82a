use contracts::domain::a001_user_record::{UserColumn, UserRecord};
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Состояние таблицы пользователей: фильтры по колонкам и текущая страница.
///
/// Набор записей неизменяем; отфильтрованные строки вычисляются из него на
/// каждый запрос, в исходном порядке.
#[derive(Clone, Debug)]
pub struct UserTableState {
    records: Vec<UserRecord>,
    /// column -> lowercase substring; пустые значения не хранятся
    filters: BTreeMap<UserColumn, String>,
    /// текст фильтров в том виде, как его ввёл пользователь
    typed: BTreeMap<UserColumn, String>,
    page: usize,
    rows_per_page: usize,
}

impl UserTableState {
    pub fn new(records: Vec<UserRecord>, rows_per_page: usize) -> Self {
        Self {
            records,
            filters: BTreeMap::new(),
            typed: BTreeMap::new(),
            page: 1,
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn filter(&self, column: UserColumn) -> Option<&str> {
        self.filters.get(&column).map(String::as_str)
    }

    /// Filter text as typed, for refilling the inputs on remount
    pub fn input_text(&self, column: UserColumn) -> Option<&str> {
        self.typed.get(&column).map(String::as_str)
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Sets the filter for one column. An empty string removes the constraint.
    pub fn set_column_filter(&mut self, column: UserColumn, text: &str) {
        let value = text.to_lowercase();
        if value.is_empty() {
            self.filters.remove(&column);
            self.typed.remove(&column);
        } else {
            self.filters.insert(column, value);
            self.typed.insert(column, text.to_string());
        }
        self.clamp_page();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.typed.clear();
        self.clamp_page();
    }

    fn matches(&self, record: &UserRecord) -> bool {
        self.filters
            .iter()
            .all(|(column, value)| record.column_text(*column).to_lowercase().contains(value))
    }

    /// Records satisfying every active filter, in dataset order
    pub fn derive(&self) -> Vec<&UserRecord> {
        self.records.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.records.iter().filter(|r| self.matches(r)).count()
    }

    /// Never less than 1, so an empty result still has a page to show
    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.rows_per_page).max(1)
    }

    /// Rows of the current page
    pub fn paginate(&self) -> Vec<UserRecord> {
        let start = (self.page - 1) * self.rows_per_page;
        self.derive()
            .into_iter()
            .skip(start)
            .take(self.rows_per_page)
            .cloned()
            .collect()
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.can_go_prev() {
            self.page -= 1;
        }
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }
}

pub fn create_state(records: Vec<UserRecord>, rows_per_page: usize) -> RwSignal<UserTableState> {
    RwSignal::new(UserTableState::new(records, rows_per_page))
}
