/// Универсальные утилиты для работы со списками (поиск, подсветка совпадений)
use leptos::prelude::*;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive проверка вхождения подстроки
pub fn contains_ignore_case(text: &str, filter: &str) -> bool {
    text.to_lowercase().contains(&filter.to_lowercase())
}

/// Фильтрует список по поисковому запросу; пустой запрос возвращает список как есть
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // Позиции ищутся в lowercase-копии, поэтому длины в байтах должны совпадать
    if filter_lower.is_empty()
        || text_lower.len() != text.len()
        || !text_lower.contains(&filter_lower)
    {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! { <mark class="list__match">{text[actual_pos..match_end].to_string()}</mark> }
                .into_any(),
        );

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Named(&'static str);

    impl Searchable for Named {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ignore_case(self.0, filter)
        }
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Alice", "ALI"));
        assert!(contains_ignore_case("Alice", ""));
        assert!(!contains_ignore_case("Bob", "ali"));
    }

    #[test]
    fn test_filter_list() {
        let items = vec![Named("Alice"), Named("Bob"), Named("Charlie")];
        assert_eq!(filter_list(&items, ""), items);
        assert_eq!(filter_list(&items, "li"), vec![Named("Alice"), Named("Charlie")]);
        assert!(filter_list(&items, "zed").is_empty());
    }
}
