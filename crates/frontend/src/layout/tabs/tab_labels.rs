//! Tab labels - единственный источник правды для ключей и заголовков табов.

/// Табы демо-страницы. Набор закрыт: других табов не бывает.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DemoTab {
    #[default]
    Home,
    Table,
    LargeComponent,
}

impl DemoTab {
    /// Все табы в порядке отображения
    pub fn all() -> [DemoTab; 3] {
        [DemoTab::Home, DemoTab::Table, DemoTab::LargeComponent]
    }

    pub fn key(&self) -> &'static str {
        match self {
            DemoTab::Home => "home",
            DemoTab::Table => "table",
            DemoTab::LargeComponent => "large-component",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DemoTab::Home => "Home",
            DemoTab::Table => "Table",
            DemoTab::LargeComponent => "Large Component",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(DemoTab::default(), DemoTab::Home);
    }

    #[test]
    fn test_keys_and_labels() {
        let keys: Vec<&str> = DemoTab::all().iter().map(|t| t.key()).collect();
        assert_eq!(keys, vec!["home", "table", "large-component"]);

        let labels: Vec<&str> = DemoTab::all().iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Home", "Table", "Large Component"]);
    }

    #[test]
    fn test_from_key() {
        for tab in DemoTab::all() {
            assert_eq!(DemoTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(DemoTab::from_key("Large Component"), None);
        assert_eq!(DemoTab::from_key("settings"), None);
    }
}
