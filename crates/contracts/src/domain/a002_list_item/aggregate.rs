use serde::{Deserialize, Serialize};

/// Элемент асинхронно загружаемого списка (a002)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u32,
    pub name: String,
    pub description: String,
}

/// Тело ответа, которое отдаёт имитация сервера
pub const MOCK_RESPONSE_BODY: &str = r#"[
    { "id": 1, "name": "Alice", "description": "A software engineer" },
    { "id": 2, "name": "Bob", "description": "A product manager" },
    { "id": 3, "name": "Charlie", "description": "A designer" },
    { "id": 4, "name": "Diana", "description": "A data scientist" }
]"#;

/// Разбор JSON-массива элементов
pub fn parse_items(body: &str) -> Result<Vec<ListItem>, serde_json::Error> {
    serde_json::from_str(body)
}
