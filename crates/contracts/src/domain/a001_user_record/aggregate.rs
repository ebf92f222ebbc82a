use crate::enums::UserRole;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Количество записей в демонстрационном наборе
pub const MOCK_RECORD_COUNT: usize = 50;

const COUNTRIES: [&str; 5] = ["USA", "Germany", "India", "Brazil", "Canada"];

/// Строка статической таблицы пользователей (a001)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub age: u32,
    pub country: String,
    pub email: String,
    pub role: UserRole,
}

impl UserRecord {
    /// Строит запись по порядковому номеру (0-based), значения повторяются циклически
    pub fn generate(index: usize) -> Self {
        let number = index + 1;
        Self {
            name: format!("User {}", number),
            age: 20 + (index % 30) as u32,
            country: COUNTRIES[index % COUNTRIES.len()].to_string(),
            email: format!("user{}@example.com", number),
            role: UserRole::all()[index % 3],
        }
    }

    /// Текстовое значение колонки, по которому работает фильтр и отрисовка ячейки
    pub fn column_text(&self, column: UserColumn) -> String {
        match column {
            UserColumn::Name => self.name.clone(),
            UserColumn::Age => self.age.to_string(),
            UserColumn::Country => self.country.clone(),
            UserColumn::Email => self.email.clone(),
            UserColumn::Role => self.role.to_string(),
        }
    }
}

/// Колонки таблицы в порядке отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UserColumn {
    Name,
    Age,
    Country,
    Email,
    Role,
}

impl UserColumn {
    pub fn all() -> [UserColumn; 5] {
        [
            UserColumn::Name,
            UserColumn::Age,
            UserColumn::Country,
            UserColumn::Email,
            UserColumn::Role,
        ]
    }

    /// Заголовок колонки
    pub fn label(&self) -> &'static str {
        match self {
            UserColumn::Name => "Name",
            UserColumn::Age => "Age",
            UserColumn::Country => "Country",
            UserColumn::Email => "Email",
            UserColumn::Role => "Role",
        }
    }
}

/// Генерирует `count` записей
pub fn generate_records(count: usize) -> Vec<UserRecord> {
    (0..count).map(UserRecord::generate).collect()
}

/// Стандартный набор из 50 записей, создаётся один раз
pub static MOCK_RECORDS: Lazy<Vec<UserRecord>> = Lazy::new(|| generate_records(MOCK_RECORD_COUNT));
