use serde::{Deserialize, Serialize};
use std::fmt;

/// Роль пользователя в демонстрационной таблице
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Editor,
    Viewer,
}

impl UserRole {
    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Editor => "Editor",
            UserRole::Viewer => "Viewer",
        }
    }

    /// Получить все роли в порядке генерации
    pub fn all() -> [UserRole; 3] {
        [UserRole::Admin, UserRole::Editor, UserRole::Viewer]
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
