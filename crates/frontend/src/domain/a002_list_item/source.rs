//! Источник данных для списка a002.
//!
//! `ItemSource` - шов между состоянием UI и сервером. Сейчас единственная
//! реализация `MockItemSource` имитирует запрос: ждёт заданное время и
//! с заданной вероятностью отвечает ошибкой.

use contracts::domain::a002_list_item::{parse_items, ListItem, MOCK_RESPONSE_BODY};
use thiserror::Error;

/// Ошибки загрузки списка
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    FetchFailed(String),
}

/// Сообщение, с которым отвечает имитация при сбое
pub const MOCK_FAILURE_MESSAGE: &str = "Mock fetch failed";

#[allow(async_fn_in_trait)]
pub trait ItemSource {
    async fn fetch_items(&self) -> Result<Vec<ListItem>, FetchError>;
}

/// Имитация сервера: задержка, случайный сбой, фиксированный ответ
#[derive(Clone, Copy)]
pub struct MockItemSource {
    delay_ms: u32,
    failure_rate: f64,
    /// Uniform draw in [0, 1)
    roll: fn() -> f64,
}

impl MockItemSource {
    pub fn new(delay_ms: u32, failure_rate: f64) -> Self {
        Self::with_roll(delay_ms, failure_rate, js_sys::Math::random)
    }

    pub fn with_roll(delay_ms: u32, failure_rate: f64, roll: fn() -> f64) -> Self {
        Self {
            delay_ms,
            failure_rate,
            roll,
        }
    }
}

impl ItemSource for MockItemSource {
    async fn fetch_items(&self) -> Result<Vec<ListItem>, FetchError> {
        if self.delay_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        }

        if (self.roll)() < self.failure_rate {
            return Err(FetchError::FetchFailed(MOCK_FAILURE_MESSAGE.to_string()));
        }

        parse_items(MOCK_RESPONSE_BODY)
            .map_err(|e| FetchError::FetchFailed(format!("Ошибка парсинга: {}", e)))
    }
}
