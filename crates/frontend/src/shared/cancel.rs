//! Флаг отмены для фоновых задач, привязанных к жизни компонента.
//!
//! Компонент создаёт токен, передаёт клон в `spawn_local` и отменяет его
//! в `on_cleanup`. Задача проверяет токен перед записью результата в состояние.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
