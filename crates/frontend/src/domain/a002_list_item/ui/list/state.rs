use crate::domain::a002_list_item::source::{FetchError, ItemSource};
use crate::shared::cancel::CancellationToken;
use crate::shared::list_utils::{contains_ignore_case, filter_list, Searchable};
use contracts::domain::a002_list_item::ListItem;
use leptos::logging::log;
use leptos::prelude::*;
use std::future::Future;

impl Searchable for ListItem {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.name, filter)
    }
}

/// Стадии одноразовой загрузки списка
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<ListItem>),
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct ListItemState {
    pub load: LoadState,
    pub name_filter: String,
}

impl ListItemState {
    /// Idle -> Loading. Returns false if a load already started.
    pub fn begin_load(&mut self) -> bool {
        if self.load != LoadState::Idle {
            return false;
        }
        self.load = LoadState::Loading;
        true
    }

    /// Loading -> Loaded | Failed. Results arriving in any other state are dropped.
    pub fn finish_load(&mut self, result: Result<Vec<ListItem>, FetchError>) {
        if self.load != LoadState::Loading {
            log!("Ignoring load result in state {:?}", self.load);
            return;
        }
        self.load = match result {
            Ok(items) => LoadState::Loaded(items),
            Err(e) => LoadState::Failed(e.to_string()),
        };
    }

    pub fn set_name_filter(&mut self, text: &str) {
        self.name_filter = text.to_string();
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Idle | LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded items; empty until the load succeeds
    pub fn items(&self) -> &[ListItem] {
        match &self.load {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn filtered_items(&self) -> Vec<ListItem> {
        filter_list(self.items(), &self.name_filter)
    }
}

pub fn create_state() -> RwSignal<ListItemState> {
    RwSignal::new(ListItemState::default())
}

/// Runs one fetch and hands back its result unless the token was cancelled meanwhile
pub async fn fetch_unless_cancelled<S: ItemSource>(
    source: &S,
    token: &CancellationToken,
) -> Option<Result<Vec<ListItem>, FetchError>> {
    let result = source.fetch_items().await;
    if token.is_cancelled() {
        log!("List load finished after cleanup, result dropped");
        return None;
    }
    Some(result)
}

/// Переводит `state` в `Loading` и отдаёт задачу загрузки.
///
/// `None`, если загрузка уже начиналась или сигнал уже уничтожен: повторный
/// вызов при ре-рендере второй fetch не запускает.
pub fn prepare_load<S: ItemSource + 'static>(
    state: RwSignal<ListItemState>,
    source: S,
    token: CancellationToken,
) -> Option<impl Future<Output = ()> + 'static> {
    if state.try_update(|s| s.begin_load()) != Some(true) {
        return None;
    }
    log!("Loading list items...");

    Some(async move {
        if let Some(result) = fetch_unless_cancelled(&source, &token).await {
            if let Err(e) = &result {
                log::error!("Failed to load list items: {}", e);
            }
            // сигнал мог быть уничтожен, пока шёл запрос
            if state.try_update(|s| s.finish_load(result)).is_none() {
                log!("List state disposed, result dropped");
            }
        }
    })
}

/// Starts the one-shot load for `state` on the local executor
pub fn start_load<S: ItemSource + 'static>(
    state: RwSignal<ListItemState>,
    source: S,
    token: CancellationToken,
) {
    if let Some(task) = prepare_load(state, source, token) {
        leptos::task::spawn_local(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_list_item::source::MOCK_FAILURE_MESSAGE;
    use contracts::domain::a002_list_item::{parse_items, MOCK_RESPONSE_BODY};
    use futures::executor::block_on;

    struct FixedSource(Result<Vec<ListItem>, FetchError>);

    impl ItemSource for FixedSource {
        async fn fetch_items(&self) -> Result<Vec<ListItem>, FetchError> {
            self.0.clone()
        }
    }

    /// Cancels the token while the fetch is in flight
    struct CancellingSource(CancellationToken);

    impl ItemSource for CancellingSource {
        async fn fetch_items(&self) -> Result<Vec<ListItem>, FetchError> {
            self.0.cancel();
            Ok(items())
        }
    }

    fn items() -> Vec<ListItem> {
        parse_items(MOCK_RESPONSE_BODY).unwrap()
    }

    fn run_load(source: &impl ItemSource, token: &CancellationToken) -> ListItemState {
        let mut state = ListItemState::default();
        assert!(state.begin_load());
        assert_eq!(state.load, LoadState::Loading);
        assert!(state.is_loading());

        if let Some(result) = block_on(fetch_unless_cancelled(source, token)) {
            state.finish_load(result);
        }
        state
    }

    #[test]
    fn test_successful_load() {
        let state = run_load(&FixedSource(Ok(items())), &CancellationToken::new());
        assert_eq!(state.load, LoadState::Loaded(items()));
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.filtered_items(), items());
    }

    #[test]
    fn test_failed_load() {
        let source = FixedSource(Err(FetchError::FetchFailed(MOCK_FAILURE_MESSAGE.to_string())));
        let state = run_load(&source, &CancellationToken::new());
        assert_eq!(state.load, LoadState::Failed("Mock fetch failed".to_string()));
        assert_eq!(state.error(), Some("Mock fetch failed"));
        assert!(state.items().is_empty());
        assert!(state.filtered_items().is_empty());
    }

    #[test]
    fn test_cancelled_load_never_reaches_state() {
        let token = CancellationToken::new();
        let state = run_load(&CancellingSource(token.clone()), &token);
        assert_eq!(state.load, LoadState::Loading);
    }

    #[test]
    fn test_load_is_one_shot() {
        let mut state = ListItemState::default();
        assert!(state.begin_load());
        assert!(!state.begin_load());

        state.finish_load(Ok(items()));
        assert!(!state.begin_load());

        // второй результат не перезаписывает первый
        state.finish_load(Err(FetchError::FetchFailed("late".to_string())));
        assert_eq!(state.load, LoadState::Loaded(items()));
    }

    #[test]
    fn test_result_before_begin_is_ignored() {
        let mut state = ListItemState::default();
        state.finish_load(Ok(items()));
        assert_eq!(state.load, LoadState::Idle);
        assert!(state.is_loading());
    }

    #[test]
    fn test_name_filter() {
        let mut state = ListItemState::default();
        state.begin_load();
        state.finish_load(Ok(items()));

        state.set_name_filter("ali");
        let names: Vec<String> = state.filtered_items().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Alice"]);

        state.set_name_filter("A");
        let names: Vec<String> = state.filtered_items().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Alice", "Charlie", "Diana"]);

        state.set_name_filter("");
        assert_eq!(state.filtered_items().len(), 4);
    }

    #[test]
    fn test_name_filter_before_load() {
        let mut state = ListItemState::default();
        state.set_name_filter("ali");
        state.begin_load();
        assert!(state.filtered_items().is_empty());

        state.finish_load(Ok(items()));
        assert_eq!(state.filtered_items().len(), 1);
    }

    #[test]
    fn test_searchable_fields() {
        let item = &items()[1];
        assert!(item.matches_filter("BO"));
        assert!(!item.matches_filter("manager"));
    }

    #[test]
    fn test_second_load_does_not_restart() {
        let owner = Owner::new();
        owner.set();

        let state = create_state();
        let first = prepare_load(state, FixedSource(Ok(items())), CancellationToken::new());
        assert!(first.is_some());
        assert_eq!(state.with_untracked(|s| s.load.clone()), LoadState::Loading);

        // второй старт во время загрузки ничего не делает
        start_load(state, FixedSource(Ok(vec![])), CancellationToken::new());
        assert!(prepare_load(state, FixedSource(Ok(vec![])), CancellationToken::new()).is_none());
        assert_eq!(state.with_untracked(|s| s.load.clone()), LoadState::Loading);

        block_on(first.unwrap());
        assert_eq!(state.with_untracked(|s| s.load.clone()), LoadState::Loaded(items()));

        // и после завершения тоже
        start_load(state, FixedSource(Ok(vec![])), CancellationToken::new());
        assert_eq!(state.with_untracked(|s| s.items().len()), 4);
    }

    #[test]
    fn test_load_into_disposed_state() {
        let owner = Owner::new();
        owner.set();

        let state = create_state();
        let task = prepare_load(state, FixedSource(Ok(items())), CancellationToken::new()).unwrap();
        state.dispose();

        block_on(task);
        assert!(state.try_get_untracked().is_none());
        assert!(prepare_load(state, FixedSource(Ok(items())), CancellationToken::new()).is_none());
        start_load(state, FixedSource(Ok(items())), CancellationToken::new());
    }
}
