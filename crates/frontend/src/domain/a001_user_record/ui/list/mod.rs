pub mod state;

use self::state::UserTableState;
use crate::shared::components::{FilterPanel, PaginationControls};
use contracts::domain::a001_user_record::{UserColumn, UserRecord};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// Таблица пользователей с фильтром в каждой колонке и постраничным выводом.
///
/// Состояние принадлежит вызывающей стороне, поэтому фильтры и страница
/// переживают переключение табов.
#[component]
pub fn UserRecordList(state: RwSignal<UserTableState>) -> impl IntoView {
    let columns = UserColumn::all();

    // Значения полей ввода; при повторном монтировании берём их из состояния
    let inputs: Vec<(UserColumn, RwSignal<String>)> = columns
        .iter()
        .map(|column| {
            let initial = state.with_untracked(|s| s.input_text(*column).unwrap_or_default().to_string());
            (*column, RwSignal::new(initial))
        })
        .collect();

    for (column, input) in inputs.iter().cloned() {
        Effect::new(move || {
            let v = input.get();
            untrack(move || {
                state.update(|s| s.set_column_filter(column, &v));
            });
        });
    }

    let inputs_for_clear = inputs.clone();
    let clear_filters = move |_: ()| {
        log!("Clearing all table filters");
        for (_, input) in inputs_for_clear.iter() {
            input.set(String::new());
        }
        state.update(|s| s.clear_filters());
    };

    let page_rows = Memo::new(move |_| state.with(|s| s.paginate()));

    view! {
        <div class="user-table">
            <FilterPanel
                active_filters_count=Signal::derive(move || state.with(|s| s.active_filter_count()))
                on_clear=Callback::new(clear_filters)
            />

            <div class="table-wrapper">
                <table class="table">
                    <thead class="table__head">
                        <tr>
                            {inputs
                                .into_iter()
                                .map(|(column, input)| {
                                    view! {
                                        <th class="table__header-cell">
                                            <div class="table__header-filter">
                                                <span>{column.label()}</span>
                                                <Input
                                                    value=input
                                                    placeholder=format!("Filter {}", column.label())
                                                />
                                            </div>
                                        </th>
                                    }
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = page_rows.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__empty" colspan=columns.len().to_string()>
                                            "No results found."
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                rows.into_iter()
                                    .enumerate()
                                    .map(|(idx, row)| render_row(idx, row))
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page()))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                on_prev=Callback::new(move |_: ()| state.update(|s| s.prev_page()))
                on_next=Callback::new(move |_: ()| state.update(|s| s.next_page()))
            />
        </div>
    }
}

fn render_row(idx: usize, row: UserRecord) -> impl IntoView {
    let class = if idx % 2 == 0 {
        "table__row"
    } else {
        "table__row table__row--striped"
    };

    view! {
        <tr class=class>
            {UserColumn::all()
                .into_iter()
                .map(|column| view! { <td class="table__cell">{row.column_text(column)}</td> })
                .collect_view()}
        </tr>
    }
}
