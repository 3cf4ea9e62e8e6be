//! Scenario state and paging helpers for the windowed paging BDD tests.

use paging_window::{
    FieldRange, MemoryFetchError, MemoryFetcher, Paging, PagingError, Setting, get_paging,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::{Value, json};

use super::domain::{PageLimit, PageNumber, RecordCount};

#[derive(ScenarioState, Default)]
pub(crate) struct PagingState {
    pub(crate) records: Slot<Vec<Value>>,
    pub(crate) filter: Slot<FieldRange>,
    pub(crate) result: Slot<Paging<Value>>,
    pub(crate) error: Slot<PagingError<MemoryFetchError>>,
}

/// Builds `count` records with ids `1..=count`.
pub(crate) fn numbered_records(count: RecordCount) -> Vec<Value> {
    (1..=count.value()).map(|id| json!({ "id": id })).collect()
}

/// Pages the seeded records with the scenario's filter.
pub(crate) fn run_paging(
    paging_state: &PagingState,
    page: PageNumber,
    limit: PageLimit,
) -> Result<Paging<Value>, PagingError<MemoryFetchError>> {
    let records = paging_state
        .records
        .get()
        .unwrap_or_else(|| panic!("records not seeded"));
    let fetcher = MemoryFetcher::<Value, Option<FieldRange>>::new(records);
    let setting = Setting::new(paging_state.filter.get())
        .with_limit(limit.value())
        .with_active_page(page.value());

    get_paging(&fetcher, setting)
}

/// Extracts the `id` field of each record.
pub(crate) fn record_ids(records: &[Value]) -> Vec<u64> {
    records
        .iter()
        .map(|record| {
            record
                .get("id")
                .and_then(Value::as_u64)
                .unwrap_or_else(|| panic!("record without numeric id: {record}"))
        })
        .collect()
}
