//! Support modules for the windowed paging BDD tests.

pub(crate) mod domain;
pub(crate) mod state;

pub(crate) use domain::{PageLimit, PageNumber, RecordCount, RecordIds};
pub(crate) use state::{PagingState, numbered_records, record_ids, run_paging};
