mod table;
pub use table::RunTable;

mod row;
pub use row::RunRow;

mod detail;
pub use detail::RunDetail;

use crate::core::{activity::Activity, dataset};

/// Shared state for the runs view aggregating the embedded feed or a load error.
#[derive(Debug, Clone, Default)]
pub struct RunsState {
    pub runs: Vec<Activity>,
    pub error: Option<String>,
}

impl RunsState {
    pub fn load() -> Self {
        match dataset::load() {
            Ok(mut runs) => {
                runs.sort_by(|a, b| b.start_date_local.cmp(&a.start_date_local));
                Self { runs, error: None }
            }
            Err(err) => Self {
                runs: Vec::new(),
                error: Some(format!("Couldn't load the activity feed: {err}")),
            },
        }
    }
}
