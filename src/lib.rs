pub mod args;
pub mod error;
pub mod handicap;
pub mod model;
pub mod stats;
pub mod storage;
pub mod controller {
    pub mod dashboard;
    pub mod db_prefill;
    pub mod handicap;
    pub mod rounds;
    pub mod scorecard;
}
pub mod view {
    pub mod dashboard;
    pub mod output;
    pub mod scorecard;
}

pub use error::AppError;
pub use handicap::{HandicapLookupTable, LookupTable, calculate_handicap_index};
pub use storage::{RoundHistoryRepository, SqliteStore, Storage};
