use tracing::debug;

use super::handicap::compute_handicap_for_user;
use crate::error::AppError;
use crate::handicap::HandicapLookupTable;
use crate::stats::DashboardReport;
use crate::storage::Storage;

/// Live index plus the latest ledger entry, the user's rounds and their statistics.
///
/// # Errors
///
/// Will return `Err` if a store read fails or the handicap cannot be computed
pub fn get_data_for_dashboard<S, T>(
    store: &S,
    table: &T,
    user_id: i64,
) -> Result<DashboardReport, AppError>
where
    S: Storage + ?Sized,
    T: HandicapLookupTable + ?Sized,
{
    let handicap = compute_handicap_for_user(store, table, user_id)?;
    let recorded = store.latest_handicap(user_id)?;
    let rounds = store.fetch_rounds(user_id)?;
    debug!(
        user_id,
        rounds = rounds.len(),
        recorded = recorded.is_some(),
        "building dashboard"
    );
    Ok(DashboardReport::build(user_id, handicap, recorded, &rounds)?)
}
