use serde::{Deserialize, Deserializer};
use sqlx::{Sqlite, Transaction};
use tracing::warn;

use crate::error::{CampError, CampResult};

pub mod activity_service;
pub mod camper_service;
pub mod signup_service;

/// Rolls the transaction back, then reports `err`. A failed rollback is only
/// logged; the connection discards the transaction when it is returned.
pub(crate) async fn abort<T>(tx: Transaction<'_, Sqlite>, err: CampError) -> CampResult<T> {
    if let Err(e) = tx.rollback().await {
        warn!(error = %e, "rollback failed");
    }
    Err(err)
}

/// Used with `#[serde(default)]` so a patch field distinguishes "absent"
/// (`None`) from an explicit `null` (`Some(None)`).
pub(crate) fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
