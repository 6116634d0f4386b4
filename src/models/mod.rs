pub mod store_overwrite;
pub mod store_time;

pub use store_overwrite::{NewStoreOverwrite, StoreOverwrite, StoreOverwritePatch};
pub use store_time::{NewStoreTime, StoreTime, StoreTimePatch};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::validation::Validate;

/// A persisted resource: identified by an immutable server-assigned id,
/// created from a draft and changed by field-wise patches.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Create payload (every field except the id)
    type Draft: Validate + Send;
    /// Update payload (every mutable field optional)
    type Patch: Validate + Send;

    /// Singular name used in logs
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// New record equal to `self` with exactly the patch's present fields replaced
    fn merge(&self, patch: Self::Patch) -> Self;
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
/// Pair with `#[serde(default)]`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
