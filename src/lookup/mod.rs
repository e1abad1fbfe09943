mod persistence;
mod table;

pub use persistence::{load_reference_csv, load_reference_json, load_reference_table};
pub use table::{MatchStrategy, ReferenceTable};

use crate::error::Result;
use crate::models::ReferenceFood;

/// Source of reference foods, queried by normalized search key.
///
/// Implementations return at most one row whose name contains `key`
/// case-insensitively, and `Ok(None)` for an empty key or no match.
/// An `Err` means the source itself could not be queried.
pub trait FoodLookup {
    fn find(&self, key: &str) -> Result<Option<ReferenceFood>>;
}

impl<T: FoodLookup + ?Sized> FoodLookup for &T {
    fn find(&self, key: &str) -> Result<Option<ReferenceFood>> {
        (**self).find(key)
    }
}
