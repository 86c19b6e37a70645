//! [`AdjustedDate`] serialization impl.
use serde::ser::{Error, Serialize, Serializer};

use crate::AdjustedDate;

impl Serialize for AdjustedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let json = self.to_json().map_err(S::Error::custom)?;
        serializer.serialize_str(&json)
    }
}
