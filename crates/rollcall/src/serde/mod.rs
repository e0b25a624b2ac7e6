//! Serde support for [`RecordId`].
//!
//! Identifiers serialize as plain integers. Deserialization rejects values
//! above [`RecordId::MAX`] instead of silently wrapping them.

use crate::RecordId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for RecordId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_u32(self.to_raw())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(d)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}
