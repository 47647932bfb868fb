use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Presence (optional payload field)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Absent: key omitted
// - Null: key present with null
// - Value(v): key present with a value
//
// Absent and Null both mean "not provided". Rules that only care
// about that go through `provided()`; rules that must tell a present
// null apart (CV keys) match on the variants directly.
//
// Serde behavior:
// - omitted field => Absent (needs #[serde(default)] on the field)
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Presence<T> {
    #[serde(skip)]
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Presence::Absent
    }
}

impl<T> From<Option<T>> for Presence<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Presence::Value(v),
            None => Presence::Absent,
        }
    }
}

impl<T> Presence<T> {
    /// Used by `skip_serializing_if`; an absent key stays absent on the way out.
    pub fn is_absent(&self) -> bool {
        matches!(self, Presence::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Presence::Null)
    }

    pub fn is_provided(&self) -> bool {
        matches!(self, Presence::Value(_))
    }

    /// Collapses `Absent` and `Null` into `None`.
    pub fn provided(&self) -> Option<&T> {
        if let Presence::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn into_provided(self) -> Option<T> {
        if let Presence::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}
