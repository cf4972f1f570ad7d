//! Strongly-typed identifiers.
//!
//! Labware, wells, ingredient groups and steps are all keyed by strings
//! in the surrounding application. Each gets its own newtype so a well
//! name can never be passed where a labware id is expected. All of them
//! implement `Borrow<str>`, so maps keyed by them can be queried with a
//! plain `&str`.

use std::borrow::Borrow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(v: &str) -> Self {
                Self(v.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(v: String) -> Self {
                Self(v)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id! {
    /// Identifies a labware item placed on the deck (e.g. `"plateId"`).
    LabwareId
}

string_id! {
    /// Name of a well within one labware (e.g. `"A1"`).
    ///
    /// Unique within a labware definition, not across labware.
    WellName
}

string_id! {
    /// Identifies an ingredient group: a liquid tracked independently of
    /// the wells that currently hold it.
    IngredGroupId
}

string_id! {
    /// Identifies a protocol step in the ordered step list.
    StepId
}

/// Counter for unique [`TimelineInstanceId`] allocation.
static TIMELINE_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Counter for unique [`EntitiesInstanceId`] allocation.
static ENTITIES_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a robot-state timeline.
///
/// Allocated from a monotonic atomic counter. Independently built timelines
/// never share an id, even with identical contents; a timeline takes a fresh
/// id whenever it grows, so the id is a safe memoization key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimelineInstanceId(u64);

impl TimelineInstanceId {
    /// Allocate a fresh, unique instance ID. Thread-safe.
    pub fn next() -> Self {
        Self(TIMELINE_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TimelineInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique per-instance identifier for a labware entities table.
///
/// Same allocation scheme as [`TimelineInstanceId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntitiesInstanceId(u64);

impl EntitiesInstanceId {
    /// Allocate a fresh, unique instance ID. Thread-safe.
    pub fn next() -> Self {
        Self(ENTITIES_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntitiesInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
