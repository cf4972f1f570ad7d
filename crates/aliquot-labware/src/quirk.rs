//! Labware quirk flags.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named geometric or behavioral deviation attached to a labware
/// definition.
///
/// Only quirks this workspace acts on get their own variant; anything
/// else is kept verbatim in [`Quirk::Other`] so it survives a round trip.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Quirk {
    /// Center an 8-channel pipette's tip span on the target well instead
    /// of anchoring the first tip on it. Used by single-row reservoirs.
    CenterMultichannelOnWells,
    /// Any quirk without special handling.
    Other(String),
}

impl Quirk {
    /// The catalog spelling of this quirk.
    pub fn as_str(&self) -> &str {
        match self {
            Self::CenterMultichannelOnWells => "centerMultichannelOnWells",
            Self::Other(name) => name,
        }
    }

    /// Parse a catalog quirk name, mapping known names to their variant.
    pub fn parse(name: &str) -> Self {
        match name {
            "centerMultichannelOnWells" => Self::CenterMultichannelOnWells,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for Quirk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Quirk {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for Quirk {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<Quirk> for String {
    fn from(q: Quirk) -> Self {
        match q {
            Quirk::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}
