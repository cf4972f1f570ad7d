//! Labware entities: which definition each labware on the deck uses.

use std::sync::Arc;

use indexmap::IndexMap;

use aliquot_core::{EntitiesInstanceId, LabwareId};

use crate::definition::LabwareDefinition;

/// Labware id → shared definition for every labware known to a protocol.
///
/// Definitions are shared through `Arc` because many labware items on a
/// deck commonly use the same definition. Every mutation allocates a
/// fresh [`EntitiesInstanceId`], so `(instance_id, len)` identifies the
/// table's contents for memoization.
#[derive(Clone, Debug)]
pub struct LabwareEntities {
    instance_id: EntitiesInstanceId,
    entities: IndexMap<LabwareId, Arc<LabwareDefinition>>,
}

impl LabwareEntities {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            instance_id: EntitiesInstanceId::next(),
            entities: IndexMap::new(),
        }
    }

    /// Register (or replace) the definition used by `labware_id`.
    pub fn insert(&mut self, labware_id: impl Into<LabwareId>, def: Arc<LabwareDefinition>) {
        self.entities.insert(labware_id.into(), def);
        self.instance_id = EntitiesInstanceId::next();
    }

    /// Definition for a labware id.
    pub fn get(&self, labware_id: &str) -> Option<&Arc<LabwareDefinition>> {
        self.entities.get(labware_id)
    }

    /// Number of labware entries.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// `true` if no labware is registered.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Identity of the table's current contents.
    pub fn instance_id(&self) -> EntitiesInstanceId {
        self.instance_id
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&LabwareId, &Arc<LabwareDefinition>)> + '_ {
        self.entities.iter()
    }
}

impl Default for LabwareEntities {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<LabwareId>> FromIterator<(K, Arc<LabwareDefinition>)> for LabwareEntities {
    fn from_iter<I: IntoIterator<Item = (K, Arc<LabwareDefinition>)>>(iter: I) -> Self {
        Self {
            instance_id: EntitiesInstanceId::next(),
            entities: iter.into_iter().map(|(k, d)| (k.into(), d)).collect(),
        }
    }
}
