//! Memoized all-steps projection.
//!
//! [`ProjectionCache`] holds the result of
//! [`all_well_contents_for_steps`] together with a fingerprint of the
//! inputs it was computed from. Subsequent calls with the same timeline
//! and labware entities return the cached projection; any change to
//! either recomputes it.
//!
//! Both inputs carry monotonic instance ids that change whenever their
//! contents could have changed: a new or grown timeline, a new or
//! mutated entities table.

use aliquot_core::{Diagnostics, EntitiesInstanceId, TimelineInstanceId};
use aliquot_labware::LabwareEntities;

use crate::projection::all_well_contents_for_steps;
use crate::summary::WellContentsByLabware;
use crate::timeline::Timeline;

/// Cached all-steps projection with input-identity invalidation.
///
/// # Example
///
/// ```ignore
/// let mut cache = ProjectionCache::new();
/// // First call computes:
/// let steps = cache.all_steps(&timeline, &entities, &TracingDiagnostics);
/// // Same inputs reuse it:
/// let steps = cache.all_steps(&timeline, &entities, &TracingDiagnostics);
/// ```
///
/// # Invalidation
///
/// The projection is recomputed when:
/// - Nothing has been computed yet.
/// - A different timeline instance is passed, or the timeline has grown.
/// - A different entities table is passed, or the table was mutated.
/// - [`invalidate`](Self::invalidate) is called explicitly.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    cached: Option<CachedProjection>,
}

/// Identity of the inputs a projection was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InputFingerprint {
    timeline: TimelineInstanceId,
    snapshot_count: usize,
    entities: EntitiesInstanceId,
    entity_count: usize,
}

impl InputFingerprint {
    fn of(timeline: &Timeline, entities: &LabwareEntities) -> Self {
        Self {
            timeline: timeline.instance_id(),
            snapshot_count: timeline.len(),
            entities: entities.instance_id(),
            entity_count: entities.len(),
        }
    }
}

#[derive(Debug)]
struct CachedProjection {
    fingerprint: InputFingerprint,
    steps: Vec<WellContentsByLabware>,
}

impl ProjectionCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// The all-steps projection for `timeline` and `entities`,
    /// recomputing only if the inputs changed since the last call.
    ///
    /// Diagnostics are reported only when the projection is recomputed.
    pub fn all_steps(
        &mut self,
        timeline: &Timeline,
        entities: &LabwareEntities,
        diagnostics: &dyn Diagnostics,
    ) -> &[WellContentsByLabware] {
        let fingerprint = InputFingerprint::of(timeline, entities);
        if self
            .cached
            .as_ref()
            .is_some_and(|c| c.fingerprint != fingerprint)
        {
            self.cached = None;
        }
        let cached = self.cached.get_or_insert_with(|| CachedProjection {
            fingerprint,
            steps: all_well_contents_for_steps(timeline, entities, diagnostics),
        });
        &cached.steps
    }

    /// `true` if a projection is cached for exactly these inputs.
    pub fn is_current_for(&self, timeline: &Timeline, entities: &LabwareEntities) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|c| c.fingerprint == InputFingerprint::of(timeline, entities))
    }

    /// Whether any projection is currently cached.
    pub fn is_computed(&self) -> bool {
        self.cached.is_some()
    }

    /// Drop the cached projection, forcing recomputation on next use.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
