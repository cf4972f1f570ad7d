//! Robot-state timelines and the active-item selection.
//!
//! A [`Timeline`] is produced upstream by simulating a protocol: an
//! initial robot state plus one committed snapshot per step that ran
//! successfully. Simulation stops at the first failing step, so the last
//! committed snapshot (or the initial state, if none) is the last valid
//! robot state.

use indexmap::IndexMap;

use aliquot_core::{
    IngredGroupId, LabwareId, LiquidState, LiquidVolume, StepId, TimelineInstanceId, WellName,
};

/// Where a labware sits on the deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabwarePlacement {
    /// Deck slot (e.g. `"1"`).
    pub slot: String,
}

/// Robot state at one point of a protocol.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RobotState {
    /// Labware on the deck, in placement order.
    pub labware: IndexMap<LabwareId, LabwarePlacement>,
    /// Liquid held by each labware. Labware that never held liquid may
    /// have no entry.
    pub liquid_state: LiquidState,
}

impl RobotState {
    /// An empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a labware in a deck slot.
    pub fn with_labware(mut self, labware_id: impl Into<LabwareId>, slot: impl Into<String>) -> Self {
        self.labware.insert(
            labware_id.into(),
            LabwarePlacement { slot: slot.into() },
        );
        self
    }

    /// Set the volume of one ingredient group in one well, creating the
    /// labware and well entries as needed.
    pub fn with_liquid(
        mut self,
        labware_id: impl Into<LabwareId>,
        well: impl Into<WellName>,
        group: impl Into<IngredGroupId>,
        volume: f64,
    ) -> Self {
        self.liquid_state
            .entry(labware_id.into())
            .or_default()
            .entry(well.into())
            .or_default()
            .insert(group.into(), LiquidVolume::new(volume));
        self
    }
}

/// Append-only sequence of robot states produced by simulating steps.
///
/// Carries a [`TimelineInstanceId`] that is reallocated on every
/// [`push`](Self::push), so clones that diverge never share an id.
#[derive(Clone, Debug)]
pub struct Timeline {
    instance_id: TimelineInstanceId,
    initial: RobotState,
    snapshots: Vec<RobotState>,
}

impl Timeline {
    /// A timeline with no steps committed yet.
    pub fn new(initial: RobotState) -> Self {
        Self {
            instance_id: TimelineInstanceId::next(),
            initial,
            snapshots: Vec::new(),
        }
    }

    /// A timeline from an initial state and already-committed snapshots.
    pub fn from_snapshots(initial: RobotState, snapshots: Vec<RobotState>) -> Self {
        Self {
            instance_id: TimelineInstanceId::next(),
            initial,
            snapshots,
        }
    }

    /// Commit the robot state after the next step.
    pub fn push(&mut self, state: RobotState) {
        self.snapshots.push(state);
        self.instance_id = TimelineInstanceId::next();
    }

    /// State before any step runs.
    pub fn initial(&self) -> &RobotState {
        &self.initial
    }

    /// One state per successfully simulated step, in step order.
    pub fn snapshots(&self) -> &[RobotState] {
        &self.snapshots
    }

    /// Number of committed step snapshots (excluding the initial state).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// `true` if no step has been committed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The furthest state known to be valid.
    pub fn last_valid(&self) -> &RobotState {
        self.snapshots.last().unwrap_or(&self.initial)
    }

    /// Identity of this timeline.
    pub fn instance_id(&self) -> TimelineInstanceId {
        self.instance_id
    }

    /// Initial state followed by every snapshot.
    pub fn states(&self) -> impl Iterator<Item = &RobotState> + '_ {
        std::iter::once(&self.initial).chain(self.snapshots.iter())
    }
}

/// Non-step items in the step list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminalId {
    /// Before the first step: the initial deck setup.
    Start,
    /// After the last step.
    End,
}

impl TerminalId {
    /// Identifier the step list uses for this terminal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "__initial_setup__",
            Self::End => "__end__",
        }
    }

    /// Parse a step-list terminal identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "__initial_setup__" => Some(Self::Start),
            "__end__" => Some(Self::End),
            _ => None,
        }
    }
}

/// The item currently selected for inspection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActiveItem {
    /// A protocol step.
    Step(StepId),
    /// The start or end terminal.
    Terminal(TerminalId),
}

impl ActiveItem {
    /// Interpret a raw item id: terminal ids map to [`ActiveItem::Terminal`],
    /// everything else is a step.
    pub fn from_id(id: &str) -> Self {
        match TerminalId::from_id(id) {
            Some(t) => Self::Terminal(t),
            None => Self::Step(StepId::from(id)),
        }
    }
}
