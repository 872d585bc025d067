//! "Missing feature" toggles.

use serde::{Deserialize, Serialize};

/// One of the four on/off conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanFlag {
    /// Only points without a place node.
    NoNode,
    /// Only points without an administrative boundary relation.
    NoBoundary,
    /// Only points with a zero roads score.
    NoRoad,
    /// Only points with a zero buildings score.
    NoBuilding,
}

impl BooleanFlag {
    pub const COUNT: usize = 4;

    pub fn all() -> &'static [BooleanFlag; Self::COUNT] {
        &[
            BooleanFlag::NoNode,
            BooleanFlag::NoBoundary,
            BooleanFlag::NoRoad,
            BooleanFlag::NoBuilding,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            BooleanFlag::NoNode => "No place node",
            BooleanFlag::NoBoundary => "No boundary",
            BooleanFlag::NoRoad => "No roads",
            BooleanFlag::NoBuilding => "No buildings",
        }
    }
}

/// Current value of all four flags, copied out for one filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BooleanSnapshot {
    pub no_node: bool,
    pub no_boundary: bool,
    pub no_road: bool,
    pub no_building: bool,
}

impl BooleanSnapshot {
    pub fn get(&self, flag: BooleanFlag) -> bool {
        match flag {
            BooleanFlag::NoNode => self.no_node,
            BooleanFlag::NoBoundary => self.no_boundary,
            BooleanFlag::NoRoad => self.no_road,
            BooleanFlag::NoBuilding => self.no_building,
        }
    }

    fn slot(&mut self, flag: BooleanFlag) -> &mut bool {
        match flag {
            BooleanFlag::NoNode => &mut self.no_node,
            BooleanFlag::NoBoundary => &mut self.no_boundary,
            BooleanFlag::NoRoad => &mut self.no_road,
            BooleanFlag::NoBuilding => &mut self.no_building,
        }
    }
}

/// The four toggles, all off by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooleanFilterSet {
    state: BooleanSnapshot,
}

impl BooleanFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, flag: BooleanFlag) -> bool {
        self.state.get(flag)
    }

    pub fn set(&mut self, flag: BooleanFlag, on: bool) {
        *self.state.slot(flag) = on;
    }

    /// Flip `flag` and return its new value.
    pub fn toggle(&mut self, flag: BooleanFlag) -> bool {
        let slot = self.state.slot(flag);
        *slot = !*slot;
        *slot
    }

    pub fn reset(&mut self) {
        self.state = BooleanSnapshot::default();
    }

    pub fn snapshot(&self) -> BooleanSnapshot {
        self.state
    }
}
