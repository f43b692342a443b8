//! Ship catalog entries, shape geometry and per-ship damage tracking.

use alloc::string::String;
use alloc::vec::Vec;

/// Offset triples for the four seaplane rotations: apex plus two diagonal
/// wingtips, with the apex rotated through the four compass-adjacent
/// positions.
const TRIANGLE_ROTATIONS: [[(i16, i16); 3]; 4] = [
    [(0, 0), (1, -1), (1, 1)],
    [(0, 0), (-1, -1), (1, -1)],
    [(0, 0), (-1, -1), (-1, 1)],
    [(0, 0), (-1, 1), (1, 1)],
];

/// Shape family of a ship: straight line or V-shaped seaplane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipShape {
    Linear,
    Triangle,
}

impl ShipShape {
    /// Number of distinct rotations for this shape.
    pub fn rotations(self) -> u8 {
        match self {
            ShipShape::Linear => 2,
            ShipShape::Triangle => 4,
        }
    }

    /// Generate the ordered cell set for an anchor and rotation.
    ///
    /// Cells are signed and may fall outside the grid; callers bounds-check
    /// before placement.
    pub fn cells(self, row: i16, col: i16, rotation: u8, size: usize) -> Vec<(i16, i16)> {
        match self {
            ShipShape::Linear => (0..size as i16)
                .map(|i| {
                    if rotation % 2 == 0 {
                        (row, col + i)
                    } else {
                        (row + i, col)
                    }
                })
                .collect(),
            ShipShape::Triangle => TRIANGLE_ROTATIONS[rotation as usize % 4]
                .iter()
                .map(|&(dr, dc)| (row + dr, col + dc))
                .collect(),
        }
    }
}

/// Catalog entry: a ship class with its name, size, per-fleet count and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    id: &'static str,
    name: &'static str,
    size: usize,
    count: usize,
    shape: ShipShape,
}

impl ShipClass {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        size: usize,
        count: usize,
        shape: ShipShape,
    ) -> Self {
        Self {
            id,
            name,
            size,
            count,
            shape,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Instances of this class in a full fleet.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn shape(&self) -> ShipShape {
        self.shape
    }
}

/// A placed ship instance. Immutable once a fleet is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    /// Unique within one player's fleet, e.g. `"seaplane-2"`.
    pub instance_id: String,
    pub name: String,
    pub size: usize,
    /// Ordered cell list as generated from anchor + rotation.
    pub cells: Vec<(u8, u8)>,
}

impl Ship {
    pub fn contains(&self, row: u8, col: u8) -> bool {
        self.cells.iter().any(|&(r, c)| r == row && c == col)
    }
}

/// Damage tracking for one ship instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipHealth {
    pub total: usize,
    pub hits: usize,
    pub hit_cells: Vec<(u8, u8)>,
    pub sunk: bool,
}

impl ShipHealth {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            hits: 0,
            hit_cells: Vec::new(),
            sunk: false,
        }
    }

    /// Record a hit on `cell` and report whether the ship just sank.
    pub fn register_hit(&mut self, cell: (u8, u8)) -> bool {
        self.hits += 1;
        self.hit_cells.push(cell);
        if self.hits >= self.total {
            self.sunk = true;
        }
        self.sunk
    }

    /// Undamaged segments left.
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.hits)
    }
}
