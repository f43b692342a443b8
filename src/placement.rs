//! Fleet placement: overlap/adjacency validation and the randomized
//! best-effort auto-placer.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::config::{GRID_SIZE, PLACEMENT_TRIALS, SHIP_CLASSES};
use crate::coord::in_bounds;
use crate::ship::Ship;

/// Cell → owning ship instance id. Rebuilt from the placed-ship list on
/// demand; never persisted.
pub type OccupiedIndex = BTreeMap<(u8, u8), String>;

/// Build the occupancy index for a list of placed ships.
pub fn build_occupied_index(ships: &[Ship]) -> OccupiedIndex {
    let mut index = OccupiedIndex::new();
    for ship in ships {
        for &(r, c) in &ship.cells {
            index.insert((r, c), ship.instance_id.clone());
        }
    }
    index
}

/// Distinct 8-neighborhood closure of `cells` (neighbors not in `cells`).
fn adjacent_cells(cells: &[(i16, i16)]) -> BTreeSet<(i16, i16)> {
    let cell_set: BTreeSet<(i16, i16)> = cells.iter().copied().collect();
    let mut adjacent = BTreeSet::new();
    for &(r, c) in cells {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let neighbor = (r + dr, c + dc);
                if !cell_set.contains(&neighbor) {
                    adjacent.insert(neighbor);
                }
            }
        }
    }
    adjacent
}

/// Decide whether a candidate cell set may be placed.
///
/// Rejects out-of-bounds cells, cells occupied by a ship other than
/// `exclude`, and any 8-neighbor of the set occupied by a ship other than
/// `exclude` (one-cell exclusion buffer, diagonals included). `exclude`
/// lets a move of an already-placed ship validate against itself.
pub fn can_place(cells: &[(i16, i16)], occupied: &OccupiedIndex, exclude: Option<&str>) -> bool {
    if !cells.iter().all(|&(r, c)| in_bounds(r, c)) {
        return false;
    }
    let blocked = |r: i16, c: i16| {
        if !in_bounds(r, c) {
            // off-grid neighbors can never be occupied
            return false;
        }
        match occupied.get(&(r as u8, c as u8)) {
            Some(owner) => exclude != Some(owner.as_str()),
            None => false,
        }
    };
    if cells.iter().any(|&(r, c)| blocked(r, c)) {
        return false;
    }
    !adjacent_cells(cells).iter().any(|&(r, c)| blocked(r, c))
}

/// One best-effort randomized full-fleet placement attempt.
///
/// Catalog instances are placed largest first; each gets up to
/// [`PLACEMENT_TRIALS`] uniform anchor/rotation trials. Exhausting a ship's
/// budget fails the whole attempt with `None` rather than backtracking.
/// `None` is a normal outcome the caller handles, not an error.
pub fn auto_place<R: Rng + ?Sized>(rng: &mut R) -> Option<Vec<Ship>> {
    let mut pending: Vec<(String, crate::ship::ShipClass)> = Vec::new();
    for class in SHIP_CLASSES {
        for i in 0..class.count() {
            pending.push((format!("{}-{}", class.id(), i), class));
        }
    }
    // stable sort keeps catalog order among equal sizes
    pending.sort_by(|a, b| b.1.size().cmp(&a.1.size()));

    let mut placed: Vec<Ship> = Vec::new();
    for (instance_id, class) in pending {
        let mut success = false;
        for _ in 0..PLACEMENT_TRIALS {
            let row = rng.random_range(0..GRID_SIZE) as i16;
            let col = rng.random_range(0..GRID_SIZE) as i16;
            let rotation = rng.random_range(0..class.shape().rotations());
            let cells = class.shape().cells(row, col, rotation, class.size());
            let occupied = build_occupied_index(&placed);
            if can_place(&cells, &occupied, None) {
                placed.push(Ship {
                    instance_id: instance_id.clone(),
                    name: class.name().into(),
                    size: class.size(),
                    cells: cells.into_iter().map(|(r, c)| (r as u8, c as u8)).collect(),
                });
                success = true;
                break;
            }
        }
        if !success {
            debug!("auto-placement exhausted trials on {}", instance_id);
            return None;
        }
    }
    Some(placed)
}

/// Re-run [`auto_place`] up to `max_retries` times
/// ([`crate::config::PLACEMENT_RETRIES`] is the conventional budget).
pub fn auto_place_with_retry<R: Rng + ?Sized>(rng: &mut R, max_retries: usize) -> Option<Vec<Ship>> {
    for attempt in 0..max_retries {
        if let Some(fleet) = auto_place(rng) {
            return Some(fleet);
        }
        debug!("auto-placement attempt {} failed, retrying", attempt + 1);
    }
    None
}
