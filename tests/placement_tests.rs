use batalha_naval::{
    auto_place, auto_place_with_retry, build_occupied_index, can_place, Ship, FLEET_SIZE,
    GRID_SIZE, PLACEMENT_RETRIES,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

fn ship(id: &str, cells: &[(u8, u8)]) -> Ship {
    Ship {
        instance_id: id.into(),
        name: id.into(),
        size: cells.len(),
        cells: cells.to_vec(),
    }
}

#[test]
fn test_rejects_out_of_bounds() {
    let occupied = build_occupied_index(&[]);
    assert!(!can_place(&[(-1, 0)], &occupied, None));
    assert!(!can_place(&[(0, -1)], &occupied, None));
    assert!(!can_place(&[(15, 15), (15, 16)], &occupied, None));
    assert!(can_place(&[(15, 15)], &occupied, None));
}

#[test]
fn test_rejects_overlap() {
    let occupied = build_occupied_index(&[ship("a-0", &[(0, 0), (0, 1)])]);
    assert!(!can_place(&[(0, 1), (0, 2)], &occupied, None));
}

#[test]
fn test_rejects_adjacency_including_diagonals() {
    let occupied = build_occupied_index(&[ship("a-0", &[(0, 0), (0, 1)])]);
    // orthogonal neighbor
    assert!(!can_place(&[(0, 2)], &occupied, None));
    assert!(!can_place(&[(1, 0)], &occupied, None));
    // diagonal neighbor
    assert!(!can_place(&[(1, 2)], &occupied, None));
    // one empty cell of separation in all directions is enough
    assert!(can_place(&[(2, 2)], &occupied, None));
    assert!(can_place(&[(0, 3)], &occupied, None));
}

#[test]
fn test_exclude_allows_moving_a_placed_ship() {
    let occupied = build_occupied_index(&[ship("a-0", &[(0, 0), (0, 1)])]);
    // re-validating the ship against itself must not self-reject
    assert!(can_place(&[(0, 0), (0, 1)], &occupied, Some("a-0")));
    // a one-cell slide is only blocked by other ships
    assert!(can_place(&[(0, 1), (0, 2)], &occupied, Some("a-0")));

    let occupied = build_occupied_index(&[
        ship("a-0", &[(0, 0), (0, 1)]),
        ship("b-0", &[(0, 3)]),
    ]);
    assert!(!can_place(&[(0, 1), (0, 2)], &occupied, Some("a-0")));
}

#[test]
fn test_auto_place_fills_a_legal_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let fleet = auto_place(&mut rng).expect("16x16 board comfortably fits the catalog");
    assert_eq!(fleet.len(), FLEET_SIZE);

    // 38 distinct cells, all in bounds
    let cells: BTreeSet<(u8, u8)> = fleet.iter().flat_map(|s| s.cells.iter().copied()).collect();
    assert_eq!(cells.len(), 38);
    assert!(cells.iter().all(|&(r, c)| r < GRID_SIZE && c < GRID_SIZE));

    // every ship individually validates against the rest of the fleet
    let occupied = build_occupied_index(&fleet);
    for ship in &fleet {
        let signed: Vec<(i16, i16)> = ship
            .cells
            .iter()
            .map(|&(r, c)| (r as i16, c as i16))
            .collect();
        assert!(
            can_place(&signed, &occupied, Some(&ship.instance_id)),
            "{} violates placement rules",
            ship.instance_id
        );
    }
}

#[test]
fn test_auto_place_orders_largest_first() {
    let mut rng = SmallRng::seed_from_u64(7);
    let fleet = auto_place(&mut rng).unwrap();
    let sizes: Vec<usize> = fleet.iter().map(|s| s.size).collect();
    let mut sorted = sizes.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(sizes, sorted);
}

#[test]
fn test_auto_place_with_retry_succeeds_across_seeds() {
    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        assert!(
            auto_place_with_retry(&mut rng, PLACEMENT_RETRIES).is_some(),
            "seed {} failed",
            seed
        );
    }
}

#[test]
fn test_auto_place_instance_ids_are_unique() {
    let mut rng = SmallRng::seed_from_u64(3);
    let fleet = auto_place(&mut rng).unwrap();
    let ids: BTreeSet<&str> = fleet.iter().map(|s| s.instance_id.as_str()).collect();
    assert_eq!(ids.len(), fleet.len());
}
