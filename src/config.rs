use crate::ship::{ShipClass, ShipShape};

/// Board dimension: the grid is 16×16, columns A–P.
pub const GRID_SIZE: u8 = 16;
/// Column letters in display order.
pub const COLS: &str = "ABCDEFGHIJKLMNOP";
/// Bonus shots granted when a volley opens.
pub const SALVA_SHOTS: u8 = 3;
/// Randomized anchor/rotation trials per ship before auto-placement
/// abandons the whole attempt.
pub const PLACEMENT_TRIALS: usize = 500;
/// Full-procedure retries before auto-placement gives up entirely.
pub const PLACEMENT_RETRIES: usize = 10;

pub const NUM_CLASSES: usize = 5;
pub const SHIP_CLASSES: [ShipClass; NUM_CLASSES] = [
    ShipClass::new("carrier", "Porta-aviões", 5, 1, ShipShape::Linear),
    ShipClass::new("cruiser", "Cruzador", 4, 2, ShipShape::Linear),
    ShipClass::new("destroyer", "Destroyer", 2, 3, ShipShape::Linear),
    ShipClass::new("submarine", "Submarino", 1, 4, ShipShape::Linear),
    ShipClass::new("seaplane", "Hidroavião", 3, 5, ShipShape::Triangle),
];

/// Ship instances in a full fleet (sum of catalog counts).
pub const FLEET_SIZE: usize = 15;
