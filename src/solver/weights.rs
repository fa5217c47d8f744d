/// Positional value of each cell: corners high, cells touching a corner
/// negative, edges positive, centre mildly positive. Symmetric under every
/// rotation and reflection of the board.
pub const DEFAULT_VALUE_TABLE: [[i32; 8]; 8] = [
    [100, -10, 10, 6, 6, 10, -10, 100],
    [-10, -20, 1, 2, 2, 1, -20, -10],
    [10, 1, 5, 4, 4, 5, 1, 10],
    [6, 2, 4, 2, 2, 4, 2, 6],
    [6, 2, 4, 2, 2, 4, 2, 6],
    [10, 1, 5, 4, 4, 5, 1, 10],
    [-10, -20, 1, 2, 2, 1, -20, -10],
    [100, -10, 10, 6, 6, 10, -10, 100],
];

/// Heuristic weights. Every evaluation term is normalised to [-100, 100]
/// before being multiplied by its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weights {
    pub static_value: i32,
    pub tile_diff: i32,
    pub frontier: i32,
    pub mobility: i32,
    pub corner_occupancy: i32,
    pub corner_adjacency: i32,
    pub pattern_diff: i32,
    pub value_table: [[i32; 8]; 8],
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            static_value: 50,
            tile_diff: 15,
            frontier: 30,
            mobility: 60,
            corner_occupancy: 40,
            corner_adjacency: 30,
            pattern_diff: 60,
            value_table: DEFAULT_VALUE_TABLE,
        }
    }
}

impl Weights {
    /// Only the pattern term counts; handy for isolating bonus effects.
    #[inline]
    pub const fn pattern_only() -> Self {
        Self {
            static_value: 0,
            tile_diff: 0,
            frontier: 0,
            mobility: 0,
            corner_occupancy: 0,
            corner_adjacency: 0,
            pattern_diff: 1,
            value_table: DEFAULT_VALUE_TABLE,
        }
    }

    /// Largest absolute value `evaluate` can return with these weights.
    pub fn max_magnitude(&self) -> i64 {
        [
            self.static_value,
            self.tile_diff,
            self.frontier,
            self.mobility,
            self.corner_occupancy,
            self.corner_adjacency,
            self.pattern_diff,
        ]
        .iter()
        .map(|w| 100 * (*w as i64).abs())
        .sum()
    }
}
