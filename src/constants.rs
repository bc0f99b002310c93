// Shared board constants

// Fixed board geometry for the claim grid
pub const GRID_ROWS: u32 = 10;
pub const GRID_COLS: u32 = 10;

// Separator between row and column in the canonical coordinate key ("3 7")
pub const COORDINATE_SEPARATOR: char = ' ';
