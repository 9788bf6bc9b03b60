/// Board geometry and history limits shared by every layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    /// Sections per side of the macro board.
    pub const SECTIONS_PER_SIDE: usize = 3;
    /// Cells per section.
    pub const CELLS_PER_SECTION: usize = 9;
    /// Total number of playable cells; move indices are `0..BOARD_CELLS`.
    pub const BOARD_CELLS: usize =
        Self::SECTIONS_PER_SIDE * Self::SECTIONS_PER_SIDE * Self::CELLS_PER_SECTION;

    /// Number of finished games kept in local history.
    pub const MAX_HISTORY_ENTRIES: usize = 20;

    /// Returns true if `index` addresses a cell on the board.
    pub const fn is_cell(index: u32) -> bool {
        (index as usize) < Self::BOARD_CELLS
    }
}
