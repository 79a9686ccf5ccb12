//! A single maze cell: four wall flags and two feature flags.


/// One side of a [`Cell`].
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Direction {
    /// Up, or -row
    Top,
    /// Down, or +row
    Bottom,
    /// Left, or -col
    Left,
    /// Right, or +col
    Right,
}

impl Direction {
    /// The order in which walls are written to a maze document
    pub const FORMAT_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Top,
        Direction::Left,
        Direction::Bottom,
    ];

    /// The side of the neighboring cell that shares this edge
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_editor::grid::Direction;
    ///
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// assert_eq!(Direction::Top.opposite(), Direction::Bottom);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// (row, column) offset of the neighbor in this direction
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The letter used for this wall in a maze document
    pub fn letter(&self) -> char {
        match self {
            Direction::Top => 'T',
            Direction::Bottom => 'B',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Inverse of [`Direction::letter`]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'T' => Some(Direction::Top),
            'B' => Some(Direction::Bottom),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// A point marker that can be placed on a [`Cell`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Feature {
    /// Treasure
    Gold,
    /// Landing pad
    Helipad,
}

impl Feature {
    /// Get a list of all features
    pub fn get_all() -> [Self; 2] {
        [Self::Gold, Self::Helipad]
    }

    /// Human readable name, also used for file dialog titles
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Gold => "Gold",
            Feature::Helipad => "Helipad",
        }
    }
}

/// The walls and features of one grid square.
///
/// Walls on interior edges are mirrored by the neighboring cell; [`Grid`](super::Grid) keeps
/// both sides in sync, so a lone `Cell` never needs to know about its neighbors.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct Cell {
    /// Wall along the top edge
    pub top: bool,
    /// Wall along the bottom edge
    pub bottom: bool,
    /// Wall along the left edge
    pub left: bool,
    /// Wall along the right edge
    pub right: bool,
    /// Treasure marker
    pub gold: bool,
    /// Landing pad marker
    pub helipad: bool,
}

impl Cell {
    /// Whether the wall on the given side is set
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Set or clear the wall on the given side
    pub fn set_wall(&mut self, direction: Direction, value: bool) {
        match direction {
            Direction::Top => self.top = value,
            Direction::Bottom => self.bottom = value,
            Direction::Left => self.left = value,
            Direction::Right => self.right = value,
        }
    }

    /// Whether the given feature is set
    pub fn has_feature(&self, feature: Feature) -> bool {
        match feature {
            Feature::Gold => self.gold,
            Feature::Helipad => self.helipad,
        }
    }

    /// Set or clear the given feature
    pub fn set_feature(&mut self, feature: Feature, value: bool) {
        match feature {
            Feature::Gold => self.gold = value,
            Feature::Helipad => self.helipad = value,
        }
    }

    /// Advance the (gold, helipad) pair one step through its four states:
    /// `(false, false) -> (true, false) -> (false, true) -> (true, true) -> (false, false)`
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_editor::grid::Cell;
    ///
    /// let mut cell = Cell::default();
    /// cell.cycle_feature();
    /// assert!(cell.gold && !cell.helipad);
    /// cell.cycle_feature();
    /// assert!(!cell.gold && cell.helipad);
    /// ```
    pub fn cycle_feature(&mut self) {
        (self.gold, self.helipad) = match (self.gold, self.helipad) {
            (false, false) => (true, false),
            (true, false) => (false, true),
            (false, true) => (true, true),
            (true, true) => (false, false),
        };
    }

    /// Whether any of the four walls is set
    pub fn any_wall(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    /// The same cell with both feature flags cleared
    pub fn walls_only(&self) -> Self {
        Self {
            gold: false,
            helipad: false,
            ..*self
        }
    }
}
