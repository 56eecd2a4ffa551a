// Pixel-art frame data for the stickman.
// Visual outcomes:
// - Normal: eyes open, arms out, standing square on both feet.
// - Blink: same body, eyes pinched into a single squint row.
// - SwayLeft / SwayRight: the whole body leans one pixel column over.
//
// Only the normal pose is drawn by hand; the other three are derived from it
// at startup, so touching up the base drawing updates every pose.

pub const SPRITE_WIDTH: usize = 12;
pub const SPRITE_HEIGHT: usize = 12;

/// One pose as a binary grid: 1 = ink, 0 = empty.
pub type Grid = [[u8; SPRITE_WIDTH]; SPRITE_HEIGHT];

/// The four drawable poses. Grids are looked up by pose, never by a bare
/// index, so nothing depends on declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Normal,
    Blink,
    SwayLeft,
    SwayRight,
}

/// Hand-drawn base pose. Head with two eyes, arm row, torso, and legs.
const NORMAL: Grid = [
    [0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0],
];

/// Which row of the face carries the eyes, and what it looks like mid-blink.
const EYE_ROW: usize = 1;
const BLINK_EYES: [u8; SPRITE_WIDTH] = [0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0];

/// Blink: the base pose with the eye row swapped out.
fn blink_grid() -> Grid {
    let mut grid = NORMAL;
    grid[EYE_ROW] = BLINK_EYES;
    grid
}

/// Lean the whole body one column to the right of the buffer.
fn sway_left_grid() -> Grid {
    let mut grid: Grid = [[0; SPRITE_WIDTH]; SPRITE_HEIGHT];
    for (row, base) in grid.iter_mut().zip(NORMAL.iter()) {
        for j in 0..SPRITE_WIDTH - 1 {
            row[j + 1] = base[j];
        }
    }
    grid
}

/// Lean the whole body one column to the left of the buffer.
fn sway_right_grid() -> Grid {
    let mut grid: Grid = [[0; SPRITE_WIDTH]; SPRITE_HEIGHT];
    for (row, base) in grid.iter_mut().zip(NORMAL.iter()) {
        for j in 1..SPRITE_WIDTH {
            row[j - 1] = base[j];
        }
    }
    grid
}

/// All four pose grids, built once at startup and immutable afterwards.
pub struct SpriteSet {
    normal: Grid,
    blink: Grid,
    sway_left: Grid,
    sway_right: Grid,
}

impl SpriteSet {
    pub fn new() -> Self {
        Self {
            normal: NORMAL,
            blink: blink_grid(),
            sway_left: sway_left_grid(),
            sway_right: sway_right_grid(),
        }
    }

    pub fn grid(&self, pose: Pose) -> &Grid {
        match pose {
            Pose::Normal => &self.normal,
            Pose::Blink => &self.blink,
            Pose::SwayLeft => &self.sway_left,
            Pose::SwayRight => &self.sway_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_is_binary() {
        let set = SpriteSet::new();
        for pose in [Pose::Normal, Pose::Blink, Pose::SwayLeft, Pose::SwayRight] {
            for row in set.grid(pose) {
                assert!(row.iter().all(|&c| c <= 1), "{pose:?} has a non-binary cell");
            }
        }
    }

    #[test]
    fn blink_only_touches_the_eye_row() {
        let set = SpriteSet::new();
        let (normal, blink) = (set.grid(Pose::Normal), set.grid(Pose::Blink));
        for i in 0..SPRITE_HEIGHT {
            if i == EYE_ROW {
                assert_eq!(blink[i], BLINK_EYES);
            } else {
                assert_eq!(blink[i], normal[i], "row {i} should match the base pose");
            }
        }
    }

    #[test]
    fn sways_are_one_column_shifts() {
        let set = SpriteSet::new();
        let normal = set.grid(Pose::Normal);
        let (left, right) = (set.grid(Pose::SwayLeft), set.grid(Pose::SwayRight));
        for i in 0..SPRITE_HEIGHT {
            assert_eq!(left[i][0], 0);
            assert_eq!(right[i][SPRITE_WIDTH - 1], 0);
            for j in 0..SPRITE_WIDTH - 1 {
                assert_eq!(left[i][j + 1], normal[i][j]);
                assert_eq!(right[i][j], normal[i][j + 1]);
            }
        }
    }
}
