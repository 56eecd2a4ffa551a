// Painting one cube's room: backdrop, double border, floor line, the
// resident stickman, and (mid-visit) the sliding guest.
// Visual outcomes:
// - A muted sage square with a double-ruled border framing the room.
// - Gray border normally, green the moment the cubes dock.
// - The stickman stands centered on a thin floor line.
// - While a visit is in flight, a second stickman glides across the room.

use crate::dock;
use crate::draw;
use crate::sprite::{Grid, SPRITE_HEIGHT, SPRITE_WIDTH};
use crate::types::{FrameBuffer, WIN_HEIGHT, WIN_WIDTH};

/// Each sprite cell becomes a PIXEL_SIZE x PIXEL_SIZE block on screen.
const PIXEL_SIZE: i32 = 3;

/// Home position of the resident stickman: centered, nudged down a little so
/// there is headroom for the room border.
const HOME_X: i32 = (WIN_WIDTH as i32 - SPRITE_WIDTH as i32 * PIXEL_SIZE) / 2;
const HOME_Y: i32 = (WIN_HEIGHT as i32 - SPRITE_HEIGHT as i32 * PIXEL_SIZE) / 2 + 10;

const ROOM_MARGIN: i32 = 15;
const ROOM_X: i32 = ROOM_MARGIN;
const ROOM_Y: i32 = ROOM_MARGIN;
const ROOM_W: i32 = WIN_WIDTH as i32 - 2 * ROOM_MARGIN;
const ROOM_H: i32 = WIN_HEIGHT as i32 - 2 * ROOM_MARGIN;

/// The floor sits exactly under the stickman's feet.
const FLOOR_Y: i32 = HOME_Y + SPRITE_HEIGHT as i32 * PIXEL_SIZE;

const BACKDROP: u32 = 0x008E_9A8F; // muted sage
const BORDER_DOCKED: u32 = 0x0000_C800; // green: the cubes are meeting
const BORDER_APART: u32 = 0x0050_5050; // gray: each cube on its own
const FLOOR: u32 = 0x003C_3C3C;
const INK: u32 = 0x0009_0909; // near-black stickman pixels

/// Everything the painter needs to place the sliding guest.
/// Both windows build one of these from the same shared progress, so the two
/// renditions of the guest stay in lockstep.
#[derive(Clone, Copy)]
pub struct Visit {
    /// Horizontal distance between the two windows, in pixels.
    pub gap: i32,
    /// Shared slide progress in [0, 1].
    pub progress: f32,
    /// True when this window is the left one of the pair.
    pub from_left: bool,
}

/// Paint one full frame of a cube's room into its framebuffer.
pub fn paint(fb: &mut FrameBuffer, grid: &Grid, docked: bool, visit: Option<Visit>) {
    draw::clear(fb, BACKDROP);

    // Double-ruled room border; its color is the docking indicator.
    let border = if docked { BORDER_DOCKED } else { BORDER_APART };
    draw::draw_rect(fb, ROOM_X, ROOM_Y, ROOM_W, ROOM_H, border);
    draw::draw_rect(fb, ROOM_X + 3, ROOM_Y + 3, ROOM_W - 6, ROOM_H - 6, border);

    draw::draw_line(fb, ROOM_X + 5, FLOOR_Y, ROOM_X + ROOM_W - 5, FLOOR_Y, FLOOR);

    // The resident is always home, docked or not.
    draw_stickman(fb, grid, HOME_X, HOME_Y);

    // The guest only shows mid-slide; at 0 it hasn't left, at 1 it has
    // merged with the resident's spot.
    if let Some(v) = visit {
        if docked && v.progress > 0.0 && v.progress < 1.0 {
            let offset = dock::slide_offset(v.progress, v.gap);
            let x = if v.from_left {
                HOME_X + offset
            } else {
                HOME_X - v.gap + offset
            };
            draw_stickman(fb, grid, x, HOME_Y);
        }
    }
}

/// Stamp a pose grid at (x, y), one filled block per ink cell.
fn draw_stickman(fb: &mut FrameBuffer, grid: &Grid, x: i32, y: i32) {
    for (i, row) in grid.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if cell == 1 {
                draw::fill_rect(
                    fb,
                    x + j as i32 * PIXEL_SIZE,
                    y + i as i32 * PIXEL_SIZE,
                    PIXEL_SIZE,
                    PIXEL_SIZE,
                    INK,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::{Pose, SpriteSet};

    fn pixel(fb: &FrameBuffer, x: i32, y: i32) -> u32 {
        fb.pixels[y as usize * fb.width + x as usize]
    }

    #[test]
    fn border_color_tracks_docking() {
        let set = SpriteSet::new();
        let mut fb = FrameBuffer::cube_sized();

        paint(&mut fb, set.grid(Pose::Normal), false, None);
        assert_eq!(pixel(&fb, ROOM_X, ROOM_Y), BORDER_APART);

        paint(&mut fb, set.grid(Pose::Normal), true, None);
        assert_eq!(pixel(&fb, ROOM_X, ROOM_Y), BORDER_DOCKED);
        // Inner rule carries the same color.
        assert_eq!(pixel(&fb, ROOM_X + 3, ROOM_Y + 3), BORDER_DOCKED);
    }

    #[test]
    fn floor_line_spans_the_room() {
        let set = SpriteSet::new();
        let mut fb = FrameBuffer::cube_sized();
        paint(&mut fb, set.grid(Pose::Normal), false, None);
        assert_eq!(pixel(&fb, ROOM_X + 5, FLOOR_Y), FLOOR);
        assert_eq!(pixel(&fb, ROOM_X + ROOM_W - 5, FLOOR_Y), FLOOR);
    }

    #[test]
    fn resident_is_drawn_at_home() {
        let set = SpriteSet::new();
        let grid = set.grid(Pose::Normal);
        let mut fb = FrameBuffer::cube_sized();
        paint(&mut fb, grid, false, None);
        // The head row has ink at column 3.
        assert_eq!(grid[0][3], 1);
        assert_eq!(pixel(&fb, HOME_X + 3 * PIXEL_SIZE, HOME_Y), INK);
        // An empty cell stays backdrop.
        assert_eq!(grid[0][0], 0);
        assert_eq!(pixel(&fb, HOME_X, HOME_Y), BACKDROP);
    }

    #[test]
    fn guest_appears_only_mid_slide() {
        let set = SpriteSet::new();
        let grid = set.grid(Pose::Normal);

        let visit = |progress| Visit { gap: 100, progress, from_left: true };

        let mut without = FrameBuffer::cube_sized();
        paint(&mut without, grid, true, None);

        for p in [0.0, 1.0] {
            let mut fb = FrameBuffer::cube_sized();
            paint(&mut fb, grid, true, Some(visit(p)));
            assert_eq!(fb.pixels, without.pixels, "progress {p} must not draw a guest");
        }

        let mut mid = FrameBuffer::cube_sized();
        paint(&mut mid, grid, true, Some(visit(0.5)));
        assert_ne!(mid.pixels, without.pixels);
        // Guest from the left window is halfway across the 100px gap.
        assert_eq!(pixel(&mid, HOME_X + 50 + 3 * PIXEL_SIZE, HOME_Y), INK);
    }

    #[test]
    fn guest_from_the_right_slides_in_from_outside() {
        let set = SpriteSet::new();
        let grid = set.grid(Pose::Normal);
        let mut fb = FrameBuffer::cube_sized();
        // Right-hand window: the guest starts a full gap to the left of home
        // and works its way back; nothing may panic while it is off-screen.
        paint(&mut fb, grid, true, Some(Visit { gap: 300, progress: 0.1, from_left: false }));
        assert_eq!(pixel(&fb, ROOM_X, ROOM_Y), BORDER_DOCKED);
    }
}
