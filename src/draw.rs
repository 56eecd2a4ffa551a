// Window + software drawing utilities.
// Visual effects provided here:
// 1) A small borderless window ("cube") that shows one stickman's room.
// 2) Flat rectangles, outlines, and lines drawn straight into the pixel buffer.

use crate::error::Error;
use crate::types::{FrameBuffer, WIN_HEIGHT, WIN_WIDTH};
use minifb::{Key, Window, WindowOptions};

pub struct Cube {
    window: Window, // the on-screen window you see
}

impl Cube {
    /// Create one cube window at a given spot on the screen.
    /// Visual: a bare 200x200 square appears at (x, y), no title bar.
    pub fn new(title: &str, x: isize, y: isize) -> Result<Self, Error> {
        let opts = WindowOptions {
            borderless: true,
            title: false,
            resize: false,
            ..WindowOptions::default()
        };
        let mut window = Window::new(title, WIN_WIDTH, WIN_HEIGHT, opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_position(x, y);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Where the window currently sits on screen. Read fresh every tick,
    /// since the user may be dragging it right now.
    pub fn position(&self) -> (i32, i32) {
        let (x, y) = self.window.get_position();
        (x as i32, y as i32)
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}

/* ---------- Software drawing: pixels, rects, lines ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Flood the whole buffer with one color.
/// Visual: the window becomes a flat colored square.
pub fn clear(fb: &mut FrameBuffer, color: u32) {
    fb.pixels.fill(color);
}

/// Fill a w*h rectangle whose top-left corner is (x,y).
/// Parts hanging outside the buffer are clipped silently.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for py in y..y + h {
        for px in x..x + w {
            put_pixel(fb, px, py, color);
        }
    }
}

/// Outline a w*h rectangle (1-pixel edges, hollow inside).
pub fn draw_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    if w <= 0 || h <= 0 {
        return;
    }
    for px in x..x + w {
        put_pixel(fb, px, y, color);
        put_pixel(fb, px, y + h - 1, color);
    }
    for py in y..y + h {
        put_pixel(fb, x, py, color);
        put_pixel(fb, x + w - 1, py, color);
    }
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight 1-pixel line appears on top of whatever was there.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}
