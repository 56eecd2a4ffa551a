// Core types and the fixed window geometry.

/// Every cube window is this big, always. Docking math and the scene layout
/// both lean on the size being fixed.
pub const WIN_WIDTH: usize = 200;
pub const WIN_HEIGHT: usize = 200;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,     // how wide the frame is on screen (pixels)
    pub height: usize,    // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>, // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer sized for one cube window, starting out black.
    pub fn cube_sized() -> Self {
        Self {
            width: WIN_WIDTH,
            height: WIN_HEIGHT,
            pixels: vec![0u32; WIN_WIDTH * WIN_HEIGHT],
        }
    }
}
