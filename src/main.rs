// What you SEE now:
// • Two small borderless windows, each housing one pixel-art stickman.
// • Each stickman idles, blinks occasionally, sways, and taps a foot.
// • Drag the windows near each other: both room borders turn green and a
//   second stickman slides across to visit its neighbor.
// • Drag them apart and the visit is cancelled on the spot. ESC quits.

mod anim;
mod dock;
mod draw;
mod error;
mod scene;
mod sprite;
mod types;

use anim::{AnimationContext, JitteredIdle, PoseCycle};
use dock::{SlideState, is_docked};
use draw::Cube;
use error::Error;
use scene::Visit;
use sprite::SpriteSet;
use std::thread;
use std::time::{Duration, Instant};
use types::FrameBuffer;

/// End-of-tick sleep; the whole toy runs at roughly 20 ticks per second.
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<(), Error> {
    env_logger::init();

    /* --- Window setup ---
       Visual: two bare squares appear side by side, far enough apart to
       start out undocked. */
    let mut cubes = [
        Cube::new("Stickman Cube 1", 100, 100)?,
        Cube::new("Stickman Cube 2", 350, 100)?,
    ];
    let mut screens = [FrameBuffer::cube_sized(), FrameBuffer::cube_sized()];

    /* --- Animation state ---
       One shared rhythm: both windows show the same stickman frame, so the
       pair reads as twins. */
    let sprites = SpriteSet::new();
    let mut idle = JitteredIdle::new();
    let now = Instant::now();
    let mut animation = AnimationContext::new(now, &mut idle);
    let mut poses = PoseCycle::new(now);
    let mut slide = SlideState::new();
    let mut was_docked = false;

    /* --- Tick stats ---
       RUST_LOG=debug prints the measured tick rate once per second. */
    let mut last_stat_time = Instant::now();
    let mut ticks_this_second: u32 = 0;

    log::info!("stickman cubes ready; drag the windows together to dock them");

    /* ------------------------------ Tick loop ------------------------------ */
    while cubes.iter().all(Cube::is_open) && !cubes.iter().any(Cube::esc_pressed) {
        let now = Instant::now();

        /* 1) Fresh window positions; the user may be mid-drag right now. */
        let pos = [cubes[0].position(), cubes[1].position()];

        /* 2) Docking check + slide pacing.
           Visual: green borders while docked, and the guest stickman's
           glide advances a fixed step per tick. */
        let docked = is_docked(pos[0], pos[1]);
        if docked != was_docked {
            if docked {
                log::info!("cubes docked; starting a visit");
            } else {
                log::info!("cubes separated; visit cancelled");
            }
            was_docked = docked;
        }
        let progress = slide.update(docked);

        /* 3) Advance the stickman's rhythm.
           The pose cycle picks the drawn grid; the state machine keeps its
           own beat alongside it. */
        if animation.advance(now, &mut idle) {
            log::debug!(
                "stickman now {:?} (beat {})",
                animation.state(),
                animation.counter()
            );
        }
        poses.advance(now);
        let grid = sprites.grid(poses.pose());

        /* 4) Paint and present both rooms.
           The left/right roles are re-derived every tick, so dragging one
           window past the other flips the slide direction. */
        let left = if pos[0].0 < pos[1].0 { 0 } else { 1 };
        let gap = (pos[1].0 - pos[0].0).abs();
        for (i, cube) in cubes.iter_mut().enumerate() {
            let visit = docked.then(|| Visit {
                gap,
                progress,
                from_left: i == left,
            });
            scene::paint(&mut screens[i], grid, docked, visit);
            cube.present(&screens[i])?;
        }

        /* 5) Tick rate, measured once per second. */
        ticks_this_second += 1;
        if now.duration_since(last_stat_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_stat_time).as_secs_f32();
            log::debug!("{:.1} ticks/sec", ticks_this_second as f32 / secs);
            ticks_this_second = 0;
            last_stat_time = now;
        }

        thread::sleep(TICK);
    }

    log::info!("quit requested; closing both windows");
    Ok(())
}
