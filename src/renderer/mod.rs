//! Rendering seam
//!
//! The simulation describes each frame as a [`DrawList`]; a [`Renderer`]
//! blits it. Display backends live outside this crate.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList, Layer};

/// Display collaborator
pub trait Renderer {
    /// Blit one frame, back to front
    fn present(&mut self, frame: &DrawList);
}

/// Headless renderer that traces frame contents
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_blits: usize,
}

impl LogRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Blit count of the most recent frame
    pub fn last_blits(&self) -> usize {
        self.last_blits
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &DrawList) {
        self.frames += 1;
        self.last_blits = frame.len();
        log::trace!(
            "frame {}: {} blits ({} obstacle, {} ui)",
            self.frames,
            frame.len(),
            frame.count_on(Layer::Obstacle),
            frame.count_on(Layer::Ui)
        );
    }
}
