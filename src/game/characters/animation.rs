// Flipbook sprites and the sprite component that plays them

use glam::Vec2;
use std::collections::HashMap;

/// A sprite-sequence animation asset
#[derive(Debug, Clone, PartialEq)]
pub struct Flipbook {
    /// Asset name (e.g., "idle", "running")
    pub name: String,
    /// Number of frames in the sequence
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the sequence loops
    pub looping: bool,
}

impl Flipbook {
    /// Create a new flipbook
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count: frame_count.max(1),
            frame_duration: 1.0 / fps.max(f32::EPSILON),
            looping,
        }
    }

    /// Create a looping flipbook
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

}

/// Named attachment point on the sprite, relative to the sprite origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Socket {
    pub offset: Vec2,
}

/// The character's visual component
///
/// Holds at most one active flipbook. Swapping restarts playback; setting the
/// flipbook that is already active does nothing.
#[derive(Debug, Default)]
pub struct FlipbookComponent {
    flipbook: Option<Flipbook>,
    current_frame: usize,
    frame_timer: f32,
    sockets: HashMap<String, Socket>,
}

impl FlipbookComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active flipbook, if any
    pub fn flipbook(&self) -> Option<&Flipbook> {
        self.flipbook.as_ref()
    }

    /// Replace the active flipbook. Returns whether anything changed.
    pub fn set_flipbook(&mut self, flipbook: Option<Flipbook>) -> bool {
        if self.flipbook == flipbook {
            return false;
        }
        log::debug!(
            "Flipbook {} -> {}",
            self.flipbook.as_ref().map_or("<none>", |f| f.name.as_str()),
            flipbook.as_ref().map_or("<none>", |f| f.name.as_str())
        );
        self.flipbook = flipbook;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        true
    }

    /// Current frame index
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Advance playback (called every frame)
    pub fn update(&mut self, dt: f32) {
        let Some(flipbook) = &self.flipbook else {
            return;
        };

        self.frame_timer += dt;
        while self.frame_timer >= flipbook.frame_duration {
            self.frame_timer -= flipbook.frame_duration;
            if self.current_frame + 1 < flipbook.frame_count {
                self.current_frame += 1;
            } else if flipbook.looping {
                self.current_frame = 0;
            } else {
                // Hold the last frame
                self.frame_timer = 0.0;
                break;
            }
        }
    }

    /// Add or replace a named socket
    pub fn add_socket(&mut self, name: &str, offset: Vec2) {
        self.sockets.insert(name.to_string(), Socket { offset });
    }

    /// Look up a socket by name
    pub fn socket(&self, name: &str) -> Option<Socket> {
        self.sockets.get(name).copied()
    }
}
