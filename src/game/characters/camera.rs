// Side-view camera on a boom that trails the character

use glam::Vec2;

/// Boom and lens settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Offset of the boom end from the character (up is +y)
    pub socket_offset: Vec2,
    /// Width of the orthographic view in world units
    pub ortho_width: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            socket_offset: Vec2::new(0.0, 75.0),
            ortho_width: 2048.0,
        }
    }
}

/// Orthographic camera looking at the play plane from the side
///
/// Rotation is absolute: turning the character never turns the view.
#[derive(Debug, Clone)]
pub struct SideViewCamera {
    rig: CameraRig,
    /// View center in world space
    position: Vec2,
    /// Viewport size in pixels
    viewport: Vec2,
}

impl SideViewCamera {
    pub fn new(rig: CameraRig, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            rig,
            position: rig.socket_offset,
            viewport: Vec2::new(viewport_width, viewport_height),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Snap to the boom end for a character at `target`
    pub fn follow(&mut self, target: Vec2) {
        self.position = target + self.rig.socket_offset;
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Half extents of the view in world units
    ///
    /// Width is fixed by the lens; height follows the viewport aspect ratio.
    pub fn half_extents(&self) -> Vec2 {
        let half_width = self.rig.ortho_width / 2.0;
        let aspect = self.viewport.y / self.viewport.x;
        Vec2::new(half_width, half_width * aspect)
    }

    /// Convert screen coordinates (pixels, y down) to world coordinates
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        let normalized_x = (screen_pos.x / self.viewport.x) * 2.0 - 1.0;
        let normalized_y = 1.0 - (screen_pos.y / self.viewport.y) * 2.0;
        let half = self.half_extents();

        Vec2::new(
            self.position.x + normalized_x * half.x,
            self.position.y + normalized_y * half.y,
        )
    }
}
