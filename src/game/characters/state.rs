// Movement mode and ledge-search state machine

/// Whether the movement component has the character on the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementMode {
    #[default]
    Grounded,
    Airborne,
}

impl MovementMode {
    pub fn from_on_ground(on_ground: bool) -> Self {
        if on_ground {
            Self::Grounded
        } else {
            Self::Airborne
        }
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Airborne)
    }
}

/// What changed in the ledge search on a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgeTransition {
    None,
    /// Left the ground; probing is armed
    TookOff,
    /// The forward probe hit something; probing stops until landing
    ObstacleFound,
    /// Back on the ground
    Landed,
}

/// Tracks the ledge-search flag across grounded/airborne phases
///
/// The flag is raised on the frame the character leaves the ground, cleared on
/// the first probe hit while airborne, and cleared on landing. So it is true
/// exactly while airborne and no obstacle has been seen since takeoff.
#[derive(Debug, Default)]
pub struct LedgeSearch {
    mode: MovementMode,
    searching: bool,
    airborne_frames: u32,
}

impl LedgeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the forward probe should run
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Frames spent airborne in the current airborne phase
    pub fn airborne_frames(&self) -> u32 {
        self.airborne_frames
    }

    /// Follow the movement mode for this frame, handling the edges
    pub fn update_mode(&mut self, mode: MovementMode) -> LedgeTransition {
        let previous = self.mode;
        self.mode = mode;

        match (previous, mode) {
            (MovementMode::Grounded, MovementMode::Airborne) => {
                self.searching = true;
                self.airborne_frames = 1;
                LedgeTransition::TookOff
            }
            (MovementMode::Airborne, MovementMode::Grounded) => {
                self.searching = false;
                self.airborne_frames = 0;
                LedgeTransition::Landed
            }
            (MovementMode::Airborne, MovementMode::Airborne) => {
                self.airborne_frames += 1;
                LedgeTransition::None
            }
            (MovementMode::Grounded, MovementMode::Grounded) => LedgeTransition::None,
        }
    }

    /// Record a positive probe hit. Ignored unless airborne and searching.
    pub fn obstacle_found(&mut self) -> LedgeTransition {
        if self.mode.is_airborne() && self.searching {
            self.searching = false;
            LedgeTransition::ObstacleFound
        } else {
            LedgeTransition::None
        }
    }
}
