// A running level: physics world, game mode, the player's pawn and camera

use glam::Vec2;

use super::characters::{CameraRig, Character, Controller, LedgeTransition, SideViewCamera};
use super::mode::GameMode;
use super::GameError;
use crate::engine::input::InputEvent;
use crate::engine::physics::{presets, PhysicsWorld, RigidBodyHandle};

/// Id given to the local player's pawn
const PLAYER_PAWN_ID: u32 = 0;

/// Drives one level tick by tick
pub struct GameSession {
    physics: PhysicsWorld,
    mode: GameMode,
    player_start: Vec2,
    pawn: Option<Character>,
    camera: SideViewCamera,
    /// Where the pawn's weapon sits after the last tick
    weapon_transform: Option<(Vec2, f32)>,
    tick_count: u64,
}

impl GameSession {
    pub fn new(mode: GameMode, player_start: Vec2) -> Self {
        Self {
            physics: PhysicsWorld::new(),
            mode,
            player_start,
            pawn: None,
            camera: SideViewCamera::new(CameraRig::default(), 1280.0, 720.0),
            weapon_transform: None,
            tick_count: 0,
        }
    }

    /// Add a floor slab centred on (x, y)
    pub fn add_floor(&mut self, x: f32, y: f32, width: f32, height: f32) -> RigidBodyHandle {
        let body = self.physics.add_rigid_body(presets::geometry_body(x, y));
        self.physics
            .add_collider(presets::floor_collider(width, height), body);
        body
    }

    /// Add a wall centred on (x, y); walls are seen by the ledge probe
    pub fn add_wall(&mut self, x: f32, y: f32, width: f32, height: f32) -> RigidBodyHandle {
        let body = self.physics.add_rigid_body(presets::geometry_body(x, y));
        self.physics
            .add_collider(presets::wall_collider(width, height), body);
        body
    }

    /// Spawn and possess the default pawn, then let it begin play
    pub fn begin_play(&mut self) -> Result<(), GameError> {
        if self.pawn.is_some() {
            return Err(GameError::PawnAlreadySpawned);
        }

        let mut pawn =
            self.mode
                .spawn_default_pawn(PLAYER_PAWN_ID, &mut self.physics, self.player_start);

        if let Err(err) = pawn.stats().validate() {
            if let Some(handle) = pawn.body_handle() {
                self.physics.remove_rigid_body(handle);
            }
            return Err(err);
        }

        pawn.possess(Controller::new());
        pawn.begin_play();
        self.camera.follow(pawn.location());
        self.weapon_transform = pawn.weapon_transform();

        log::info!("Play started with pawn {}", pawn.id);
        self.pawn = Some(pawn);
        Ok(())
    }

    /// Advance the level by one fixed step
    ///
    /// Returns what happened to the pawn's ledge search, if there is a pawn.
    pub fn tick(&mut self, dt: f32, events: &[InputEvent]) -> Option<LedgeTransition> {
        self.tick_count += 1;
        self.physics.set_timestep(dt);

        let Some(pawn) = self.pawn.as_mut() else {
            self.physics.step();
            return None;
        };

        for event in events {
            pawn.handle_input(event);
        }

        pawn.update_movement(&mut self.physics, dt);
        self.physics.step();
        pawn.sync_with_body(&self.physics);

        let transition = pawn.tick(&self.physics, dt);
        self.weapon_transform = pawn.weapon_transform();
        self.camera.follow(pawn.location());

        Some(transition)
    }

    pub fn pawn(&self) -> Option<&Character> {
        self.pawn.as_ref()
    }

    /// World location and yaw of the pawn's weapon, if it carries one
    pub fn weapon_transform(&self) -> Option<(Vec2, f32)> {
        self.weapon_transform
    }

    pub fn camera(&self) -> &SideViewCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut SideViewCamera {
        &mut self.camera
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::{Action, Axis, ButtonState};
    use crate::game::characters::{
        CharacterAssets, CharacterStats, Facing, BASE_STATS,
    };
    use crate::game::mode::PawnClass;

    const DT: f32 = 1.0 / 60.0;

    /// Flat floor with its top at y = 0 and the pawn starting just above it
    fn flat_level() -> GameSession {
        let mut session = GameSession::new(GameMode::new(), Vec2::new(0.0, 100.0));
        session.add_floor(0.0, -10.0, 8000.0, 20.0);
        session
    }

    fn settle(session: &mut GameSession) {
        for _ in 0..60 {
            session.tick(DT, &[]);
        }
    }

    fn pawn(session: &GameSession) -> &Character {
        session.pawn().expect("pawn spawned")
    }

    fn flipbook_name(session: &GameSession) -> Option<String> {
        pawn(session).sprite().flipbook().map(|f| f.name.clone())
    }

    fn press_jump() -> InputEvent {
        InputEvent::Action(Action::Jump, ButtonState::Pressed)
    }

    fn release_jump() -> InputEvent {
        InputEvent::Action(Action::Jump, ButtonState::Released)
    }

    #[test]
    fn test_tick_without_pawn() {
        let mut session = flat_level();
        assert_eq!(session.tick(DT, &[]), None);
        assert_eq!(session.tick_count(), 1);
    }

    #[test]
    fn test_begin_play_spawns_armed_pawn() {
        let mut session = flat_level();
        session.begin_play().unwrap();

        assert_eq!(session.mode.default_pawn_class().name(), "SideScrollerCharacter");
        let (location, _) = session.weapon_transform().expect("pistol attached");
        assert_eq!(location, pawn(&session).location() + Vec2::new(30.0, 10.0));
    }

    #[test]
    fn test_begin_play_twice_fails() {
        let mut session = flat_level();
        session.begin_play().unwrap();
        assert!(matches!(
            session.begin_play(),
            Err(GameError::PawnAlreadySpawned)
        ));
    }

    #[test]
    fn test_begin_play_rejects_invalid_stats() {
        let broken = PawnClass::new("Broken", |id, physics, location| {
            let stats = CharacterStats {
                probe_radius: 0.0,
                ..BASE_STATS
            };
            Character::spawn(id, stats, CharacterAssets::default(), physics, location)
        });
        let mut session =
            GameSession::new(GameMode::with_default_pawn_class(broken), Vec2::ZERO);
        session.add_floor(0.0, -10.0, 8000.0, 20.0);

        assert!(matches!(
            session.begin_play(),
            Err(GameError::InvalidStats { field: "probe_radius", .. })
        ));
        assert!(session.pawn().is_none());
        assert_eq!(session.physics().body_count(), 1);
    }

    #[test]
    fn test_pawn_settles_idle_on_floor() {
        let mut session = flat_level();
        session.begin_play().unwrap();
        settle(&mut session);

        let pawn = pawn(&session);
        assert!(pawn.movement().is_moving_on_ground());
        assert_eq!(pawn.velocity(), Vec2::ZERO);
        assert_eq!(flipbook_name(&session).as_deref(), Some("Idle"));
        assert!(!pawn.is_searching_for_ledge());
    }

    #[test]
    fn test_walking_runs_and_faces_travel_direction() {
        let mut session = flat_level();
        session.begin_play().unwrap();
        settle(&mut session);

        for _ in 0..30 {
            session.tick(DT, &[InputEvent::Axis(Axis::MoveRight, 1.0)]);
        }
        assert!(pawn(&session).velocity().x > 0.0);
        assert_eq!(flipbook_name(&session).as_deref(), Some("Running"));
        assert_eq!(pawn(&session).facing(), Facing::Right);
        assert_eq!(pawn(&session).yaw(), 0.0);

        for _ in 0..60 {
            session.tick(DT, &[InputEvent::Axis(Axis::MoveRight, -1.0)]);
        }
        assert!(pawn(&session).velocity().x < 0.0);
        assert_eq!(pawn(&session).facing(), Facing::Left);
        assert_eq!(pawn(&session).yaw(), 180.0);

        // Let go: braking stops the pawn but it keeps facing left
        settle(&mut session);
        assert_eq!(pawn(&session).velocity().x, 0.0);
        assert_eq!(pawn(&session).facing(), Facing::Left);
        assert_eq!(flipbook_name(&session).as_deref(), Some("Idle"));
    }

    #[test]
    fn test_jump_in_open_air_keeps_searching() {
        let mut session = flat_level();
        session.begin_play().unwrap();
        settle(&mut session);

        assert_eq!(session.tick(DT, &[press_jump()]), Some(LedgeTransition::TookOff));
        session.tick(DT, &[release_jump()]);

        let mut airborne_frames = 1;
        while !pawn(&session).movement().is_moving_on_ground() && airborne_frames < 200 {
            assert!(pawn(&session).is_searching_for_ledge());
            session.tick(DT, &[]);
            airborne_frames += 1;
        }

        assert!(airborne_frames > 30, "jump lasted {} frames", airborne_frames);
        assert!(pawn(&session).movement().is_moving_on_ground());
        assert!(!pawn(&session).is_searching_for_ledge());
    }

    #[test]
    fn test_wall_ahead_stops_search_until_landing() {
        let mut session = flat_level();
        // Wall face at x = 120: out of reach of the capsule, inside probe range
        session.add_wall(130.0, 200.0, 20.0, 400.0);
        session.begin_play().unwrap();
        settle(&mut session);
        assert_eq!(pawn(&session).facing(), Facing::Right);

        assert_eq!(
            session.tick(DT, &[press_jump()]),
            Some(LedgeTransition::ObstacleFound)
        );
        assert!(!pawn(&session).is_searching_for_ledge());
        session.tick(DT, &[release_jump()]);

        let mut frames = 0;
        while !pawn(&session).movement().is_moving_on_ground() && frames < 200 {
            assert!(!pawn(&session).is_searching_for_ledge());
            session.tick(DT, &[]);
            frames += 1;
        }

        assert!(pawn(&session).movement().is_moving_on_ground());
        assert!(!pawn(&session).is_searching_for_ledge());
    }

    #[test]
    fn test_jump_while_hanging_does_nothing() {
        let mut session = flat_level();
        session.begin_play().unwrap();
        settle(&mut session);
        session.pawn.as_mut().unwrap().set_hanging(true);

        for _ in 0..10 {
            session.tick(DT, &[press_jump()]);
            assert_eq!(pawn(&session).velocity().y, 0.0);
            assert!(pawn(&session).movement().is_moving_on_ground());
        }
    }

    #[test]
    fn test_camera_follows_pawn() {
        let mut session = flat_level();
        session.begin_play().unwrap();
        settle(&mut session);

        let expected = pawn(&session).location() + CameraRig::default().socket_offset;
        assert_eq!(session.camera().position(), expected);
    }

    #[test]
    fn test_weapon_follows_pawn() {
        let mut session = flat_level();
        session.begin_play().unwrap();
        settle(&mut session);

        let (location, yaw) = session.weapon_transform().expect("weapon placed");
        assert_eq!(location, pawn(&session).location() + Vec2::new(30.0, 10.0));
        assert_eq!(yaw, 180.0);

        for _ in 0..40 {
            session.tick(DT, &[InputEvent::Axis(Axis::MoveRight, -1.0)]);
        }
        let (location, yaw) = session.weapon_transform().expect("weapon placed");
        assert_eq!(location, pawn(&session).location() + Vec2::new(-30.0, 10.0));
        assert_eq!(yaw, 0.0);
    }

    #[test]
    fn test_holding_jump_gives_a_single_jump() {
        let mut session = flat_level();
        session.begin_play().unwrap();
        settle(&mut session);

        // Press once and never release
        session.tick(DT, &[press_jump()]);
        let mut frames = 0;
        while !pawn(&session).movement().is_moving_on_ground() && frames < 200 {
            session.tick(DT, &[]);
            frames += 1;
        }
        assert!(pawn(&session).movement().is_moving_on_ground());

        for _ in 0..30 {
            session.tick(DT, &[]);
            assert!(pawn(&session).movement().is_moving_on_ground());
            assert_eq!(pawn(&session).velocity().y, 0.0);
        }
    }

    #[test]
    fn test_jump_pressed_then_hanging_never_fires() {
        let mut session = flat_level();
        session.begin_play().unwrap();
        settle(&mut session);

        // The request is still pending when hanging starts
        session.pawn.as_mut().unwrap().on_jump_pressed();
        session.pawn.as_mut().unwrap().set_hanging(true);

        for _ in 0..5 {
            session.tick(DT, &[]);
            assert_eq!(pawn(&session).velocity().y, 0.0);
        }
    }
}
