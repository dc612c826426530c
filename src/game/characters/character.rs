// Side-scrolling player character

use glam::Vec2;

use crate::core::math::{normalize_yaw, yaw_to_forward};
use crate::engine::input::{Action, Axis, ButtonState, InputEvent};
use crate::engine::physics::{
    presets, CollisionChannel, PhysicsWorld, QueryFilter, RigidBodyHandle, Vector, WorldQuery,
};
use crate::game::mode::PawnClass;

use super::animation::{Flipbook, FlipbookComponent};
use super::movement::CharacterMovement;
use super::state::{LedgeSearch, LedgeTransition, MovementMode};
use super::stats::CharacterStats;
use super::weapon::{Weapon, WeaponClass, WEAPON_SOCKET};

/// Unique identifier for a character
pub type CharacterId = u32;

/// Length of the downward floor check below the capsule
const FLOOR_CHECK_DISTANCE: f32 = 4.0;

/// Discrete facing along the play plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Yaw in degrees: 0 faces right, 180 faces left
    pub fn yaw(&self) -> f32 {
        match self {
            Self::Right => 0.0,
            Self::Left => 180.0,
        }
    }

    /// Facing for an arbitrary yaw: whichever way its forward vector points
    ///
    /// A forward vector with no horizontal component counts as facing right.
    pub fn from_yaw(yaw_degrees: f32) -> Self {
        if yaw_to_forward(yaw_degrees).x < 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Unit vector along the play plane
    pub fn forward(&self) -> Vec2 {
        match self {
            Self::Right => Vec2::X,
            Self::Left => Vec2::NEG_X,
        }
    }

    /// Facing implied by a horizontal velocity; `None` when standing still
    pub fn from_velocity_x(velocity_x: f32) -> Option<Self> {
        if velocity_x < 0.0 {
            Some(Self::Left)
        } else if velocity_x > 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }
}

/// Player controller possessing a character; owns the control rotation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Controller {
    control_yaw: f32,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn control_yaw(&self) -> f32 {
        self.control_yaw
    }

    pub fn set_control_yaw(&mut self, yaw: f32) {
        self.control_yaw = normalize_yaw(yaw);
    }
}

/// Assets and classes a character is configured with
#[derive(Debug, Clone, Default)]
pub struct CharacterAssets {
    pub idle_animation: Option<Flipbook>,
    pub running_animation: Option<Flipbook>,
    pub weapon_class: Option<WeaponClass>,
    /// Named attachment points on the sprite
    pub sockets: Vec<(String, Vec2)>,
}

impl CharacterAssets {
    /// Stock side-scroller setup: idle/running flipbooks and a pistol
    pub fn side_scroller() -> Self {
        Self {
            idle_animation: Some(Flipbook::looping("Idle", 1, 1.0)),
            running_animation: Some(Flipbook::looping("Running", 8, 15.0)),
            weapon_class: Some(WeaponClass::new("Pistol")),
            sockets: vec![(WEAPON_SOCKET.to_string(), Vec2::new(30.0, 10.0))],
        }
    }
}

/// A player-controllable side-scrolling character
#[derive(Debug)]
pub struct Character {
    pub id: CharacterId,
    stats: CharacterStats,
    /// Rigid body backing this character, if it lives in a physics world
    body_handle: Option<RigidBodyHandle>,

    movement: CharacterMovement,
    sprite: FlipbookComponent,
    idle_animation: Option<Flipbook>,
    running_animation: Option<Flipbook>,

    weapon_class: Option<WeaponClass>,
    weapon: Option<Weapon>,

    controller: Option<Controller>,
    /// Actor yaw; follows the controller's control rotation
    yaw: f32,

    is_hanging: bool,
    ledge: LedgeSearch,
}

impl Character {
    /// Create a character that is not yet part of a physics world
    pub fn new(
        id: CharacterId,
        stats: CharacterStats,
        assets: CharacterAssets,
        location: Vec2,
    ) -> Self {
        let mut sprite = FlipbookComponent::new();
        for (name, offset) in &assets.sockets {
            sprite.add_socket(name, *offset);
        }

        Self {
            id,
            stats,
            body_handle: None,
            movement: CharacterMovement::new(location),
            sprite,
            idle_animation: assets.idle_animation,
            running_animation: assets.running_animation,
            weapon_class: assets.weapon_class,
            weapon: None,
            controller: None,
            yaw: 0.0,
            is_hanging: false,
            ledge: LedgeSearch::new(),
        }
    }

    /// Create a character and add its capsule to the physics world
    pub fn spawn(
        id: CharacterId,
        stats: CharacterStats,
        assets: CharacterAssets,
        physics: &mut PhysicsWorld,
        location: Vec2,
    ) -> Self {
        let body = presets::character_body(location.x, location.y, stats.gravity_scale);
        let body_handle = physics.add_rigid_body(body);
        let collider =
            presets::character_collider(stats.capsule_half_height, stats.capsule_radius);
        physics.add_collider(collider, body_handle);

        let mut character = Self::new(id, stats, assets, location);
        character.body_handle = Some(body_handle);
        character
    }

    /// Class descriptor the game mode uses to spawn this character
    pub fn static_class() -> PawnClass {
        PawnClass::new("SideScrollerCharacter", |id, physics, location| {
            Character::spawn(
                id,
                CharacterStats::default(),
                CharacterAssets::side_scroller(),
                physics,
                location,
            )
        })
    }

    /// Spawn the configured weapon and hang it on the weapon socket
    ///
    /// Without a weapon class nothing is spawned.
    pub fn begin_play(&mut self) {
        let Some(class) = &self.weapon_class else {
            log::debug!("Character {} has no weapon class", self.id);
            return;
        };

        let mut weapon = class.spawn();
        weapon.attach_to(&self.sprite, WEAPON_SOCKET);
        weapon.add_local_yaw(180.0);
        if let Some(attachment) = weapon.attachment() {
            log::info!(
                "Character {} holds {} on {}",
                self.id,
                weapon.class().name,
                attachment.socket
            );
        }
        self.weapon = Some(weapon);
    }

    /// Give this character a controller
    pub fn possess(&mut self, controller: Controller) {
        self.yaw = controller.control_yaw();
        self.controller = Some(controller);
    }

    // Input

    /// Dispatch one named input event
    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Action(Action::Jump, ButtonState::Pressed) => self.on_jump_pressed(),
            InputEvent::Action(Action::Jump, ButtonState::Released) => self.on_jump_released(),
            InputEvent::Action(Action::UseWeapon, ButtonState::Pressed) => self.on_use_weapon(),
            InputEvent::Action(Action::UseWeapon, ButtonState::Released) => {}
            InputEvent::Axis(Axis::MoveRight, value) => self.on_move_axis(value),
        }
    }

    /// Start a jump; ignored while hanging
    pub fn on_jump_pressed(&mut self) {
        if !self.is_hanging {
            self.movement.jump();
        }
    }

    pub fn on_jump_released(&mut self) {
        self.movement.stop_jumping();
    }

    pub fn on_use_weapon(&mut self) {
        log::debug!("UseWeapon has no behaviour bound");
    }

    /// Forward horizontal input to movement
    pub fn on_move_axis(&mut self, value: f32) {
        self.movement.add_input(value);
    }

    // Physics

    /// Run the movement component and hand its velocity to the rigid body
    pub fn update_movement(&mut self, physics: &mut PhysicsWorld, dt: f32) {
        if self.is_hanging && self.movement.is_jump_pressed() {
            log::debug!("Character {} dropped a jump request while hanging", self.id);
            self.movement.stop_jumping();
        }
        let velocity = self.movement.update(&self.stats, dt);

        let Some(handle) = self.body_handle else {
            return;
        };
        let Some(body) = physics.get_rigid_body_mut(handle) else {
            return;
        };
        body.set_linvel(Vector::new(velocity.x, velocity.y), true);
    }

    /// Read the body back after a physics step and run the floor check
    pub fn sync_with_body(&mut self, physics: &PhysicsWorld) {
        let Some(handle) = self.body_handle else {
            return;
        };
        let Some(body) = physics.get_rigid_body(handle) else {
            return;
        };

        let location = Vec2::new(body.translation().x, body.translation().y);
        let velocity = Vec2::new(body.linvel().x, body.linvel().y);
        let on_ground = !self.movement.just_jumped() && self.floor_check(physics, location);

        self.movement.sync(location, velocity, on_ground);
    }

    /// Cast a short ray down from the bottom of the capsule
    fn floor_check(&self, physics: &PhysicsWorld, location: Vec2) -> bool {
        let Some(handle) = self.body_handle else {
            return false;
        };

        // Start just inside the capsule so resting contact still registers
        let ray_origin = Vector::new(
            location.x,
            location.y - self.stats.capsule_half_height + 1.0,
        );
        let ray_direction = Vector::new(0.0, -1.0);

        physics
            .raycast(
                ray_origin,
                ray_direction,
                FLOOR_CHECK_DISTANCE + 1.0,
                true,
                QueryFilter::new()
                    .groups(CollisionChannel::WorldStatic.query_groups())
                    .exclude_rigid_body(handle),
            )
            .is_some()
    }

    // Per-frame update

    /// Pick idle or running from the current speed
    ///
    /// Returns true if the sprite swapped flipbooks.
    pub fn select_animation(&mut self) -> bool {
        let speed_sqr = self.movement.velocity().length_squared();
        let desired = if speed_sqr > 0.0 {
            &self.running_animation
        } else {
            &self.idle_animation
        };

        if self.sprite.flipbook() != desired.as_ref() {
            self.sprite.set_flipbook(desired.clone())
        } else {
            false
        }
    }

    /// Turn to face the direction of travel. Standing still keeps the facing.
    pub fn update_facing(&mut self) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        if let Some(facing) = Facing::from_velocity_x(self.movement.velocity().x) {
            controller.set_control_yaw(facing.yaw());
        }
        self.yaw = controller.control_yaw();
    }

    /// Animation then facing
    pub fn update_character(&mut self) {
        self.select_animation();
        self.update_facing();
    }

    /// Sweep a sphere forward on the ledge channel; a hit stops the ledge search
    ///
    /// Returns whether anything was hit.
    pub fn probe_forward<Q: WorldQuery + ?Sized>(&mut self, world: &Q) -> bool {
        let start = self.movement.location();
        let end = start + self.forward_vector() * self.stats.probe_distance;

        let hit = world.sweep_sphere(
            start,
            end,
            self.stats.probe_radius,
            CollisionChannel::LedgeTrace,
            self.body_handle,
        );

        match hit {
            Some(hit) => {
                log::debug!(
                    "Character {} probe hit at {:?} (t = {:.2})",
                    self.id,
                    hit.location,
                    hit.time
                );
                self.ledge.obstacle_found();
                true
            }
            None => false,
        }
    }

    /// Per-frame update: animation, facing, then the ledge search
    ///
    /// Returns what happened to the ledge search this frame.
    pub fn tick<Q: WorldQuery + ?Sized>(&mut self, world: &Q, dt: f32) -> LedgeTransition {
        self.update_character();

        let mode = MovementMode::from_on_ground(self.movement.is_moving_on_ground());
        let mut transition = self.ledge.update_mode(mode);
        match transition {
            LedgeTransition::TookOff => log::debug!("Character {} left the ground", self.id),
            LedgeTransition::Landed => log::debug!("Character {} landed", self.id),
            _ => {}
        }

        if mode.is_airborne() && self.ledge.is_searching() {
            log::trace!(
                "Character {} in air for {} frames, probing",
                self.id,
                self.ledge.airborne_frames()
            );
            if self.probe_forward(world) {
                transition = LedgeTransition::ObstacleFound;
            }
        }

        self.sprite.update(dt);
        transition
    }

    // Accessors

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    pub fn body_handle(&self) -> Option<RigidBodyHandle> {
        self.body_handle
    }

    pub fn movement(&self) -> &CharacterMovement {
        &self.movement
    }

    pub fn sprite(&self) -> &FlipbookComponent {
        &self.sprite
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn facing(&self) -> Facing {
        Facing::from_yaw(self.yaw)
    }

    /// Forward along the play plane; always agrees with `facing`
    pub fn forward_vector(&self) -> Vec2 {
        self.facing().forward()
    }

    pub fn location(&self) -> Vec2 {
        self.movement.location()
    }

    pub fn velocity(&self) -> Vec2 {
        self.movement.velocity()
    }

    pub fn is_hanging(&self) -> bool {
        self.is_hanging
    }

    /// Enter or leave the hanging state; entering drops any pending jump
    pub fn set_hanging(&mut self, hanging: bool) {
        self.is_hanging = hanging;
        if hanging {
            self.movement.stop_jumping();
        }
    }

    pub fn is_searching_for_ledge(&self) -> bool {
        self.ledge.is_searching()
    }

    /// Weapon placement in the world, when one is attached
    pub fn weapon_transform(&self) -> Option<(Vec2, f32)> {
        self.weapon
            .as_ref()?
            .world_transform(self.location(), self.yaw)
    }
}
