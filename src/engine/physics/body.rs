use super::collision::CollisionChannel;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    gravity_scale: Real,
    can_sleep: bool,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            gravity_scale: 1.0,
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            gravity_scale: 0.0,
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Set the gravity scale (1.0 = normal gravity, 0.0 = no gravity)
    pub fn gravity_scale(mut self, scale: Real) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Set whether the body can sleep when inactive
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Lock rotation (characters stay upright)
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .gravity_scale(self.gravity_scale)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .build()
    }
}

/// Builder for creating colliders with common configurations
pub struct ColliderBuilder2D {
    shape: SharedShape,
    groups: InteractionGroups,
    friction: Real,
    restitution: Real,
    density: Real,
}

impl ColliderBuilder2D {
    /// Create a box-shaped collider
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self::with_shape(SharedShape::cuboid(half_width, half_height))
    }

    /// Create a vertical capsule collider
    pub fn capsule(half_height: Real, radius: Real) -> Self {
        Self::with_shape(SharedShape::capsule_y(half_height, radius))
    }

    fn with_shape(shape: SharedShape) -> Self {
        Self {
            shape,
            groups: CollisionChannel::WorldStatic.to_interaction_groups(),
            friction: 0.5,
            restitution: 0.0,
            density: 1.0,
        }
    }

    /// Put the collider on a single channel
    pub fn channel(mut self, channel: CollisionChannel) -> Self {
        self.groups = channel.to_interaction_groups();
        self
    }

    /// Use explicit interaction groups
    pub fn groups(mut self, groups: InteractionGroups) -> Self {
        self.groups = groups;
        self
    }

    /// Set friction coefficient (0.0 = no friction, 1.0 = high friction)
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Set restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        ColliderBuilder::new(self.shape)
            .collision_groups(self.groups)
            .friction(self.friction)
            .restitution(self.restitution)
            .density(self.density)
            .build()
    }
}

/// Common rigid body configurations for level and character objects
pub mod presets {
    use super::*;

    /// Character body: dynamic, rotation locked, never sleeps
    pub fn character_body(x: Real, y: Real, gravity_scale: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .lock_rotation()
            .gravity_scale(gravity_scale)
            .can_sleep(false)
            .build()
    }

    /// Character collider from the capsule's total half-height and radius
    pub fn character_collider(half_height: Real, radius: Real) -> Collider {
        // rapier measures the capsule from segment end to segment end
        let segment_half = (half_height - radius).max(0.0);

        ColliderBuilder2D::capsule(segment_half, radius)
            .channel(CollisionChannel::Pawn)
            .friction(0.0)
            .restitution(0.0)
            .build()
    }

    /// Level geometry body (fixed)
    pub fn geometry_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Floor collider; invisible to the ledge probe
    pub fn floor_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .channel(CollisionChannel::WorldStatic)
            .friction(0.3)
            .build()
    }

    /// Wall collider; blocks movement and is seen by the ledge probe
    pub fn wall_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .groups(CollisionChannel::ledge_geometry_groups())
            .friction(0.0)
            .build()
    }
}
