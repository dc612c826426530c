// Weapons carried by characters

use glam::Vec2;

use super::animation::FlipbookComponent;
use super::character::Facing;
use crate::core::math::normalize_yaw;

/// Socket the character attaches its weapon to
pub const WEAPON_SOCKET: &str = "WeaponSocket";

/// Configured weapon type a character spawns at begin-play
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponClass {
    pub name: String,
}

impl WeaponClass {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Create an unattached weapon of this class
    pub fn spawn(&self) -> Weapon {
        log::info!("Spawned weapon {}", self.name);
        Weapon {
            class: self.clone(),
            attachment: None,
            local_yaw: 0.0,
        }
    }
}

/// Where a weapon hangs off its owner's sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// Socket name requested at attach time
    pub socket: String,
    /// Offset from the sprite origin; zero when the socket was missing
    pub offset: Vec2,
}

/// A weapon actor, owned exclusively by one character
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    class: WeaponClass,
    attachment: Option<Attachment>,
    /// Yaw relative to the parent, in degrees
    local_yaw: f32,
}

impl Weapon {
    pub fn class(&self) -> &WeaponClass {
        &self.class
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Attach to a named socket on `sprite`, keeping the relative transform
    ///
    /// An unknown socket attaches at the sprite origin.
    pub fn attach_to(&mut self, sprite: &FlipbookComponent, socket: &str) {
        let offset = match sprite.socket(socket) {
            Some(found) => found.offset,
            None => {
                log::warn!(
                    "Socket {} not found, attaching {} at sprite origin",
                    socket,
                    self.class.name
                );
                Vec2::ZERO
            }
        };
        self.attachment = Some(Attachment {
            socket: socket.to_string(),
            offset,
        });
    }

    /// Rotate around the local up axis
    pub fn add_local_yaw(&mut self, degrees: f32) {
        self.local_yaw = normalize_yaw(self.local_yaw + degrees);
    }

    /// World placement given the owner's location and yaw
    ///
    /// Returns `None` while detached. The socket offset is authored for a
    /// right-facing sprite and mirrors when the owner faces left.
    pub fn world_transform(&self, owner_location: Vec2, owner_yaw: f32) -> Option<(Vec2, f32)> {
        let attachment = self.attachment.as_ref()?;
        let offset = match Facing::from_yaw(owner_yaw) {
            Facing::Right => attachment.offset,
            Facing::Left => Vec2::new(-attachment.offset.x, attachment.offset.y),
        };
        Some((
            owner_location + offset,
            normalize_yaw(owner_yaw + self.local_yaw),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite_with_socket() -> FlipbookComponent {
        let mut sprite = FlipbookComponent::new();
        sprite.add_socket(WEAPON_SOCKET, Vec2::new(30.0, 10.0));
        sprite
    }

    #[test]
    fn test_spawned_weapon_is_detached() {
        let weapon = WeaponClass::new("Pistol").spawn();
        assert_eq!(weapon.class().name, "Pistol");
        assert!(weapon.attachment().is_none());
        assert!(weapon.world_transform(Vec2::ZERO, 0.0).is_none());
    }

    #[test]
    fn test_attach_to_socket() {
        let mut weapon = WeaponClass::new("Pistol").spawn();
        weapon.attach_to(&sprite_with_socket(), WEAPON_SOCKET);

        let attachment = weapon.attachment().unwrap();
        assert_eq!(attachment.socket, WEAPON_SOCKET);
        assert_eq!(attachment.offset, Vec2::new(30.0, 10.0));
    }

    #[test]
    fn test_attach_to_missing_socket_uses_origin() {
        let mut weapon = WeaponClass::new("Pistol").spawn();
        weapon.attach_to(&FlipbookComponent::new(), WEAPON_SOCKET);

        assert_eq!(weapon.attachment().unwrap().offset, Vec2::ZERO);
    }

    #[test]
    fn test_local_yaw_wraps() {
        let mut weapon = WeaponClass::new("Pistol").spawn();
        weapon.add_local_yaw(180.0);
        weapon.add_local_yaw(270.0);
        assert_eq!(weapon.local_yaw, 90.0);
    }

    #[test]
    fn test_world_transform_follows_owner_facing() {
        let mut weapon = WeaponClass::new("Pistol").spawn();
        weapon.attach_to(&sprite_with_socket(), WEAPON_SOCKET);
        weapon.add_local_yaw(180.0);

        let (location, yaw) = weapon
            .world_transform(Vec2::new(100.0, 0.0), 0.0)
            .unwrap();
        assert_eq!(location, Vec2::new(130.0, 10.0));
        assert_eq!(yaw, 180.0);

        let (location, yaw) = weapon
            .world_transform(Vec2::new(100.0, 0.0), 180.0)
            .unwrap();
        assert_eq!(location, Vec2::new(70.0, 10.0));
        assert_eq!(yaw, 0.0);
    }
}
