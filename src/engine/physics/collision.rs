use rapier2d::prelude::*;

/// Collision channels used to filter what objects interact with each other
///
/// World geometry opts into `LedgeTrace` to be visible to the character's
/// forward probe; everything else is ignored by that query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionChannel {
    /// Level geometry that blocks movement (floors, walls)
    WorldStatic = 0b0000_0001,

    /// Player and AI characters
    Pawn = 0b0000_0010,

    /// Dedicated trace channel for the forward obstacle probe
    LedgeTrace = 0b0000_0100,
}

impl CollisionChannel {
    /// Single-bit group for this channel
    pub fn group(self) -> Group {
        Group::from_bits_truncate(self as u32)
    }

    /// Collision groups for a body living on this channel
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = self.group();

        let filter = match self {
            // Characters stand on world geometry; they pass through each other
            CollisionChannel::Pawn => CollisionChannel::WorldStatic.group(),

            CollisionChannel::WorldStatic | CollisionChannel::LedgeTrace => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }

    /// Groups for level geometry that also blocks the ledge probe
    pub fn ledge_geometry_groups() -> InteractionGroups {
        InteractionGroups::new(
            CollisionChannel::WorldStatic.group() | CollisionChannel::LedgeTrace.group(),
            Group::ALL,
        )
    }

    /// Groups a scene query on this channel uses to find its targets
    pub fn query_groups(self) -> InteractionGroups {
        InteractionGroups::new(self.group(), self.group())
    }
}
