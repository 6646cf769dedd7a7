//! Read-only world data supplied by the physics collaborator.
//!
//! The core never owns collision geometry. Each step the collaborator reports
//! which colliders overlap a character's body, tagged by role, and answers
//! position queries for explicitly injected bodies (an enemy's target).
use std::fmt;

use crate::geometry::Vec2;

/// Physics body handle of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "body#{}", self.0)
    }
}

/// Collider handle, used to deactivate a consumed attack collider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColliderId(pub u32);

impl fmt::Display for ColliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collider#{}", self.0)
    }
}

/// Role of an overlapping collider.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ColliderTag {
    /// Melee hitbox or projectile fired by the player.
    PlayerAttack,
    /// Melee hitbox or projectile fired by an enemy.
    EnemyAttack,
    /// Non-trigger collider a character can stand on.
    Solid,
    /// Any other trigger volume.
    Trigger,
}

impl ColliderTag {
    /// Colliders that count as ground contact.
    #[inline]
    pub const fn is_surface(self) -> bool {
        matches!(self, Self::Solid)
    }
}

/// A collider overlapping a character's body this step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    pub collider: ColliderId,
    pub tag: ColliderTag,
    /// World position of the collider itself.
    pub position: Vec2,
    /// World position of the body that owns the collider.
    pub owner_position: Vec2,
    /// Projectiles mark the impact point with their own position.
    pub projectile: bool,
}

impl Overlap {
    pub fn new(collider: ColliderId, tag: ColliderTag, position: Vec2) -> Self {
        Self {
            collider,
            tag,
            position,
            owner_position: position,
            projectile: false,
        }
    }

    /// Solid ground under the character.
    pub fn surface() -> Self {
        Self::new(ColliderId::default(), ColliderTag::Solid, Vec2::ZERO)
    }

    pub fn with_owner_position(mut self, owner_position: Vec2) -> Self {
        self.owner_position = owner_position;
        self
    }

    pub fn as_projectile(mut self) -> Self {
        self.projectile = true;
        self
    }
}

/// Position lookups for bodies the core holds explicit references to.
///
/// A missing answer is treated as "not present", never as an error.
pub trait WorldQuery {
    fn position(&self, body: BodyId) -> Option<Vec2>;
}

/// World with nothing in it.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyWorld;

impl WorldQuery for EmptyWorld {
    fn position(&self, _body: BodyId) -> Option<Vec2> {
        None
    }
}

/// Returns true when any overlap is a surface the character can stand on.
pub fn touching_surface(overlaps: &[Overlap]) -> bool {
    overlaps.iter().any(|overlap| overlap.tag.is_surface())
}
