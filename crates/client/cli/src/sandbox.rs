//! Flat-floor physics sandbox.
//!
//! Bodies are axis-aligned boxes whose origin sits at their feet. The floor is
//! the line `y = 0`. Each body may own one melee collider, placed from the
//! hitbox command of its last step and tagged by the team of its owner.
use std::collections::BTreeMap;

use brawl_core::{
    BodyId, ColliderId, ColliderTag, HitboxCommand, Motion, Overlap, Vec2, WorldQuery,
};
use brawl_runtime::PhysicsBackend;

/// Downward acceleration in units per second squared.
pub const GRAVITY: f32 = 20.0;

/// Half extents of every character body.
pub const BODY_HALF_EXTENTS: Vec2 = Vec2::new(0.3, 0.5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

impl Team {
    fn attack_tag(self) -> ColliderTag {
        match self {
            Self::Player => ColliderTag::PlayerAttack,
            Self::Enemy => ColliderTag::EnemyAttack,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Melee {
    collider: ColliderId,
    /// Offset from the owner's origin, already mirrored for facing.
    offset: Vec2,
    half_extents: Vec2,
    active: bool,
}

#[derive(Clone, Debug)]
struct Body {
    team: Team,
    position: Vec2,
    velocity: Vec2,
    grounded: bool,
    landed: bool,
    melee: Option<Melee>,
}

impl Body {
    fn center(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y + BODY_HALF_EXTENTS.y)
    }

    /// World-space center of the active melee collider.
    fn active_melee(&self) -> Option<(Melee, Vec2)> {
        self.melee
            .filter(|melee| melee.active)
            .map(|melee| (melee, self.position + melee.offset))
    }
}

/// Headless physics world.
#[derive(Debug, Default)]
pub struct Sandbox {
    bodies: BTreeMap<BodyId, Body>,
    next_collider: u32,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a body standing on the floor at `x`.
    pub fn spawn(&mut self, body: BodyId, team: Team, x: f32) {
        self.bodies.insert(
            body,
            Body {
                team,
                position: Vec2::new(x, 0.0),
                velocity: Vec2::ZERO,
                grounded: true,
                landed: false,
                melee: None,
            },
        );
    }

    pub fn despawn(&mut self, body: BodyId) {
        self.bodies.remove(&body);
    }

    /// Integrates velocities and resolves floor contact.
    pub fn integrate(&mut self, dt: f32) {
        for body in self.bodies.values_mut() {
            if !body.grounded {
                body.velocity.y -= GRAVITY * dt;
            }
            body.position = body.position + Vec2::new(body.velocity.x * dt, body.velocity.y * dt);

            if body.position.y <= 0.0 {
                if !body.grounded {
                    body.landed = true;
                }
                body.position.y = 0.0;
                body.velocity.y = 0.0;
                body.grounded = true;
            } else {
                body.grounded = false;
            }
        }
    }

    fn next_collider(&mut self) -> ColliderId {
        self.next_collider += 1;
        ColliderId(self.next_collider)
    }
}

fn boxes_overlap(a: Vec2, a_half: Vec2, b: Vec2, b_half: Vec2) -> bool {
    (a.x - b.x).abs() < a_half.x + b_half.x && (a.y - b.y).abs() < a_half.y + b_half.y
}

impl WorldQuery for Sandbox {
    fn position(&self, body: BodyId) -> Option<Vec2> {
        self.bodies.get(&body).map(|b| b.position)
    }
}

impl PhysicsBackend for Sandbox {
    fn overlaps(&self, body: BodyId) -> Vec<Overlap> {
        let Some(this) = self.bodies.get(&body) else {
            return Vec::new();
        };

        let mut overlaps = Vec::new();
        if this.grounded {
            overlaps.push(Overlap::surface());
        }
        for (other_id, other) in &self.bodies {
            if *other_id == body {
                continue;
            }
            let Some((melee, center)) = other.active_melee() else {
                continue;
            };
            if boxes_overlap(this.center(), BODY_HALF_EXTENTS, center, melee.half_extents) {
                overlaps.push(
                    Overlap::new(melee.collider, other.team.attack_tag(), center)
                        .with_owner_position(other.position),
                );
            }
        }
        overlaps
    }

    fn take_landed(&mut self, body: BodyId) -> bool {
        self.bodies
            .get_mut(&body)
            .is_some_and(|b| std::mem::take(&mut b.landed))
    }

    fn apply_motion(&mut self, body: BodyId, motion: Motion) {
        let Some(b) = self.bodies.get_mut(&body) else {
            return;
        };
        if let Some(vx) = motion.velocity_x {
            b.velocity.x = vx;
        }
        if let Some(vy) = motion.velocity_y {
            b.velocity.y = vy;
            if vy > 0.0 {
                b.grounded = false;
            }
        }
    }

    fn set_hitbox(&mut self, body: BodyId, command: HitboxCommand) {
        let Some(existing) = self.bodies.get(&body).map(|b| b.melee) else {
            return;
        };
        let Some(hitbox) = command.placement() else {
            if let Some(b) = self.bodies.get_mut(&body) {
                b.melee = None;
            }
            return;
        };

        // A swing keeps its collider, spent or not, until disarmed.
        let (collider, active) = match existing {
            Some(melee) => (melee.collider, melee.active),
            None => (self.next_collider(), true),
        };
        if let Some(b) = self.bodies.get_mut(&body) {
            b.melee = Some(Melee {
                collider,
                offset: hitbox.offset,
                half_extents: Vec2::new(hitbox.size.x / 2.0, hitbox.size.y / 2.0),
                active,
            });
        }
    }

    fn deactivate_collider(&mut self, collider: ColliderId) {
        for body in self.bodies.values_mut() {
            if let Some(melee) = body.melee.as_mut().filter(|m| m.collider == collider) {
                melee.active = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawl_core::Hitbox;

    const HERO: BodyId = BodyId(1);
    const FOE: BodyId = BodyId(2);

    fn swing() -> HitboxCommand {
        HitboxCommand::Armed(Hitbox::new(Vec2::new(0.6, 0.5), Vec2::new(0.5, 0.5)))
    }

    #[test]
    fn jump_leaves_and_lands_on_floor() {
        let mut sandbox = Sandbox::new();
        sandbox.spawn(HERO, Team::Player, 0.0);

        sandbox.apply_motion(
            HERO,
            Motion {
                velocity_x: None,
                velocity_y: Some(5.0),
            },
        );
        sandbox.integrate(0.1);
        assert!(sandbox.overlaps(HERO).is_empty());
        assert!(!sandbox.take_landed(HERO));

        for _ in 0..20 {
            sandbox.integrate(0.05);
        }
        assert_eq!(sandbox.overlaps(HERO), vec![Overlap::surface()]);
        assert_eq!(sandbox.position(HERO), Some(Vec2::ZERO));
        assert!(sandbox.take_landed(HERO));
        assert!(!sandbox.take_landed(HERO));
    }

    #[test]
    fn armed_swing_overlaps_opponent_until_deactivated() {
        let mut sandbox = Sandbox::new();
        sandbox.spawn(HERO, Team::Player, 0.0);
        sandbox.spawn(FOE, Team::Enemy, 1.0);

        sandbox.set_hitbox(HERO, swing());
        let overlaps = sandbox.overlaps(FOE);
        let hit = overlaps
            .iter()
            .find(|o| o.tag == ColliderTag::PlayerAttack)
            .copied()
            .unwrap();
        assert_eq!(hit.owner_position, Vec2::ZERO);

        sandbox.deactivate_collider(hit.collider);
        sandbox.set_hitbox(HERO, swing());
        assert!(
            !sandbox
                .overlaps(FOE)
                .iter()
                .any(|o| o.tag == ColliderTag::PlayerAttack)
        );

        sandbox.set_hitbox(HERO, HitboxCommand::Disarmed);
        sandbox.set_hitbox(HERO, swing());
        assert!(
            sandbox
                .overlaps(FOE)
                .iter()
                .any(|o| o.tag == ColliderTag::PlayerAttack && o.collider != hit.collider)
        );
    }

    #[test]
    fn own_swing_is_not_reported() {
        let mut sandbox = Sandbox::new();
        sandbox.spawn(HERO, Team::Player, 0.0);
        sandbox.set_hitbox(HERO, swing());

        assert_eq!(sandbox.overlaps(HERO), vec![Overlap::surface()]);
    }
}
