#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use brawl_core::{
    AnimationTrack, BodyId, CharacterProfile, ColliderId, ColliderTag, CombatConfig,
    CompletionPolicy, EnemyMachine, EnemyState, Hitbox, Overlap, PlayerMachine, PlayerState,
    Stats, Vec2, WorldQuery,
};

/// Every frame lasts 1/8 s, every step 1/16 s: both exact in binary.
pub const SPF: f32 = 0.125;
pub const HALF_FRAME: f32 = 0.0625;

pub const PLAYER_BODY: BodyId = BodyId(1);
pub const ENEMY_BODY: BodyId = BodyId(2);

pub fn punch1_hitbox() -> Hitbox {
    Hitbox::new(Vec2::new(0.573, 0.641), Vec2::new(0.5125, 0.5748))
}

pub fn player_profile() -> Arc<CharacterProfile<PlayerState>> {
    use CompletionPolicy::*;
    let profile = CharacterProfile::builder("hero")
        .track(PlayerState::Idle, AnimationTrack::numbered("idle", 2, SPF, Looping))
        .track(PlayerState::Walk, AnimationTrack::numbered("walk", 2, SPF, Looping))
        .track(PlayerState::Run, AnimationTrack::numbered("run", 2, SPF, Looping))
        .track(PlayerState::Hurt, AnimationTrack::numbered("hurt", 2, SPF, Sequence))
        .track(PlayerState::Jump, AnimationTrack::numbered("jump", 2, SPF, HoldLastFrame))
        .track(PlayerState::AirKick, AnimationTrack::numbered("kick", 2, SPF, Sequence))
        .track(PlayerState::Punch1, AnimationTrack::numbered("punch1", 4, SPF, Sequence))
        .track(PlayerState::Punch2, AnimationTrack::numbered("punch2", 2, SPF, Sequence))
        .hitbox(PlayerState::Punch1, 2, punch1_hitbox())
        .hitbox(
            PlayerState::Punch2,
            1,
            Hitbox::new(Vec2::new(0.711, 0.494), Vec2::new(0.5125, 0.5748)),
        )
        .hitbox(
            PlayerState::AirKick,
            1,
            Hitbox::new(Vec2::new(0.2902, 0.3122), Vec2::new(0.6288, 0.374)),
        )
        .combo(PlayerState::Punch1, PlayerState::Punch2)
        .stats(Stats {
            max_health: 5,
            walk_speed: 2.0,
            detection_range: 0.0,
        })
        .build()
        .expect("player fixture is valid");
    Arc::new(profile)
}

pub fn enemy_profile() -> Arc<CharacterProfile<EnemyState>> {
    use CompletionPolicy::*;
    let profile = CharacterProfile::builder("chow_mein")
        .track(EnemyState::Idle, AnimationTrack::numbered("idle", 2, SPF, Looping))
        .track(EnemyState::Hit, AnimationTrack::numbered("hit", 2, SPF, Sequence))
        .track(EnemyState::Attack, AnimationTrack::numbered("attack", 4, SPF, Sequence))
        .track(EnemyState::Dying, AnimationTrack::numbered("dying", 2, SPF, Sequence))
        .hitbox(
            EnemyState::Attack,
            2,
            Hitbox::new(Vec2::new(0.4132, 0.318), Vec2::new(0.83, 0.5748)),
        )
        .stats(Stats {
            max_health: 3,
            walk_speed: 0.0,
            detection_range: 1.5,
        })
        .build()
        .expect("enemy fixture is valid");
    Arc::new(profile)
}

pub fn player() -> PlayerMachine {
    PlayerMachine::player(player_profile(), CombatConfig::default(), PLAYER_BODY)
}

pub fn enemy(target: Option<BodyId>) -> EnemyMachine {
    EnemyMachine::enemy(enemy_profile(), CombatConfig::default(), ENEMY_BODY, target)
}

/// Solid ground under the character.
pub fn floor() -> [Overlap; 1] {
    [Overlap::surface()]
}

pub fn player_swing(id: u32, position: Vec2) -> Overlap {
    Overlap::new(ColliderId(id), ColliderTag::PlayerAttack, position)
}

pub fn enemy_swing(id: u32, position: Vec2, owner: Vec2) -> Overlap {
    Overlap::new(ColliderId(id), ColliderTag::EnemyAttack, position).with_owner_position(owner)
}

/// Fixed body positions.
#[derive(Default)]
pub struct World {
    positions: HashMap<BodyId, Vec2>,
}

impl World {
    pub fn with(mut self, body: BodyId, position: Vec2) -> Self {
        self.positions.insert(body, position);
        self
    }
}

impl WorldQuery for World {
    fn position(&self, body: BodyId) -> Option<Vec2> {
        self.positions.get(&body).copied()
    }
}
