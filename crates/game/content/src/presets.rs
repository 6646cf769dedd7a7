//! Built-in character profiles.
//!
//! These mirror the shipped data files in `data/` and serve as fallbacks when
//! no profile file is configured.

use brawl_core::{
    AnimationTrack, CharacterProfile, CompletionPolicy, ConfigError, DamageRules, EnemyState,
    Hitbox, PlayerState, Stats, Vec2,
};

use CompletionPolicy::{HoldLastFrame, Looping, Sequence};

/// Name of the built-in player profile.
pub const PLAYER: &str = "player";
/// Name of the built-in enemy profile.
pub const CHOW_MEIN: &str = "chow_mein";

const PUNCH_SIZE: Vec2 = Vec2::new(0.5125, 0.5748);

/// Brawler with a two-hit ground combo, an air kick and a dash.
pub fn player() -> Result<CharacterProfile<PlayerState>, ConfigError> {
    CharacterProfile::builder(PLAYER)
        .track(PlayerState::Idle, track("player_idle", 4, 0.1, Looping))
        .track(PlayerState::Walk, track("player_walk", 6, 0.07, Looping))
        .track(PlayerState::Run, track("player_run", 6, 0.07, Looping))
        .track(PlayerState::Hurt, track("player_hurt", 2, 0.1, Sequence))
        .track(PlayerState::Jump, track("player_jump", 3, 0.1, HoldLastFrame))
        .track(PlayerState::AirKick, track("player_kick", 3, 0.1, Sequence))
        .track(PlayerState::Punch1, track("player_punch1", 4, 0.04, Sequence))
        .track(PlayerState::Punch2, track("player_punch2", 4, 0.04, Sequence))
        .hitbox(
            PlayerState::Punch1,
            2,
            Hitbox::new(Vec2::new(0.573, 0.641), PUNCH_SIZE),
        )
        .hitbox(
            PlayerState::Punch2,
            1,
            Hitbox::new(Vec2::new(0.711, 0.494), PUNCH_SIZE),
        )
        .hitbox(
            PlayerState::AirKick,
            1,
            Hitbox::new(Vec2::new(0.2902, 0.3122), Vec2::new(0.6288, 0.374)),
        )
        .combo(PlayerState::Punch1, PlayerState::Punch2)
        .stats(Stats {
            max_health: 3,
            walk_speed: 2.0,
            detection_range: 0.0,
        })
        .damage(DamageRules::player())
        .build()
}

/// Stationary noodle enemy that swings at anything within reach.
pub fn chow_mein() -> Result<CharacterProfile<EnemyState>, ConfigError> {
    CharacterProfile::builder(CHOW_MEIN)
        .track(EnemyState::Idle, track("chow_mein_idle", 4, 0.2, Looping))
        .track(EnemyState::Walk, track("chow_mein_walk", 4, 0.1, Looping))
        .track(EnemyState::Hit, track("chow_mein_hit", 2, 0.1, Sequence))
        .track(EnemyState::Attack, track("chow_mein_attack", 7, 0.06, Sequence))
        .track(EnemyState::Dying, track("chow_mein_dying", 6, 0.04, Sequence))
        .hitbox(
            EnemyState::Attack,
            4,
            Hitbox::new(Vec2::new(0.4132, 0.318), Vec2::new(0.83, 0.5748)),
        )
        .stats(Stats {
            max_health: 3,
            walk_speed: 1.0,
            detection_range: 1.5,
        })
        .damage(DamageRules::enemy())
        .build()
}

fn track(prefix: &str, count: usize, seconds: f32, policy: CompletionPolicy) -> AnimationTrack {
    AnimationTrack::numbered(prefix, count, seconds, policy)
}
