use super::{StateFlags, StateSet};

/// Animation/behavior modes of a melee enemy.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnemyState {
    Idle,
    /// Optional; no rule enters it unless a profile completes into it.
    Walk,
    Hit,
    Attack,
    Dying,
}

impl StateSet for EnemyState {
    const IDLE: Self = Self::Idle;
    const HIT_REACTION: Self = Self::Hit;
    const DEFEAT: Option<Self> = Some(Self::Dying);

    fn flags(self) -> StateFlags {
        match self {
            Self::Idle | Self::Walk => StateFlags::empty(),
            Self::Hit => StateFlags::HIT_REACTION,
            Self::Attack => StateFlags::ATTACKING,
            Self::Dying => StateFlags::DEFEAT,
        }
    }

    fn required() -> &'static [Self] {
        &[Self::Idle, Self::Hit, Self::Attack, Self::Dying]
    }
}
