//! Game phases and phase sets.
//!
//! The overall game loop owns the current [`GamePhase`]; this crate only
//! reads it to decide whether an action is legal right now.

use bitflags::bitflags;

/// What screen or mode the overall game is in.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GamePhase {
    /// Walking the world map.
    #[default]
    Exploring,
    /// Inside a combat encounter.
    Fight,
    /// A menu or inventory screen is open.
    Menu,
    /// Bartering with a merchant.
    Trade,
    /// The run is over.
    GameOver,
}

impl GamePhase {
    /// Every phase, in declaration order.
    pub fn all() -> impl Iterator<Item = GamePhase> {
        <GamePhase as strum::IntoEnumIterator>::iter()
    }

    const fn bit(self) -> PhaseSet {
        match self {
            GamePhase::Exploring => PhaseSet::EXPLORING,
            GamePhase::Fight => PhaseSet::FIGHT,
            GamePhase::Menu => PhaseSet::MENU,
            GamePhase::Trade => PhaseSet::TRADE,
            GamePhase::GameOver => PhaseSet::GAME_OVER,
        }
    }
}

bitflags! {
    /// Set of phases in which an action may be invoked.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PhaseSet: u8 {
        const EXPLORING = 1 << 0;
        const FIGHT     = 1 << 1;
        const MENU      = 1 << 2;
        const TRADE     = 1 << 3;
        const GAME_OVER = 1 << 4;
    }
}

impl PhaseSet {
    /// Builds a set containing exactly `phases`.
    pub fn of(phases: impl IntoIterator<Item = GamePhase>) -> Self {
        phases
            .into_iter()
            .fold(PhaseSet::empty(), |set, phase| set | phase.bit())
    }

    /// Returns true if `phase` is a member of this set.
    pub fn allows(self, phase: GamePhase) -> bool {
        self.contains(phase.bit())
    }

    /// Iterates the member phases in declaration order.
    pub fn phases(self) -> impl Iterator<Item = GamePhase> {
        GamePhase::all().filter(move |phase| self.allows(*phase))
    }
}

impl From<GamePhase> for PhaseSet {
    fn from(phase: GamePhase) -> Self {
        phase.bit()
    }
}
