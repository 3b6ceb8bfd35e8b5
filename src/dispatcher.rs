//! The dispatcher that ties commands to game-client effects.
//!
//! [`EffectDispatcher`] reacts to [`Command`]s by invoking the matching
//! callback on the [`SpellEffects`] trait — exactly one effect per
//! command.  The two terminal-state commands additionally emit their
//! notification on the terminal log.

use crate::command::Command;
use crate::traits::SpellEffects;
use log::info;

/// Possible errors from the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The game-client backend returned an error.
    #[error("effect backend error: {0}")]
    Effect(String),
}

/// Maps each recognized command to its one effect.
///
/// The dispatcher is generic over any [`SpellEffects`] implementation,
/// making it completely independent of the concrete game client.
///
/// # Typical usage
///
/// ```ignore
/// let mut dispatcher = EffectDispatcher::new(effects);
/// dispatcher.handle(Command::CastFire)?;
/// ```
pub struct EffectDispatcher<E: SpellEffects> {
    effects: E,
}

impl<E: SpellEffects> EffectDispatcher<E> {
    /// Create a new dispatcher around a game-client backend.
    pub fn new(effects: E) -> Self {
        Self { effects }
    }

    /// Process a single [`Command`].
    ///
    /// Invokes exactly one effect.  A backend failure is returned for the
    /// caller to log; it never stops the command stream, and the terminal
    /// notification for `PlayerDead` / `MageDead` has already been
    /// emitted by then.
    pub fn handle(&mut self, cmd: Command) -> Result<(), DispatchError> {
        match cmd {
            Command::CastFire => {
                info!("cast fire");
                self.effects.cast_fire()
            }
            Command::CastWater => {
                info!("cast water");
                self.effects.cast_water()
            }
            Command::CastEarth => {
                info!("cast earth");
                self.effects.cast_earth()
            }
            Command::PlayerDead => {
                info!("player lost");
                self.effects.player_dead()
            }
            Command::MageDead => {
                info!("player won");
                self.effects.mage_dead()
            }
        }
        .map_err(|e| DispatchError::Effect(e.to_string()))
    }
}

//  Tests
