//! Core traits that decouple the listener from any specific game client
//! or transport mechanism.
//!
//! Every concrete backend (the UDP socket listener, a game client, a test
//! harness, …) implements one of these traits.  The
//! [`EffectDispatcher`](crate::dispatcher::EffectDispatcher) only depends
//! on these abstractions.

use crate::command::Command;
use std::sync::mpsc;

/// Abstraction over the game client that renders the duel.
///
/// An implementation might forward spell triggers to an animation engine,
/// or it might be a log-only stand-in or a recording test double.  The
/// listener itself holds no duel state (health, win/loss) — that belongs
/// to whoever implements this trait.
pub trait SpellEffects {
    /// The error type produced by this backend.
    type Error: std::error::Error + Send + 'static;

    /// Play the fire-spell animation.
    fn cast_fire(&self) -> Result<(), Self::Error>;

    /// Play the water-spell animation.
    fn cast_water(&self) -> Result<(), Self::Error>;

    /// Play the earth-spell animation.
    fn cast_earth(&self) -> Result<(), Self::Error>;

    /// The player has been defeated.
    fn player_dead(&self) -> Result<(), Self::Error>;

    /// The mage has been defeated — the player won.
    fn mage_dead(&self) -> Result<(), Self::Error>;
}

//  Command Source

/// A source of [`Command`]s.
///
/// Implementations listen on some transport — a UDP socket, an in-memory
/// channel, … — and forward parsed commands into the provided
/// [`mpsc::Sender`].
///
/// The trait is deliberately transport-agnostic: the dispatcher does not
/// know (or care) whether commands come from a socket or a test harness.
///
/// # Contract
///
/// * [`run`](CommandSource::run) **blocks** until the source is stopped,
///   exhausted, or an unrecoverable error occurs.
/// * Each received command must be sent through `sink` exactly once, in
///   arrival order.
/// * At most one receive operation is outstanding at any time: the next
///   one is issued only after the previous message has been fully handled.
/// * Implementations must be [`Send`] so they can run on a dedicated
///   thread.
pub trait CommandSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming [`Command`] into `sink`.
    ///
    /// This method blocks the calling thread.  Handling a message must
    /// stay fast and non-blocking — effect invocation happens on the
    /// receiving side of `sink`, never here, so a slow effect cannot
    /// delay the next receive.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::mpsc;

    //  Mock SpellEffects

    /// A test double that records every call made to it.
    #[derive(Debug, Default)]
    struct RecorderEffects {
        calls: RefCell<Vec<&'static str>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    impl SpellEffects for RecorderEffects {
        type Error = MockError;

        fn cast_fire(&self) -> Result<(), MockError> {
            self.calls.borrow_mut().push("fire");
            Ok(())
        }

        fn cast_water(&self) -> Result<(), MockError> {
            self.calls.borrow_mut().push("water");
            Ok(())
        }

        fn cast_earth(&self) -> Result<(), MockError> {
            self.calls.borrow_mut().push("earth");
            Ok(())
        }

        fn player_dead(&self) -> Result<(), MockError> {
            self.calls.borrow_mut().push("player_dead");
            Ok(())
        }

        fn mage_dead(&self) -> Result<(), MockError> {
            self.calls.borrow_mut().push("mage_dead");
            Ok(())
        }
    }

    #[test]
    fn mock_effects_record_calls() {
        let fx = RecorderEffects::default();
        fx.cast_fire().unwrap();
        fx.mage_dead().unwrap();
        assert_eq!(*fx.calls.borrow(), vec!["fire", "mage_dead"]);
    }

    //  Mock CommandSource

    /// A test double that emits a fixed sequence of commands.
    struct MockSource {
        commands: Vec<Command>,
    }

    impl CommandSource for MockSource {
        type Error = MockError;

        fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), MockError> {
            for cmd in self.commands.drain(..) {
                let _ = sink.send(cmd);
            }
            Ok(())
        }
    }

    #[test]
    fn mock_source_emits_commands_in_order() {
        let mut src = MockSource {
            commands: vec![Command::CastFire, Command::PlayerDead],
        };
        let (tx, rx) = mpsc::channel();
        src.run(tx).unwrap();
        let cmds: Vec<Command> = rx.try_iter().collect();
        assert_eq!(cmds, vec![Command::CastFire, Command::PlayerDead]);
    }
}
