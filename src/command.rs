//! Commands and the wire vocabulary shared by all components.
//!
//! This module defines the closed set of messages the duel client sends
//! over UDP: [`Command`] describes every action the listener can react to,
//! and [`Command::parse`] is the single place where a raw payload is
//! matched against the recognized literals.
//!
//! The sender transmits bare UTF-8 text — no framing, no JSON.  Matching
//! is case-sensitive after trimming surrounding whitespace, so `" Fire\n"`
//! and `"Fire"` are the same command while `"fire"` is not a command at
//! all.

use std::fmt;

/// Every action the command listener can react to.
///
/// Commands are produced by [`CommandSource`](crate::traits::CommandSource)
/// implementations and consumed by the
/// [`EffectDispatcher`](crate::dispatcher::EffectDispatcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Trigger the fire-spell animation.  Wire literal: `Fire`.
    CastFire,

    /// Trigger the water-spell animation.  Wire literal: `Water`.
    CastWater,

    /// Trigger the earth-spell animation.  Wire literal: `Earth`.
    CastEarth,

    /// The player has been defeated.  Wire literal: `PlayerDead`.
    PlayerDead,

    /// The mage has been defeated — the player won.  Wire literal:
    /// `MageDead`.
    MageDead,
}

impl Command {
    /// The full recognized set, in wire order.
    ///
    /// Anything that parses comes from this list; tests iterate it to keep
    /// the parse table and the dispatcher exhaustive.
    pub const ALL: [Command; 5] = [
        Command::CastFire,
        Command::CastWater,
        Command::CastEarth,
        Command::PlayerDead,
        Command::MageDead,
    ];

    /// Parse a raw payload into a command.
    ///
    /// The payload is trimmed of surrounding whitespace and compared
    /// case-sensitively against the recognized literals.  Returns `None`
    /// for anything else — an empty message, unknown text, or garbage.
    /// The caller decides what "not a command" means (the listener logs
    /// and drops it).
    pub fn parse(payload: &str) -> Option<Command> {
        match payload.trim() {
            "Fire" => Some(Command::CastFire),
            "Water" => Some(Command::CastWater),
            "Earth" => Some(Command::CastEarth),
            "PlayerDead" => Some(Command::PlayerDead),
            "MageDead" => Some(Command::MageDead),
            _ => None,
        }
    }

    /// The literal this command is spelled as on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Command::CastFire => "Fire",
            Command::CastWater => "Water",
            Command::CastEarth => "Earth",
            Command::PlayerDead => "PlayerDead",
            Command::MageDead => "MageDead",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_literals_parse() {
        assert_eq!(Command::parse("Fire"), Some(Command::CastFire));
        assert_eq!(Command::parse("Water"), Some(Command::CastWater));
        assert_eq!(Command::parse("Earth"), Some(Command::CastEarth));
        assert_eq!(Command::parse("PlayerDead"), Some(Command::PlayerDead));
        assert_eq!(Command::parse("MageDead"), Some(Command::MageDead));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(Command::parse(" Fire\n"), Some(Command::CastFire));
        assert_eq!(Command::parse("\tWater "), Some(Command::CastWater));
        assert_eq!(Command::parse("  MageDead\r\n"), Some(Command::MageDead));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Command::parse("fire"), None);
        assert_eq!(Command::parse("FIRE"), None);
        assert_eq!(Command::parse("playerdead"), None);
    }

    #[test]
    fn unknown_and_empty_payloads_do_not_parse() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("Unknown"), None);
        assert_eq!(Command::parse("Fire Water"), None);
        assert_eq!(Command::parse("Fireball"), None);
    }

    #[test]
    fn interior_whitespace_is_not_trimmed() {
        // Only surrounding whitespace is forgiven.
        assert_eq!(Command::parse("Player Dead"), None);
        assert_eq!(Command::parse("Fi re"), None);
    }

    #[test]
    fn wire_names_round_trip() {
        for cmd in Command::ALL {
            assert_eq!(Command::parse(cmd.wire_name()), Some(cmd));
            assert_eq!(cmd.to_string(), cmd.wire_name());
        }
    }

    #[test]
    fn recognized_set_is_exactly_five() {
        assert_eq!(Command::ALL.len(), 5);
    }
}
