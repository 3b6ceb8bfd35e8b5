//! **spellgate** — a UDP command listener for the wizard duel client.
//!
//! The duel client sends spell commands as bare UTF-8 text datagrams
//! (`Fire`, `Water`, `Earth`) plus two terminal-state messages
//! (`PlayerDead`, `MageDead`).  spellgate receives them on a configured
//! port, parses them into a closed [`command::Command`] vocabulary, and
//! invokes the matching effect on the embedding game client.
//!
//! # Architecture
//!
//! The crate is organised around two core traits:
//!
//! * [`traits::SpellEffects`] — abstracts the game client (animation
//!   triggers and terminal-state notifications) so the dispatch logic is
//!   not coupled to any specific engine or presentation layer.
//! * [`traits::CommandSource`] — abstracts the transport that delivers
//!   commands (a UDP socket, a test harness, …) so the main loop is not
//!   coupled to any specific mechanism.
//!
//! Concrete implementations live in [`net`] (UDP listener); the
//! [`dispatcher::EffectDispatcher`] sits between the two traits.  Sources
//! run on their own threads and forward commands over an
//! [`mpsc`](std::sync::mpsc) channel, so a slow effect can never delay
//! the next receive.

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod net;
pub mod traits;
