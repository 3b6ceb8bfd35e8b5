//! Network listener that accepts commands over UDP.
//!
//! The duel client (gesture recognizer, test scripts, etc.) sends bare
//! UTF-8 text datagrams to the configured port.

pub mod listener;
