//! Entry point for the **spellgate** daemon.
//!
//! Binds the UDP command listener, spawns it on a background thread, and
//! processes incoming commands on the main thread until the listener
//! stops.  Ctrl-C (or SIGTERM delivered as a ctrl-c signal) invokes
//! [`StopHandle::stop`](spellgate::net::listener::StopHandle::stop), the
//! receive loop exits, the command channel closes, and the daemon exits.
//!
//! The standalone daemon has no game engine to drive, so it dispatches
//! into the log-only [`LogEffects`](log_effects::LogEffects) stand-in; a
//! real game client embeds the library crate and supplies its own
//! [`SpellEffects`](spellgate::traits::SpellEffects) implementation.

use log::{error, info};
use spellgate::command::Command;
use spellgate::config::Config;
use spellgate::dispatcher::EffectDispatcher;
use spellgate::net::listener::UdpCommandListener;
use spellgate::traits::CommandSource;
use std::sync::mpsc;

/// Resolve the config directory (`$XDG_CONFIG_HOME/spellgate`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("spellgate")
}

/// Try to load the config from `$XDG_CONFIG_HOME/spellgate/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

//  Log-only game client stand-in

mod log_effects {
    use log::info;
    use spellgate::traits::SpellEffects;

    /// Stand-in backend that only writes to the terminal log.
    pub struct LogEffects;

    #[derive(Debug, thiserror::Error)]
    #[error("log backend")]
    pub struct LogEffectsError;

    impl SpellEffects for LogEffects {
        type Error = LogEffectsError;

        fn cast_fire(&self) -> Result<(), LogEffectsError> {
            info!("animation trigger: CastFire");
            Ok(())
        }

        fn cast_water(&self) -> Result<(), LogEffectsError> {
            info!("animation trigger: CastWater");
            Ok(())
        }

        fn cast_earth(&self) -> Result<(), LogEffectsError> {
            info!("animation trigger: CastEarth");
            Ok(())
        }

        // The dispatcher already writes the "player lost" / "player won"
        // terminal lines; there is nothing further for a log backend to do.
        fn player_dead(&self) -> Result<(), LogEffectsError> {
            Ok(())
        }

        fn mage_dead(&self) -> Result<(), LogEffectsError> {
            Ok(())
        }
    }
}

use log_effects::LogEffects;

//  Main

fn main() {
    env_logger::init();

    let config = load_config();

    // A bind failure is fatal: never run without a functioning listener.
    let listener = match UdpCommandListener::bind(config.listener.port) {
        Ok(l) => l,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let stop = listener.stop_handle();
    if let Err(e) = ctrlc::set_handler(move || stop.stop()) {
        error!("failed to install shutdown handler: {}", e);
        std::process::exit(1);
    }

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    spawn_listener(listener, cmd_tx);

    let mut dispatcher = EffectDispatcher::new(LogEffects);

    info!("spellgate running");
    for cmd in cmd_rx {
        if let Err(e) = dispatcher.handle(cmd) {
            error!("command error: {}", e);
        }
    }
    info!("command listener stopped, exiting");
}

//  Helpers

fn spawn_listener(mut listener: UdpCommandListener, tx: mpsc::Sender<Command>) {
    std::thread::spawn(move || {
        if let Err(e) = listener.run(tx) {
            error!("udp listener error: {}", e);
        }
    });
}
