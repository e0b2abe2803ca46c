// FoxBr platform paths for Linux
// Config: ~/.config/foxbr

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for FoxBr on Linux.
/// Uses `$XDG_CONFIG_HOME/foxbr` if set, otherwise `~/.config/foxbr`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("foxbr"),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("foxbr")
        }
    }
}
