//! Loads the session configuration from a JSON file.
//!
//! Missing sections and keys fall back to defaults, so a file only needs the
//! values it changes. Validation happens when the engine is built.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;

use invaders_core::config::GameConfig;

use crate::error::Result;

/// Read a configuration file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => {
            let file = File::open(path)?;
            let config = from_reader(BufReader::new(file))?;
            info!(path = %path.display(), "loaded configuration");
            Ok(config)
        }
        None => Ok(GameConfig::default()),
    }
}

pub fn from_reader(reader: impl Read) -> Result<GameConfig> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::constants::{ENEMY_BULLET_RADIUS, ENEMY_BULLET_SPEED};

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_reader_overrides_keys() {
        let json = br#"{
            "enemy": { "speed": 3.5, "bullet": { "recoil": 2.0 } },
            "formation": { "rows": 2, "cols": 5 },
            "sim": { "seed": 9 }
        }"#;
        let config = from_reader(&json[..]).unwrap();
        assert_eq!(config.enemy.speed, 3.5);
        assert_eq!(config.enemy.bullet.recoil, 2.0);
        assert_eq!(config.enemy.bullet.speed, ENEMY_BULLET_SPEED);
        assert_eq!(config.enemy.bullet.radius, ENEMY_BULLET_RADIUS);
        assert_eq!(config.formation.rows, 2);
        assert_eq!(config.formation.cols, 5);
        assert_eq!(config.sim.seed, Some(9));
        assert_eq!(config.player, GameConfig::default().player);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let result = from_reader(&b"{ \"window\": 12 }"[..]);
        assert!(matches!(result, Err(crate::error::AppError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_config(Some(Path::new("/definitely/not/here.json")));
        assert!(matches!(result, Err(crate::error::AppError::Io(_))));
    }
}
