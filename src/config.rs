use crate::consts;
use crate::game::{Grid, SpeedRamp};
use crate::highscore::{HighScoreFile, HighScoreStore, MemoryStore};
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Size of the board and pace of the game
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,

    /// Colors & attributes of things drawn on the board
    #[serde(default)]
    pub(crate) styles: Styles,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Construct the store in which the high score should be kept.
    ///
    /// If `self.files.save_high_score` is `false`, or if no path is configured
    /// and the default path cannot be computed, the high score is kept in
    /// memory only.
    pub(crate) fn high_score_store(&self) -> Box<dyn HighScoreStore> {
        if !self.files.save_high_score {
            return Box::new(MemoryStore::new());
        }
        let path = self
            .files
            .high_score_file
            .clone()
            .or_else(FileConfig::default_high_score_file);
        if let Some(p) = path {
            let file = HighScoreFile::new(p);
            tracing::debug!(path = %file.path().display(), "Keeping high score on disk");
            Box::new(file)
        } else {
            tracing::warn!(
                "Failed to determine path to local data directory; high score will not be saved"
            );
            Box::new(MemoryStore::new())
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    pub(crate) grid: Grid,
    pub(crate) speed: SpeedRamp,
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    grid_size: u16,
    initial_interval_ms: u64,
    interval_step_ms: u64,
    min_interval_ms: u64,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        let speed = SpeedRamp::default();
        RawGameConfig {
            grid_size: consts::GRID_SIZE,
            initial_interval_ms: millis(speed.initial),
            interval_step_ms: millis(speed.step),
            min_interval_ms: millis(speed.floor),
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = InvalidGameConfig;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, InvalidGameConfig> {
        if !(consts::MIN_GRID_SIZE..=consts::MAX_GRID_SIZE).contains(&value.grid_size) {
            return Err(InvalidGameConfig::GridSize(value.grid_size));
        }
        if value.initial_interval_ms == 0 || value.min_interval_ms == 0 {
            return Err(InvalidGameConfig::ZeroInterval);
        }
        if value.min_interval_ms > value.initial_interval_ms {
            return Err(InvalidGameConfig::FloorAboveInitial {
                floor: value.min_interval_ms,
                initial: value.initial_interval_ms,
            });
        }
        Ok(GameConfig {
            grid: Grid::new(value.grid_size),
            speed: SpeedRamp {
                initial: Duration::from_millis(value.initial_interval_ms),
                step: Duration::from_millis(value.interval_step_ms),
                floor: Duration::from_millis(value.min_interval_ms),
            },
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidGameConfig {
    #[error(
        "grid-size must be between {min} and {max}; got {0}",
        min = consts::MIN_GRID_SIZE,
        max = consts::MAX_GRID_SIZE
    )]
    GridSize(u16),
    #[error("tick intervals must be nonzero")]
    ZeroInterval,
    #[error("min-interval-ms ({floor}) must not exceed initial-interval-ms ({initial})")]
    FloorAboveInitial { floor: u64, initial: u64 },
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    save_high_score: bool,
}

impl FileConfig {
    fn default_high_score_file() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscore.json"))
    }
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    high_score_file: Option<String>,
    save_high_score: bool,
}

impl Default for RawFileConfig {
    fn default() -> RawFileConfig {
        RawFileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

impl From<RawFileConfig> for FileConfig {
    fn from(value: RawFileConfig) -> FileConfig {
        FileConfig {
            high_score_file: value.high_score_file.map(expand_tilde),
            save_high_score: value.save_high_score,
        }
    }
}

/// Replace a leading `~/` in `path` with the user's home directory, if that
/// can be determined
fn expand_tilde(path: String) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(from = "RawStyles")]
pub(crate) struct Styles {
    pub(crate) snake: Style,
    pub(crate) food: Style,
}

impl Default for Styles {
    fn default() -> Styles {
        Styles {
            snake: consts::SNAKE_STYLE,
            food: consts::FOOD_STYLE,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default)]
#[serde(default)]
struct RawStyles {
    snake: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
}

impl From<RawStyles> for Styles {
    fn from(value: RawStyles) -> Styles {
        let defaults = Styles::default();
        Styles {
            snake: value.snake.map_or(defaults.snake, Style::from),
            food: value.food.map_or(defaults.food, Style::from),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty_config() {
        let cfg = toml::from_str::<Config>("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.game.grid, Grid::new(20));
        assert_eq!(cfg.game.speed, SpeedRamp::default());
        assert!(cfg.files.save_high_score);
        assert_eq!(cfg.files.high_score_file, None);
        assert_eq!(cfg.styles.snake, consts::SNAKE_STYLE);
    }

    #[test]
    fn full_config() {
        let src = concat!(
            "[game]\n",
            "grid-size = 12\n",
            "initial-interval-ms = 300\n",
            "interval-step-ms = 10\n",
            "min-interval-ms = 80\n",
            "\n",
            "[files]\n",
            "high-score-file = \"/var/games/snake.json\"\n",
            "save-high-score = false\n",
            "\n",
            "[styles]\n",
            "snake = \"bold blue\"\n",
            "food = \"yellow\"\n",
        );
        let cfg = toml::from_str::<Config>(src).unwrap();
        assert_eq!(
            cfg.game,
            GameConfig {
                grid: Grid::new(12),
                speed: SpeedRamp {
                    initial: Duration::from_millis(300),
                    step: Duration::from_millis(10),
                    floor: Duration::from_millis(80),
                },
            }
        );
        assert_eq!(
            cfg.files,
            FileConfig {
                high_score_file: Some(PathBuf::from("/var/games/snake.json")),
                save_high_score: false,
            }
        );
        assert_eq!(
            cfg.styles,
            Styles {
                snake: Style::from("bold blue".parse::<parse_style::Style>().unwrap()),
                food: Style::from("yellow".parse::<parse_style::Style>().unwrap()),
            }
        );
        assert_ne!(cfg.styles.snake, Styles::default().snake);
    }

    #[test]
    fn invalid_game_config_messages() {
        assert_eq!(
            InvalidGameConfig::GridSize(3).to_string(),
            "grid-size must be between 4 and 200; got 3"
        );
        assert_eq!(
            InvalidGameConfig::FloorAboveInitial {
                floor: 80,
                initial: 40
            }
            .to_string(),
            "min-interval-ms (80) must not exceed initial-interval-ms (40)"
        );
    }

    #[test]
    fn partial_game_config() {
        let cfg = toml::from_str::<Config>("[game]\ngrid-size = 30\n").unwrap();
        assert_eq!(cfg.game.grid, Grid::new(30));
        assert_eq!(cfg.game.speed, SpeedRamp::default());
    }

    #[rstest::rstest]
    #[case("[game]\ngrid-size = 3\n")]
    #[case("[game]\ngrid-size = 1000\n")]
    #[case("[game]\ninitial-interval-ms = 0\nmin-interval-ms = 0\n")]
    #[case("[game]\ninitial-interval-ms = 40\n")]
    #[case("[game]\ngrid-size = -5\n")]
    fn invalid_game_config(#[case] src: &str) {
        assert!(toml::from_str::<Config>(src).is_err());
    }

    #[test]
    fn tilde_expansion() {
        let cfg = toml::from_str::<Config>("[files]\nhigh-score-file = \"~/hs.json\"\n").unwrap();
        let expected =
            dirs::home_dir().map_or_else(|| PathBuf::from("~/hs.json"), |h| h.join("hs.json"));
        assert_eq!(cfg.files.high_score_file, Some(expected));
    }

    #[test]
    fn load_missing() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_file() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[game]\ngrid-size = 8\n").unwrap();
        let cfg = Config::load(&path, false).unwrap();
        assert_eq!(cfg.game.grid, Grid::new(8));
    }

    #[test]
    fn load_invalid_file() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[game\n").unwrap();
        assert!(matches!(
            Config::load(&path, true),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn unsaved_high_score_stays_in_memory() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("hs.json");
        let cfg = Config {
            files: FileConfig {
                high_score_file: Some(path.clone()),
                save_high_score: false,
            },
            ..Config::default()
        };
        let mut store = cfg.high_score_store();
        store.save(5).unwrap();
        assert_eq!(store.load().unwrap(), 5);
        assert!(!path.exists());
    }

    #[test]
    fn saved_high_score_goes_to_file() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("hs.json");
        let cfg = Config {
            files: FileConfig {
                high_score_file: Some(path.clone()),
                save_high_score: true,
            },
            ..Config::default()
        };
        let mut store = cfg.high_score_store();
        store.save(5).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "5\n");
    }
}
