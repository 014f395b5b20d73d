//! Configuration file model and loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;
use crate::error::CatalogError;
use crate::hangman::{Difficulty, WordList};
use crate::unit::{Catalog, Unit, DEFAULT_MAX_QUANTITY, DEFAULT_MIN_QUANTITY};

/// Top-level unitdrill configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitdrillConfig {
    #[serde(default)]
    pub quiz: QuizSettings,
    #[serde(default)]
    pub hangman: HangmanSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Fixed seed for every random source (reproducible runs).
    #[serde(default)]
    pub seed: Option<u64>,
}

/// `[quiz]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSettings {
    #[serde(default = "default_min_quantity")]
    pub min_quantity: u32,
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,
    /// Measure labels; empty means the metric defaults.
    #[serde(default)]
    pub measures: Vec<String>,
    /// Unit catalog; empty means the metric prefixes.
    #[serde(default)]
    pub units: Vec<UnitDefinition>,
}

/// One `[[quiz.units]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    #[serde(default)]
    pub name: String,
    pub scale: Decimal,
}

fn default_min_quantity() -> u32 {
    DEFAULT_MIN_QUANTITY
}
fn default_max_quantity() -> u32 {
    DEFAULT_MAX_QUANTITY
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            min_quantity: default_min_quantity(),
            max_quantity: default_max_quantity(),
            measures: Vec::new(),
            units: Vec::new(),
        }
    }
}

/// `[hangman]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HangmanSettings {
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Word list; empty means the built-in words.
    #[serde(default)]
    pub words: Vec<String>,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file; interactive commands log nowhere without one.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

impl UnitdrillConfig {
    /// Build the validated unit catalog described by `[quiz]`.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        let quiz = &self.quiz;
        let metric = Catalog::metric();

        let units = if quiz.units.is_empty() {
            metric.units().to_vec()
        } else {
            quiz.units
                .iter()
                .map(|u| Unit::new(u.name.clone(), u.scale.clone()))
                .collect::<Result<Vec<_>, _>>()?
        };

        let measures = if quiz.measures.is_empty() {
            metric.measures().to_vec()
        } else {
            quiz.measures.clone()
        };

        Catalog::new(units, measures, quiz.min_quantity, quiz.max_quantity)
    }

    /// The word list described by `[hangman]`.
    pub fn word_list(&self) -> Result<WordList, CatalogError> {
        if self.hangman.words.is_empty() {
            Ok(WordList::default())
        } else {
            WordList::new(&self.hangman.words)
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `unitdrill.toml` in the current directory
/// 2. `~/.config/unitdrill/config.toml`
///
/// Environment variable overrides: `UNITDRILL_LOG_FILE`, `UNITDRILL_SEED`.
pub fn load_config() -> Result<UnitdrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<UnitdrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("unitdrill.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config_file(&path)?
        }
        None => UnitdrillConfig::default(),
    };

    if let Ok(file) = std::env::var("UNITDRILL_LOG_FILE") {
        if !file.is_empty() {
            config.logging.file = Some(PathBuf::from(file));
        }
    }

    if let Ok(seed) = std::env::var("UNITDRILL_SEED") {
        config.seed = Some(
            seed.trim()
                .parse()
                .with_context(|| format!("UNITDRILL_SEED is not a number: {seed}"))?,
        );
    }

    Ok(config)
}

/// Read and parse one config file.
pub fn parse_config_file(path: &Path) -> Result<UnitdrillConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config_str(&content, path)
}

/// Parse a TOML string (useful for testing).
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<UnitdrillConfig> {
    toml::from_str(content)
        .with_context(|| format!("failed to parse config: {}", source_path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("unitdrill"))
}

/// A warning from config validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The config section the warning refers to.
    pub section: &'static str,
    /// Warning message.
    pub message: String,
}

/// Validate a config for problems that would stop a game from starting or
/// make it odd to play.
pub fn validate_config(config: &UnitdrillConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if let Err(e) = config.catalog() {
        warnings.push(ValidationWarning {
            section: "quiz",
            message: e.to_string(),
        });
    }

    // A catalog without a standard unit still works, but the legend then
    // lists every unit and conversions never pass through a bare measure.
    if !config.quiz.units.is_empty() && !config.quiz.units.iter().any(|u| u.name.is_empty()) {
        warnings.push(ValidationWarning {
            section: "quiz",
            message: "no standard unit (empty name) in quiz.units".into(),
        });
    }

    let mut seen = std::collections::HashSet::new();
    for measure in &config.quiz.measures {
        if measure.trim().is_empty() {
            warnings.push(ValidationWarning {
                section: "quiz",
                message: "blank measure label".into(),
            });
        } else if !seen.insert(measure) {
            warnings.push(ValidationWarning {
                section: "quiz",
                message: format!("duplicate measure label: {measure}"),
            });
        }
    }

    if !config.hangman.words.is_empty() {
        if let Err(e) = config.word_list() {
            warnings.push(ValidationWarning {
                section: "hangman",
                message: e.to_string(),
            });
        }
        for word in &config.hangman.words {
            if !word.trim().is_empty() && !word.chars().any(char::is_alphabetic) {
                warnings.push(ValidationWarning {
                    section: "hangman",
                    message: format!("word has no letters to guess: {word:?}"),
                });
            }
        }
    }

    warnings
}
