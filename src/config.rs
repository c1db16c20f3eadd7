use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::engine::milestone::MilestoneSteps;
use crate::generator::problem::Mode;
use crate::session::state::Theme;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub fast_mode: bool,
    #[serde(default = "default_true")]
    pub sound: bool,
    #[serde(default = "default_true")]
    pub celebrations: bool,
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,
    #[serde(default = "default_fast_advance_delay_ms")]
    pub fast_advance_delay_ms: u64,
    #[serde(default = "default_flash_ms")]
    pub flash_ms: u64,
    #[serde(default = "default_message_ms")]
    pub message_ms: u64,
    #[serde(default = "default_motivational_step")]
    pub motivational_step: u32,
    #[serde(default = "default_achievement_step")]
    pub achievement_step: u32,
}

fn default_true() -> bool {
    true
}
fn default_advance_delay_ms() -> u64 {
    2000
}
fn default_fast_advance_delay_ms() -> u64 {
    300
}
fn default_flash_ms() -> u64 {
    400
}
fn default_message_ms() -> u64 {
    3000
}
fn default_motivational_step() -> u32 {
    5
}
fn default_achievement_step() -> u32 {
    50
}

const MAX_DELAY_MS: u64 = 10_000;

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            mode: Mode::default(),
            fast_mode: false,
            sound: default_true(),
            celebrations: default_true(),
            advance_delay_ms: default_advance_delay_ms(),
            fast_advance_delay_ms: default_fast_advance_delay_ms(),
            flash_ms: default_flash_ms(),
            message_ms: default_message_ms(),
            motivational_step: default_motivational_step(),
            achievement_step: default_achievement_step(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mathdrill")
            .join("config.toml")
    }

    /// Clamp hand-edited values into usable ranges.
    pub fn validate(&mut self) {
        self.advance_delay_ms = self.advance_delay_ms.min(MAX_DELAY_MS);
        self.fast_advance_delay_ms = self.fast_advance_delay_ms.min(MAX_DELAY_MS);
        self.flash_ms = self.flash_ms.min(MAX_DELAY_MS);
        self.message_ms = self.message_ms.clamp(500, MAX_DELAY_MS);
        self.motivational_step = self.motivational_step.max(1);
        self.achievement_step = self.achievement_step.max(1);
    }

    pub fn milestone_steps(&self) -> MilestoneSteps {
        MilestoneSteps {
            motivational: self.motivational_step,
            persisted: self.achievement_step,
        }
    }

    /// Delay between a graded answer and the next problem.
    pub fn advance_delay(&self, fast_mode: bool) -> u64 {
        if fast_mode {
            self.fast_advance_delay_ms
        } else {
            self.advance_delay_ms
        }
    }
}
