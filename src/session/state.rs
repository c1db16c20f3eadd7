use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generator::problem::{Mode, Problem};
use crate::generator::queue::ProblemQueue;

/// Mascot the drill is dressed up as. Recorded on achievements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Panda,
    Squirtle,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Panda => "panda",
            Theme::Squirtle => "squirtle",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Panda => "\u{1f43c}",
            Theme::Squirtle => "\u{1f422}",
        }
    }

    pub fn title(self) -> String {
        match self {
            Theme::Panda => format!("{} Panda Math Practice", self.icon()),
            Theme::Squirtle => format!("{} Squirtle Math Practice", self.icon()),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Panda => Theme::Squirtle,
            Theme::Squirtle => Theme::Panda,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "panda" => Some(Theme::Panda),
            "squirtle" | "turtle" => Some(Theme::Squirtle),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct { message: String },
    Incorrect { message: String },
    InvalidInput { message: String },
}

impl Feedback {
    pub fn message(&self) -> &str {
        match self {
            Feedback::Correct { message }
            | Feedback::Incorrect { message }
            | Feedback::InvalidInput { message } => message,
        }
    }
}

/// Live counters and selections for one sitting. Never persisted.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub mode: Mode,
    pub theme: Theme,
    pub current_problem: Problem,
    /// Lookahead buffer; only ever holds a problem while `fast_mode` is on.
    pub queue: ProblemQueue,
    pub correct_count: u32,
    pub total_count: u32,
    pub fast_mode: bool,
    /// Keypad / typed answer not yet submitted.
    pub input: String,
    /// Per-problem feedback; cleared whenever the problem advances.
    pub feedback: Option<Feedback>,
    /// Set after a graded submit until the deferred advance runs.
    pub awaiting_advance: bool,
}

impl SessionState {
    pub fn new(mode: Mode, theme: Theme, first_problem: Problem) -> Self {
        Self {
            mode,
            theme,
            current_problem: first_problem,
            queue: ProblemQueue::new(),
            correct_count: 0,
            total_count: 0,
            fast_mode: false,
            input: String::new(),
            feedback: None,
            awaiting_advance: false,
        }
    }

    pub fn queued_problem(&self) -> Option<&Problem> {
        self.queue.peek()
    }

    pub fn accuracy(&self) -> f64 {
        if self.total_count == 0 {
            return 100.0;
        }
        self.correct_count as f64 / self.total_count as f64 * 100.0
    }
}
