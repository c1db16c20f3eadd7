use crate::store::schema::AchievementRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Correct,
    Incorrect,
}

/// Side effects a transition asks the host to carry out. The session never
/// touches timers, sound or the screen itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    PlaySuccessSound,
    Flash(FlashKind),
    ClearFlash,
    ShowMotivation(String),
    HideMotivation,
    Celebrate,
    AchievementUnlocked(AchievementRecord),
    /// Move on to the next problem via `DrillSession::next_problem`.
    AdvanceProblem,
}

/// An effect to run after `delay_ms`. Zero means run immediately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledEffect {
    pub effect: Effect,
    pub delay_ms: u64,
}

impl ScheduledEffect {
    pub fn now(effect: Effect) -> Self {
        Self { effect, delay_ms: 0 }
    }

    pub fn after(delay_ms: u64, effect: Effect) -> Self {
        Self { effect, delay_ms }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct {
        /// Raw correct count when a motivational threshold was crossed.
        motivational: Option<u32>,
        /// Newly persisted milestone, if any.
        persisted: Option<u32>,
    },
    Incorrect {
        expected_answer: u32,
    },
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub outcome: Outcome,
    pub effects: Vec<ScheduledEffect>,
}

impl Transition {
    pub fn has_effect(&self, effect: &Effect) -> bool {
        self.effects.iter().any(|e| &e.effect == effect)
    }

    /// Delay attached to the first matching effect.
    pub fn delay_of(&self, effect: &Effect) -> Option<u64> {
        self.effects
            .iter()
            .find(|e| &e.effect == effect)
            .map(|e| e.delay_ms)
    }
}
