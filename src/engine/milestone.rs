/// Cadence of the two independent thresholds over the correct-answer count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MilestoneSteps {
    pub motivational: u32,
    pub persisted: u32,
}

impl Default for MilestoneSteps {
    fn default() -> Self {
        Self {
            motivational: 5,
            persisted: 50,
        }
    }
}

/// Last thresholds reached. Both only ever move up within a session;
/// `last_persisted` is seeded from the achievement log at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MilestoneState {
    pub last_motivational: u32,
    pub last_persisted: u32,
}

impl MilestoneState {
    pub fn resumed(last_persisted: u32) -> Self {
        Self {
            last_motivational: 0,
            last_persisted,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Raw correct count when a motivational threshold was crossed.
    pub motivational: Option<u32>,
    /// The new persisted milestone (a multiple of the persisted step).
    pub persisted: Option<u32>,
    pub state: MilestoneState,
}

impl Evaluation {
    pub fn fired(&self) -> bool {
        self.motivational.is_some() || self.persisted.is_some()
    }
}

fn floor_to_step(count: u32, step: u32) -> u32 {
    let step = step.max(1);
    count / step * step
}

pub fn evaluate(correct_count: u32, state: MilestoneState, steps: MilestoneSteps) -> Evaluation {
    let mut next = state;

    let m5 = floor_to_step(correct_count, steps.motivational);
    let motivational = if m5 > state.last_motivational && m5 >= steps.motivational.max(1) {
        next.last_motivational = m5;
        Some(correct_count)
    } else {
        None
    };

    let m50 = floor_to_step(correct_count, steps.persisted);
    let persisted = if m50 > state.last_persisted && m50 >= steps.persisted.max(1) {
        next.last_persisted = m50;
        Some(m50)
    } else {
        None
    };

    Evaluation {
        motivational,
        persisted,
        state: next,
    }
}
