pub const CORRECT: &str = "\u{1f389} Correct! Great job!";
pub const INVALID_INPUT: &str = "Please enter a number!";
pub const NO_ACHIEVEMENTS: &str = "No achievements yet. Get 50 correct answers to earn one!";

const CHEERS: &[&str] = &[
    "You're on fire!",
    "Keep it up!",
    "Math superstar!",
    "Amazing streak!",
    "Unstoppable!",
    "Brilliant work!",
];

pub fn correct_with_achievement(milestone: u32) -> String {
    format!("\u{1f389} Correct! \u{1f3c6} Achievement Unlocked: {milestone} Correct Answers!")
}

pub fn incorrect(expected: u32) -> String {
    format!("\u{274c} Incorrect. The answer is {expected}")
}

/// Cheer shown every few correct answers. Cycles through the list so
/// consecutive cheers differ.
pub fn motivational(correct_count: u32, step: u32) -> String {
    let index = (correct_count / step.max(1)).saturating_sub(1) as usize % CHEERS.len();
    format!("\u{2b50} {correct_count} correct! {}", CHEERS[index])
}

pub fn no_achievements(step: u32) -> String {
    if step == 50 {
        NO_ACHIEVEMENTS.to_string()
    } else {
        format!("No achievements yet. Get {step} correct answers to earn one!")
    }
}
