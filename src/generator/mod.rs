pub mod arithmetic;
pub mod problem;
pub mod queue;

use rand::Rng;

use crate::generator::problem::{Mode, Problem};

/// Anything that can hand out drill problems. The session only talks to
/// this trait so tests can script exact problem sequences.
pub trait ProblemSource {
    fn generate(&mut self, mode: Mode) -> Problem;
}

/// Uniform random problems over the 2..=12 x 1..=12 fact table.
pub struct RandomProblems<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomProblems<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ProblemSource for RandomProblems<R> {
    fn generate(&mut self, mode: Mode) -> Problem {
        arithmetic::generate(mode, &mut self.rng)
    }
}

#[cfg(test)]
pub mod test_support {
    use std::collections::VecDeque;

    use super::ProblemSource;
    use crate::generator::problem::{Mode, Problem};

    /// Replays a fixed list of problems, ignoring the requested mode.
    pub struct ScriptedProblems {
        script: VecDeque<Problem>,
        repeat: bool,
        generated: usize,
    }

    impl ScriptedProblems {
        pub fn new(problems: Vec<Problem>) -> Self {
            Self {
                script: problems.into(),
                repeat: false,
                generated: 0,
            }
        }

        /// Loop over `problems` forever.
        pub fn cycle(problems: Vec<Problem>) -> Self {
            Self {
                repeat: true,
                ..Self::new(problems)
            }
        }

        pub fn generated(&self) -> usize {
            self.generated
        }
    }

    impl ProblemSource for ScriptedProblems {
        fn generate(&mut self, _mode: Mode) -> Problem {
            let problem = self
                .script
                .pop_front()
                .unwrap_or_else(|| panic!("script exhausted after {} problems", self.generated));
            if self.repeat {
                self.script.push_back(problem.clone());
            }
            self.generated += 1;
            problem
        }
    }
}
