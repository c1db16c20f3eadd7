use rand::Rng;

use crate::generator::problem::{Mode, Problem};

/// Range of the first factor of a fact. The 1 times table is skipped.
pub const FIRST_FACTOR: std::ops::RangeInclusive<u32> = 2..=12;
pub const SECOND_FACTOR: std::ops::RangeInclusive<u32> = 1..=12;

/// Draw one problem for `mode`.
///
/// Division problems start from a multiplication fact and divide the
/// product by one of its two factors (picked 50/50), so the quotient is
/// always a whole number in `1..=12`.
pub fn generate<R: Rng + ?Sized>(mode: Mode, rng: &mut R) -> Problem {
    let (a, b) = draw_fact(rng);
    match mode {
        Mode::Multiplication => Problem::multiply(a, b),
        Mode::Division => {
            let (divisor, quotient) = if rng.gen_bool(0.5) { (a, b) } else { (b, a) };
            Problem::division_fact(divisor, quotient)
        }
    }
}

fn draw_fact<R: Rng + ?Sized>(rng: &mut R) -> (u32, u32) {
    (rng.gen_range(FIRST_FACTOR), rng.gen_range(SECOND_FACTOR))
}
