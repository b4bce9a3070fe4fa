//! Random solvable puzzles
//!
//! Binds `base` random letters to the digits, draws random summand numbers, adds them and
//! spells everything back in letters. The planted assignment always solves the result.

use crate::core::{MAX_LEN, Puzzle, PuzzleError, Solution, Word};
use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::RangeInclusive;

/// Shape of generated puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleShape {
    pub base: u8,
    pub summands: RangeInclusive<usize>,
    pub summand_len: RangeInclusive<usize>,
}

impl Default for PuzzleShape {
    fn default() -> Self {
        Self {
            base: 10,
            summands: 2..=3,
            summand_len: 2..=5,
        }
    }
}

/// A generated puzzle and the assignment it was built from
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    pub puzzle: Puzzle,
    pub planted: Solution,
}

/// Generate a puzzle with at least one solution
///
/// # Errors
/// Returns `PuzzleError` if the shape asks for an invalid base, zero summands, or words that
/// could exceed `MAX_LEN` once summed.
pub fn random_puzzle<R: Rng + ?Sized>(
    rng: &mut R,
    shape: &PuzzleShape,
) -> Result<GeneratedPuzzle, PuzzleError> {
    crate::core::validate_base(shape.base)?;
    if *shape.summands.start() == 0 || shape.summands.is_empty() {
        return Err(PuzzleError::NoSummands);
    }
    if *shape.summand_len.start() == 0 || *shape.summand_len.end() + 2 > MAX_LEN {
        return Err(PuzzleError::Malformed(format!(
            "summand lengths {:?}",
            shape.summand_len
        )));
    }

    let base = shape.base;
    let mut alphabet: Vec<u8> = (b'A'..=b'Z').collect();
    alphabet.shuffle(rng);
    // alphabet[d] spells digit d
    alphabet.truncate(usize::from(base));

    let count = rng.random_range(shape.summands.clone());
    let numbers: Vec<Vec<u8>> = (0..count)
        .map(|_| {
            let len = rng.random_range(shape.summand_len.clone());
            let mut digits = Vec::with_capacity(len);
            digits.push(rng.random_range(1..base));
            digits.extend((1..len).map(|_| rng.random_range(0..base)));
            digits
        })
        .collect();

    let total = add_digits(&numbers, base);
    let spell = |digits: &[u8]| {
        let text: String = digits
            .iter()
            .map(|&d| alphabet[usize::from(d)] as char)
            .collect();
        Word::new(text)
    };

    let summands = numbers
        .iter()
        .map(|n| spell(n))
        .collect::<Result<Vec<_>, _>>()?;
    let sum = spell(&total)?;
    let puzzle = Puzzle::new(summands, sum, base)?;

    let mask = puzzle.letter_mask();
    let planted = Solution::new(
        alphabet
            .iter()
            .enumerate()
            .filter(|&(_, &letter)| mask & (1 << (letter - b'A')) != 0)
            .map(|(digit, &letter)| (letter, digit as u8))
            .collect(),
    );

    Ok(GeneratedPuzzle { puzzle, planted })
}

/// Add most-significant-first digit strings in `base`
fn add_digits(numbers: &[Vec<u8>], base: u8) -> Vec<u8> {
    let base = u32::from(base);
    let width = numbers.iter().map(Vec::len).max().unwrap_or(0);
    let mut reversed = Vec::with_capacity(width + 2);
    let mut carry = 0u32;

    for offset in 0..width {
        let column: u32 = numbers
            .iter()
            .filter_map(|n| n.len().checked_sub(offset + 1).map(|i| u32::from(n[i])))
            .sum::<u32>()
            + carry;
        reversed.push((column % base) as u8);
        carry = column / base;
    }
    while carry > 0 {
        reversed.push((carry % base) as u8);
        carry /= base;
    }

    reversed.reverse();
    reversed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn add_digits_with_carry() {
        assert_eq!(add_digits(&[vec![9, 9], vec![1]], 10), vec![1, 0, 0]);
        assert_eq!(add_digits(&[vec![1], vec![1]], 2), vec![1, 0]);
        assert_eq!(add_digits(&[vec![15], vec![15], vec![15]], 16), vec![2, 13]);
    }

    #[test]
    fn planted_solution_satisfies_puzzle() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let generated = random_puzzle(&mut rng, &PuzzleShape::default()).unwrap();
            assert!(generated.planted.satisfies(&generated.puzzle));
        }
    }

    #[test]
    fn solver_finds_planted_solution() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let generated = random_puzzle(&mut rng, &PuzzleShape::default()).unwrap();
            let (outcome, solutions) = Solver::new(&generated.puzzle).solutions();
            assert!(outcome.solutions >= 1);
            assert!(solutions.contains(&generated.planted));
        }
    }

    #[test]
    fn respects_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let shape = PuzzleShape {
            base: 8,
            summands: 4..=4,
            summand_len: 3..=3,
        };
        let generated = random_puzzle(&mut rng, &shape).unwrap();
        assert_eq!(generated.puzzle.base(), 8);
        assert_eq!(generated.puzzle.summands().len(), 4);
        assert!(generated.puzzle.summands().iter().all(|w| w.len() == 3));
        assert!(generated.puzzle.distinct_letters() <= 8);
    }

    #[test]
    fn rejects_bad_shapes() {
        let mut rng = StdRng::seed_from_u64(0);
        let bad_base = PuzzleShape {
            base: 40,
            ..PuzzleShape::default()
        };
        assert!(random_puzzle(&mut rng, &bad_base).is_err());

        let too_long = PuzzleShape {
            summand_len: 2..=15,
            ..PuzzleShape::default()
        };
        assert!(random_puzzle(&mut rng, &too_long).is_err());
    }
}
