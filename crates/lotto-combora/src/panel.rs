use std::collections::HashSet;
use std::fmt::Display;
use std::ops::RangeInclusive;

use console::style;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LottoError, Result};
use crate::picker;

pub const MIN_NUMBER: i32 = 1;
pub const MAX_NUMBER: i32 = 50;
/// Numbers per panel, also the size of a quick pick and of a winning set
pub const MAX_NUMBERS: usize = 6;

const NUMBER_RANGE: RangeInclusive<i32> = MIN_NUMBER..=MAX_NUMBER;

/// One bet line: up to six distinct numbers in 1-50
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct Panel {
    numbers: Vec<i32>,
}

/// Check a caller supplied selection.
///
/// Checks run in order: range, duplicates, count.
pub fn validate_numbers(numbers: &[i32]) -> Result<()> {
    if let Some(&n) = numbers.iter().find(|&&n| !NUMBER_RANGE.contains(&n)) {
        return Err(LottoError::OutOfRange(n));
    }

    let mut seen = HashSet::with_capacity(numbers.len());
    if let Some(&n) = numbers.iter().find(|&&n| !seen.insert(n)) {
        return Err(LottoError::DuplicateValue(n));
    }

    if numbers.len() > MAX_NUMBERS {
        return Err(LottoError::TooManyNumbers(numbers.len()));
    }

    Ok(())
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_numbers(numbers: impl AsRef<[i32]>) -> Result<Self> {
        let numbers = numbers.as_ref();
        validate_numbers(numbers)?;
        Ok(Self {
            numbers: numbers.to_vec(),
        })
    }

    /// Replace the numbers with a random selection of six
    pub fn select_quick_pick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.numbers = picker::sample(rng, MAX_NUMBERS);
    }

    /// Replace the numbers with a caller supplied selection.
    ///
    /// On error the panel keeps its previous numbers.
    pub fn select_user_numbers(&mut self, numbers: impl AsRef<[i32]>) -> Result<()> {
        let numbers = numbers.as_ref();
        validate_numbers(numbers)?;
        self.numbers = numbers.to_vec();
        Ok(())
    }

    /// True if at least one number is also in `winning_numbers`.
    ///
    /// An empty winning set never matches.
    pub fn has_winning_numbers(&self, winning_numbers: &[i32]) -> bool {
        self.numbers.iter().any(|n| winning_numbers.contains(n))
    }

    /// Count of numbers shared with `winning_numbers`
    pub fn matches(&self, winning_numbers: &[i32]) -> usize {
        self.numbers
            .iter()
            .filter(|n| winning_numbers.contains(n))
            .count()
    }

    pub fn numbers(&self) -> &[i32] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl TryFrom<Vec<i32>> for Panel {
    type Error = LottoError;

    fn try_from(numbers: Vec<i32>) -> Result<Self> {
        validate_numbers(&numbers)?;
        Ok(Self { numbers })
    }
}

impl From<Panel> for Vec<i32> {
    fn from(panel: Panel) -> Self {
        panel.numbers
    }
}

impl Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.numbers.is_empty() {
            return write!(f, "-");
        }

        let mut sorted = self.numbers.clone();
        sorted.sort_unstable();
        write!(
            f,
            "{}",
            style(
                sorted
                    .iter()
                    .map(|n| format!("{n:>2}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            )
            .red()
            .bold()
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_empty_panel() {
        let panel = Panel::new();
        assert!(panel.is_empty());
        assert_eq!(panel.numbers(), &[] as &[i32]);
    }

    #[test]
    fn test_valid_numbers_round_trip() {
        for numbers in [vec![], vec![50], vec![6, 1, 44, 23], vec![1, 2, 3, 4, 5, 6]] {
            let panel = Panel::with_numbers(&numbers).unwrap();
            assert_eq!(panel.numbers(), numbers.as_slice());
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            Panel::with_numbers([1, 2, 51]),
            Err(LottoError::OutOfRange(51))
        );
        assert_eq!(Panel::with_numbers([0]), Err(LottoError::OutOfRange(0)));
        assert_eq!(
            Panel::with_numbers([-3, 4]),
            Err(LottoError::OutOfRange(-3))
        );
    }

    #[test]
    fn test_duplicate_value() {
        assert_eq!(
            Panel::with_numbers([4, 9, 4]),
            Err(LottoError::DuplicateValue(4))
        );
        // duplicates are reported before the count check
        assert_eq!(
            Panel::with_numbers([1, 1, 2, 3, 4, 5, 6]),
            Err(LottoError::DuplicateValue(1))
        );
    }

    #[test]
    fn test_too_many_numbers() {
        assert_eq!(
            Panel::with_numbers([1, 2, 3, 4, 5, 6, 7]),
            Err(LottoError::TooManyNumbers(7))
        );
        let mut panel = Panel::new();
        assert_eq!(
            panel.select_user_numbers((1..=12).collect::<Vec<_>>()),
            Err(LottoError::TooManyNumbers(12))
        );
    }

    #[test]
    fn test_failed_selection_keeps_numbers() {
        let mut panel = Panel::with_numbers([3, 5, 7]).unwrap();
        assert!(panel.select_user_numbers([3, 3]).is_err());
        assert_eq!(panel.numbers(), &[3, 5, 7]);

        panel.select_user_numbers([10, 20]).unwrap();
        assert_eq!(panel.numbers(), &[10, 20]);
    }

    #[test]
    fn test_quick_pick() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut panel = Panel::with_numbers([1]).unwrap();
        for _ in 0..200 {
            panel.select_quick_pick(&mut rng);
            assert_eq!(panel.len(), MAX_NUMBERS);
            assert!(validate_numbers(panel.numbers()).is_ok());
        }
    }

    #[test]
    fn test_has_winning_numbers() {
        let panel = Panel::with_numbers([1, 2, 3, 4, 5, 6]).unwrap();
        assert!(panel.has_winning_numbers(&[6, 10, 20, 30, 40, 50]));
        assert!(!panel.has_winning_numbers(&[7, 8, 9, 10, 11, 12]));
        assert!(!panel.has_winning_numbers(&[]));
        assert!(!Panel::new().has_winning_numbers(&[1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_matches() {
        let panel = Panel::with_numbers([1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(panel.matches(&[1, 3, 5, 7, 9, 11]), 3);
        assert_eq!(panel.matches(&[40, 41]), 0);
    }

    #[test]
    fn test_display() {
        console::set_colors_enabled(false);
        let panel = Panel::with_numbers([23, 4, 17]).unwrap();
        assert_eq!(panel.to_string(), " 4 17 23");
        assert_eq!(Panel::new().to_string(), "-");
    }

    #[test]
    fn test_deserialize_validates() {
        let panel: Panel = serde_json::from_str("[5, 10, 15]").unwrap();
        assert_eq!(panel.numbers(), &[5, 10, 15]);
        assert_eq!(serde_json::to_string(&panel).unwrap(), "[5,10,15]");

        assert!(serde_json::from_str::<Panel>("[5, 5]").is_err());
        assert!(serde_json::from_str::<Panel>("[99]").is_err());
    }
}
