use std::str::FromStr;

use rand::Rng;

use crate::error::{LottoError, Result};
use crate::panel::Panel;

/// Keyword accepted in place of numbers
pub const QUICK_PICK_KEYWORD: &str = "quick pick";

/// How a player filled in one panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    QuickPick,
    Numbers(Vec<i32>),
}

impl FromStr for Selection {
    type Err = LottoError;

    /// Parse one input line.
    ///
    /// Only the syntax is checked here, range and duplicates are checked by
    /// the panel.
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            return Err(LottoError::NullArgument);
        }
        if line.split_whitespace().collect::<Vec<_>>().join(" ") == QUICK_PICK_KEYWORD {
            return Ok(Self::QuickPick);
        }

        line.split_whitespace()
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|_e| LottoError::InvalidNumber(token.to_owned()))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::Numbers)
    }
}

impl Selection {
    /// Apply the selection to `panel`, validating user numbers
    pub fn apply<R: Rng + ?Sized>(self, panel: &mut Panel, rng: &mut R) -> Result<()> {
        match self {
            Self::QuickPick => {
                panel.select_quick_pick(rng);
                Ok(())
            }
            Self::Numbers(numbers) => panel.select_user_numbers(numbers),
        }
    }
}
