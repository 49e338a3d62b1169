use std::fmt::Display;

use console::style;
use lotto_combora::{Panel, Ticket};
use serde::Serialize;

pub const CURRENCY: &str = "Euro";

/// Outcome of checking one ticket against a draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawReport {
    pub panels: Vec<Panel>,
    pub winning_numbers: Vec<i32>,
    /// Zero-based indices of the panels with at least one match
    pub winning_panels: Vec<usize>,
    /// Numbers each panel shares with the draw, in panel order
    pub matches: Vec<usize>,
    pub has_winning_panel: bool,
    pub cost: u32,
}

impl DrawReport {
    pub fn new(ticket: &Ticket, winning_numbers: Vec<i32>) -> Self {
        Self {
            panels: ticket.panels().to_vec(),
            winning_panels: ticket.winning_panels(&winning_numbers),
            matches: ticket
                .panels()
                .iter()
                .map(|panel| panel.matches(&winning_numbers))
                .collect(),
            has_winning_panel: ticket.has_winning_panel(&winning_numbers),
            cost: ticket.cost(),
            winning_numbers,
        }
    }
}

impl Display for DrawReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, panel) in self.panels.iter().enumerate() {
            let marker = if self.winning_panels.contains(&index) {
                "*"
            } else {
                " "
            };
            let matched = self.matches.get(index).copied().unwrap_or_default();
            writeln!(
                f,
                "{marker} Panel {}: {panel} ({matched} matched)",
                index + 1
            )?;
        }

        let mut winning = self.winning_numbers.clone();
        winning.sort_unstable();
        writeln!(
            f,
            "Winning numbers: {}",
            style(
                winning
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            )
            .blue()
            .bold()
        )?;

        if self.has_winning_panel {
            writeln!(f, "Congratulations! You have a winning panel.")?;
        } else {
            writeln!(f, "Better luck next time! No winning panels found.")?;
        }
        write!(f, "The cost of the ticket is: {} {CURRENCY}.", self.cost)
    }
}
