use std::fmt::Display;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LottoError, Result};
use crate::panel::Panel;

/// Recommended minimum, enforced by [`Ticket::check`] only
pub const MIN_PANELS: usize = 2;
pub const MAX_PANELS: usize = 8;
pub const COST_PER_PANEL: u32 = 2;

/// A purchasable collection of panels, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Panel>", into = "Vec<Panel>")]
pub struct Ticket {
    panels: Vec<Panel>,
}

impl Ticket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a panel as-is, empty panels included
    pub fn add_panel(&mut self, panel: Panel) -> Result<()> {
        self.ensure_capacity()?;
        self.panels.push(panel);
        Ok(())
    }

    /// Quick pick `panel` and append it.
    ///
    /// Nothing is picked when the ticket is already full.
    pub fn add_quick_pick_panel<R: Rng + ?Sized>(
        &mut self,
        mut panel: Panel,
        rng: &mut R,
    ) -> Result<()> {
        self.ensure_capacity()?;
        panel.select_quick_pick(rng);
        self.panels.push(panel);
        Ok(())
    }

    fn ensure_capacity(&self) -> Result<()> {
        if self.is_full() {
            return Err(LottoError::CapacityExceeded);
        }
        Ok(())
    }

    pub fn has_winning_panel(&self, winning_numbers: &[i32]) -> bool {
        self.panels
            .iter()
            .any(|panel| panel.has_winning_numbers(winning_numbers))
    }

    /// Indices of every panel sharing a number with `winning_numbers`
    pub fn winning_panels(&self, winning_numbers: &[i32]) -> Vec<usize> {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, panel)| panel.has_winning_numbers(winning_numbers))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn cost(&self) -> u32 {
        // len is bounded by MAX_PANELS
        self.panels.len() as u32 * COST_PER_PANEL
    }

    /// Check the ticket holds enough panels to be played
    pub fn check(&self) -> Result<()> {
        if self.panels.len() < MIN_PANELS {
            return Err(LottoError::TooFewPanels(self.panels.len()));
        }
        Ok(())
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.panels.len() >= MAX_PANELS
    }
}

impl TryFrom<Vec<Panel>> for Ticket {
    type Error = LottoError;

    fn try_from(panels: Vec<Panel>) -> Result<Self> {
        if panels.len() > MAX_PANELS {
            return Err(LottoError::CapacityExceeded);
        }
        Ok(Self { panels })
    }
}

impl From<Ticket> for Vec<Panel> {
    fn from(ticket: Ticket) -> Self {
        ticket.panels
    }
}

impl Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.panels
                .iter()
                .enumerate()
                .map(|(index, panel)| format!("Panel {}: {panel}", index + 1))
                .collect::<Vec<_>>()
                .join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    use super::*;

    fn create_test_panel(numbers: &[i32]) -> Panel {
        Panel::with_numbers(numbers).unwrap()
    }

    fn full_ticket() -> Ticket {
        let mut ticket = Ticket::new();
        for i in 0..MAX_PANELS as i32 {
            ticket.add_panel(create_test_panel(&[i + 1])).unwrap();
        }
        ticket
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut ticket = full_ticket();
        assert!(ticket.is_full());

        assert_eq!(
            ticket.add_panel(Panel::new()),
            Err(LottoError::CapacityExceeded)
        );
        assert_eq!(ticket.len(), MAX_PANELS);

        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            ticket.add_quick_pick_panel(Panel::new(), &mut rng),
            Err(LottoError::CapacityExceeded)
        );
        assert_eq!(ticket.len(), MAX_PANELS);
    }

    #[test]
    fn test_cost() {
        let mut ticket = Ticket::new();
        assert_eq!(ticket.cost(), 0);

        ticket.add_panel(Panel::new()).unwrap();
        assert_eq!(ticket.cost(), 2);

        ticket.add_panel(Panel::new()).unwrap();
        ticket.add_panel(Panel::new()).unwrap();
        assert_eq!(ticket.cost(), 6);

        assert_eq!(full_ticket().cost(), 16);
    }

    #[test]
    fn test_add_quick_pick_panel() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut ticket = Ticket::new();
        ticket
            .add_quick_pick_panel(create_test_panel(&[1, 2]), &mut rng)
            .unwrap();
        ticket.add_panel(create_test_panel(&[1, 2])).unwrap();

        assert_eq!(ticket.panels()[0].len(), 6);
        assert_eq!(ticket.panels()[1].numbers(), &[1, 2]);
    }

    #[test]
    fn test_has_winning_panel() {
        let mut ticket = Ticket::new();
        ticket
            .add_panel(create_test_panel(&[40, 41, 42, 43, 44, 45]))
            .unwrap();
        ticket
            .add_panel(create_test_panel(&[1, 2, 3, 4, 5, 6]))
            .unwrap();

        assert!(ticket.has_winning_panel(&[6, 10, 20, 30, 40, 50]));
        assert!(!ticket.has_winning_panel(&[7, 8, 9, 10, 11, 12]));
        assert!(ticket.has_winning_panel(&[3, 8, 9, 10, 11, 12]));
        assert!(!ticket.has_winning_panel(&[]));
        assert!(!Ticket::new().has_winning_panel(&[1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_winning_panels() {
        let mut ticket = Ticket::new();
        ticket.add_panel(create_test_panel(&[1, 2, 3])).unwrap();
        ticket.add_panel(create_test_panel(&[10, 11, 12])).unwrap();
        ticket.add_panel(create_test_panel(&[3, 30])).unwrap();

        assert_eq!(ticket.winning_panels(&[3, 4, 5, 6, 7, 8]), vec![0, 2]);
        assert!(ticket.winning_panels(&[49, 50]).is_empty());
    }

    #[test]
    fn test_check_minimum_panels() {
        let mut ticket = Ticket::new();
        assert_eq!(ticket.check(), Err(LottoError::TooFewPanels(0)));

        ticket.add_panel(Panel::new()).unwrap();
        assert_eq!(ticket.check(), Err(LottoError::TooFewPanels(1)));

        ticket.add_panel(Panel::new()).unwrap();
        assert_eq!(ticket.check(), Ok(()));
    }

    #[test]
    fn test_display() {
        console::set_colors_enabled(false);
        let mut ticket = Ticket::new();
        ticket.add_panel(create_test_panel(&[9, 3])).unwrap();
        ticket.add_panel(Panel::new()).unwrap();
        assert_eq!(ticket.to_string(), "Panel 1:  3  9\nPanel 2: -");
    }
}
