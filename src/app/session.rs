use anyhow::{Context as _, Result};
use lotto_combora::picker::draw_winning_numbers;
use lotto_combora::{Panel, Selection, Ticket};
use rand::Rng;

use super::config::LottoConfig;
use super::prompt::SelectionSource;
use super::report::DrawReport;

/// Fill a ticket, draw the winning numbers and check the ticket against them
pub fn play<R, S>(config: &LottoConfig, rng: &mut R, source: &mut S) -> Result<DrawReport>
where
    R: Rng + ?Sized,
    S: SelectionSource + ?Sized,
{
    config.check()?;

    let ticket = fill_ticket(config.panels, rng, source)?;
    ticket.check()?;
    log::info!("Ticket with {} panels:\n{ticket}", ticket.len());

    let winning_numbers = draw_winning_numbers(rng)?;
    log::info!("Drew winning numbers {winning_numbers:?}");

    let report = DrawReport::new(&ticket, winning_numbers);
    log::debug!("Winning panels: {:?}", report.winning_panels);
    Ok(report)
}

fn fill_ticket<R, S>(panels: usize, rng: &mut R, source: &mut S) -> Result<Ticket>
where
    R: Rng + ?Sized,
    S: SelectionSource + ?Sized,
{
    let mut ticket = Ticket::new();
    for index in 0..panels {
        let selection = source.next_selection(index)?;
        log::trace!("Adding panel {} from {selection:?}", index + 1);
        let added = match selection {
            Selection::QuickPick => ticket.add_quick_pick_panel(Panel::new(), rng),
            Selection::Numbers(numbers) => {
                Panel::with_numbers(numbers).and_then(|panel| ticket.add_panel(panel))
            }
        };
        added.with_context(|| format!("Failed to add panel {}", index + 1))?;
    }
    Ok(ticket)
}
