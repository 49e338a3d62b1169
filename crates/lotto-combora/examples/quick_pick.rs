use lotto_combora::picker::pick;
use lotto_combora::{Panel, Ticket};

fn main() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let mut ticket = Ticket::new();
    while !ticket.is_full() {
        ticket.add_quick_pick_panel(Panel::new(), &mut rng)?;
    }

    let winning = pick(6)?;
    println!("{ticket}");
    println!("Winning numbers: {winning:?}");
    println!("Winning panels: {:?}", ticket.winning_panels(&winning));
    println!("Cost: {}", ticket.cost());

    Ok(())
}
