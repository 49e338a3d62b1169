//! Core rules of a 6-from-50 lottery ticket.
//!
//! A [`Panel`] holds up to six distinct numbers, a [`Ticket`] holds up to
//! eight panels, and the [`picker`] draws random numbers for quick picks and
//! winning sets.

pub mod error;
pub mod panel;
pub mod picker;
pub mod selection;
pub mod ticket;

pub use error::{LottoError, Result};
pub use panel::Panel;
pub use selection::Selection;
pub use ticket::Ticket;
