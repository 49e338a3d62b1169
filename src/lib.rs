//! Command line driver for the `lotto-combora` ticket rules.

mod app;

pub use app::{config, prompt, report, session};
