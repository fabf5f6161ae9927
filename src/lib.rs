//! BMI calculator, ideal-weight table and password generator.
//!
//! The core ([`bmi`], [`pass`]) is pure; randomness, notices and the
//! clipboard come in through the capabilities in [`rng`] and [`notify`].
//! [`app`] ties them to a [`view::ViewState`] for the two front ends,
//! [`cli`] and [`tui`].

pub mod app;
pub mod bmi;
pub mod cli;
pub mod error;
pub mod exits;
pub mod logging;
pub mod notify;
pub mod pass;
pub mod rng;
pub mod settings;
pub mod terminal;
pub mod tui;
pub mod view;
