//! The interactive menu.
//!
//! [`MenuSelection`] turns one line of input into an action;
//! [`MenuController`] drives the loop as a small state machine over
//! [`MenuState`].

pub mod controller;
pub mod selection;

pub use controller::{
    report_install, report_launch, report_missing, MenuController, MenuState,
};
pub use selection::MenuSelection;
