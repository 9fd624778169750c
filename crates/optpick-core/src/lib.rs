#![forbid(unsafe_code)]

//! Core: canonical input events and declarative key bindings.

pub mod event;
pub mod keybinding;
