//! Backend worker: command queue in, UI events out.

pub mod commands;
pub mod runtime;
