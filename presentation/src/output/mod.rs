//! Output formatting for swarm runs

pub mod console;
