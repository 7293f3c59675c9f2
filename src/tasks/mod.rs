//! Background Tasks Module
//!
//! Hosts the per-cache sweep worker.

mod sweeper;

pub(crate) use sweeper::spawn_sweeper;
