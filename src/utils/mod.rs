//! Internal helpers shared across the crate.

mod dot;

pub(crate) use dot::DotWriter;
