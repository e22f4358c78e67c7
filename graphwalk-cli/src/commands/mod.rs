pub mod common;
pub mod distances;
pub mod dot;
pub mod path;
pub mod reach;
