//! Input builders for store mutations.

pub mod venture;

pub use venture::{NewVenture, NewVentureBuilder};
