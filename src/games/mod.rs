//! Game implementations.

pub mod fox_hounds;
