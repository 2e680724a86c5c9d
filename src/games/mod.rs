//! Game implementations.

pub mod mnk;
