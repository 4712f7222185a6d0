#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod time;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::CatalogFilter;
pub use time::Clock;
