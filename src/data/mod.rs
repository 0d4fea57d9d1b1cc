//! Static reference data: industry benchmarks and the experiment catalog.
//!
//! Both tables are compiled into the binary and never mutated, so they can
//! be shared freely across threads.

pub mod benchmarks;
pub mod catalog;

pub use benchmarks::lookup;
