//! `OneOrMany<T>`: a value that is exactly one `T` or an ordered run of two or
//! more, with structure-preserving mapping and pluggable element equality.
//!
//! The crate also ships a small CLI that groups values and fetches a public
//! procedure catalogue.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{equals, get_eq, DomainError, Equivalence, OneOrMany, Structural};
