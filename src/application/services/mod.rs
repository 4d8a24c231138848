//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (HttpClient) but are themselves
//! concrete structs, not traits.

mod procedures;

pub use procedures::ProcedureService;
