//! Domain layer: the `OneOrMany` type and the procedure record
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod equivalence;
pub mod error;
pub mod one_or_many;
pub mod procedure;

pub use equivalence::{equals, get_eq, Equivalence, OneOrManyEq, Structural};
pub use error::{DomainError, DomainResult};
pub use one_or_many::OneOrMany;
pub use procedure::Procedure;
