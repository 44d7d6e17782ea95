pub mod equivalence;
mod error;
mod format;
mod handle;
mod hash;
mod interning;
mod objects;
mod primitives;
mod runtime;
mod tagged;

pub use equivalence::{is_eq, is_equal, is_eqv};
pub use error::*;
pub use format::Displayed;
pub use handle::*;
pub use hash::*;
pub use interning::*;
pub use objects::*;
pub use primitives::*;
pub use runtime::*;
pub use tagged::*;
