//! Modified copies of immutable values through chainable field updates.
//!
//! A value is wrapped in a [`Configurable`], which hands out copies of it with
//! one field set ([`Configurable::setter`]), one field mapped
//! ([`Configurable::mapper`]), or any number of fields edited by a closure
//! ([`Configurable::transform`]). The wrapped value is never changed.
//!
//! Fields are designated by [`Field`] references, built with [`field!`] or
//! generated per struct with [`fields!`]. Every operation returns a bare value,
//! so chains rewrap between steps with [`IntoConfigurable::configurable`]:
//!
//! ```
//! use slashconfig::{IntoConfigurable, fields};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Starship {
//!     commanding_officer: String,
//!     registry: String,
//!     is_active: bool,
//! }
//!
//! fields! {
//!     Starship {
//!         commanding_officer: String,
//!         registry: String,
//!         is_active: bool,
//!     }
//! }
//!
//! let titan = Starship {
//!     commanding_officer: "William T. Riker".to_string(),
//!     registry: "NCC-80102".to_string(),
//!     is_active: false,
//! };
//!
//! let refit = titan
//!     .clone()
//!     .configurable()
//!     .setter(Starship::commanding_officer())("Liam Shaw".to_string())
//!     .configurable()
//!     .mapper(Starship::registry())(|registry| format!("{registry}-A"))
//!     .configurable()
//!     .setter(Starship::is_active())(true);
//!
//! assert_eq!(refit.registry, "NCC-80102-A");
//! assert_eq!(titan.registry, "NCC-80102");
//! ```

pub mod configurable;
pub mod field;
pub mod logging;
mod macros;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use configurable::{Configurable, IntoConfigurable, wrap};
pub use field::Field;
