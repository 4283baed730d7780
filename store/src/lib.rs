//! Key-addressed storage for the backend configs of `midiconf-core`.
//!
//! A `ConfigStore` is meant to be created once by the embedding application
//! and passed to every backend it constructs, so instrument caches survive
//! from one song to the next.

mod error;
pub use error::*;

mod normalize;

mod settings;
pub use settings::*;

mod store;
pub use store::*;

mod value;
pub use value::*;

