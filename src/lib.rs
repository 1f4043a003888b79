//! # Language Tour
//!
//! A linear walkthrough of everyday Rust features, one section per topic:
//!
//! 1. **Structs** - `Animal` with private fields, getters and setters
//! 2. **Composition over inheritance** - `Dog` wraps an `Animal` and overrides `speak`
//! 3. **Traits with defaults** - `Vehicle::honk` shared by every implementor
//! 4. **Multiple traits** - `Duck` is both `Flyable` and `Swimmable`
//! 5. **Collections** - `Vec`, `HashSet`, `HashMap`, `VecDeque`, stack on `Vec`
//! 6. **Files** - buffered write and line-by-line read
//! 7. **Errors** - checked indexing, fallback for panics, scope-guard cleanup
//! 8. **Closures** - map, filter and callbacks stored as values
//! 9. **Generics** - `GenericBox<T>`, `print_array`, bounded `sum_numbers`
//!
//! Run with: `cargo run --bin language_tour`

pub mod animals;
pub mod capabilities;
pub mod collections;
pub mod diagnostics;
pub mod error;
pub mod failures;
pub mod files;
pub mod functional;
pub mod generic_box;
pub mod settings;
pub mod tour;
pub mod utils;
pub mod vehicles;

pub use error::{TourError, TourResult};
pub use generic_box::GenericBox;
pub use settings::TourSettings;
pub use tour::{run_tour, TourSummary};
