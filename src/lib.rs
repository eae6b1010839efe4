mod bits;
mod display;
mod error;
mod font;
mod instruction;
mod keystate;
mod memory;
mod options;
mod processor;
mod program;
mod quirks;
mod stack;
mod variant;

// Re-exports. `Memory` and `Stack` are internal state — a host observes the
// framebuffer, sound timer and keyboard bitmask, not raw RAM/stack access —
// and stay crate-private.
pub use crate::display::Display;
pub use crate::error::*;
pub use crate::options::Options;
pub use crate::processor::*;
pub use crate::program::Program;
pub use crate::quirks::Quirks;
pub use crate::variant::Variant;
