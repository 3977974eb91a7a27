//! Crate-wide helpers. Declared first in lib.rs so the macros are in scope everywhere.

#[macro_use]
#[path = "utils/logging.rs"]
pub mod logging;
