pub use std::collections::HashMap;
pub use std::fmt;
pub use std::sync::Arc;

#[macro_use]
extern crate log;

#[macro_use]
extern crate strum_macros;

mod cache;
pub use self::cache::*;

mod diagnostics;
pub use self::diagnostics::*;

pub mod names;

pub mod format;

#[cfg(test)]
mod fixture_tests;
