//! Progress reporting during council execution

pub mod reporter;

pub use reporter::{ProgressReporter, SimpleProgress};
