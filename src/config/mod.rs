/// Configuration subsystem - Seeded defaults for the schedule form
///
/// This module loads class days, session time, duration and output format
/// from .schedulerc files so every session starts from the same defaults.

pub mod rc;

// Re-export public interface
pub use rc::{RcConfig, RcLoader};
