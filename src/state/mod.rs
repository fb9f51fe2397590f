//! Application state management.
//!
//! The review page keeps a single piece of shared mutable state: the analysis
//! session. It is passed explicitly to the components that need it rather
//! than living in a global.

mod session;

pub use session::{AnalysisSession, SharedSession};
