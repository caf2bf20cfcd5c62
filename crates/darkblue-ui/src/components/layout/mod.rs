//! Page structure helpers.

pub mod flow;
/// Page footer.
pub mod footer;

pub use flow::*;
pub use footer::*;
