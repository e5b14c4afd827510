//! Per-cycle feedback assembly:
//! - `FeedbackPackage`: the immutable hand-off bundle
//! - `FeedbackEngine`: runs one evaluation cycle over a snapshot + roster

mod engine;
mod package;

pub use engine::FeedbackEngine;
pub use package::FeedbackPackage;
