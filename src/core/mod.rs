//! Core modules for Truth Weaver

pub mod lexicon;
pub mod segmenter;
pub mod claims;
pub mod contradiction;
pub mod observer;
pub mod weaver;
pub mod report;
pub mod api;

pub use segmenter::SessionSegmenter;
pub use contradiction::{ContradictionDetector, operative_claim};
pub use observer::{WeaveObserver, SilentObserver, TracingObserver};
pub use weaver::TruthWeaver;
pub use report::{read_transcript, render_report, render_json, save_report, save_json};
pub use api::{create_router, run_server};
