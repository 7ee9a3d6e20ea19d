pub mod client;
pub mod source;
pub mod types;

pub use client::{HttpTutorialSource, TUTORIALS_PATH};
pub use source::{FetchError, TutorialSource};
pub use types::{ResponseEnvelope, Tutorial, TutorialId};
