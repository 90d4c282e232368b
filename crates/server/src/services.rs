pub mod feed;

pub use feed::{FeedService, SourceFetch, SourceOutcome};
