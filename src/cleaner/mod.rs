pub mod rule;
pub mod scrubber;

pub use rule::FallbackRule;
pub use scrubber::{ScrubOutcome, ScrubReport, Scrubber};
