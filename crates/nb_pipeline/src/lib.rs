pub mod processor;
pub mod summary;
pub mod ticker;

pub use processor::BriefingProcessor;
pub use summary::Summarizer;
pub use ticker::TickerResolver;

pub mod prelude {
    pub use crate::processor::BriefingProcessor;
    pub use crate::summary::Summarizer;
    pub use crate::ticker::TickerResolver;
    pub use nb_core::{Briefing, CompanyBriefing, Result};
}
