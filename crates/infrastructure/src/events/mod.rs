pub mod emitter;
pub mod metrics;
pub mod types;

pub use emitter::LookupEventEmitter;
pub use metrics::LookupMetrics;
pub use types::{LookupEvent, LookupEventKind};
