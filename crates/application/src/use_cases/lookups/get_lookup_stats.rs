use std::sync::Arc;

use crate::ports::{LookupStats, LookupStatsSource};

pub struct GetLookupStatsUseCase {
    source: Arc<dyn LookupStatsSource>,
}

impl GetLookupStatsUseCase {
    pub fn new(source: Arc<dyn LookupStatsSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self) -> LookupStats {
        self.source.snapshot()
    }
}
