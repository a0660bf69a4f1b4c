use async_trait::async_trait;
use sbom_unify::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock VcsProbe answering from a fixed URL table and recording every call
#[derive(Default, Clone)]
pub struct MockVcsProbe {
    outcomes: HashMap<String, ReachabilityOutcome>,
    pub probed: Arc<Mutex<Vec<String>>>,
}

impl MockVcsProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, url: &str, outcome: ReachabilityOutcome) -> Self {
        self.outcomes.insert(url.to_string(), outcome);
        self
    }

    pub fn probed_urls(&self) -> Vec<String> {
        let mut urls = self.probed.lock().unwrap().clone();
        urls.sort();
        urls
    }
}

#[async_trait]
impl VcsProbe for MockVcsProbe {
    async fn probe(&self, url: &str) -> ReachabilityOutcome {
        self.probed.lock().unwrap().push(url.to_string());
        self.outcomes
            .get(url)
            .cloned()
            .unwrap_or(ReachabilityOutcome::Reachable)
    }
}
