use std::collections::HashSet;

/// Source URLs already present in the external store, fetched once per run.
/// Successful publishes are recorded here too, so the same URL surfacing in
/// a second feed within one run is also skipped.
#[derive(Debug, Default)]
pub struct DedupSet {
    urls: HashSet<String>,
}

impl DedupSet {
    pub fn new(urls: HashSet<String>) -> Self {
        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Record a published URL. Returns false if it was already present.
    pub fn insert(&mut self, url: &str) -> bool {
        self.urls.insert(url.to_string())
    }
}
