//! Crawl session - frontier and visited-set management
//!
//! This module contains the crawl control loop:
//! - Seeding and dispatching URLs to the page extractor
//! - Frontier growth from recommendation links
//! - The visit cap and the exact-URL revisit check
//! - Partial-failure handling that keeps the crawl going past bad pages
//!
//! URLs are compared as raw strings throughout. No normalization happens
//! here: "https://a/p" and "https://a/p/" are different pages.

use crate::extract::Extract;

/// Outcome of a finished crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// URLs in dispatch order; a failed extraction still counts as a visit
    pub visited: Vec<String>,

    /// URLs whose extraction failed, in failure order. Always a subset of
    /// `visited`.
    pub failures: Vec<String>,
}

impl CrawlReport {
    /// Number of pages whose extraction failed
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// A single crawl over one seed URL
///
/// The session owns all crawl state, so independent crawls never interfere
/// with each other.
pub struct CrawlSession<E> {
    extractor: E,
    max_visits: usize,
    visited: Vec<String>,
    frontier: Vec<String>,
    failures: Vec<String>,
}

impl<E: Extract> CrawlSession<E> {
    /// Creates a session that will dispatch at most `max_visits` pages
    pub fn new(extractor: E, max_visits: usize) -> Self {
        Self {
            extractor,
            max_visits,
            visited: Vec::new(),
            frontier: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Runs the crawl from `seed` until the visit cap or frontier exhaustion
    ///
    /// Extraction failures are recorded and skipped, never fatal: the crawl
    /// always runs to completion and returns a report.
    pub async fn run(mut self, seed: &str) -> CrawlReport {
        // The seed consumes a visit slot whether or not it extracts. That
        // also keeps a known-bad seed from ever being retried.
        self.visited.push(seed.to_string());
        match self.extractor.extract(seed).await {
            Ok(extraction) => self.frontier = extraction.links,
            Err(e) => {
                tracing::warn!("extraction failed for {}: {}", seed, e);
                self.failures.push(seed.to_string());
            }
        }

        // The cursor only moves forward; the frontier grows at the far end
        // while earlier positions are never revisited, so the loop is bounded
        // by the visit cap even when every page keeps adding links.
        let mut index = 0;
        while self.visited.len() < self.max_visits && index < self.frontier.len() {
            let candidate = self.frontier[index].clone();
            index += 1;

            // Visited-membership is checked at dispatch time; the frontier
            // itself may hold duplicates and back-references.
            if self.visited.contains(&candidate) {
                tracing::debug!("skipping already-visited {}", candidate);
                continue;
            }

            // Marked visited before the outcome is known, so a failing page
            // is never retried.
            self.visited.push(candidate.clone());
            match self.extractor.extract(&candidate).await {
                Ok(extraction) => self.frontier.extend(extraction.links),
                Err(e) => {
                    tracing::warn!("extraction failed for {}: {}", candidate, e);
                    self.failures.push(candidate);
                }
            }
        }

        tracing::debug!(
            "crawl finished: {} visited, {} left in frontier, {} failures",
            self.visited.len(),
            self.frontier.len().saturating_sub(index),
            self.failures.len()
        );

        CrawlReport {
            visited: self.visited,
            failures: self.failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{ExtractError, Extraction, Recipe};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Scripted extractor: known URLs return their listed links, unknown
    /// URLs fail. Every dispatch is logged for assertions.
    struct ScriptedExtractor {
        pages: HashMap<String, Vec<String>>,
        dispatched: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedExtractor {
        fn new(pages: Vec<(&str, Vec<&str>)>) -> (Self, Arc<Mutex<Vec<String>>>) {
            let dispatched = Arc::new(Mutex::new(Vec::new()));
            let pages = pages
                .into_iter()
                .map(|(url, links)| {
                    (
                        url.to_string(),
                        links.into_iter().map(str::to_string).collect(),
                    )
                })
                .collect();

            (
                Self {
                    pages,
                    dispatched: Arc::clone(&dispatched),
                },
                dispatched,
            )
        }
    }

    #[async_trait::async_trait]
    impl Extract for ScriptedExtractor {
        async fn extract(&self, url: &str) -> Result<Extraction, ExtractError> {
            self.dispatched.lock().unwrap().push(url.to_string());
            match self.pages.get(url) {
                Some(links) => Ok(Extraction {
                    recipe: Recipe::default(),
                    links: links.clone(),
                }),
                None => Err(ExtractError::MissingRegion {
                    url: url.to_string(),
                    region: "recommendations",
                }),
            }
        }
    }

    /// Extractor whose every page links to five fresh pages, growing the
    /// frontier without bound
    struct GrowingExtractor {
        dispatches: Arc<Mutex<usize>>,
    }

    #[async_trait::async_trait]
    impl Extract for GrowingExtractor {
        async fn extract(&self, url: &str) -> Result<Extraction, ExtractError> {
            *self.dispatches.lock().unwrap() += 1;
            let links = (0..5).map(|n| format!("{}/{}", url, n)).collect();
            Ok(Extraction {
                recipe: Recipe::default(),
                links,
            })
        }
    }

    #[tokio::test]
    async fn seed_failure_still_counts_as_a_visit() {
        let (extractor, dispatched) = ScriptedExtractor::new(vec![]);
        let report = CrawlSession::new(extractor, 10).run("https://site/seed").await;

        assert_eq!(report.visited, vec!["https://site/seed"]);
        assert_eq!(report.failures, vec!["https://site/seed"]);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(dispatched.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn crawl_visits_every_discovered_page() {
        let (extractor, _) = ScriptedExtractor::new(vec![
            ("seed", vec!["a", "b", "c"]),
            ("a", vec![]),
            ("b", vec![]),
            ("c", vec![]),
        ]);
        let report = CrawlSession::new(extractor, 10).run("seed").await;

        assert_eq!(report.visited, vec!["seed", "a", "b", "c"]);
        assert!(report.failures.is_empty());
        assert_eq!(report.failure_count(), 0);
    }

    #[tokio::test]
    async fn failed_page_is_recorded_and_crawl_continues() {
        // "a" is unknown to the extractor and fails; "b" still gets visited
        let (extractor, _) =
            ScriptedExtractor::new(vec![("seed", vec!["a", "b"]), ("b", vec![])]);
        let report = CrawlSession::new(extractor, 10).run("seed").await;

        assert_eq!(report.failures, vec!["a"]);
        assert_eq!(report.visited, vec!["seed", "a", "b"]);
    }

    #[tokio::test]
    async fn visited_pages_are_never_redispatched() {
        // "a" links back to the seed and repeats "b", which the seed already
        // put in the frontier
        let (extractor, dispatched) = ScriptedExtractor::new(vec![
            ("seed", vec!["a", "b"]),
            ("a", vec!["seed", "b"]),
            ("b", vec![]),
        ]);
        let report = CrawlSession::new(extractor, 10).run("seed").await;

        assert_eq!(*dispatched.lock().unwrap(), vec!["seed", "a", "b"]);
        assert_eq!(report.visited, vec!["seed", "a", "b"]);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn visit_cap_bounds_dispatch_count() {
        let dispatches = Arc::new(Mutex::new(0));
        let extractor = GrowingExtractor {
            dispatches: Arc::clone(&dispatches),
        };
        let report = CrawlSession::new(extractor, 10).run("seed").await;

        assert_eq!(*dispatches.lock().unwrap(), 10);
        assert_eq!(report.visited.len(), 10);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn urls_match_on_exact_strings_only() {
        // A trailing slash makes a different page; nothing canonicalizes it
        let (extractor, _) = ScriptedExtractor::new(vec![
            ("https://site/p", vec!["https://site/p/"]),
            ("https://site/p/", vec![]),
        ]);
        let report = CrawlSession::new(extractor, 10).run("https://site/p").await;

        assert_eq!(report.visited, vec!["https://site/p", "https://site/p/"]);
    }

    #[tokio::test]
    async fn failures_are_a_subset_of_visited() {
        let (extractor, _) = ScriptedExtractor::new(vec![
            ("seed", vec!["a", "bad1", "b", "bad2"]),
            ("a", vec![]),
            ("b", vec![]),
        ]);
        let report = CrawlSession::new(extractor, 10).run("seed").await;

        assert_eq!(report.failures, vec!["bad1", "bad2"]);
        for url in &report.failures {
            assert!(report.visited.contains(url));
        }
    }

    #[tokio::test]
    async fn each_visited_url_appears_exactly_once() {
        let (extractor, _) = ScriptedExtractor::new(vec![
            ("seed", vec!["a", "a", "b"]),
            ("a", vec!["b", "seed"]),
            ("b", vec!["a"]),
        ]);
        let report = CrawlSession::new(extractor, 10).run("seed").await;

        let mut sorted = report.visited.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), report.visited.len());
    }
}
