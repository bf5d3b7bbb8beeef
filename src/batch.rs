//! Parallel batch stemming.
//!
//! Stemming is a pure function, so a batch can be split across a rayon pool
//! without any locking; results always come back in input order and are
//! identical to stemming each word sequentially.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::{PorterStemmer, Stemmer};
use crate::error::{Result, StemmaError};

/// Configuration for batch stemming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Thread pool size for parallel processing.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,

    /// Batches smaller than this are stemmed on the calling thread.
    pub parallel_threshold: usize,

    /// Return each distinct stem once, in first-seen order.
    pub dedupe: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            thread_pool_size: None,
            parallel_threshold: 1024,
            dedupe: false,
        }
    }
}

/// Result of stemming a batch of words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// Stems in input order (distinct stems only when deduplicating).
    pub stems: Vec<String>,

    /// Number of words in the batch.
    pub words_processed: usize,

    /// Whether the batch ran on the thread pool.
    pub parallel: bool,

    /// Time taken to stem the batch.
    pub processing_time: Duration,
}

/// Stems batches of words, in parallel when they are large enough.
pub struct BatchStemmer {
    config: BatchConfig,
    stemmer: Arc<dyn Stemmer>,
    thread_pool: Arc<ThreadPool>,
}

impl BatchStemmer {
    /// Create a batch stemmer backed by the Porter stemmer.
    pub fn new(config: BatchConfig) -> Result<Self> {
        Self::with_stemmer(config, Arc::new(PorterStemmer::new()))
    }

    /// Create a batch stemmer backed by `stemmer`.
    pub fn with_stemmer(config: BatchConfig, stemmer: Arc<dyn Stemmer>) -> Result<Self> {
        let thread_pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
        if thread_pool_size == 0 {
            return Err(StemmaError::invalid_argument(
                "thread pool size must be at least 1",
            ));
        }

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("stemma-batch-{i}"))
            .build()
            .map_err(|e| StemmaError::internal(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            config,
            stemmer,
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Get the number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Stem every word, preserving input order.
    pub fn stem_all<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        self.process(words).stems
    }

    /// Stem every word and report how the batch was processed.
    pub fn process<S: AsRef<str> + Sync>(&self, words: &[S]) -> BatchResult {
        let start = Instant::now();
        let parallel = words.len() >= self.config.parallel_threshold && self.num_threads() > 1;

        let stems: Vec<String> = if parallel {
            let stemmer = &self.stemmer;
            self.thread_pool.install(|| {
                words
                    .par_iter()
                    .map(|word| stemmer.stem(word.as_ref()))
                    .collect()
            })
        } else {
            words
                .iter()
                .map(|word| self.stemmer.stem(word.as_ref()))
                .collect()
        };

        let stems = if self.config.dedupe {
            let mut seen = HashSet::with_capacity(stems.len());
            stems
                .into_iter()
                .filter(|stem| seen.insert(stem.clone()))
                .collect()
        } else {
            stems
        };

        let processing_time = start.elapsed();
        debug!(
            "stemmed {} words ({}) in {:?}",
            words.len(),
            if parallel { "parallel" } else { "sequential" },
            processing_time
        );

        BatchResult {
            stems,
            words_processed: words.len(),
            parallel,
            processing_time,
        }
    }
}

impl std::fmt::Debug for BatchStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchStemmer")
            .field("config", &self.config)
            .field("stemmer", &self.stemmer.name())
            .field("threads", &self.num_threads())
            .finish()
    }
}
