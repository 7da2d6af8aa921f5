//! Thread pool management for the data-parallel parts of a mesh build
//!
//! Texture synthesis is embarrassingly parallel over texel rows. This module owns the
//! rayon pool those rows run on and lets callers turn parallelism off for debugging.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::{Arc, Mutex, OnceLock};
use meshchart_core::{Error, Result};

static GLOBAL_THREAD_POOL: OnceLock<Arc<ThreadPool>> = OnceLock::new();
static THREAD_POOL_CONFIG: Mutex<ThreadPoolConfig> = Mutex::new(ThreadPoolConfig::new());

/// Thread pool configuration for parallel processing
#[derive(Debug, Clone)]
pub struct ThreadPoolConfig {
    /// Number of threads to use (None = automatic)
    pub num_threads: Option<usize>,
    /// Thread name prefix
    pub thread_name_prefix: String,
    /// Enable parallel processing (can be disabled for debugging)
    pub enabled: bool,
    /// Below this many items work runs on the calling thread
    pub min_parallel_len: usize,
}

impl ThreadPoolConfig {
    const fn new() -> Self {
        Self {
            num_threads: None,
            thread_name_prefix: String::new(),
            enabled: true,
            min_parallel_len: 16,
        }
    }

    /// Set number of threads
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Enable or disable parallel processing
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_min_parallel_len(mut self, len: usize) -> Self {
        self.min_parallel_len = len;
        self
    }
}

impl Default for ThreadPoolConfig {
    fn default() -> Self {
        Self {
            thread_name_prefix: "meshchart-texel".to_string(),
            ..Self::new()
        }
    }
}

/// Initialize the global thread pool with custom configuration.
///
/// The pool can only be built once; later calls just update the configuration.
/// Asking for a thread count the existing pool was not built with is an error,
/// since the running pool cannot be resized.
pub fn init_thread_pool(config: ThreadPoolConfig) -> Result<()> {
    let pool = match GLOBAL_THREAD_POOL.get() {
        Some(pool) => pool.clone(),
        None => {
            let built = build_pool(&config)?;
            GLOBAL_THREAD_POOL.get_or_init(|| Arc::new(built)).clone()
        }
    };

    if let Some(requested) = config.num_threads.filter(|&n| n > 0) {
        let running = pool.current_num_threads();
        if requested != running {
            return Err(Error::Algorithm(format!(
                "thread pool already running with {} threads, cannot switch to {}",
                running, requested
            )));
        }
    }

    if let Ok(mut global_config) = THREAD_POOL_CONFIG.lock() {
        *global_config = config;
    }
    Ok(())
}

fn build_pool(config: &ThreadPoolConfig) -> Result<ThreadPool> {
    let mut builder = ThreadPoolBuilder::new();

    if let Some(num_threads) = config.num_threads {
        builder = builder.num_threads(num_threads);
    }

    if !config.thread_name_prefix.is_empty() {
        let prefix = config.thread_name_prefix.clone();
        builder = builder.thread_name(move |index| format!("{}-{}", prefix, index));
    }

    builder
        .build()
        .map_err(|e| Error::Algorithm(format!("Failed to create thread pool: {}", e)))
}

/// The global thread pool, built with [`ThreadPoolConfig::default`] on first use
pub fn get_thread_pool() -> Option<Arc<ThreadPool>> {
    if let Some(pool) = GLOBAL_THREAD_POOL.get() {
        return Some(pool.clone());
    }
    let pool = build_pool(&ThreadPoolConfig::default()).ok()?;
    Some(GLOBAL_THREAD_POOL.get_or_init(|| Arc::new(pool)).clone())
}

/// Get current thread pool configuration
pub fn get_config() -> ThreadPoolConfig {
    THREAD_POOL_CONFIG
        .lock()
        .map(|config| config.clone())
        .unwrap_or_else(|_| ThreadPoolConfig::default())
}

/// Check if parallel processing is enabled
pub fn is_parallel_enabled() -> bool {
    get_config().enabled
}

/// Parallel map preserving input order.
///
/// Falls back to a sequential map when parallelism is disabled, the input is short,
/// or no pool could be built.
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    if !is_parallel_enabled() || data.len() < get_config().min_parallel_len {
        return data.iter().map(f).collect();
    }

    match get_thread_pool() {
        Some(pool) => pool.install(|| data.par_iter().map(f).collect()),
        None => data.iter().map(f).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_pool_config() {
        let config = ThreadPoolConfig::default()
            .with_threads(4)
            .with_enabled(false)
            .with_min_parallel_len(2);

        assert_eq!(config.num_threads, Some(4));
        assert!(!config.enabled);
        assert_eq!(config.min_parallel_len, 2);
        assert_eq!(config.thread_name_prefix, "meshchart-texel");
    }

    #[test]
    fn test_init_rejects_resizing_running_pool() {
        let running = get_thread_pool().unwrap().current_num_threads();

        let resized = init_thread_pool(ThreadPoolConfig::default().with_threads(running + 1));
        assert!(matches!(resized, Err(Error::Algorithm(_))));
        assert_ne!(get_config().num_threads, Some(running + 1));

        assert!(init_thread_pool(ThreadPoolConfig::default().with_threads(running)).is_ok());
        assert!(init_thread_pool(ThreadPoolConfig::default()).is_ok());
    }

    #[test]
    fn test_parallel_map_preserves_order() {
        let data: Vec<usize> = (0..1000).collect();
        let doubled = parallel_map(&data, |x| x * 2);
        assert_eq!(doubled.len(), 1000);
        assert!(doubled.iter().enumerate().all(|(i, &v)| v == i * 2));
    }

    #[test]
    fn test_parallel_map_short_input() {
        let data = [1, 2, 3];
        assert_eq!(parallel_map(&data, |x| x + 1), vec![2, 3, 4]);
    }
}
