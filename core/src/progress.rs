// Progress reporting for long-running scans

use std::sync::Arc;

/// Progress information for a streaming pass over the input
#[derive(Debug, Clone)]
pub struct ScanProgress {
    /// Which test or scan is reading
    pub task: &'static str,
    /// Bytes read so far
    pub bytes_read: u64,
    /// Size of the input being read
    pub total_bytes: u64,
}

impl ScanProgress {
    pub fn new(task: &'static str, total_bytes: u64) -> Self {
        Self {
            task,
            bytes_read: 0,
            total_bytes,
        }
    }

    pub fn update_bytes(&mut self, bytes: u64) {
        self.bytes_read += bytes;
    }

    /// Cumulative megabytes read
    pub fn megabytes(&self) -> f64 {
        self.bytes_read as f64 / 1_048_576.0
    }

    pub fn percentage(&self) -> f32 {
        if self.total_bytes == 0 {
            return 100.0;
        }
        (self.bytes_read as f32 / self.total_bytes as f32) * 100.0
    }
}

/// Trait for progress reporting callbacks
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, progress: &ScanProgress);
}

/// No-op progress callback (does nothing)
pub struct NoOpProgress;

impl ProgressCallback for NoOpProgress {
    fn on_progress(&self, _progress: &ScanProgress) {}
}

/// Logging progress callback
pub struct LoggingProgress;

impl ProgressCallback for LoggingProgress {
    fn on_progress(&self, progress: &ScanProgress) {
        tracing::debug!(
            "{}: {:.1} MB ({:.1}%)",
            progress.task,
            progress.megabytes(),
            progress.percentage()
        );
    }
}

/// Function-based progress callback
pub struct FnProgress<F>
where
    F: Fn(&ScanProgress) + Send + Sync,
{
    callback: F,
}

impl<F> FnProgress<F>
where
    F: Fn(&ScanProgress) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ProgressCallback for FnProgress<F>
where
    F: Fn(&ScanProgress) + Send + Sync,
{
    fn on_progress(&self, progress: &ScanProgress) {
        (self.callback)(progress);
    }
}

/// Progress reporter that manages callbacks
pub struct ProgressReporter {
    progress: ScanProgress,
    callback: Arc<dyn ProgressCallback>,
}

impl ProgressReporter {
    pub fn new(task: &'static str, total_bytes: u64, callback: Arc<dyn ProgressCallback>) -> Self {
        Self {
            progress: ScanProgress::new(task, total_bytes),
            callback,
        }
    }

    pub fn add_bytes(&mut self, bytes: u64) {
        self.progress.update_bytes(bytes);
        self.callback.on_progress(&self.progress);
    }

    pub fn bytes_read(&self) -> u64 {
        self.progress.bytes_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_reporter_accumulates_megabytes() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let callback = Arc::new(FnProgress::new(move |p: &ScanProgress| {
            sink.lock().unwrap().push(p.megabytes());
        }));

        let mut reporter = ProgressReporter::new("histogram", 2 * 1_048_576, callback);
        reporter.add_bytes(1_048_576);
        reporter.add_bytes(524_288);

        assert_eq!(*seen.lock().unwrap(), vec![1.0, 1.5]);
        assert_eq!(reporter.bytes_read(), 1_572_864);
    }

    #[test]
    fn test_percentage_of_empty_input() {
        assert_eq!(ScanProgress::new("scan", 0).percentage(), 100.0);
    }
}
