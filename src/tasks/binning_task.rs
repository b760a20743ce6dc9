use std::sync::mpsc::Sender;
use std::time::Instant;

use crate::core::{BinningError, Scalar};
use crate::evaluation::{BasicEstimator, Estimator};
use crate::observables::Accumulator;
use crate::report::Summary;
use crate::streams::SampleStream;

/// Drains a sample stream into an accumulator, recording periodic summaries.
pub struct BinningTask<T: Scalar> {
    stream: Box<dyn SampleStream<T>>,
    accumulator: Accumulator<T>,
    running: BasicEstimator<T>,
    history: Vec<Summary<T>>,

    max_samples: Option<u64>,
    report_frequency: u64,
    processed: u64,

    progress_tx: Option<Sender<Summary<T>>>,
}

impl<T: Scalar> BinningTask<T> {
    pub fn new(
        stream: Box<dyn SampleStream<T>>,
        accumulator: Accumulator<T>,
        max_samples: Option<u64>,
        report_frequency: u64,
    ) -> Result<Self, BinningError> {
        if report_frequency == 0 {
            return Err(BinningError::InvalidConfiguration(
                "report_frequency must be > 0".into(),
            ));
        }

        Ok(Self {
            stream,
            accumulator,
            running: BasicEstimator::default(),
            history: Vec::new(),
            max_samples,
            report_frequency,
            processed: 0,
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<Summary<T>>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Runs until the stream ends or `max_samples` is reached.
    ///
    /// Returns the final summary; fails with
    /// [`BinningError::InsufficientData`] if no block was ever closed.
    pub fn run(&mut self) -> Result<Summary<T>, BinningError> {
        let start = Instant::now();

        while self.stream.has_more_samples() {
            if let Some(n) = self.max_samples {
                if self.processed >= n {
                    break;
                }
            }
            let Some(x) = self.stream.next_sample() else {
                break;
            };

            self.accumulator.ingest(x)?;
            self.running.add(x);
            self.processed += 1;

            if self.processed % self.report_frequency == 0 {
                self.push_summary();
            }
        }

        let summary = Summary::from_accumulator(&self.accumulator)?;
        tracing::info!(
            samples = self.processed,
            block_size = summary.block_size,
            num_blocks = summary.num_blocks,
            seconds = start.elapsed().as_secs_f64(),
            "binning run finished: {summary}"
        );
        Ok(summary)
    }

    fn push_summary(&mut self) {
        let summary = match Summary::from_accumulator(&self.accumulator) {
            Ok(s) => s,
            Err(err) => {
                tracing::debug!(processed = self.processed, %err, "no summary yet");
                return;
            }
        };

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(summary);
        }
        self.history.push(summary);
    }

    pub fn accumulator(&self) -> &Accumulator<T> {
        &self.accumulator
    }

    /// Exact average of every sample pulled so far.
    pub fn running_mean(&self) -> T {
        self.running.estimation()
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn history(&self) -> &[Summary<T>] {
        &self.history
    }
}
