//! Multi-size, multi-algorithm comparison sweep.
//!
//! Each (size, element type) pair is one job. Jobs go to a scoped worker
//! pool over a crossbeam channel; each worker runs every configured
//! algorithm on the job's shared array and sends the batch back over a
//! single result channel. Batches are re-ordered by job index before the
//! report is assembled, so the report never depends on scheduling.

use std::fmt;
use std::thread;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use indexmap::IndexMap;
use sortviz_core::{Algorithm, DetailedMetrics};
use sortviz_metrics::MetricsRunner;

use crate::config::{ConfigError, SweepConfig};
use crate::sample::{random_floats, random_ints, seeded_rng};

/// Element type of a sweep job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `i64` arrays.
    Int,
    /// `f64` arrays.
    Float,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
        }
    }
}

/// Results of one sweep.
#[derive(Clone, Debug)]
pub struct SweepReport {
    /// Seed the arrays were generated from; rerun with it to reproduce.
    pub seed: u64,
    /// Sizes swept, in order.
    pub sizes: Vec<usize>,
    /// Integer runs, ordered by size then configured algorithm order.
    pub int_results: Vec<DetailedMetrics>,
    /// Float runs, same order as `int_results`.
    pub float_results: Vec<DetailedMetrics>,
}

impl SweepReport {
    /// Runs for `kind`, in report order.
    pub fn results(&self, kind: ElementKind) -> &[DetailedMetrics] {
        match kind {
            ElementKind::Int => &self.int_results,
            ElementKind::Float => &self.float_results,
        }
    }

    /// One series per algorithm (in configured order), each ordered by
    /// size. This is the shape a line chart of time vs. size consumes.
    pub fn by_algorithm(&self, kind: ElementKind) -> IndexMap<Algorithm, Vec<&DetailedMetrics>> {
        let mut series: IndexMap<Algorithm, Vec<&DetailedMetrics>> = IndexMap::new();
        for m in self.results(kind) {
            series.entry(m.algorithm()).or_default().push(m);
        }
        series
    }
}

enum JobData {
    Int(Vec<i64>),
    Float(Vec<f64>),
}

struct Job {
    index: usize,
    size: usize,
    data: JobData,
}

impl Job {
    fn kind(&self) -> ElementKind {
        match self.data {
            JobData::Int(_) => ElementKind::Int,
            JobData::Float(_) => ElementKind::Float,
        }
    }
}

struct JobResult {
    index: usize,
    kind: ElementKind,
    metrics: Vec<DetailedMetrics>,
}

/// Run every configured algorithm over freshly generated arrays of every
/// configured size, for both element types.
///
/// Validates `config` first. With a fixed `seed` the generated arrays and
/// all counters are reproducible; elapsed times naturally are not.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepReport, ConfigError> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let _span = tracing::info_span!("sweep", seed).entered();
    let started = Instant::now();

    let jobs = generate_jobs(config, seed);
    let job_count = jobs.len();
    let workers = config.resolved_worker_count().min(job_count);
    tracing::info!(
        sizes = ?config.sizes,
        algorithms = config.algorithms.len(),
        jobs = job_count,
        workers,
        "sweep started"
    );

    let (job_tx, job_rx) = crossbeam_channel::bounded::<Job>(job_count);
    let (result_tx, result_rx) = crossbeam_channel::bounded::<JobResult>(job_count);
    for job in jobs {
        tracing::trace!(job = job.index, size = job.size, kind = %job.kind(), "job queued");
        // Capacity equals the job count and the receiver is alive.
        let _ = job_tx.send(job);
    }
    drop(job_tx);

    let runners: Vec<MetricsRunner> = config
        .algorithms
        .iter()
        .copied()
        .map(MetricsRunner::new)
        .collect();

    thread::scope(|scope| -> Result<(), ConfigError> {
        for worker in 0..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            let runners = &runners;
            thread::Builder::new()
                .name(format!("sortviz-sweep-{worker}"))
                .spawn_scoped(scope, move || worker_loop(job_rx, result_tx, runners))
                .map_err(|e| ConfigError::ThreadSpawnFailed {
                    reason: format!("sweep worker {worker}: {e}"),
                })?;
        }
        Ok(())
    })?;
    drop(result_tx);

    let mut batches: Vec<JobResult> = result_rx.iter().collect();
    batches.sort_by_key(|b| b.index);

    let mut int_results = Vec::with_capacity(config.sizes.len() * runners.len());
    let mut float_results = Vec::with_capacity(config.sizes.len() * runners.len());
    for batch in batches {
        match batch.kind {
            ElementKind::Int => int_results.extend(batch.metrics),
            ElementKind::Float => float_results.extend(batch.metrics),
        }
    }

    tracing::info!(
        runs = int_results.len() + float_results.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "sweep finished"
    );

    Ok(SweepReport {
        seed,
        sizes: config.sizes.clone(),
        int_results,
        float_results,
    })
}

/// One int job and one float job per size, in size order. Job indices
/// interleave (`2i` int, `2i + 1` float) so sorting by index restores
/// size order within each element type.
fn generate_jobs(config: &SweepConfig, seed: u64) -> Vec<Job> {
    let mut rng = seeded_rng(seed);
    let mut jobs = Vec::with_capacity(config.sizes.len() * 2);
    for (i, &size) in config.sizes.iter().enumerate() {
        let ints = random_ints(size, config.int_range.clone(), &mut rng);
        let floats = random_floats(size, config.float_range.clone(), &mut rng);
        jobs.push(Job {
            index: 2 * i,
            size,
            data: JobData::Int(ints),
        });
        jobs.push(Job {
            index: 2 * i + 1,
            size,
            data: JobData::Float(floats),
        });
    }
    jobs
}

/// Runs until the job channel is drained and closed.
fn worker_loop(job_rx: Receiver<Job>, result_tx: Sender<JobResult>, runners: &[MetricsRunner]) {
    while let Ok(job) = job_rx.recv() {
        let kind = job.kind();
        let metrics: Vec<DetailedMetrics> = match &job.data {
            JobData::Int(values) => runners.iter().map(|r| r.run(values)).collect(),
            JobData::Float(values) => runners.iter().map(|r| r.run(values)).collect(),
        };
        tracing::debug!(job = job.index, size = job.size, kind = %kind, "job completed");
        let _ = result_tx.send(JobResult {
            index: job.index,
            kind,
            metrics,
        });
    }
}
