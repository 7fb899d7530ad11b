// THEORY:
// The `parallel_pipeline` module is the concurrent sibling of `pipeline`. The
// per-box scans of a batch are embarrassingly parallel — every scan only
// reads the shared channel planes and writes to its own private output — so
// the K scans can be spread across a worker pool with no synchronization
// beyond result collection.
//
// Key architectural principles:
// 1.  **Same contract as the synchronous path**: Validation happens up front
//     on the caller's task, the whole batch fails with no partial results,
//     and the output sequence matches bound-set input order exactly. Only
//     the wall-clock time changes.
// 2.  **Worker pool with a dispatcher**: Tasks flow through an unbounded
//     channel to a dispatcher that deals them round-robin to long-lived
//     workers. Each task carries a oneshot sender for its result.
// 3.  **Order restoration by construction**: The caller keeps the oneshot
//     receivers in dispatch order and awaits them in that order, so result
//     ordering never depends on worker scheduling.
// 4.  **Shared planes behind an Arc**: The planes are marshaled once and
//     shared read-only; no worker clones the pixel data.
//
// The pool lives as long as the pipeline. Dropping the pipeline closes the
// task channel, which winds down the dispatcher and then the workers.

use crate::core_modules::bound_box::{BoundBox, BoundSet};
use crate::core_modules::error::ScanError;
use crate::core_modules::hsv_planes::hsv_planes::HsvPlanes;
use crate::core_modules::range_scanner::{range_scanner, ScanResult};
use crate::pipeline::ScanConfig;
use futures::future;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Upper limit on pool size; beyond this the scans are memory-bandwidth
/// bound and extra workers only add scheduling noise.
const MAX_WORKER_POOL_SIZE: usize = 8;

struct ScanTask {
    planes: Arc<HsvPlanes>,
    bound_box: BoundBox,
    check_value: bool,
    result_sender: oneshot::Sender<ScanResult>,
}

struct WorkerPool {
    task_sender: mpsc::UnboundedSender<ScanTask>,
    #[allow(dead_code)]
    workers: Vec<tokio::task::JoinHandle<()>>,
}

impl WorkerPool {
    fn new(worker_count: usize) -> Self {
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<ScanTask>();
        let mut workers = Vec::with_capacity(worker_count);

        // Create a single dispatcher that distributes tasks to workers.
        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..worker_count)
            .map(|_| mpsc::unbounded_channel::<ScanTask>())
            .unzip();

        // Spawn dispatcher.
        tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                let _ = worker_senders[worker_idx].send(task);
                worker_idx = (worker_idx + 1) % worker_senders.len();
            }
        });

        // Spawn workers. Each scan is CPU-bound, so it runs under
        // `block_in_place` to keep the runtime's async threads responsive.
        for mut worker_receiver in worker_receivers {
            let worker = tokio::spawn(async move {
                while let Some(task) = worker_receiver.recv().await {
                    let result = tokio::task::block_in_place(|| {
                        range_scanner::scan(&task.planes, &task.bound_box, task.check_value)
                    });
                    let _ = task.result_sender.send(result);
                }
            });
            workers.push(worker);
        }

        Self {
            task_sender,
            workers,
        }
    }

    fn submit(&self, task: ScanTask) -> Result<(), ScanError> {
        self.task_sender
            .send(task)
            .map_err(|_| ScanError::WorkerPoolClosed)
    }
}

/// A `ScanPipeline` equivalent that fans the per-box scans of a batch out
/// across a tokio worker pool.
pub struct ParallelScanPipeline {
    config: ScanConfig,
    worker_pool: WorkerPool,
}

impl ParallelScanPipeline {
    /// Builds the pipeline with a pool sized to the host's CPU count.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: ScanConfig) -> Self {
        Self::with_workers(config, num_cpus::get().clamp(1, MAX_WORKER_POOL_SIZE))
    }

    pub fn with_workers(config: ScanConfig, worker_count: usize) -> Self {
        Self {
            config,
            worker_pool: WorkerPool::new(worker_count.max(1)),
        }
    }

    pub fn config(&self) -> ScanConfig {
        self.config
    }

    /// Classifies the planes against every box of the set concurrently.
    ///
    /// Identical in output — order and content — to the synchronous
    /// `ScanPipeline::scan_batch` over the same inputs.
    pub async fn scan_batch(
        &self,
        planes: Arc<HsvPlanes>,
        bound_set: &BoundSet,
    ) -> Result<Vec<ScanResult>, ScanError> {
        bound_set.validate(self.config.check_value)?;
        if planes.is_empty() {
            return Err(ScanError::EmptyPlanes);
        }

        let mut result_receivers = Vec::with_capacity(bound_set.len());
        for bound_box in &bound_set.boxes {
            let (result_sender, result_receiver) = oneshot::channel();
            self.worker_pool.submit(ScanTask {
                planes: Arc::clone(&planes),
                bound_box: bound_box.clone(),
                check_value: self.config.check_value,
                result_sender,
            })?;
            result_receivers.push(result_receiver);
        }

        // Await in dispatch order so the output lines up with the input set.
        let results = future::join_all(result_receivers).await;
        results
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ScanError::WorkerPoolClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::spectrums;
    use crate::pipeline::ScanPipeline;

    fn striped_planes() -> Arc<HsvPlanes> {
        let pixel_total = 64;
        let hue: Vec<f64> = (0..pixel_total)
            .map(|i| i as f64 / pixel_total as f64)
            .collect();
        let saturation = vec![0.5; pixel_total];
        let value: Vec<f64> = (0..pixel_total)
            .map(|i| 1.0 - i as f64 / pixel_total as f64)
            .collect();
        Arc::new(HsvPlanes::new(hue, saturation, value, 8).expect("valid planes"))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn parallel_batch_matches_synchronous_batch() {
        let config = ScanConfig { check_value: true };
        let planes = striped_planes();
        let bound_set = spectrums::default_spectrums();

        let synchronous = ScanPipeline::new(config)
            .scan_batch(&planes, &bound_set)
            .expect("valid batch");
        let parallel = ParallelScanPipeline::new(config)
            .scan_batch(Arc::clone(&planes), &bound_set)
            .await
            .expect("valid batch");

        assert_eq!(parallel, synchronous);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn results_keep_input_order_with_more_boxes_than_workers() {
        // Distinguishable boxes: each matches a different hue stripe, so any
        // reordering would be visible in the counts.
        let planes = striped_planes();
        let boxes: Vec<BoundBox> = (0..16)
            .map(|stripe| {
                BoundBox::hs(
                    [stripe as f64 / 16.0, 0.0],
                    [(stripe + 1) as f64 / 16.0 - 1e-9, 1.0],
                )
            })
            .collect();
        let bound_set = BoundSet::new(boxes);

        let pipeline =
            ParallelScanPipeline::with_workers(ScanConfig { check_value: false }, 2);
        let parallel = pipeline
            .scan_batch(Arc::clone(&planes), &bound_set)
            .await
            .expect("valid batch");

        let synchronous = ScanPipeline::new(pipeline.config())
            .scan_batch(&planes, &bound_set)
            .expect("valid batch");
        assert_eq!(parallel, synchronous);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn validation_failures_surface_before_dispatch() {
        let pipeline = ParallelScanPipeline::new(ScanConfig { check_value: true });
        let bound_set = BoundSet::new(vec![BoundBox::hs([0.0, 0.0], [1.0, 1.0])]);

        let result = pipeline.scan_batch(striped_planes(), &bound_set).await;
        assert!(matches!(
            result,
            Err(ScanError::InvalidBoundShape { index: 0, .. })
        ));
    }
}
