/// Снимок состояния пула на момент вызова `metrics()`
#[derive(Debug, Clone)]
pub struct PoolMetrics {
    pub queued_tasks: usize,
    pub in_flight: usize,
    pub worker_count: usize,
}

impl PoolMetrics {
    /// Пул простаивает: очередь пуста и ни одна задача не выполняется
    pub fn is_idle(&self) -> bool {
        self.queued_tasks == 0 && self.in_flight == 0
    }

    /// Задачи, уже забранные воркерами, но еще не завершенные
    pub fn running_tasks(&self) -> usize {
        self.in_flight - self.queued_tasks
    }

    pub fn saturation(&self) -> f64 {
        if self.worker_count == 0 {
            return 0.0;
        }
        self.running_tasks() as f64 / self.worker_count as f64
    }
}
