use super::{
    errors::PoolError,
    model::PoolMetrics,
};
use std::{
    collections::VecDeque,
    sync::{Arc, Condvar, Mutex},
    thread::{self, JoinHandle},
};
use tracing::{debug, trace};


/// Конфигурация пула потоков
#[derive(Debug, Clone)]
pub struct Config {
    pub worker_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            worker_count: num_cpus::get(),
        }
    }
}

impl Config {
    pub fn cpu_bound() -> Self {
        Self {
            worker_count: num_cpus::get(),
        }
    }

    pub fn single_thread() -> Self {
        Self { worker_count: 1 }
    }
}


/// Единица работы: closure, получающая handle пула, чтобы сабмитить новые задачи
pub type Task = Box<dyn FnOnce(&ThreadPool) + Send + 'static>;

pub type ThreadPool = Arc<ThreadPoolInner>;

// Все разделяемое состояние под одним mutex; условия сигналятся под ним же.
struct PoolState {
    queue: VecDeque<Task>,
    // инкремент при enqueue, декремент после выполнения: покрывает и очередь,
    // и уже выполняющиеся задачи, иначе submit-then-join сообщил бы ложный idle
    in_flight: usize,
    shutting_down: bool,
}

/// Основной пул: фиксированное число долгоживущих воркеров над общей FIFO очередью
pub struct ThreadPoolInner {
    worker_count: usize,
    state: Mutex<PoolState>,
    non_empty: Condvar,
    became_empty: Condvar,
    idle: Condvar,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl ThreadPoolInner {
    pub fn new(worker_count: usize) -> Result<ThreadPool, PoolError> {
        Self::with_config(Config { worker_count })
    }

    pub fn with_config(config: Config) -> Result<ThreadPool, PoolError> {
        if config.worker_count == 0 {
            return Err(PoolError::NoWorkers);
        }

        let pool = Arc::new(ThreadPoolInner {
            worker_count: config.worker_count,
            state: Mutex::new(PoolState {
                queue: VecDeque::new(),
                in_flight: 0,
                shutting_down: false,
            }),
            non_empty: Condvar::new(),
            became_empty: Condvar::new(),
            idle: Condvar::new(),
            workers: Mutex::new(Vec::with_capacity(config.worker_count)),
        });

        // Запускаем воркеры; при неудаче гасим уже запущенные и возвращаем ошибку
        for id in 0..config.worker_count {
            let pool_clone = pool.clone();
            let spawned = thread::Builder::new()
                .name(format!("pool-worker-{}", id))
                .spawn(move || pool_clone.worker_loop(id));
            match spawned {
                Ok(handle) => pool.workers.lock().unwrap().push(handle),
                Err(err) => {
                    pool.abort_startup();
                    return Err(PoolError::Spawn(err));
                }
            }
        }

        debug!(workers = config.worker_count, "thread pool started");
        Ok(pool)
    }

    /// Поставить задачу в очередь. Никогда не блокируется и не ждет выполнения;
    /// можно вызывать из любого потока, в том числе из тела выполняющейся задачи.
    ///
    /// После возврата из `join` пул мертв: дальнейшие submit нарушают контракт.
    pub fn submit<F>(&self, task: F)
    where
        F: FnOnce(&ThreadPool) + Send + 'static,
    {
        self.push_task(Box::new(task));
    }

    #[inline]
    fn push_task(&self, task: Task) {
        let mut state = self.state.lock().unwrap();
        let was_empty = state.queue.is_empty();
        state.queue.push_back(task);
        state.in_flight += 1;
        // каждый submit добавляет ровно одну единицу работы, будим одного воркера
        if was_empty {
            self.non_empty.notify_one();
        }
    }

    // Тело воркера. Выход только когда начался shutdown и не осталось in-flight задач.
    fn worker_loop(self: Arc<Self>, id: usize) {
        trace!(worker = id, "worker started");
        loop {
            let mut state = self.state.lock().unwrap();
            while state.queue.is_empty() {
                if state.shutting_down && state.in_flight == 0 {
                    drop(state);
                    trace!(worker = id, "worker terminated");
                    return;
                }
                // условие перепроверяется после каждого пробуждения
                state = self.non_empty.wait(state).unwrap();
            }

            let task = state.queue.pop_front().unwrap();
            if state.queue.is_empty() {
                self.became_empty.notify_one();
            }
            drop(state);

            // выполняем без lock, тело задачи может реентерабельно звать submit
            task(&self);

            let mut state = self.state.lock().unwrap();
            state.in_flight -= 1;
            if state.in_flight == 0 {
                self.idle.notify_all();
            }
        }
    }

    /// Протокол остановки: дождаться опустошения очереди, затем завершения всех
    /// in-flight задач (включая те, что они успели насабмитить), после чего
    /// разбудить и присоединить всех воркеров. Вызывается ровно один раз,
    /// потоком-владельцем пула, не из тела задачи.
    pub fn join(&self) {
        let mut state = self.state.lock().unwrap();
        while !state.queue.is_empty() {
            state = self.became_empty.wait(state).unwrap();
        }
        state.shutting_down = true;
        debug!("queue drained, waiting for in-flight tasks");
        while state.in_flight > 0 {
            state = self.idle.wait(state).unwrap();
        }
        self.non_empty.notify_all();
        drop(state);

        let handles = std::mem::take(&mut *self.workers.lock().unwrap());
        for handle in handles {
            let _ = handle.join();
        }
        debug!("thread pool stopped");
    }

    // Откат частично собранного пула, если очередной spawn не удался.
    fn abort_startup(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.shutting_down = true;
        }
        self.non_empty.notify_all();
        let handles = std::mem::take(&mut *self.workers.lock().unwrap());
        for handle in handles {
            let _ = handle.join();
        }
    }

    #[inline]
    pub fn metrics(&self) -> PoolMetrics {
        let state = self.state.lock().unwrap();
        PoolMetrics {
            queued_tasks: state.queue.len(),
            in_flight: state.in_flight,
            worker_count: self.worker_count,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }
}
