//! Синхронный thread pool фиксированного размера на mutex + condition variables
//!
//! # Features
//! - FIFO очередь задач без ограничения размера
//! - Рекурсивный submit: задача может порождать новые задачи
//! - Graceful shutdown: join дожидается опустошения очереди и всех in-flight задач
//! - Без busy-waiting: все ожидания через condition variables
//! - Workload-пример: подбор пароля по SHA-256 хешу

pub mod crack;
pub mod errors;
pub mod model;
pub mod pool;

pub use pool::{ThreadPoolInner, ThreadPool, Config, Task};
