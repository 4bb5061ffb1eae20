use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("thread pool requires at least one worker")]
    NoWorkers,
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}
