//! Подбор пароля по SHA-256 хешу поверх пула: рекурсивно расширяющиеся задачи
//!
//! Каждая задача проверяет одного кандидата и, если он не подошел, сабмитит
//! по одной задаче на каждую цифру-продолжение. Найденный пароль уходит
//! владельцу через канал; атомарный stop-флаг обрывает дальнейшее расширение,
//! так что очередь быстро дорабатывается вхолостую и `join` возвращается.

use super::{
    errors::PoolError,
    pool::{ThreadPool, ThreadPoolInner},
};
use crossbeam::channel::{bounded, Sender};
use sha2::{Digest, Sha256};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tracing::debug;

const ALPHABET: &[u8] = b"0123456789";

// Общее read-only состояние поиска; кандидаты принадлежат своим задачам.
struct Search {
    target: [u8; 32],
    max_len: usize,
    found: Sender<String>,
    stop: AtomicBool,
}

pub fn digest_of(password: &str) -> [u8; 32] {
    Sha256::digest(password.as_bytes()).into()
}

fn test_candidate(pool: &ThreadPool, search: &Arc<Search>, candidate: String) {
    if search.stop.load(Ordering::Relaxed) {
        return;
    }

    if Sha256::digest(candidate.as_bytes()).as_slice() == search.target.as_slice() {
        debug!(candidate = %candidate, "password recovered");
        search.stop.store(true, Ordering::Relaxed);
        let _ = search.found.try_send(candidate);
        return;
    }

    if candidate.len() >= search.max_len {
        return;
    }

    for &digit in ALPHABET {
        let mut next = String::with_capacity(candidate.len() + 1);
        next.push_str(&candidate);
        next.push(digit as char);
        let search = Arc::clone(search);
        pool.submit(move |pool| test_candidate(pool, &search, next));
    }
}

/// Перебирает строки из цифр длиной до `max_len` включительно и возвращает ту,
/// чей SHA-256 совпал с `target`, либо `None`, если пространство исчерпано.
pub fn recover_password(
    worker_count: usize,
    target: [u8; 32],
    max_len: usize,
) -> Result<Option<String>, PoolError> {
    let pool = ThreadPoolInner::new(worker_count)?;
    let (found_tx, found_rx) = bounded(1);
    let search = Arc::new(Search {
        target,
        max_len,
        found: found_tx,
        stop: AtomicBool::new(false),
    });

    {
        let search = Arc::clone(&search);
        pool.submit(move |pool| test_candidate(pool, &search, String::new()));
    }
    pool.join();

    Ok(found_rx.try_recv().ok())
}
