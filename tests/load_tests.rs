#[cfg(test)]
mod tests {
    use sync_pool::{
    crack::{digest_of, recover_password},
    pool::{
        Config,
        ThreadPool,
        ThreadPoolInner,
        },
    };
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        thread,
        time::Instant,
    };

    fn measure<T>(name: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        println!("✓ {}: {:?}", name, start.elapsed());
        result
    }

    #[test]
    fn load_test_1_many_small_tasks() {
        println!("\n=== LOAD TEST 1: 100k мелких задач ===");
        let pool = ThreadPoolInner::with_config(Config::default()).unwrap();
        let counter = Arc::new(AtomicUsize::new(0));

        measure("100k tasks", || {
            for _ in 0..100_000 {
                let counter = Arc::clone(&counter);
                pool.submit(move |_| {
                    counter.fetch_add(1, Ordering::Relaxed);
                });
            }
            pool.join();
        });

        assert_eq!(counter.load(Ordering::Relaxed), 100_000);
        println!("  Выполнено: {}", counter.load(Ordering::Relaxed));
    }

    #[test]
    fn load_test_2_recursive_fanout() {
        println!("\n=== LOAD TEST 2: Рекурсивный fanout 10^4 ===");
        fn fanout(pool: &ThreadPool, counter: &Arc<AtomicUsize>, depth: usize) {
            counter.fetch_add(1, Ordering::Relaxed);
            if depth == 0 {
                return;
            }
            for _ in 0..10 {
                let counter = Arc::clone(counter);
                pool.submit(move |pool| fanout(pool, &counter, depth - 1));
            }
        }

        let pool = ThreadPoolInner::with_config(Config::cpu_bound()).unwrap();
        let counter = Arc::new(AtomicUsize::new(0));

        measure("fanout depth 4", || {
            let counter = Arc::clone(&counter);
            pool.submit(move |pool| fanout(pool, &counter, 4));
            pool.join();
        });

        // 1 + 10 + 100 + 1000 + 10000
        assert_eq!(counter.load(Ordering::Relaxed), 11_111);
        println!("  Выполнено: {}", counter.load(Ordering::Relaxed));
    }

    #[test]
    fn load_test_3_many_producers() {
        println!("\n=== LOAD TEST 3: 8 продюсеров по 10k задач ===");
        const PRODUCERS: usize = 8;
        const TASKS_PER_PRODUCER: usize = 10_000;

        let pool = ThreadPoolInner::with_config(Config::default()).unwrap();
        let counter = Arc::new(AtomicUsize::new(0));
        let (done_tx, done_rx) = crossbeam::channel::bounded::<()>(PRODUCERS);

        pool.submit(move |_| {
            for _ in 0..PRODUCERS {
                done_rx.recv().unwrap();
            }
        });

        measure("8x10k producer tasks", || {
            let producers: Vec<_> = (0..PRODUCERS)
                .map(|_| {
                    let pool = pool.clone();
                    let counter = Arc::clone(&counter);
                    let done_tx = done_tx.clone();
                    thread::spawn(move || {
                        for _ in 0..TASKS_PER_PRODUCER {
                            let counter = Arc::clone(&counter);
                            pool.submit(move |_| {
                                counter.fetch_add(1, Ordering::Relaxed);
                            });
                        }
                        done_tx.send(()).unwrap();
                    })
                })
                .collect();

            pool.join();
            for producer in producers {
                producer.join().unwrap();
            }
        });

        assert_eq!(
            counter.load(Ordering::Relaxed),
            PRODUCERS * TASKS_PER_PRODUCER
        );
        println!("  Выполнено: {}", counter.load(Ordering::Relaxed));
    }

    #[test]
    fn load_test_4_password_recovery() {
        println!("\n=== LOAD TEST 4: Подбор пятизначного пароля ===");
        let target = digest_of("31415");

        let recovered = measure("crack 5 digits", || {
            recover_password(num_cpus::get(), target, 5).unwrap()
        });

        assert_eq!(recovered.as_deref(), Some("31415"));
        println!("  Найдено: {:?}", recovered);
    }
}
