use sync_pool::crack::{digest_of, recover_password};
use std::env;
use std::time::Instant;
use tracing_subscriber::EnvFilter;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let secret = env::args().nth(1).unwrap_or_else(|| "2718".to_string());
    let workers = env::args()
        .nth(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(num_cpus::get);

    let target = digest_of(&secret);
    let now = Instant::now();
    match recover_password(workers, target, secret.len()).unwrap() {
        Some(password) => println!("{}", password),
        None => println!("not found"),
    }
    println!("elapsed: {:?}", now.elapsed());
}
