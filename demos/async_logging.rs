//! Async logging example
//!
//! Demonstrates the background writer and the named logger registry with
//! several producer threads.
//!
//! Run with: cargo run --example async_logging

use std::thread;
use std::time::Duration;
use variadic_logger::prelude::*;
use variadic_logger::{get_logger, set_logger};

fn main() -> Result<()> {
    println!("=== Variadic Logger - Async Logging Example ===\n");

    // Only one manager may be live; its writer thread does all sink I/O
    let manager = LogManager::new()?;

    println!("1. Registry loggers are created on first use:");
    let app = get_logger("app")?;
    app.info_fmt("registry has {0} logger(s)", &[&manager.logger_names().len()])?;

    println!("\n2. Replacing a registered logger:");
    let errors = Logger::console_err("app", LogLevel::Warning);
    errors.set(LogOption::NoThreadIdTag);
    set_logger(&errors)?;
    get_logger("app")?.warning_fmt("now routed to stderr", &[])?;

    println!("\n3. Multi-threaded logging:");
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            thread::spawn(move || -> Result<()> {
                let logger = get_logger(&format!("worker-{}", worker))?;
                for i in 0..5 {
                    let _ = logger.info() << "step" << i << "of" << 5;
                    thread::sleep(Duration::from_millis(1));
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        if let Ok(Err(e)) = handle.join() {
            eprintln!("worker failed: {}", e);
        }
    }

    println!("\n4. Shutdown drains the queue:");
    let metrics = manager.metrics().clone();
    drop(manager);
    println!(
        "   enqueued before shutdown: {}, batches: {}",
        metrics.enqueued(),
        metrics.batches()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
