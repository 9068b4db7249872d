//! Basic logger usage example
//!
//! Demonstrates synchronous logging to the console with templates, streamed
//! tokens and the rendering options.
//!
//! Run with: cargo run --example basic_usage

use variadic_logger::core::stream::{fixed, hex, quote, setprecision, showbase, yes_no};
use variadic_logger::prelude::*;
use variadic_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Variadic Logger - Basic Usage Example ===\n");

    // Console logger writing Debug and above to stdout
    let logger = Logger::console("basic", LogLevel::Debug);

    println!("1. Templated logging:");
    logger.debug_fmt("{0} {1}! {0}! {0}!", &[&"No", &"way"])?;
    logger.info_fmt("{0:<10}|{1:>8.2f}|{2:#x}", &[&"ratio", &0.4567, &255])?;
    info!(logger, "{0:*^15}", "centered")?;
    warning!(logger, "disk usage {0:.1%}", 0.915)?;

    println!("\n2. Streamed logging:");
    let _ = logger.info() << "user" << quote() << "alice" << "admin:" << yes_no(true);
    let _ = logger.debug() << "mask" << hex() << showbase() << 4095;
    let _ = logger.warning() << "latency" << fixed() << setprecision(3) << 12.5 << "ms";

    println!("\n3. Thresholds and options:");
    logger.set_console_out(LogLevel::Warning);
    logger.info_fmt("hidden below threshold", &[])?;
    logger.set(LogOption::NoTimestamp | LogOption::NoThreadIdTag);
    logger.error_fmt("visible, without timestamp or thread id", &[])?;
    logger.reset();

    println!("\n4. Format errors are returned to the caller:");
    if let Err(e) = logger.critical_fmt("{0:.2}", &[&42]) {
        println!("   {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
