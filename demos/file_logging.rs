//! File logging example
//!
//! Demonstrates file sinks, the builder, and loading a logger from JSON.
//!
//! Run with: cargo run --example file_logging

use variadic_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Variadic Logger - File Logging Example ===\n");

    println!("1. File sink through the builder:");
    let logger = Logger::builder()
        .name("files")
        .console_err(LogLevel::Error)
        .file("app.log", LogLevel::Info)
        .timestamp_format(TimestampFormat::Millis)
        .build()?;

    for i in 0..5 {
        logger.info_fmt("processing item {0:>3}", &[&i])?;
    }
    logger.error_fmt("failed to process item {0}", &[&5])?;
    println!("   Wrote 6 lines to app.log");

    println!("\n2. add_file reports failures without panicking:");
    if !logger.add_file("/nonexistent/dir/app.log", LogLevel::Info) {
        println!("   Could not open /nonexistent/dir/app.log");
    }

    println!("\n3. Logger from a JSON configuration:");
    let config = LoggerConfig::from_json(
        r#"{
            "name": "configured",
            "console_out": "Info",
            "files": [{ "path": "configured.log", "level": "Debug" }],
            "options": ["NoThreadIdTag"]
        }"#,
    )?;
    let configured = Logger::from_config(&config)?;
    configured.debug_fmt("only in configured.log", &[])?;
    configured.info_fmt("in configured.log and on stdout", &[])?;
    configured.flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
