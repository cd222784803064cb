//! Combined console + file logging example
//!
//! Demonstrates the factory's combined constructor, per-member thresholds,
//! and the writer adapter.
//!
//! Run with: cargo run --example combined_logging

use fieldlog::prelude::*;
use std::io::Write;

fn main() -> Result<()> {
    println!("=== fieldlog - Combined Logging Example ===\n");

    let log_path = std::env::temp_dir().join("fieldlog-demo").join("app.log");

    // Console shows Info and above; the file captures everything.
    // The file member is last, so it would receive the real fatal call.
    let logger = LoggerFactory::new().combined(&log_path, Level::Info, Level::Debug)?;

    println!("1. Broadcasting to console and {}:", log_path.display());
    logger.debug("fine-grained detail (file only)", &[]);
    logger.info("service started", &[Field::new("port", 8080)]);
    logger.warn("cache miss rate high", &[Field::new("rate", 0.37)]);

    println!("\n2. Derived loggers fan out too:");
    let ctx = Context::new().with_request_id("req-900");
    let scoped = logger.with_context(&ctx);
    scoped.error("upstream timeout", &[Field::new("upstream", "payments")]);

    println!("\n3. Writer adapter for byte-stream interop:");
    let console = LoggerFactory::new().console(Level::Info);
    let mut writer = LoggerFactory::new().writer(Box::new(console), Level::Info);
    writeln!(writer, "written through io::Write").expect("adapter never fails");

    let recorded = std::fs::read_to_string(&log_path).expect("log file readable");
    println!("\n4. File captured {} lines", recorded.lines().count());

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
