//! Basic logger usage example
//!
//! Demonstrates leveled logging, structured fields, field inheritance, and
//! context bindings.
//!
//! Run with: cargo run --example basic_usage

use fieldlog::prelude::*;

fn main() {
    println!("=== fieldlog - Basic Usage Example ===\n");

    // A logger writing to standard out with a Debug threshold
    let logger = StdLogger::new(Config {
        level: Level::Debug,
        ..Config::default()
    });

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message", &[]);
    logger.info("This is an info message", &[]);
    logger.warn("This is a warning message", &[]);
    logger.error("This is an error message", &[]);

    println!("\n2. Structured fields:");
    logger.info(
        "user logged in",
        &[Field::new("user", "alice"), Field::new("attempts", 1)],
    );

    println!("\n3. Field inheritance:");
    let service = logger.with(&[Field::new("service", "billing")]);
    service.info("invoice created", &[Field::new("invoice_id", "inv-2041")]);
    service.warn("payment retry scheduled", &[Field::new("delay_s", 30)]);

    println!("\n4. Context bindings:");
    let ctx = Context::new()
        .with_request_id("req-123")
        .with_user_id("user-456")
        .with_session_id("sess-789");
    let scoped = logger.with_context(&ctx);
    scoped.info("request handled", &[Field::new("status", 200)]);

    println!("\n5. Threshold filtering (Info threshold hides debug):");
    let quiet = LoggerFactory::new().console(Level::Info);
    quiet.debug("Debug message (hidden)", &[]);
    quiet.info("Info message (visible)", &[]);

    println!("\n=== Example completed successfully! ===");
}
