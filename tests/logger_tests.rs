//! Integration tests for fieldlog

use fieldlog::create_file_logger;
use fieldlog::prelude::*;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// In-memory sink sharing its buffer across clones, so a test can hand one
/// clone to a logger and read the output through another.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn buffered_logger(level: Level) -> (StdLogger, SharedBuf) {
    let buf = SharedBuf::default();
    let logger = StdLogger::new(Config {
        level,
        output: Some(Box::new(buf.clone())),
        ..Config::default()
    });
    (logger, buf)
}

// ============================================================================
// Threshold Filtering
// ============================================================================

#[test]
fn test_threshold_filters_lower_levels() {
    let (logger, buf) = buffered_logger(Level::Warn);

    logger.debug("debug entry", &[]);
    logger.info("info entry", &[]);
    assert_eq!(buf.contents(), "", "below-threshold calls must write nothing");

    logger.warn("warn entry", &[]);
    logger.error("error entry", &[]);

    let content = buf.contents();
    assert!(content.contains("[WARN] warn entry"));
    assert!(content.contains("[ERROR] error entry"));
    assert_eq!(content.lines().count(), 2);
}

// ============================================================================
// Line Format
// ============================================================================

#[test]
fn test_line_format_with_fields() {
    let (logger, buf) = buffered_logger(Level::Info);
    logger.info("x", &[Field::new("k", "v")]);

    let content = buf.contents();
    let line = content.strip_suffix('\n').expect("line terminated");
    let (timestamp, rest) = line.split_once(" [").expect("level bracket");

    chrono::DateTime::parse_from_rfc3339(timestamp).expect("RFC 3339 timestamp");
    assert_eq!(rest, "INFO] x {k=v}");
}

#[test]
fn test_line_format_without_fields() {
    let (logger, buf) = buffered_logger(Level::Info);
    logger.info("bare", &[]);

    let content = buf.contents();
    assert!(content.ends_with(" [INFO] bare\n"), "content: {}", content);
    assert!(!content.contains('{'), "no fields suffix when empty");
}

#[test]
fn test_prefix_prepended_verbatim() {
    let buf = SharedBuf::default();
    let logger = StdLogger::new(Config {
        level: Level::Info,
        output: Some(Box::new(buf.clone())),
        time_format: TimestampFormat::Unix,
        prefix: "api ".to_string(),
    });

    logger.info("up", &[]);
    assert!(buf.contents().starts_with("api "), "content: {}", buf.contents());
}

#[test]
fn test_custom_time_format_applied() {
    let buf = SharedBuf::default();
    let logger = StdLogger::new(Config {
        level: Level::Info,
        output: Some(Box::new(buf.clone())),
        time_format: TimestampFormat::Custom("%Y-%m-%d".to_string()),
        ..Config::default()
    });

    logger.info("dated", &[]);

    let content = buf.contents();
    let timestamp = content.split(" [").next().expect("timestamp");
    chrono::NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").expect("date-only timestamp");
}

// ============================================================================
// Field Inheritance (with)
// ============================================================================

#[test]
fn test_with_chaining_preserves_order() {
    let (logger, buf) = buffered_logger(Level::Info);

    let derived = logger
        .with(&[Field::new("a", 1)])
        .with(&[Field::new("b", 2)]);
    derived.info("msg", &[Field::new("c", 3)]);

    assert!(buf.contents().contains("msg {a=1 b=2 c=3}"), "content: {}", buf.contents());
}

#[test]
fn test_with_does_not_mutate_parent() {
    let (logger, buf) = buffered_logger(Level::Info);

    let _derived = logger.with(&[Field::new("child", true)]);
    logger.info("parent entry", &[]);

    let content = buf.contents();
    assert!(content.contains("parent entry\n"));
    assert!(!content.contains("child"));
}

#[test]
fn test_sibling_derivations_are_independent() {
    let (logger, buf) = buffered_logger(Level::Info);

    let left = logger.with(&[Field::new("side", "left")]);
    let right = logger.with(&[Field::new("side", "right")]);

    left.info("from left", &[]);
    right.info("from right", &[]);

    let content = buf.contents();
    assert!(content.contains("from left {side=left}"));
    assert!(content.contains("from right {side=right}"));
}

#[test]
fn test_derived_logger_shares_sink_and_threshold() {
    let (logger, buf) = buffered_logger(Level::Warn);
    let derived = logger.with(&[Field::new("svc", "db")]);

    derived.info("filtered", &[]);
    assert_eq!(buf.contents(), "");

    derived.error("kept", &[]);
    assert!(buf.contents().contains("kept {svc=db}"));
}

// ============================================================================
// Context Bindings (with_context)
// ============================================================================

#[test]
fn test_with_context_fixed_field_order() {
    let (logger, buf) = buffered_logger(Level::Info);

    // Bound in reverse order; emitted order must still be request, user, session
    let ctx = Context::new()
        .with_session_id("sess-789")
        .with_user_id("user-456")
        .with_request_id("req-123");

    logger.with_context(&ctx).info("handled", &[]);

    assert!(
        buf.contents()
            .contains("handled {request_id=req-123 user_id=user-456 session_id=sess-789}"),
        "content: {}",
        buf.contents()
    );
}

#[test]
fn test_with_context_skips_unbound_ids() {
    let (logger, buf) = buffered_logger(Level::Info);

    let ctx = Context::new().with_user_id("user-9");
    logger.with_context(&ctx).info("partial", &[]);

    let content = buf.contents();
    assert!(content.contains("partial {user_id=user-9}"));
    assert!(!content.contains("request_id"));
    assert!(!content.contains("session_id"));
}

#[test]
fn test_with_context_on_empty_context_is_identity() {
    let (logger, buf) = buffered_logger(Level::Info);

    logger.with_context(&Context::new()).info("same", &[]);
    logger.info("same", &[]);

    let content = buf.contents();
    let suffixes: Vec<&str> = content
        .lines()
        .map(|line| line.split_once(" [").expect("level bracket").1)
        .collect();
    assert_eq!(suffixes[0], suffixes[1], "empty context must add no fields");
}

#[test]
fn test_context_fields_precede_call_site_fields() {
    let (logger, buf) = buffered_logger(Level::Info);

    let ctx = Context::new().with_request_id("req-5");
    logger
        .with_context(&ctx)
        .info("mix", &[Field::new("extra", 1)]);

    assert!(buf.contents().contains("mix {request_id=req-5 extra=1}"));
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_logging_produces_intact_lines() {
    let (logger, buf) = buffered_logger(Level::Info);
    let logger = Arc::new(logger);

    let threads = 8;
    let per_thread = 50;
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..per_thread {
                    logger.info(
                        &format!("thread-{} entry-{}", t, i),
                        &[Field::new("thread", t as i64)],
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let content = buf.contents();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), threads * per_thread);
    for line in &lines {
        assert!(line.contains(" [INFO] thread-"), "corrupt line: {}", line);
        assert!(line.ends_with('}'), "truncated line: {}", line);
    }
    for t in 0..threads {
        for i in 0..per_thread {
            assert!(content.contains(&format!("thread-{} entry-{}", t, i)));
        }
    }
}

#[test]
fn test_concurrent_derivation_from_shared_parent() {
    let (logger, buf) = buffered_logger(Level::Info);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                let derived = logger.with(&[Field::new("worker", t as i64)]);
                derived.info("derived entry", &[]);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let content = buf.contents();
    for t in 0..4 {
        assert!(content.contains(&format!("derived entry {{worker={}}}", t)));
    }
}

// ============================================================================
// Fan-out
// ============================================================================

#[test]
fn test_fan_out_broadcasts_to_all_members() {
    let (a, buf_a) = buffered_logger(Level::Info);
    let (b, buf_b) = buffered_logger(Level::Info);
    let multi = MultiLogger::new(vec![Box::new(a), Box::new(b)]);

    multi.info("everywhere", &[Field::new("n", 1)]);

    assert!(buf_a.contents().contains("[INFO] everywhere {n=1}"));
    assert!(buf_b.contents().contains("[INFO] everywhere {n=1}"));
}

#[test]
fn test_fan_out_members_keep_own_thresholds() {
    let (verbose, buf_verbose) = buffered_logger(Level::Debug);
    let (quiet, buf_quiet) = buffered_logger(Level::Error);
    let multi = MultiLogger::new(vec![Box::new(verbose), Box::new(quiet)]);

    multi.debug("detail", &[]);
    multi.error("problem", &[]);

    assert!(buf_verbose.contents().contains("[DEBUG] detail"));
    assert!(buf_verbose.contents().contains("[ERROR] problem"));
    assert!(!buf_quiet.contents().contains("detail"));
    assert!(buf_quiet.contents().contains("[ERROR] problem"));
}

#[test]
fn test_fan_out_fatal_terminates_exactly_once_via_last_member() {
    let exits = Arc::new(AtomicUsize::new(0));

    let make = |buf: &SharedBuf| {
        let counter = Arc::clone(&exits);
        StdLogger::new(Config {
            level: Level::Info,
            output: Some(Box::new(buf.clone())),
            ..Config::default()
        })
        .with_fatal_handler(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    };

    let buf_a = SharedBuf::default();
    let buf_b = SharedBuf::default();
    let multi = MultiLogger::new(vec![Box::new(make(&buf_a)), Box::new(make(&buf_b))]);

    multi.fatal("going down", &[]);

    assert!(buf_a.contents().contains("[ERROR] going down"));
    assert!(!buf_a.contents().contains("FATAL"));
    assert!(buf_b.contents().contains("[FATAL] going down"));
    assert_eq!(exits.load(Ordering::SeqCst), 1, "fatal effect must run once");
}

#[test]
fn test_fan_out_derivation_reaches_every_member() {
    let (a, buf_a) = buffered_logger(Level::Info);
    let (b, buf_b) = buffered_logger(Level::Info);
    let multi = MultiLogger::new(vec![Box::new(a), Box::new(b)]);

    let ctx = Context::new().with_request_id("req-77");
    let scoped = multi.with(&[Field::new("svc", "api")]).with_context(&ctx);
    scoped.warn("scoped entry", &[]);

    for buf in [&buf_a, &buf_b] {
        assert!(
            buf.contents().contains("scoped entry {svc=api request_id=req-77}"),
            "content: {}",
            buf.contents()
        );
    }
}

// ============================================================================
// Factory / File Sink
// ============================================================================

#[test]
fn test_file_logger_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("app.log");

    let logger = create_file_logger(&path, Level::Info).expect("file logger");
    logger.info("to disk", &[Field::new("run", 1)]);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[INFO] to disk {run=1}"));
}

#[test]
fn test_file_logger_appends_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.log");

    create_file_logger(&path, Level::Info)
        .unwrap()
        .info("first", &[]);
    create_file_logger(&path, Level::Info)
        .unwrap()
        .info("second", &[]);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("first"));
    assert!(content.contains("second"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_file_logger_open_failure_is_io_error() {
    let dir = TempDir::new().unwrap();
    let blocking_file = dir.path().join("occupied");
    std::fs::write(&blocking_file, b"not a directory").unwrap();

    // Parent path component is a regular file, so directory creation fails
    let err = create_file_logger(blocking_file.join("app.log"), Level::Info).unwrap_err();
    assert!(matches!(err, LoggerError::Io { .. }));
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_combined_logger_writes_file_member() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("combined.log");

    let multi = LoggerFactory::new()
        .combined(&path, Level::Error, Level::Debug)
        .expect("combined logger");

    multi.debug("verbose detail", &[]);
    multi.info("routine", &[]);

    // File member threshold is Debug, so both entries land in the file
    // regardless of the console member's stricter threshold
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[DEBUG] verbose detail"));
    assert!(content.contains("[INFO] routine"));
}

#[test]
fn test_factory_settings_apply_to_built_loggers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefixed.log");

    let logger = LoggerFactory::new()
        .with_prefix("worker ")
        .with_time_format(TimestampFormat::Unix)
        .file(&path, Level::Info)
        .unwrap();
    logger.info("tick", &[]);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("worker "), "content: {}", content);
}

// ============================================================================
// Writer Adapter
// ============================================================================

#[test]
fn test_writer_adapter_forwards_lines() {
    let (logger, buf) = buffered_logger(Level::Info);
    let mut writer = LoggerFactory::new().writer(Box::new(logger), Level::Warn);

    writeln!(writer, "from a byte stream").unwrap();

    let content = buf.contents();
    assert!(content.contains("[WARN] from a byte stream"));
    // The adapter strips the writeln! terminator; the logger adds its own
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_writer_adapter_consumes_all_bytes() {
    let (logger, _buf) = buffered_logger(Level::Info);
    let mut writer = LogWriter::new(Box::new(logger), Level::Info);

    let payload = b"partial writes never happen";
    assert_eq!(writer.write(payload).unwrap(), payload.len());
    writer.flush().unwrap();
}

#[test]
fn test_writer_adapter_handles_invalid_utf8() {
    let (logger, buf) = buffered_logger(Level::Info);
    let mut writer = LogWriter::new(Box::new(logger), Level::Info);

    let bytes = [b'o', b'k', 0xFF, b'!'];
    assert_eq!(writer.write(&bytes).unwrap(), bytes.len());

    let content = buf.contents();
    assert!(content.contains("ok"), "lossy decode keeps valid text: {}", content);
}

#[test]
fn test_writer_adapter_filtered_level_stays_silent() {
    let (logger, buf) = buffered_logger(Level::Error);
    let mut writer = LogWriter::new(Box::new(logger), Level::Debug);

    writeln!(writer, "below threshold").unwrap();
    assert_eq!(buf.contents(), "");
}

// ============================================================================
// Default Logger Slot
// ============================================================================

// Single test fn: the slot is process-wide state and cargo runs test fns on
// parallel threads, so splitting these assertions would race on the slot.
#[test]
fn test_default_logger_slot() {
    let initial = fieldlog::default_logger();
    initial.debug("never written, default threshold is info", &[]);

    let buf = SharedBuf::default();
    let replacement = StdLogger::new(Config {
        level: Level::Debug,
        output: Some(Box::new(buf.clone())),
        ..Config::default()
    });
    fieldlog::set_default_logger(Arc::new(replacement));

    fieldlog::global::debug("now visible", &[]);
    fieldlog::global::info("routine", &[Field::new("n", 1)]);
    fieldlog::global::warn("careful", &[]);
    fieldlog::global::error("broken", &[]);

    let ctx = Context::new().with_request_id("req-g");
    fieldlog::with_context(&ctx).info("scoped", &[]);

    let content = buf.contents();
    assert!(content.contains("[DEBUG] now visible"));
    assert!(content.contains("[INFO] routine {n=1}"));
    assert!(content.contains("[WARN] careful"));
    assert!(content.contains("[ERROR] broken"));
    assert!(content.contains("scoped {request_id=req-g}"));

    // Handles taken before the swap keep their original sink
    initial.error("through the old handle", &[]);
    assert!(!buf.contents().contains("through the old handle"));
}
