//! Fan-out logger broadcasting to multiple destinations

use super::{context::Context, field::Field, level::Level, logger::Logger};

/// Broadcasts every call to all member loggers in list order.
///
/// Fatal entries are split so the fatal effect runs exactly once no matter
/// how many members there are: every member except the last receives the
/// entry at [`Level::Error`], and only the last member receives the real
/// fatal call. Arrange the most durable destination last so the final entry
/// reaches it before the process exits. With no members every call,
/// including fatal, is a no-op.
pub struct MultiLogger {
    loggers: Vec<Box<dyn Logger>>,
}

impl MultiLogger {
    pub fn new(loggers: Vec<Box<dyn Logger>>) -> Self {
        Self { loggers }
    }

    /// Number of member loggers
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl Logger for MultiLogger {
    fn log(&self, level: Level, message: &str, fields: &[Field]) {
        if level == Level::Fatal {
            if let Some((last, rest)) = self.loggers.split_last() {
                for logger in rest {
                    logger.log(Level::Error, message, fields);
                }
                last.log(Level::Fatal, message, fields);
            }
            return;
        }

        for logger in &self.loggers {
            logger.log(level, message, fields);
        }
    }

    fn with(&self, fields: &[Field]) -> Box<dyn Logger> {
        let loggers = self.loggers.iter().map(|logger| logger.with(fields)).collect();
        Box::new(MultiLogger { loggers })
    }

    fn with_context(&self, ctx: &Context) -> Box<dyn Logger> {
        let loggers = self
            .loggers
            .iter()
            .map(|logger| logger.with_context(ctx))
            .collect();
        Box::new(MultiLogger { loggers })
    }
}
