use redis::RedisError;
use thiserror::Error;
use tracing_error::SpanTrace;

/// Any failure to complete an operation against the store: unreachable
/// endpoint, rejected command, dropped connection or timeout.
#[derive(Debug, Error)]
#[error("store operation failed: {source}")]
pub struct StoreError {
    #[source]
    source: RedisError,
    span_trace: SpanTrace,
}

impl StoreError {
    pub fn redis_error(&self) -> &RedisError {
        &self.source
    }

    /// Spans that were active when the error surfaced. Empty unless the
    /// subscriber carries an `ErrorLayer`.
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }
}

impl From<RedisError> for StoreError {
    fn from(source: RedisError) -> Self {
        Self {
            source,
            span_trace: SpanTrace::capture(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
