use crate::{source::PostSource, timestamp::TimestampFormat};
use std::sync::Arc;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct App {
    source: Arc<dyn PostSource>,
    timestamps: TimestampFormat,
}

impl App {
    pub fn new(source: impl PostSource + 'static, timestamps: TimestampFormat) -> Self {
        Self::with_source(Arc::new(source), timestamps)
    }

    pub fn with_source(source: Arc<dyn PostSource>, timestamps: TimestampFormat) -> Self {
        Self { source, timestamps }
    }

    pub fn source(&self) -> &dyn PostSource {
        self.source.as_ref()
    }

    pub fn timestamps(&self) -> &TimestampFormat {
        &self.timestamps
    }
}
