use crate::records::UNKNOWN_SUBCATEGORY;

/// Per-item category resolution progress
///
/// Terminal once a label is resolved, the attempt budget is spent, or a
/// fetched document was searched without finding a label.
#[derive(Debug, Clone)]
pub struct CategoryResolution {
    attempts: u32,
    max_attempts: u32,
    label: Option<String>,
    settled: bool,
}

impl CategoryResolution {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempts: 0,
            max_attempts,
            label: None,
            settled: false,
        }
    }

    /// Starts a new attempt and returns its 1-based number
    pub fn begin_attempt(&mut self) -> u32 {
        self.attempts += 1;
        self.attempts
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn attempts_exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// Records a label found by one of the strategies
    pub fn resolve(&mut self, label: String) {
        self.label = Some(label);
    }

    /// Marks the item as searched without a result; no further fetches
    pub fn settle_unknown(&mut self) {
        self.settled = true;
    }

    pub fn is_resolved(&self) -> bool {
        self.label.is_some()
    }

    pub fn is_terminal(&self) -> bool {
        self.is_resolved() || self.settled || self.attempts_exhausted()
    }

    /// The resolved label, or the default when none was found
    pub fn into_label(self) -> String {
        self.label
            .unwrap_or_else(|| UNKNOWN_SUBCATEGORY.to_string())
    }
}
