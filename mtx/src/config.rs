//! Reader and writer configuration

/// How repeated `(row, col)` entries of a coordinate body are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Add the values, the MatrixMarket convention for coordinate lists
    #[default]
    Sum,
    /// Keep the value written last in file order
    Overwrite,
}

/// Configuration for parsing a MatrixMarket stream
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Combination rule for repeated coordinates
    pub duplicate_policy: DuplicatePolicy,
    /// Fail when a coordinate body holds a different number of entry lines
    /// than the size line declares
    pub strict_entry_count: bool,
    /// Upper bound on entries pre-allocated from the declared count
    pub capacity_hint_limit: usize,
}

impl ReaderConfig {
    /// Set the duplicate entry policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Reject coordinate bodies whose line count differs from the size line
    pub fn with_strict_entry_count(mut self, strict: bool) -> Self {
        self.strict_entry_count = strict;
        self
    }

    /// Set the pre-allocation bound
    pub fn with_capacity_hint_limit(mut self, limit: usize) -> Self {
        self.capacity_hint_limit = limit;
        self
    }

    /// Initial capacity for a body declaring `declared` entries
    ///
    /// Symmetric bodies store up to twice the declared count.
    pub fn capacity_for(&self, declared: usize, mirrored: bool) -> usize {
        let wanted = if mirrored {
            declared.saturating_mul(2)
        } else {
            declared
        };
        wanted.min(self.capacity_hint_limit)
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Sum,
            strict_entry_count: false,
            capacity_hint_limit: 1 << 24,
        }
    }
}

/// Configuration for encoding a matrix
#[derive(Debug, Clone, Default)]
pub struct WriterConfig {
    /// Text written as `%`-prefixed lines after the banner
    pub comment: Option<String>,
}

impl WriterConfig {
    /// Emit `comment` after the banner, one `%` line per input line
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
