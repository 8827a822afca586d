use crate::error::{ErrorKind, OverflowSite};

/// Stack capacity used when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// What happens when a literal or an operator result leaves the `i64` range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Abort the evaluation with `NumericOverflow`.
    #[default]
    Error,
    /// Two's complement wrap-around.
    Wrapping,
    /// Clamp to `i64::MIN` / `i64::MAX`.
    Saturating,
}

impl OverflowPolicy {
    pub(crate) fn add(self, a: i64, b: i64, site: OverflowSite) -> Result<i64, ErrorKind> {
        match self {
            OverflowPolicy::Error => a.checked_add(b).ok_or(ErrorKind::NumericOverflow(site)),
            OverflowPolicy::Wrapping => Ok(a.wrapping_add(b)),
            OverflowPolicy::Saturating => Ok(a.saturating_add(b)),
        }
    }

    pub(crate) fn sub(self, a: i64, b: i64, site: OverflowSite) -> Result<i64, ErrorKind> {
        match self {
            OverflowPolicy::Error => a.checked_sub(b).ok_or(ErrorKind::NumericOverflow(site)),
            OverflowPolicy::Wrapping => Ok(a.wrapping_sub(b)),
            OverflowPolicy::Saturating => Ok(a.saturating_sub(b)),
        }
    }

    pub(crate) fn mul(self, a: i64, b: i64, site: OverflowSite) -> Result<i64, ErrorKind> {
        match self {
            OverflowPolicy::Error => a.checked_mul(b).ok_or(ErrorKind::NumericOverflow(site)),
            OverflowPolicy::Wrapping => Ok(a.wrapping_mul(b)),
            OverflowPolicy::Saturating => Ok(a.saturating_mul(b)),
        }
    }
}

/// Options for a single evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    pub capacity: usize,
    pub overflow: OverflowPolicy,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            overflow: OverflowPolicy::default(),
        }
    }
}

impl EvaluatorConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}
