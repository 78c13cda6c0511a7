/// A single field-level validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Query key the issue applies to.
    pub key: String,
    /// Human-readable description of what went wrong.
    pub message: String,
}

impl FieldError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Error returned by a schema when a query mapping fails validation.
///
/// Aggregates every field-level issue the schema found. Store and helper
/// operations never raise this to the caller; it is routed to the configured
/// diagnostic reporter and the operation falls back to the previous value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationError {
    issues: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldError>) -> Self {
        Self { issues }
    }

    /// Convenience constructor for a single-issue error.
    pub fn single(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldError::new(key, message)],
        }
    }

    pub fn issues(&self) -> &[FieldError] {
        &self.issues
    }
}

impl From<FieldError> for ValidationError {
    fn from(issue: FieldError) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("query validation failed")?;
        for (i, issue) in self.issues.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Diagnostic channel for validation failures.
///
/// Injected at construction; defaults to a `tracing` error event so the core
/// has no implicit global output dependency.
pub(crate) type Reporter = Box<dyn Fn(&ValidationError) + Send + Sync>;

pub(crate) fn default_reporter() -> Reporter {
    Box::new(|err| tracing::error!(error = %err, "query validation failed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_single_issue() {
        let err = ValidationError::single("b", "invalid number");
        assert_eq!(err.to_string(), "query validation failed: b: invalid number");
    }

    #[test]
    fn test_display_multiple_issues() {
        let err = ValidationError::new(vec![
            FieldError::new("a", "missing"),
            FieldError::new("b", "invalid number"),
        ]);
        assert_eq!(
            err.to_string(),
            "query validation failed: a: missing; b: invalid number"
        );
    }

    #[test]
    fn test_display_no_issues() {
        let err = ValidationError::default();
        assert_eq!(err.to_string(), "query validation failed");
    }
}
