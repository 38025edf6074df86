//! Structured diagnostics for a processing round.
//!
//! Diagnostics are collected into a list and handed back to the host rather
//! than printed at the point of failure, so their content and order are
//! deterministic and testable. The CLI renders them at the end of a round.

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Note,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One diagnostic against an input type (or the round as a whole).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Qualified name of the offending input type, when the diagnostic is
    /// attributable to one.
    pub source_type: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn note(source_type: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Note,
            source_type: source_type.map(|s| s.to_string()),
            message: message.into(),
        }
    }

    pub fn error(source_type: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            source_type: source_type.map(|s| s.to_string()),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source_type {
            Some(ty) => write!(f, "{}: [{}] {}", self.severity, ty, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Sink accumulating the diagnostics of one round.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn note(&mut self, source_type: Option<&str>, message: impl Into<String>) {
        self.push(Diagnostic::note(source_type, message));
    }

    pub fn error(&mut self, source_type: Option<&str>, message: impl Into<String>) {
        self.push(Diagnostic::error(source_type, message));
    }

    /// Whether any error-severity diagnostic was emitted.
    ///
    /// The host build tool uses this to decide whether the round failed.
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors_ignores_notes() {
        let mut diags = Diagnostics::new();
        diags.note(Some("a.Animal"), "visiting");
        assert!(!diags.has_errors());
        diags.error(Some("a.Animal"), "bad field");
        assert!(diags.has_errors());
    }

    #[test]
    fn test_display_with_and_without_type() {
        let with = Diagnostic::error(Some("a.Dog"), "boom");
        assert_eq!(with.to_string(), "error: [a.Dog] boom");
        let without = Diagnostic::note(None, "starting");
        assert_eq!(without.to_string(), "note: starting");
    }

    #[test]
    fn test_errors_filters_by_severity() {
        let mut diags = Diagnostics::new();
        diags.note(None, "n1");
        diags.error(Some("t"), "e1");
        diags.note(None, "n2");
        diags.error(Some("t"), "e2");
        let messages: Vec<_> = diags.errors().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["e1", "e2"]);
    }
}
