/// Outcome of offering an initial message to the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Forward the trimmed value to the timeline.
    Admit(String),
    Skip,
}

/// Admits an externally supplied seed message at most once per distinct value.
///
/// Only the most recently forwarded value is remembered.
#[derive(Clone, Debug, Default)]
pub struct InitialMessageGuard {
    forwarded: Option<String>,
}

impl InitialMessageGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, value: Option<&str>) -> Admission {
        let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Admission::Skip;
        };
        if self.forwarded.as_deref() == Some(trimmed) {
            return Admission::Skip;
        }
        self.forwarded = Some(trimmed.to_string());
        Admission::Admit(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_blank_are_skipped() {
        let mut guard = InitialMessageGuard::new();
        assert_eq!(guard.admit(None), Admission::Skip);
        assert_eq!(guard.admit(Some("")), Admission::Skip);
        assert_eq!(guard.admit(Some("  \n\t")), Admission::Skip);
        // Skipped values leave the slot empty, so a real value still gets through.
        assert!(matches!(guard.admit(Some("floats")), Admission::Admit(_)));
    }

    #[test]
    fn test_same_value_admitted_once() {
        let mut guard = InitialMessageGuard::new();
        assert_eq!(
            guard.admit(Some("floats")),
            Admission::Admit("floats".to_string())
        );
        assert_eq!(guard.admit(Some("floats")), Admission::Skip);
        assert_eq!(guard.admit(Some("  floats  ")), Admission::Skip);
    }

    #[test]
    fn test_value_is_trimmed() {
        let mut guard = InitialMessageGuard::new();
        assert_eq!(
            guard.admit(Some("  trends ")),
            Admission::Admit("trends".to_string())
        );
        assert_eq!(guard.admit(Some("trends")), Admission::Skip);
    }

    #[test]
    fn test_slot_only_remembers_latest() {
        let mut guard = InitialMessageGuard::new();
        assert!(matches!(guard.admit(Some("a")), Admission::Admit(_)));
        assert!(matches!(guard.admit(Some("b")), Admission::Admit(_)));
        assert!(matches!(guard.admit(Some("a")), Admission::Admit(_)));
    }

    #[test]
    fn test_absent_value_keeps_slot() {
        let mut guard = InitialMessageGuard::new();
        guard.admit(Some("salinity"));
        assert_eq!(guard.admit(None), Admission::Skip);
        assert_eq!(guard.admit(Some("salinity")), Admission::Skip);
    }
}
