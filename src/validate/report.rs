//! Validation report type.

/// Aggregated outcome of validating a raw rules configuration.
///
/// `errors` holds every structural, referential, and domain defect found;
/// `missing_sections` additionally names each absent required top-level
/// section (or `root` when the input is not an object at all).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub missing_sections: Vec<String>,
}

impl ValidationReport {
    /// True when no defects were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a defect.
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Record an absent required top-level section.
    pub(crate) fn missing_section(&mut self, name: &str) {
        self.error(format!("missing required section: {name}"));
        self.missing_sections.push(name.to_string());
    }

    /// Format the report as a user-facing error listing.
    pub fn format_errors(&self) -> String {
        if self.is_valid() {
            return String::new();
        }

        let mut msg = format!(
            "Rules configuration rejected with {} error(s):\n",
            self.errors.len()
        );
        for error in &self.errors {
            msg.push_str(&format!("  x {error}\n"));
        }
        if !self.missing_sections.is_empty() {
            msg.push_str(&format!(
                "\nMissing sections: {}\n",
                self.missing_sections.join(", ")
            ));
        }
        msg
    }
}
