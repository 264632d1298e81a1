use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Outcome of a single structural check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// File is usable but deviates from the standard
    Warning(String),
    /// File is structurally inconsistent
    Failed(String),
}

impl CheckStatus {
    /// Whether the check passed cleanly
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    /// Whether the check produced a warning
    pub fn is_warning(&self) -> bool {
        matches!(self, CheckStatus::Warning(_))
    }

    /// Whether the check failed
    pub fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }

    fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "✓",
            CheckStatus::Warning(_) => "⚠",
            CheckStatus::Failed(_) => "✗",
        }
    }

    fn message(&self) -> Option<(&'static str, &str)> {
        match self {
            CheckStatus::Ok => None,
            CheckStatus::Warning(msg) => Some(("WARNING", msg)),
            CheckStatus::Failed(msg) => Some(("FAILED", msg)),
        }
    }
}

/// A named check and its outcome
#[derive(Debug, Clone)]
pub struct ValidationCheck {
    /// Name of the check
    pub name: String,
    /// Outcome
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
        }
    }

    pub(crate) fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning(message.into()),
        }
    }

    pub(crate) fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed(message.into()),
        }
    }
}

/// All check results for one FCS file
#[derive(Debug)]
pub struct ValidationReport {
    /// Where the file came from (path or other label)
    pub source: String,
    /// Version tag from the HEADER
    pub version: String,
    /// Individual check results, in the order they ran
    pub checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new(source: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            version: version.into(),
            checks: Vec::new(),
        }
    }

    /// Record a check result
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// Whether any check failed
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_failed())
    }

    /// Whether any check produced a warning
    pub fn has_warnings(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_warning())
    }

    /// Number of passed checks
    pub fn success_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_ok()).count()
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_warning()).count()
    }

    /// Number of failures
    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_failed()).count()
    }

    /// Look up a check by name
    pub fn check(&self, name: &str) -> Option<&ValidationCheck> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// One-line verdict
    pub fn verdict(&self) -> &'static str {
        if self.has_failures() {
            "Validation FAILED"
        } else if self.has_warnings() {
            "Validation PASSED with warnings"
        } else {
            "Validation PASSED"
        }
    }

    fn summary(&self) -> String {
        format!(
            "{} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )
    }

    /// Format the report with terminal colors (plain text without the
    /// `colorized_output` feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::Emoji;

            let mut output = String::new();
            output.push_str(&format!("{}\n", style("FCS Validation Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("=====================").cyan()));
            output.push_str(&format!("{}: {}\n", style("File").bold(), self.source));
            output.push_str(&format!("{}: {}\n\n", style("Version").bold(), self.version));

            for check in &self.checks {
                let symbol = Emoji(check.status.symbol(), match check.status {
                    CheckStatus::Ok => "[OK]",
                    CheckStatus::Warning(_) => "[WARN]",
                    CheckStatus::Failed(_) => "[FAIL]",
                });
                let name = match check.status {
                    CheckStatus::Ok => style(check.name.as_str()).green(),
                    CheckStatus::Warning(_) => style(check.name.as_str()).yellow(),
                    CheckStatus::Failed(_) => style(check.name.as_str()).red(),
                };
                output.push_str(&format!("[{}] {}", symbol, name));
                match check.status.message() {
                    None => output.push('\n'),
                    Some((label, msg)) => {
                        let label = if check.status.is_failed() {
                            style(label).red().bold()
                        } else {
                            style(label).yellow().bold()
                        };
                        output.push_str(&format!(" - {}: {}\n", label, msg));
                    }
                }
            }

            output.push_str(&format!(
                "\n{}: {} passed, {} warnings, {} failed\n\n",
                style("Summary").bold(),
                style(self.success_count()).green(),
                style(self.warning_count()).yellow(),
                style(self.failure_count()).red()
            ));

            let verdict = if self.has_failures() {
                style(self.verdict()).red().bold()
            } else if self.has_warnings() {
                style(self.verdict()).yellow().bold()
            } else {
                style(self.verdict()).green().bold()
            };
            output.push_str(&format!("{}\n", verdict));
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FCS Validation Report")?;
        writeln!(f, "=====================")?;
        writeln!(f, "File: {}", self.source)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f)?;

        for check in &self.checks {
            write!(f, "[{}] {}", check.status.symbol(), check.name)?;
            match check.status.message() {
                None => writeln!(f)?,
                Some((label, msg)) => writeln!(f, " - {}: {}", label, msg)?,
            }
        }

        writeln!(f)?;
        writeln!(f, "Summary: {}", self.summary())?;
        writeln!(f)?;
        writeln!(f, "{}", self.verdict())
    }
}
