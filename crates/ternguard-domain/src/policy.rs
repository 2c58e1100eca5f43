use std::collections::BTreeMap;
use std::fmt;
use ternguard_types::{ids, Severity};

/// Line-break policy for the operands of a conditional expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TernaryStyle {
    #[default]
    Always,
    AlwaysMultiline,
    Never,
}

impl TernaryStyle {
    pub const ALL: [TernaryStyle; 3] = [
        TernaryStyle::Always,
        TernaryStyle::AlwaysMultiline,
        TernaryStyle::Never,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "always" => Some(TernaryStyle::Always),
            "always-multiline" => Some(TernaryStyle::AlwaysMultiline),
            "never" => Some(TernaryStyle::Never),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TernaryStyle::Always => "always",
            TernaryStyle::AlwaysMultiline => "always-multiline",
            TernaryStyle::Never => "never",
        }
    }

    /// Whether both boundaries must contain a line break, given whether the
    /// conditional already spans more than one line.
    pub fn requires_break(self, whole_span_multiline: bool) -> bool {
        match self {
            TernaryStyle::Always => true,
            TernaryStyle::AlwaysMultiline => whole_span_multiline,
            TernaryStyle::Never => false,
        }
    }

    pub fn forbids_break(self) -> bool {
        matches!(self, TernaryStyle::Never)
    }
}

impl fmt::Display for TernaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub severity: Severity,
    pub style: TernaryStyle,
}

impl CheckPolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
            style: TernaryStyle::default(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
            style: TernaryStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TernaryStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }

    /// Style configured for the ternary layout check, whether or not it is enabled.
    pub fn style(&self) -> TernaryStyle {
        self.checks
            .get(ids::CHECK_LAYOUT_MULTILINE_TERNARY)
            .map(|p| p.style)
            .unwrap_or_default()
    }
}
