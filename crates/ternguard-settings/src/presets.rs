use std::collections::BTreeMap;
use ternguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, TernaryStyle};
use ternguard_types::{ids, Severity};

pub const DEFAULT_INCLUDE: &[&str] = &["**/*.js", "**/*.mjs", "**/*.cjs"];
pub const DEFAULT_EXCLUDE: &[&str] = &[];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        "compat" => compat_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Error, TernaryStyle::Always),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        max_findings: 200,
        checks: default_checks(Severity::Warning, TernaryStyle::Always),
    }
}

fn compat_profile() -> EffectiveConfig {
    // Only breaks conditionals that are already multiline, and never fails on them.
    EffectiveConfig {
        profile: "compat".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Warning, TernaryStyle::AlwaysMultiline),
    }
}

fn default_checks(severity: Severity, style: TernaryStyle) -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();
    m.insert(
        ids::CHECK_LAYOUT_MULTILINE_TERNARY.to_string(),
        CheckPolicy::enabled(severity).with_style(style),
    );
    m
}
