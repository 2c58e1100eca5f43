use crate::{model::TernguardConfigV1, presets};
use anyhow::Context;
use globset::Glob;
use ternguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, TernaryStyle};
use ternguard_types::{ids, Severity};

/// Command-line values that win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub style: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

pub fn resolve_config(
    cfg: TernguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());
    if !matches!(profile.as_str(), "strict" | "warn" | "compat") {
        anyhow::bail!("unknown profile: {profile} (expected strict|warn|compat)");
    }

    let mut effective = presets::preset(&profile);

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        if check_id != ids::CHECK_LAYOUT_MULTILINE_TERNARY {
            anyhow::bail!("unknown check id in [checks]: {check_id}");
        }
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
        if let Some(style) = cc.style.as_deref() {
            entry.style =
                parse_style(style).with_context(|| format!("invalid style for {check_id}"))?;
        }
    }

    if let Some(style) = overrides.style.as_deref() {
        let style = parse_style(style).context("invalid --style")?;
        if let Some(entry) = effective.checks.get_mut(ids::CHECK_LAYOUT_MULTILINE_TERNARY) {
            entry.style = style;
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    let include = cfg
        .include
        .unwrap_or_else(|| to_owned(presets::DEFAULT_INCLUDE));
    let exclude = cfg
        .exclude
        .unwrap_or_else(|| to_owned(presets::DEFAULT_EXCLUDE));
    validate_globs("include", &include)?;
    validate_globs("exclude", &exclude)?;

    Ok(ResolvedConfig {
        effective,
        include,
        exclude,
    })
}

fn to_owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

fn validate_globs(field: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid {field} glob: {pattern}"))?;
    }
    Ok(())
}

fn parse_style(v: &str) -> anyhow::Result<TernaryStyle> {
    TernaryStyle::parse(v).with_context(|| {
        format!("unknown style: {v} (expected always|always-multiline|never)")
    })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
