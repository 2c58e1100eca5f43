//! The `check` use case: evaluate policy and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use ternguard_repo::ScopeInput;
use ternguard_settings::{Overrides, ResolvedConfig};
use ternguard_types::{RepoPath, ReportEnvelope, TernguardReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Explicit files to check (relative to repo root). `None` means discover by globs.
    pub paths: Option<Vec<RepoPath>>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: TernguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, discover sources, evaluate policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        ternguard_settings::TernguardConfigV1::default()
    } else {
        ternguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = ternguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let scope = match input.paths {
        Some(paths) if !paths.is_empty() => ScopeInput::Files(paths),
        _ => ScopeInput::All {
            include: resolved.include.clone(),
            exclude: resolved.exclude.clone(),
        },
    };

    tracing::info!(
        root = %input.repo_root,
        profile = %resolved.effective.profile,
        style = %resolved.effective.style(),
        "running check"
    );

    let model = ternguard_repo::build_source_model(input.repo_root, scope)
        .context("build source model")?;

    let ternguard_domain::report::DomainReport {
        verdict,
        findings,
        data,
        ..
    } = ternguard_domain::evaluate(&model, &resolved.effective);

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "ternguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
