//! Repository adapters: discover source files, read and parse them.
//!
//! This crate is allowed to do filesystem IO. It should not spawn external processes;
//! explicit file lists are supplied by the caller (typically the CLI).

#![forbid(unsafe_code)]

mod discover;

use anyhow::Context;
use camino::Utf8Path;
use rayon::prelude::*;
use ternguard_domain::model::{ParseFailure, SourceFileModel, SourceSetModel};
use ternguard_types::RepoPath;

pub use discover::discover_sources;

/// Which files to analyse.
#[derive(Clone, Debug)]
pub enum ScopeInput {
    /// Everything under the root matching the globs.
    All {
        include: Vec<String>,
        exclude: Vec<String>,
    },
    /// Exactly these repo-relative files.
    Files(Vec<RepoPath>),
}

enum Parsed {
    File(SourceFileModel),
    Failed(ParseFailure),
}

/// Build the in-memory source model used by the policy engine.
///
/// Unreadable files are errors. Files that are not UTF-8 or fail to parse are recorded
/// in `parse_failures` and the run continues.
pub fn build_source_model(repo_root: &Utf8Path, scope: ScopeInput) -> anyhow::Result<SourceSetModel> {
    let mut paths = match scope {
        ScopeInput::All { include, exclude } => {
            discover_sources(repo_root, &include, &exclude).context("discover sources")?
        }
        ScopeInput::Files(files) => files,
    };
    paths.sort();
    paths.dedup();

    let sources = paths
        .into_iter()
        .map(|path| {
            let abs = path.under(repo_root);
            let bytes = std::fs::read(&abs).with_context(|| format!("read {}", abs))?;
            Ok((path, bytes))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .stack_size(ternguard_syntax::PARSE_STACK_SIZE)
        .build()
        .context("build parser thread pool")?;
    let parsed: Vec<Parsed> = pool.install(|| {
        sources
            .into_par_iter()
            .map(|(path, bytes)| match std::str::from_utf8(&bytes) {
                Ok(text) => parse_file(path, text),
                Err(err) => Parsed::Failed(invalid_utf8(path, &bytes, err)),
            })
            .collect()
    });

    let mut model = SourceSetModel {
        root: RepoPath::from(repo_root),
        files: Vec::new(),
        parse_failures: Vec::new(),
    };
    for p in parsed {
        match p {
            Parsed::File(f) => model.files.push(f),
            Parsed::Failed(f) => model.parse_failures.push(f),
        }
    }

    tracing::info!(
        files = model.files.len(),
        parse_failures = model.parse_failures.len(),
        "built source model"
    );
    Ok(model)
}

fn parse_file(path: RepoPath, text: &str) -> Parsed {
    match ternguard_syntax::parse_source(text) {
        Ok(parsed) => Parsed::File(SourceFileModel::from_parsed(path, parsed)),
        Err(err) => {
            tracing::debug!(path = path.as_str(), error = %err, "parse failed");
            let at = err.position();
            Parsed::Failed(ParseFailure {
                path,
                message: err.to_string(),
                line: at.line,
                col: at.column,
            })
        }
    }
}

/// Failure pointing at the first byte that is not UTF-8.
fn invalid_utf8(path: RepoPath, bytes: &[u8], err: std::str::Utf8Error) -> ParseFailure {
    let valid = String::from_utf8_lossy(&bytes[..err.valid_up_to()]);
    let line_start = valid.rfind('\n').map_or(0, |idx| idx + 1);
    let line = valid.matches('\n').count() + 1;
    let col = valid[line_start..].chars().count() + 1;
    tracing::debug!(path = path.as_str(), line, col, "invalid UTF-8");
    ParseFailure {
        path,
        message: format!("{line}:{col}: invalid UTF-8"),
        line: u32::try_from(line).unwrap_or(u32::MAX),
        col: u32::try_from(col).unwrap_or(u32::MAX),
    }
}

/// Parse `text` as if it were the file at `path`, without touching the filesystem.
///
/// **Never panics** on any input.
pub fn parse_source_file(path: &str, text: &str) -> Result<SourceFileModel, ParseFailure> {
    match parse_file(RepoPath::new(path), text) {
        Parsed::File(f) => Ok(f),
        Parsed::Failed(f) => Err(f),
    }
}
