use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use ternguard_types::RepoPath;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into.
const SKIP_DIRS: &[&str] = &[".git", "node_modules", "target"];

/// Discover source files under `repo_root`.
///
/// Behavior:
/// - paths are matched repo-relative, with `/` separators
/// - a file is kept when it matches any `include` glob and no `exclude` glob
/// - `.git`, `node_modules` and `target` directories are skipped entirely
/// - the result is sorted and deduplicated
pub fn discover_sources(
    repo_root: &Utf8Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<RepoPath>> {
    let include_set = build_globset(include).context("compile include globset")?;
    let exclude_set = build_globset(exclude).context("compile exclude globset")?;

    let mut out: Vec<RepoPath> = Vec::new();

    for abs in WalkDir::new(repo_root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
    {
        let rel = abs
            .strip_prefix(repo_root)
            .unwrap_or(&abs)
            .as_str()
            .replace('\\', "/");

        if include_set.is_match(&rel) && !exclude_set.is_match(&rel) {
            out.push(RepoPath::new(&rel));
        }
    }

    // Stable order.
    out.sort();
    out.dedup();

    tracing::debug!(root = %repo_root, files = out.len(), "discovered sources");
    Ok(out)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRS.contains(&name))
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p).with_context(|| format!("invalid glob: {p}"))?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
