use std::path::{Component, Path, PathBuf};

/// Lexically clean a path.
///
/// Redundant separators and `.` segments are dropped, `..` removes the preceding
/// normal segment. `..` at the root stays at the root; leading `..` in a
/// relative path is kept. An empty result becomes `.`.
///
/// The filesystem is never consulted, so symlinks are not resolved.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

/// Join `name` under `dir` the way a PATH search does: `name` is always treated
/// as relative to `dir`, even if it starts with a separator.
pub(crate) fn join_clean(dir: &Path, name: &str) -> PathBuf {
    normalize(&dir.join(name.trim_start_matches('/')))
}
