//! Asset path normalization.
//!
//! Controllers hand us paths in whatever slash style and root spelling they
//! like ("Assets\\Scripts\\Foo.cs", "scripts/Foo.cs", "assets/Assets/x").
//! Everything asset-facing is canonicalized to the logical
//! `<root>/<relative>` form before use, and responses always echo that form.

use std::path::PathBuf;

/// The project's asset root: a canonical root folder name plus the project
/// directory it lives under on disk.
#[derive(Debug, Clone)]
pub struct AssetRoot {
    name: String,
    project_dir: PathBuf,
}

/// A normalized asset location: the logical `<root>/...` path used across
/// the command protocol, and the equivalent filesystem path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPath {
    pub logical: String,
    pub physical: PathBuf,
}

impl AssetRoot {
    pub fn new(name: impl Into<String>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            project_dir: project_dir.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_dir(&self) -> &std::path::Path {
        &self.project_dir
    }

    /// Canonicalize a user-supplied path into `<root>/<relative>` form.
    ///
    /// Backslashes become forward slashes, redundant slashes collapse, and
    /// the root prefix ends up present exactly once (compared
    /// case-insensitively) no matter how many times the caller repeated it.
    /// Idempotent: normalizing an already-normalized path is a no-op.
    pub fn normalize(&self, user_path: &str) -> NormalizedPath {
        let cleaned = user_path.replace('\\', "/");
        let mut segments: Vec<&str> = cleaned
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();

        while segments
            .first()
            .is_some_and(|s| s.eq_ignore_ascii_case(&self.name))
        {
            segments.remove(0);
        }

        let mut logical = self.name.clone();
        for seg in &segments {
            logical.push('/');
            logical.push_str(seg);
        }

        let mut physical = self.project_dir.join(&self.name);
        for seg in &segments {
            physical.push(seg);
        }

        NormalizedPath { logical, physical }
    }

    /// Normalize a folder and join a file name onto it.
    pub fn join(&self, folder: &str, file_name: &str) -> NormalizedPath {
        let folder = self.normalize(folder);
        self.normalize(&format!("{}/{}", folder.logical, file_name))
    }
}

/// Last path segment without its extension, e.g. `Assets/Textures/brick.png`
/// → `brick`.
pub fn file_stem(logical: &str) -> &str {
    let name = logical.rsplit('/').next().unwrap_or(logical);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Logical path of the containing folder, e.g. `Assets/Scripts/Foo.cs` →
/// `Assets/Scripts`.
pub fn parent_folder(logical: &str) -> &str {
    match logical.rsplit_once('/') {
        Some((parent, _)) => parent,
        None => logical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> AssetRoot {
        AssetRoot::new("Assets", "/tmp/project")
    }

    #[test]
    fn normalizes_slash_styles() {
        let n = root().normalize("Assets\\Scripts\\Player.cs");
        assert_eq!(n.logical, "Assets/Scripts/Player.cs");
        assert_eq!(n.physical, PathBuf::from("/tmp/project/Assets/Scripts/Player.cs"));
    }

    #[test]
    fn prepends_root_when_missing() {
        assert_eq!(root().normalize("Scripts/Player.cs").logical, "Assets/Scripts/Player.cs");
        assert_eq!(root().normalize("/Scripts/Player.cs/").logical, "Assets/Scripts/Player.cs");
    }

    #[test]
    fn root_prefix_appears_exactly_once() {
        let r = root();
        assert_eq!(r.normalize("Assets/Assets/foo.txt").logical, "Assets/foo.txt");
        assert_eq!(r.normalize("assets/ASSETS/Assets/foo.txt").logical, "Assets/foo.txt");
        assert_eq!(r.normalize("assets").logical, "Assets");
        assert_eq!(r.normalize("").logical, "Assets");
    }

    #[test]
    fn normalization_is_idempotent() {
        let r = root();
        for p in [
            "Assets/Materials/Gold.mat",
            "materials\\wood.mat",
            "assets//textures///brick.png",
            "",
        ] {
            let once = r.normalize(p);
            let twice = r.normalize(&once.logical);
            assert_eq!(once, twice, "not idempotent for {p:?}");
        }
    }

    #[test]
    fn case_of_canonical_root_wins() {
        let n = root().normalize("assets/Scripts/a.cs");
        assert_eq!(n.logical, "Assets/Scripts/a.cs");
    }

    #[test]
    fn join_and_helpers() {
        let n = root().join("Materials", "Gold.mat");
        assert_eq!(n.logical, "Assets/Materials/Gold.mat");
        assert_eq!(file_stem(&n.logical), "Gold");
        assert_eq!(parent_folder(&n.logical), "Assets/Materials");
        assert_eq!(file_stem("noext"), "noext");
    }
}
