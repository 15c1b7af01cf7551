//! Path-to-reference authority backed by a set of named shared roots.
//!
//! A file under a shared root named `media` at `sub/a.jpg` is exposed as
//! `content://<authority>/media/sub/a.jpg`. Files outside every root are
//! never exposed.

use std::path::{Component, Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use lm_core::ports::ReferenceAuthorityPort;
use lm_core::ExternalReference;
use url::Url;

#[derive(Debug, Clone)]
struct SharedRoot {
    name: String,
    path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct FsFileProvider {
    roots: Vec<SharedRoot>,
}

impl FsFileProvider {
    /// Builds a provider from `(name, directory)` pairs.
    ///
    /// Directories must exist; they are canonicalized so that symlinks cannot
    /// be used to step outside a root.
    pub fn new<I, N>(roots: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, PathBuf)>,
        N: Into<String>,
    {
        let mut shared = Vec::new();
        for (name, path) in roots {
            let name = name.into();
            if name.is_empty() || name.contains('/') || name == "." || name == ".." {
                bail!("Invalid shared root name {name:?}");
            }
            if shared.iter().any(|root: &SharedRoot| root.name == name) {
                bail!("Duplicate shared root name {name:?}");
            }
            let path = std::fs::canonicalize(&path)
                .with_context(|| format!("Shared root {} is not accessible", path.display()))?;
            shared.push(SharedRoot { name, path });
        }
        Ok(Self { roots: shared })
    }

    /// Maps a reference issued under `authority` back to the file it names.
    pub fn resolve(&self, authority: &str, reference: &ExternalReference) -> Result<PathBuf> {
        if reference.authority() != authority {
            bail!("Reference {reference} was not issued by {authority}");
        }

        let mut segments = reference
            .as_url()
            .path_segments()
            .ok_or_else(|| anyhow!("Reference {reference} has no path"))?;
        let root_name = segments.next().unwrap_or_default();
        let root = self
            .roots
            .iter()
            .find(|root| root.name == root_name)
            .ok_or_else(|| anyhow!("Unknown shared root {root_name:?}"))?;

        let mut path = root.path.clone();
        for segment in segments {
            let decoded = urlencoding::decode(segment)
                .with_context(|| format!("Malformed segment {segment:?}"))?;
            if decoded.is_empty()
                || decoded == "."
                || decoded == ".."
                || decoded.contains(|c: char| matches!(c, '/' | '\\' | '\0'))
            {
                bail!("Reference {reference} contains an invalid segment");
            }
            path.push(&*decoded);
        }

        let canonical = std::fs::canonicalize(&path)
            .with_context(|| format!("Referenced file {} is not accessible", path.display()))?;
        if !canonical.starts_with(&root.path) {
            bail!("Reference {reference} escapes its shared root");
        }
        Ok(canonical)
    }

    /// Root containing `canonical`, preferring the most specific one.
    fn enclosing_root<'a>(&'a self, canonical: &'a Path) -> Option<(&'a SharedRoot, &'a Path)> {
        self.roots
            .iter()
            .filter_map(|root| canonical.strip_prefix(&root.path).ok().map(|rel| (root, rel)))
            .max_by_key(|(root, _)| root.path.components().count())
    }
}

impl ReferenceAuthorityPort for FsFileProvider {
    fn reference_for(&self, authority: &str, path: &Path) -> Result<ExternalReference> {
        let canonical = std::fs::canonicalize(path)
            .with_context(|| format!("File {} is not accessible", path.display()))?;
        if !canonical.is_file() {
            bail!("{} is not a regular file", path.display());
        }

        let (root, relative) = self
            .enclosing_root(&canonical)
            .ok_or_else(|| anyhow!("{} is not inside any shared root", path.display()))?;

        let mut url = Url::parse(&format!("content://{authority}/"))
            .with_context(|| format!("Invalid reference authority {authority:?}"))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("Authority {authority:?} cannot carry a path"))?;
            segments.clear();
            segments.push(&root.name);
            for component in relative.components() {
                let Component::Normal(part) = component else {
                    bail!("Unexpected component in {}", canonical.display());
                };
                let part = part
                    .to_str()
                    .ok_or_else(|| anyhow!("{} is not valid UTF-8", canonical.display()))?;
                segments.push(part);
            }
        }

        ExternalReference::from_url(url)
            .ok_or_else(|| anyhow!("Authority {authority:?} produced a non-content reference"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORITY: &str = "org.example.media.fileprovider";

    struct Fixture {
        _dir: tempfile::TempDir,
        root: PathBuf,
        provider: FsFileProvider,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let root = std::fs::canonicalize(dir.path()).unwrap().join("media");
        std::fs::create_dir_all(root.join("sub")).unwrap();
        let provider = FsFileProvider::new([("media", root.clone())]).unwrap();
        Fixture {
            _dir: dir,
            root,
            provider,
        }
    }

    #[test]
    fn files_under_a_root_get_content_references() {
        let fx = fixture();
        let file = fx.root.join("sub").join("a b.jpg");
        std::fs::write(&file, b"x").unwrap();

        let reference = fx.provider.reference_for(AUTHORITY, &file).unwrap();

        assert_eq!(
            reference.as_str(),
            "content://org.example.media.fileprovider/media/sub/a%20b.jpg"
        );
        assert_eq!(reference.authority(), AUTHORITY);
        assert!(!reference.as_str().contains(fx.root.to_str().unwrap()));
    }

    #[test]
    fn references_resolve_back_to_the_file() {
        let fx = fixture();
        let file = fx.root.join("sub").join("a b.jpg");
        std::fs::write(&file, b"x").unwrap();

        let reference = fx.provider.reference_for(AUTHORITY, &file).unwrap();
        assert_eq!(fx.provider.resolve(AUTHORITY, &reference).unwrap(), file);
    }

    #[test]
    fn files_outside_every_root_are_refused() {
        let fx = fixture();
        let outside = fx.root.parent().unwrap().join("secret.txt");
        std::fs::write(&outside, b"x").unwrap();

        let err = fx.provider.reference_for(AUTHORITY, &outside).unwrap_err();
        assert!(err.to_string().contains("not inside any shared root"));
    }

    #[test]
    fn missing_files_and_directories_are_refused() {
        let fx = fixture();
        assert!(fx
            .provider
            .reference_for(AUTHORITY, &fx.root.join("gone.jpg"))
            .is_err());
        assert!(fx.provider.reference_for(AUTHORITY, &fx.root.join("sub")).is_err());
    }

    #[test]
    fn the_most_specific_root_wins() {
        let fx = fixture();
        let nested = fx.root.join("sub");
        let provider =
            FsFileProvider::new([("media", fx.root.clone()), ("nested", nested.clone())]).unwrap();
        let file = nested.join("a.jpg");
        std::fs::write(&file, b"x").unwrap();

        let reference = provider.reference_for(AUTHORITY, &file).unwrap();
        assert_eq!(
            reference.as_str(),
            "content://org.example.media.fileprovider/nested/a.jpg"
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_cannot_escape_a_root() {
        let fx = fixture();
        let outside = fx.root.parent().unwrap().join("secret.txt");
        std::fs::write(&outside, b"x").unwrap();
        let link = fx.root.join("link.txt");
        std::os::unix::fs::symlink(&outside, &link).unwrap();

        assert!(fx.provider.reference_for(AUTHORITY, &link).is_err());
    }

    #[test]
    fn resolve_rejects_foreign_authorities_and_unknown_roots() {
        let fx = fixture();
        let file = fx.root.join("a.jpg");
        std::fs::write(&file, b"x").unwrap();
        let reference = fx.provider.reference_for(AUTHORITY, &file).unwrap();

        assert!(fx.provider.resolve("other.fileprovider", &reference).is_err());

        let unknown = ExternalReference::from_url(
            Url::parse("content://org.example.media.fileprovider/elsewhere/a.jpg").unwrap(),
        )
        .unwrap();
        assert!(fx.provider.resolve(AUTHORITY, &unknown).is_err());
    }

    #[test]
    fn resolve_rejects_encoded_traversal() {
        let fx = fixture();
        let reference = ExternalReference::from_url(
            Url::parse("content://org.example.media.fileprovider/media/..%2F..%2Fetc%2Fpasswd")
                .unwrap(),
        )
        .unwrap();

        let err = fx.provider.resolve(AUTHORITY, &reference).unwrap_err();
        assert!(err.to_string().contains("invalid segment"));
    }

    #[test]
    fn invalid_root_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FsFileProvider::new([("a/b", dir.path().to_path_buf())]).is_err());
        assert!(FsFileProvider::new([
            ("media", dir.path().to_path_buf()),
            ("media", dir.path().to_path_buf()),
        ])
        .is_err());
    }
}
