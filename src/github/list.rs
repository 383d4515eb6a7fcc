//! Remote file listing and filtering.
//!
//! Turns a parsed repository reference into the ordered set of
//! reviewable file paths: blobs only, optionally narrowed to a
//! subdirectory, with binary and media formats dropped.

use crate::github::{GithubError, RepoSource};
use crate::models::{FileListing, RepoReference};

/// Extensions excluded from listings, grouped as image, archive,
/// audio, video, and 3D model formats.
const BINARY_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "svg", "ico", "tif", "tiff", "heic",
    // archives
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar",
    // audio
    "mp3", "wav", "ogg", "flac", "m4a", "aac",
    // video
    "mp4", "mkv", "avi", "mov", "webm", "wmv", "flv",
    // 3D models
    "glb", "gltf", "obj", "fbx", "stl", "blend", "dae", "3ds",
];

/// List the reviewable files of a repository.
///
/// Resolves the default branch when the reference carries no ref, walks
/// the recursive tree, and keeps the blob entries that survive the
/// subpath and extension filters. Output order follows the tree
/// listing.
pub async fn list_files(
    source: &dyn RepoSource,
    reference: &RepoReference,
) -> Result<FileListing, GithubError> {
    let ref_ = match &reference.ref_ {
        Some(r) => r.clone(),
        None => source.default_branch(reference).await?,
    };

    let entries = source.tree(reference, &ref_).await?;

    // The subpath always compares with a trailing slash, so `src`
    // matches `src/main.rs` but not `src.rs`.
    let prefix = reference.path.as_ref().map(|p| {
        if p.ends_with('/') {
            p.clone()
        } else {
            format!("{p}/")
        }
    });

    let files = entries
        .into_iter()
        .filter(|e| e.is_blob())
        .map(|e| e.path)
        .filter(|p| match &prefix {
            Some(prefix) => p.starts_with(prefix.as_str()),
            None => true,
        })
        .filter(|p| !has_binary_extension(p))
        .collect();

    Ok(FileListing { ref_, files })
}

/// Whether the path's extension (the substring after the last `.`,
/// compared case-insensitively) is denylisted. Paths without an
/// extension are never excluded.
fn has_binary_extension(path: &str) -> bool {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    BINARY_EXTENSIONS.contains(&ext.as_str())
}
