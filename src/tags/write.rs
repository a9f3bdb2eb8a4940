//! tags/write.rs
//! Flush the tag index back into a container on disk.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use lofty::{ItemKey, ItemValue, Tag, TagExt, TagItem, TagType};

use crate::error::{Result, SongError};

use super::TagIndex;

/// Write `index` into the container at `source`, or into a fresh copy at
/// `target`. The audio data is never re-encoded: save-as copies the file
/// bytes verbatim, and both forms only rewrite metadata.
pub(crate) fn write_index(
    source: &Path,
    target: Option<&Path>,
    base: Option<&Tag>,
    fallback: TagType,
    index: &TagIndex,
) -> Result<()> {
    let tag = rebuild_tag(base, fallback, index);

    let Some(dest) = target else {
        tracing::debug!(path = %source.display(), tags = index.len(), "rewriting metadata in place");
        tag.save_to_path(source)?;
        return Ok(());
    };

    ensure_parent_exists(dest)?;

    tracing::debug!(path = %dest.display(), tags = index.len(), "saving copy");

    // Stage through a sibling temp file and rename into place, so a failed
    // save can never truncate or half-write the destination (which may be
    // the source itself under another spelling).
    let staged = staging_path(dest);
    fs::copy(source, &staged)?;
    if let Err(e) = tag.save_to_path(&staged) {
        let _ = fs::remove_file(&staged);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&staged, dest) {
        let _ = fs::remove_file(&staged);
        return Err(e.into());
    }

    Ok(())
}

/// The directory a save target lands in must already exist.
fn ensure_parent_exists(dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(SongError::FileNotFound(dest.to_path_buf()));
        }
    }
    Ok(())
}

/// A hidden sibling of `dest` to assemble the new file in.
fn staging_path(dest: &Path) -> PathBuf {
    let name = dest.file_name().unwrap_or_else(|| OsStr::new("out"));
    let mut staged = OsString::from(".");
    staged.push(name);
    staged.push(".partial");
    dest.with_file_name(staged)
}

/// A fresh tag holding the index's entries in index order. Pictures and
/// other non-text items from the existing tag are carried over, so a save
/// never drops what the mapping does not model.
fn rebuild_tag(base: Option<&Tag>, fallback: TagType, index: &TagIndex) -> Tag {
    let tag_type = base.map(Tag::tag_type).unwrap_or(fallback);
    let mut tag = Tag::new(tag_type);

    if let Some(existing) = base {
        for picture in existing.pictures() {
            tag.push_picture(picture.clone());
        }
        for item in existing.items() {
            if item.value().text().is_none() {
                tag.push(item.clone());
            }
        }
    }

    for (display, value) in index.iter() {
        let key = ItemKey::from_key(tag_type, display);
        tag.push(TagItem::new(key, ItemValue::Text(value.to_string())));
    }

    tag
}
