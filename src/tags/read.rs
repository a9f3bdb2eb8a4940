//! tags/read.rs
//! Build the tag index from a container's native tag collection.

use lofty::{ItemKey, Tag, TaggedFile, TaggedFileExt};

use super::TagIndex;

/// The index mirrors the order the container yields its tags. Only text
/// values participate in the mapping; pictures and binary items stay with
/// the container and are carried over untouched on save.
pub(crate) fn index_from_container(container: &TaggedFile) -> TagIndex {
    let mut index = TagIndex::new();

    let Some(tag) = container.primary_tag().or_else(|| container.first_tag()) else {
        return index;
    };

    for item in tag.items() {
        let Some(value) = item.value().text() else {
            continue;
        };
        if let Some(display) = display_key(item.key(), tag) {
            index.push_native(display, value.to_string());
        }
    }

    index
}

/// The user-facing spelling of a native key: unknown keys keep the raw
/// string the container stored, known keys map back to the container
/// format's own name for them.
fn display_key(key: &ItemKey, tag: &Tag) -> Option<String> {
    match key {
        ItemKey::Unknown(raw) => Some(raw.clone()),
        known => known.map_key(tag.tag_type(), false).map(str::to_string),
    }
}
