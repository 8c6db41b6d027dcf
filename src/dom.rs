use scraper::ElementRef;

use crate::error::{Result, ScrapeError};

/// The element children of a node, in document order. Text and comment
/// nodes between tags are skipped.
pub fn child_elements<'a>(node: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    node.children().filter_map(ElementRef::wrap).collect()
}

/// The child element at `index`, failing at the first missing link so the
/// resulting error names exactly where the page shape diverged.
pub fn nth_child<'a>(node: ElementRef<'a>, index: usize) -> Result<ElementRef<'a>> {
    node.children()
        .filter_map(ElementRef::wrap)
        .nth(index)
        .ok_or_else(|| {
            ScrapeError::structure(format!(
                "<{}> has no child element at index {}",
                node.value().name(),
                index
            ))
        })
}

pub fn first_child(node: ElementRef<'_>) -> Result<ElementRef<'_>> {
    nth_child(node, 0)
}

/// Follow a first-child chain `depth` levels down, tolerating absence.
/// Used where the source page legitimately omits the nested structure.
pub fn descend_first(node: ElementRef<'_>, depth: usize) -> Option<ElementRef<'_>> {
    let mut current = node;
    for _ in 0..depth {
        current = current.children().find_map(ElementRef::wrap)?;
    }
    Some(current)
}

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>().trim().to_string()
}
