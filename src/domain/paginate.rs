use serde::{Serialize, Serializer};

use super::errors::DomainError;

/// One entry of a pager control: a page number or a gap marker.
///
/// Serializes as the bare number, or the string `"ellipsis"` for gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(i64),
    Ellipsis,
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(n) => serializer.serialize_i64(*n),
            PageToken::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// `max(1, ceil(total_count / page_size))`. An empty result set still shows
/// one page in the UI.
pub fn compute_total_pages(total_count: i64, page_size: i64) -> Result<i64, DomainError> {
    if page_size <= 0 {
        return Err(DomainError::InvalidPageSize(page_size));
    }
    let pages = (total_count.max(0) + page_size - 1) / page_size;
    Ok(pages.max(1))
}

/// Compressed page-number sequence for pager controls.
///
/// Pages 1 and `total_pages` always anchor the sequence, with an ellipsis
/// wherever a gap separates them from the window of up to `max_visible`
/// consecutive pages centered on `current_page`. Near either boundary the
/// window shifts flush against it instead of leaving dead space. When the
/// whole range fits (`total_pages <= max_visible + 2`) no ellipsis appears.
pub fn page_window(
    current_page: i64,
    total_pages: i64,
    max_visible: i64,
) -> Result<Vec<PageToken>, DomainError> {
    if max_visible < 1 {
        return Err(DomainError::InvalidPageSize(max_visible));
    }
    let total_pages = total_pages.max(1);
    let current = current_page.clamp(1, total_pages);

    if total_pages <= max_visible + 2 {
        return Ok((1..=total_pages).map(PageToken::Page).collect());
    }

    let mut start = current - (max_visible - 1) / 2;
    let mut end = current + max_visible / 2;
    if start < 2 {
        start = 2;
        end = (start + max_visible - 1).min(total_pages - 1);
    }
    if end > total_pages - 1 {
        end = total_pages - 1;
        start = (end - max_visible + 1).max(2);
    }

    let mut tokens = Vec::with_capacity(usize::try_from(max_visible).unwrap_or(0) + 4);
    tokens.push(PageToken::Page(1));
    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend((start..=end).map(PageToken::Page));
    if end < total_pages - 1 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.push(PageToken::Page(total_pages));
    Ok(tokens)
}
