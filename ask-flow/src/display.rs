//! Pure projections from the answer data to the strings a front end shows.
//! Nothing here is stored; callers derive labels on render.

use crate::answer::Source;

/// Human label for a cited document: extension stripped, underscores turned
/// into spaces, and the first letter of every word uppercased (a word starts
/// at the beginning or after any non-alphanumeric character, so hyphenated
/// names capitalize both halves).
///
/// `"first_aid_guide.pdf"` becomes `"First Aid Guide"`.
pub fn source_label(document: &str) -> String {
    let stem = match document.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => document,
    };

    let mut label = String::with_capacity(stem.len());
    let mut at_boundary = true;
    for ch in stem.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if at_boundary && ch.is_alphabetic() {
            label.extend(ch.to_uppercase());
        } else {
            label.push(ch);
        }
        at_boundary = !ch.is_alphanumeric();
    }
    label
}

/// Page range text for a source, or `None` when the source cites no pages.
/// A range that starts and ends on the same page collapses to one number.
pub fn page_range(source: &Source) -> Option<String> {
    let start = source.page_start?;
    match source.page_end {
        Some(end) if end != start => Some(format!("{start} - {end}")),
        _ => Some(start.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(page_start: Option<u32>, page_end: Option<u32>) -> Source {
        Source {
            document: "first_aid_guide.pdf".to_string(),
            page_start,
            page_end,
        }
    }

    #[test]
    fn label_strips_extension_and_capitalizes_words() {
        assert_eq!(source_label("first_aid_guide.pdf"), "First Aid Guide");
    }

    #[test]
    fn label_capitalizes_after_any_word_boundary() {
        assert_eq!(source_label("cruz-roja_manual.pdf"), "Cruz-Roja Manual");
    }

    #[test]
    fn label_handles_names_without_extension() {
        assert_eq!(source_label("protocolo rcp"), "Protocolo Rcp");
        assert_eq!(source_label(".hidden"), ".Hidden");
    }

    #[test]
    fn range_with_distinct_pages() {
        assert_eq!(page_range(&source(Some(12), Some(14))).as_deref(), Some("12 - 14"));
    }

    #[test]
    fn single_page_is_not_duplicated() {
        assert_eq!(page_range(&source(Some(5), Some(5))).as_deref(), Some("5"));
        assert_eq!(page_range(&source(Some(5), None)).as_deref(), Some("5"));
    }

    #[test]
    fn no_start_page_means_no_range() {
        assert_eq!(page_range(&source(None, None)), None);
    }
}
