//! Fenced-block construction for the source listing.

/// Language tag applied to the source fence. Generated artifacts are UI
/// component sources, so the listing is highlighted as JSX.
pub const SOURCE_FENCE_TAG: &str = "jsx";

const FENCE: &str = "```";

/// Wrap raw source in a fenced code block for a [`TextFormatter`].
///
/// The source is embedded verbatim: a line of the source that itself begins
/// with three backticks will close the fence early. Callers accept that
/// pass-through behavior in exchange for never mutating the source.
///
/// [`TextFormatter`]: crate::render::TextFormatter
#[must_use]
pub fn fenced(source: &str, tag: &str) -> String {
    let mut payload = String::with_capacity(FENCE.len() * 2 + tag.len() + 1 + source.len());
    payload.push_str(FENCE);
    payload.push_str(tag);
    payload.push('\n');
    payload.push_str(source);
    payload.push_str(FENCE);
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_fence_tag_newline_source_fence() {
        assert_eq!(fenced("let x = 1;\n", "jsx"), "```jsx\nlet x = 1;\n```");
    }

    #[test]
    fn empty_source_produces_empty_block() {
        assert_eq!(fenced("", SOURCE_FENCE_TAG), "```jsx\n```");
    }

    #[test]
    fn embedded_backticks_are_not_escaped() {
        let source = "before\n```\nafter\n";
        let payload = fenced(source, "jsx");
        assert_eq!(payload, "```jsx\nbefore\n```\nafter\n```");
        // The source appears verbatim inside the payload.
        assert!(payload.contains(source));
    }

    #[test]
    fn source_without_trailing_newline_abuts_closing_fence() {
        assert_eq!(fenced("abc", "jsx"), "```jsx\nabc```");
    }
}
