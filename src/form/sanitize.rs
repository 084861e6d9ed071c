use std::sync::LazyLock;

use regex::Regex;

// An unclosed `<script` never matches, so it passes through untouched.
static SCRIPT_BLOCKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script>").expect("script pattern compiles"));
static JS_SCHEMES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("scheme pattern compiles"));
// Strips only the `on...=` fragment of an event-handler assignment. The
// former attribute value is left in place as plain text.
static EVENT_HANDLERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=").expect("handler pattern compiles"));

/// Strips script blocks, `javascript:` schemes, and event-handler
/// assignments from a field value before it is stored.
///
/// Removing a substring can splice the two halves of a payload into a new
/// match (`javajavascript:script:` collapses to `javascript:` after one
/// pass), so the sweep repeats until the value stops changing. The result
/// is a fixed point: `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(value: &str) -> String {
    let mut out = value.to_string();
    loop {
        let next = sweep(&out);
        if next == out {
            return out;
        }
        out = next;
    }
}

fn sweep(value: &str) -> String {
    let value = SCRIPT_BLOCKS.replace_all(value, "");
    let value = JS_SCHEMES.replace_all(&value, "");
    EVENT_HANDLERS.replace_all(&value, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_blocks() {
        assert_eq!(sanitize("<script>alert(1)</script>Ada"), "Ada");
        assert_eq!(sanitize("be<script src=\"x\">payload</script>fore"), "before");
    }

    #[test]
    fn script_stripping_is_case_insensitive() {
        assert_eq!(sanitize("<ScRiPt>x</sCrIpT>ok"), "ok");
        assert_eq!(sanitize("JaVaScRiPt:alert(1)"), "alert(1)");
    }

    #[test]
    fn unclosed_script_tag_passes_through() {
        assert_eq!(sanitize("<script>alert(1)"), "<script>alert(1)");
    }

    #[test]
    fn strips_javascript_scheme() {
        assert_eq!(sanitize("javascript:alert(1)"), "alert(1)");
        assert_eq!(sanitize("click javascript:void(0) here"), "click void(0) here");
    }

    #[test]
    fn strips_event_handler_fragment_only() {
        // The value after the equals sign survives.
        assert_eq!(sanitize("onclick=alert(1)"), "alert(1)");
        assert_eq!(sanitize("onmouseover = doEvil()"), " doEvil()");
        assert_eq!(sanitize("ONLOAD=x"), "x");
    }

    #[test]
    fn leaves_ordinary_text_alone() {
        assert_eq!(sanitize("Ada Lovelace"), "Ada Lovelace");
        assert_eq!(sanitize("one < two, script kiddies"), "one < two, script kiddies");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn is_idempotent_under_splicing() {
        for input in [
            "javajavascript:script:alert(1)",
            "<scr<script>x</script>ipt>y</script>",
            "ononclick=click=z",
            "<script>alert(1)</script>Ada",
        ] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not a fixed point for {input:?}");
        }
    }
}
