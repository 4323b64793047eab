//! Single-scan tokenizer for raw command-line strings.

use std::ops::Range;

/// Splits `buf` into argument tokens in one left-to-right scan, honoring
/// quoting and backslash escaping.
///
/// # Arguments
/// * `buf` - The command line bytes; written to only when recording.
/// * `record` - `None` for the count-only pass, `Some` to record token spans.
///
/// # Returns
/// The number of tokens found.
///
/// The same routine serves both phases of table construction:
///
/// * `record = None` is the count-only pass. The buffer is never written; only
///   the number of tokens is computed.
/// * `record = Some(spans)` is the extract pass. Token content is compacted in
///   place (dropped escape backslashes shift the rest of the token left) and
///   one byte range into the compacted buffer is pushed per token, in order of
///   appearance.
///
/// Both passes run the identical state machine, so a count-only pass followed
/// by an extract pass over the same input always agree on the count.
///
/// Rules:
/// * A backslash escapes exactly the next byte, whatever it is. The escaped
///   byte is ordinary content, never a delimiter, and the backslash itself is
///   not emitted. A trailing backslash has nothing to escape and stays a
///   literal.
/// * Unescaped spaces between tokens are skipped; no empty tokens appear
///   between words.
/// * An unescaped `"` outside a token opens a quoted token beginning after the
///   quote; the matching `"` ends it, excluded. Adjacent quotes therefore
///   yield an empty token, which is counted and recorded. A quote left open at
///   end of input is implicitly closed there. A `"` in the middle of an
///   unquoted token is ordinary content.
/// * The final byte of the input ends any open token, inclusive unless it was
///   a closing quote or an unescaped space.
///
/// There is no failure path: malformed quoting or escaping degrades to the
/// tie-breaks above.
pub(crate) fn scan(buf: &mut [u8], mut record: Option<&mut Vec<Range<usize>>>) -> usize {
    let mut count = 0;
    let mut in_token = false;
    let mut in_quote = false;
    let mut escaped = false;
    let mut token_start = 0;
    // Compaction cursor; only meaningful when recording.
    let mut write = 0;

    let len = buf.len();
    for read in 0..len {
        let byte = buf[read];
        let last = read + 1 == len;

        if byte == b'\\' && !escaped && !last {
            escaped = true;
            continue;
        }
        let literal = escaped;
        escaped = false;

        if !in_token {
            if byte == b' ' && !literal {
                continue;
            }
            if byte == b'"' && !literal {
                // Quoted token; its content begins after the quote.
                in_token = true;
                in_quote = true;
                token_start = write;
                if last {
                    // Unterminated trailing quote: implicitly closed, empty token.
                    count += 1;
                    if let Some(spans) = record.as_deref_mut() {
                        spans.push(write..write);
                    }
                }
                continue;
            }
            in_token = true;
            token_start = write;
        } else if !literal && ((byte == b'"' && in_quote) || (byte == b' ' && !in_quote)) {
            // Closing quote or unquoted space ends the token, delimiter excluded.
            count += 1;
            if let Some(spans) = record.as_deref_mut() {
                spans.push(token_start..write);
            }
            in_token = false;
            in_quote = false;
            continue;
        }

        // Ordinary content byte.
        if record.is_some() {
            buf[write] = byte;
        }
        write += 1;

        if last {
            count += 1;
            if let Some(spans) = record.as_deref_mut() {
                spans.push(token_start..write);
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(line: &str) -> usize {
        let mut buf = line.as_bytes().to_vec();
        scan(&mut buf, None)
    }

    fn extract(line: &str) -> Vec<String> {
        let mut buf = line.as_bytes().to_vec();
        let mut spans = Vec::new();
        scan(&mut buf, Some(&mut spans));
        spans
            .iter()
            .map(|span| String::from_utf8(buf[span.clone()].to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_input_has_no_tokens() {
        assert_eq!(count(""), 0);
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_splits_on_spaces() {
        assert_eq!(extract("a b c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_skips_runs_of_spaces() {
        assert_eq!(extract("  a   b  "), ["a", "b"]);
        assert_eq!(count("   "), 0);
    }

    #[test]
    fn test_quotes_preserve_spaces() {
        assert_eq!(extract("\"a b\" c"), ["a b", "c"]);
    }

    #[test]
    fn test_escaped_space_does_not_split() {
        assert_eq!(extract("a\\ b"), ["a b"]);
    }

    #[test]
    fn test_escaped_quote_is_literal() {
        assert_eq!(extract("\\\"a b\\\""), ["\"a", "b\""]);
    }

    #[test]
    fn test_adjacent_quotes_make_empty_token() {
        assert_eq!(extract("\"\""), [""]);
    }

    #[test]
    fn test_empty_token_between_words_is_kept() {
        assert_eq!(extract("a \"\" b"), ["a", "", "b"]);
    }

    #[test]
    fn test_unterminated_quote_closes_at_end() {
        assert_eq!(extract("\"a b"), ["a b"]);
        assert_eq!(extract("a \""), ["a", ""]);
    }

    #[test]
    fn test_trailing_backslash_is_literal() {
        assert_eq!(extract("a\\"), ["a\\"]);
    }

    #[test]
    fn test_escape_of_final_character() {
        assert_eq!(extract("ab\\c"), ["abc"]);
    }

    #[test]
    fn test_quote_inside_word_is_literal() {
        assert_eq!(extract("a\"b c"), ["a\"b", "c"]);
    }

    #[test]
    fn test_token_resumes_after_closing_quote() {
        assert_eq!(extract("\"a\"b"), ["a", "b"]);
    }

    #[test]
    fn test_trailing_space_is_not_part_of_token() {
        assert_eq!(extract("ab "), ["ab"]);
    }

    #[test]
    fn test_multibyte_content_survives() {
        assert_eq!(extract("héllo \"wörld x\" \\é"), ["héllo", "wörld x", "é"]);
    }

    #[test]
    fn test_count_pass_matches_extract_pass() {
        let cases = [
            "",
            "   ",
            "a b c",
            "\"a b\" c",
            "a\\ b",
            "\"\"",
            "a \"\" b",
            "\"a b",
            "a \"",
            "a\\",
            "ab\\c",
            "a\"b c",
            "\"a\"b",
            "-port 2302 -connect \"10.0.0.1:2302\" -window",
        ];
        for case in cases {
            assert_eq!(count(case), extract(case).len(), "input: {case:?}");
        }
    }

    #[test]
    fn test_count_pass_leaves_buffer_untouched() {
        let mut buf = b"\"a b\" \\ c".to_vec();
        let original = buf.clone();
        scan(&mut buf, None);
        assert_eq!(buf, original);
    }
}
