//! Doc block extraction.
//!
//! Only comments opened with `/**` are documentation; ordinary `/* */`
//! comments are left alone.

use regex::Regex;
use std::sync::LazyLock;

// `/**`, then anything that does not close the comment, then `*/`
// (closing runs of stars like `**/` included).
static RE_DOC_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*\*(?:[^*]|\*+[^*/])*\*+/").unwrap());

/// Return every doc block in `content`, delimiters included, in file order.
pub fn extract_blocks(content: &str) -> Vec<&str> {
    RE_DOC_BLOCK.find_iter(content).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_block() {
        let src = "local x = 1;\n/**\n * hello\n */\n{}\n";
        assert_eq!(extract_blocks(src), vec!["/**\n * hello\n */"]);
    }

    #[test]
    fn blocks_in_file_order() {
        let src = "/** first */\n{ a: 1 }\n/**\n * second\n */\n";
        assert_eq!(
            extract_blocks(src),
            vec!["/** first */", "/**\n * second\n */"]
        );
    }

    #[test]
    fn ordinary_block_comments_are_ignored() {
        let src = "/* plain */\n/*\n * also plain\n */\n/** doc */";
        assert_eq!(extract_blocks(src), vec!["/** doc */"]);
    }

    #[test]
    fn block_ends_at_first_terminator() {
        let src = "/** one */ local a = 2 * 3; /** two */";
        assert_eq!(extract_blocks(src), vec!["/** one */", "/** two */"]);
    }

    #[test]
    fn stars_inside_body_and_terminator() {
        let src = "/** a * b ** c **/";
        assert_eq!(extract_blocks(src), vec![src]);
    }

    #[test]
    fn empty_ordinary_comment_is_not_a_doc_block() {
        assert!(extract_blocks("/**/ x").is_empty());
        assert_eq!(extract_blocks("/***/"), vec!["/***/"]);
    }

    #[test]
    fn unterminated_block_yields_nothing() {
        assert!(extract_blocks("/**\n * never closed\n").is_empty());
    }
}
