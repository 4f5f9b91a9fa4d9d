//! Blank-line block segmentation of pasted source text.
//!
//! Splitting is purely textual: a blank line inside a string literal or a
//! comment still starts a new block.

pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Lazily splits `source_text` on every `"\n\n"`.
///
/// Blocks are yielded in source order, untrimmed, and empty blocks are kept,
/// so joining the blocks with [`BLOCK_SEPARATOR`] gives back the input.
/// Text without a blank line (including the empty string) is a single block.
pub fn segment_blocks(source_text: &str) -> impl Iterator<Item = &str> + '_ {
    source_text.split(BLOCK_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks(text: &str) -> Vec<&str> {
        segment_blocks(text).collect()
    }

    #[test]
    fn text_without_blank_line_is_one_block() {
        let text = "fn main() {\n    println!(\"hi\");\n}\n";
        assert_eq!(blocks(text), vec![text]);
    }

    #[test]
    fn empty_input_is_a_single_empty_block() {
        assert_eq!(blocks(""), vec![""]);
    }

    #[test]
    fn n_boundaries_give_n_plus_one_blocks_that_rejoin_exactly() {
        let cases = [
            "use std::io;\n\nfn main() {}",
            "a\n\nb\n\nc",
            "\n\nleading",
            "trailing\n\n",
            "a\n\n\n\nb",
            "a\n\n\nb",
        ];

        for text in cases {
            let segmented = blocks(text);
            assert_eq!(segmented.len(), text.matches(BLOCK_SEPARATOR).count() + 1);
            assert_eq!(segmented.join(BLOCK_SEPARATOR), text);
        }
    }

    #[test]
    fn preserves_order_and_keeps_empty_blocks() {
        assert_eq!(blocks("a\n\n\n\nb"), vec!["a", "", "b"]);
        assert_eq!(blocks("trailing\n\n"), vec!["trailing", ""]);
    }

    #[test]
    fn odd_newline_run_leaves_remainder_on_next_block() {
        assert_eq!(blocks("a\n\n\nb"), vec!["a", "\nb"]);
    }

    #[test]
    fn does_not_trim_whitespace() {
        assert_eq!(blocks("  x  \n\n\ty"), vec!["  x  ", "\ty"]);
    }

    #[test]
    fn splits_inside_string_literals() {
        let text = "let s = \"first\n\nsecond\";";
        assert_eq!(blocks(text), vec!["let s = \"first", "second\";"]);
    }
}
