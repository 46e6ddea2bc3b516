/// Split a task name into the lines of its box
///
/// Names that fit in `box_width` stay on one line untouched. Longer names are
/// split on single spaces and packed greedily: a word joins the current line
/// while `line_len + word_len < box_width - 2`, every word keeps a trailing
/// space, and a word wider than the box gets a line of its own.
pub fn wrap_name(name: &str, box_width: usize) -> Vec<String> {
    if name.chars().count() <= box_width {
        return vec![name.to_string()];
    }

    let limit = box_width.saturating_sub(2);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in name.split(' ') {
        let word_len = word.chars().count();

        if line_len > 0 && line_len + word_len >= limit {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }

        line.push_str(word);
        line.push(' ');
        line_len += word_len + 1;
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn collapse(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_short_name_is_untouched() {
        assert_eq!(wrap_name("Buy milk", 20), vec!["Buy milk"]);
        assert_eq!(wrap_name("exactly ten", 11), vec!["exactly ten"]);
    }

    #[test]
    fn test_long_name_is_packed() {
        let lines = wrap_name("the quick brown fox jumps over the lazy dog", 16);
        assert_eq!(
            lines,
            vec!["the quick ", "brown fox ", "jumps over ", "the lazy dog "]
        );
    }

    #[test]
    fn test_lines_fit_the_box() {
        let name = "prepare the quarterly planning document and circulate it to the team";
        for line in wrap_name(name, 24) {
            assert!(line.chars().count() < 24, "{:?}", line);
        }
    }

    #[test]
    fn test_overlong_word_gets_own_line() {
        let lines = wrap_name("see https://example.com/a/very/long/path now", 12);
        assert_eq!(
            lines,
            vec!["see ", "https://example.com/a/very/long/path ", "now "]
        );
    }

    #[test]
    fn test_overlong_first_word_is_not_preceded_by_empty_line() {
        let lines = wrap_name("supercalifragilistic", 10);
        assert_eq!(lines, vec!["supercalifragilistic "]);
    }

    proptest! {
        #[test]
        fn wrapping_is_lossless(
            words in prop::collection::vec("[a-z]{1,12}", 1..20),
            box_width in 4usize..60,
        ) {
            let name = words.join(" ");
            let lines = wrap_name(&name, box_width);
            prop_assert_eq!(collapse(&lines.concat()), name);
        }

        #[test]
        fn wrapped_lines_fit_when_words_do(
            words in prop::collection::vec("[a-z]{1,6}", 1..20),
            box_width in 10usize..60,
        ) {
            let name = words.join(" ");
            let lines = wrap_name(&name, box_width);
            if lines.len() > 1 {
                for line in &lines {
                    prop_assert!(line.chars().count() <= box_width);
                }
            }
        }
    }
}
