/// Literal substring split. Every occurrence of `delimiter` produces one
/// element, so consecutive delimiters yield empty elements and the result
/// always has `occurrences + 1` entries. After a match, scanning resumes one
/// character past the start of the match.
pub fn split<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    if delimiter.is_empty() {
        parts.push(text);
        return parts;
    }

    let mut last = 0;
    let mut search_from = 0;
    while let Some(found) = text[search_from..].find(delimiter) {
        let next = search_from + found;
        parts.push(&text[last..next]);
        let step = text[next..].chars().next().map_or(1, char::len_utf8);
        last = next + step;
        search_from = last;
    }

    parts.push(&text[last..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split("HI THERE", " "), vec!["HI", "THERE"]);
    }

    #[test]
    fn test_empty_input_yields_one_empty_element() {
        assert_eq!(split("", " "), vec![""]);
    }

    #[test]
    fn test_consecutive_delimiters_keep_empty_elements() {
        assert_eq!(split("A  B", " "), vec!["A", "", "B"]);
        assert_eq!(split("/ /", "/"), vec!["", " ", ""]);
        assert_eq!(split("///", "/"), vec!["", "", "", ""]);
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        assert_eq!(split(" A ", " "), vec!["", "A", ""]);
    }

    #[test]
    fn test_element_count_is_occurrences_plus_one() {
        let text = ".- / -... / -.-.";
        let occurrences = text.matches('/').count();
        assert_eq!(split(text, "/").len(), occurrences + 1);
    }

    #[test]
    fn test_multi_char_delimiter_resumes_after_first_char() {
        // the second char of the match is kept at the start of the next element
        assert_eq!(split("a::b", "::"), vec!["a", ":b"]);
    }

    #[test]
    fn test_empty_delimiter_never_matches() {
        assert_eq!(split("abc", ""), vec!["abc"]);
    }
}
