//! Property tests for the Mini lexer.

use minic_lex::{is_keyword, tokenize, tokenize_all, LexError, TokenKind, KEYWORDS};
use proptest::prelude::*;

/// Source made only of characters the lexer accepts.
fn valid_source() -> impl Strategy<Value = String> {
    "[A-Za-z0-9=+;() \t\n]{0,200}"
}

proptest! {
    #[test]
    fn whitespace_only_yields_nothing(src in "[ \t\r\n]{0,64}") {
        prop_assert!(tokenize_all(&src).unwrap().is_empty());
    }

    #[test]
    fn digit_run_is_one_number(digits in "[0-9]{1,40}") {
        let tokens = tokenize_all(&digits).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].text, digits.as_str());
    }

    #[test]
    fn word_is_keyword_iff_in_set(word in "[A-Za-z][A-Za-z0-9]{0,12}") {
        let tokens = tokenize_all(&word).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        let expected = if KEYWORDS.contains(&word.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        prop_assert_eq!(tokens[0].kind, expected);
        prop_assert_eq!(is_keyword(&word), expected == TokenKind::Keyword);
    }

    #[test]
    fn valid_source_never_errors(src in valid_source()) {
        prop_assert!(tokenize_all(&src).is_ok());
    }

    #[test]
    fn relexing_joined_texts_is_stable(src in valid_source()) {
        let tokens = tokenize_all(&src).unwrap();
        let joined = tokens.iter().map(|t| t.text).collect::<Vec<_>>().join(" ");
        let again = tokenize_all(&joined).unwrap();

        let before: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        let after: Vec<_> = again.iter().map(|t| t.kind).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn spans_cover_their_text(src in valid_source()) {
        let mut last_end = 0;
        for token in tokenize_all(&src).unwrap() {
            prop_assert_eq!(&src[token.span.start..token.span.end], token.text);
            prop_assert!(token.span.start >= last_end);
            last_end = token.span.end;
        }
    }

    #[test]
    fn any_input_terminates(src in any::<String>()) {
        let items = tokenize(&src).count();
        prop_assert!(items <= src.chars().count());
    }

    #[test]
    fn one_error_per_bad_character(
        left in "[a-z]{1,5}",
        bad in "[#$@!?_~]",
        right in "[a-z]{1,5}",
    ) {
        let src = format!("{left}{bad}{right}");
        let errors: Vec<LexError> = tokenize(&src).filter_map(Result::err).collect();
        prop_assert_eq!(errors.len(), 1);
        let LexError::UnrecognizedCharacter { ch, offset, .. } = errors[0];
        prop_assert_eq!(ch.to_string(), bad);
        prop_assert_eq!(offset, left.len());
    }
}
