//! Edge case tests for minic-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_all, LexError, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        tokenize_all(source).unwrap()
    }

    fn errors(source: &str) -> Vec<LexError> {
        tokenize(source).filter_map(Result::err).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\r\n\x0B\x0C  \n").is_empty());
    }

    #[test]
    fn test_edge_single_punctuation() {
        for (src, kind) in [
            ("=", TokenKind::Assign),
            ("+", TokenKind::Plus),
            (";", TokenKind::Semicolon),
            ("(", TokenKind::LParen),
            (")", TokenKind::RParen),
        ] {
            let t = lex_all(src);
            assert_eq!(t.len(), 1);
            assert_eq!(t[0].kind, kind);
            assert_eq!(t[0].text, src);
        }
    }

    #[test]
    fn test_edge_adjacent_punctuation() {
        let t = lex_all("();;=+");
        let kinds: Vec<_> = t.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Semicolon,
                TokenKind::Semicolon,
                TokenKind::Assign,
                TokenKind::Plus,
            ]
        );
    }

    #[test]
    fn test_edge_no_double_equals() {
        let t = lex_all("==");
        assert_eq!(t.len(), 2);
        assert!(t.iter().all(|t| t.kind == TokenKind::Assign));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let src = format!("var {} = 1 ;", name);
        let t = lex_all(&src);
        assert_eq!(t[1].text, name);
        assert_eq!(t[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_keyword_at_end_of_input() {
        let t = lex_all("return");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb");
        assert_eq!(t[1].text, "b");
        assert_eq!((t[1].span.line, t[1].span.column), (2, 1));
    }

    #[test]
    fn test_edge_unrecognized_character() {
        let errs = errors("a = 1 # 2 ;");
        assert_eq!(
            errs,
            [LexError::UnrecognizedCharacter {
                ch: '#',
                offset: 6,
                line: 1,
                column: 7,
            }]
        );
    }

    #[test]
    fn test_edge_underscore_is_not_identifier() {
        let items: Vec<_> = tokenize("a_b").collect();
        assert_eq!(items.len(), 3);
        assert!(matches!(
            items[1],
            Err(LexError::UnrecognizedCharacter { ch: '_', offset: 1, .. })
        ));
    }

    #[test]
    fn test_edge_non_ascii_is_unrecognized() {
        let errs = errors("x = é ;");
        assert_eq!(errs.len(), 1);
        assert!(matches!(
            errs[0],
            LexError::UnrecognizedCharacter { ch: 'é', offset: 4, .. }
        ));
        // Scanning resumes after the two-byte character.
        let tokens: Vec<_> = tokenize("é;").filter_map(Result::ok).collect();
        assert_eq!(tokens[0].span.start, 2);
    }

    #[test]
    fn test_edge_non_breaking_space_is_unrecognized() {
        assert_eq!(errors("a\u{00A0}b").len(), 1);
    }

    #[test]
    fn test_edge_only_garbage_terminates() {
        let errs = errors("@#$%^&*");
        assert_eq!(errs.len(), 7);
    }

    #[test]
    fn test_edge_nul_byte() {
        let items: Vec<_> = tokenize("\0").collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_err());
    }

    #[test]
    fn test_edge_texts_are_source_slices() {
        let src = "var  b3=2;";
        for t in lex_all(src) {
            assert_eq!(&src[t.span.start..t.span.end], t.text);
        }
    }
}
