// tests/lexer_tests.rs

use versa::{tokenize, ErrorType, Token, TokenKind, VersaError};

fn lex(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}

#[test]
fn test_comment_is_trimmed() {
    assert_eq!(lex("# hi"), vec![tok(TokenKind::Comment, "hi")]);
    assert_eq!(
        lex("#   spaced out   \nx"),
        vec![
            tok(TokenKind::Comment, "spaced out"),
            tok(TokenKind::Newline, "\n"),
            tok(TokenKind::Identifier, "x"),
        ]
    );
}

#[test]
fn test_numbers_are_permissive() {
    assert_eq!(lex("1.2.3"), vec![tok(TokenKind::Number, "1.2.3")]);
    assert_eq!(lex("42"), vec![tok(TokenKind::Number, "42")]);
    assert_eq!(lex("3."), vec![tok(TokenKind::Number, "3.")]);
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        lex(r#""say \"hi\"""#),
        vec![tok(TokenKind::String, r#"say "hi""#)]
    );
    // Only \" is an escape; other backslashes are kept verbatim.
    assert_eq!(lex(r#""a\nb""#), vec![tok(TokenKind::String, r"a\nb")]);
}

#[test]
fn test_keywords_versus_identifiers() {
    assert_eq!(
        lex("var true while foo_1 false"),
        vec![
            tok(TokenKind::Keyword, "var"),
            tok(TokenKind::Identifier, "true"),
            tok(TokenKind::Keyword, "while"),
            tok(TokenKind::Identifier, "foo_1"),
            tok(TokenKind::Identifier, "false"),
        ]
    );
}

#[test]
fn test_operators_longest_match_first() {
    assert_eq!(
        lex("a+=1"),
        vec![
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::Operator, "+="),
            tok(TokenKind::Number, "1"),
        ]
    );
    assert_eq!(
        lex("x-- <= !y"),
        vec![
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::Operator, "--"),
            tok(TokenKind::Operator, "<="),
            tok(TokenKind::Operator, "!"),
            tok(TokenKind::Identifier, "y"),
        ]
    );
    // `=>` is not an operator, so it splits.
    assert_eq!(
        lex("=>"),
        vec![tok(TokenKind::Operator, "="), tok(TokenKind::Operator, ">")]
    );
}

#[test]
fn test_punctuation() {
    let kinds: Vec<TokenKind> = lex("f(a, b).c[0]{}").into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Punctuation,
            TokenKind::Identifier,
            TokenKind::Punctuation,
            TokenKind::Identifier,
            TokenKind::Punctuation,
            TokenKind::Punctuation,
            TokenKind::Identifier,
            TokenKind::Punctuation,
            TokenKind::Number,
            TokenKind::Punctuation,
            TokenKind::Punctuation,
            TokenKind::Punctuation,
        ]
    );
}

#[test]
fn test_newlines_are_tokens() {
    let tokens = tokenize("a\n\nb").unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1], Token::newline());
    assert_eq!(tokens[2], Token::newline());
}

#[test]
fn test_unterminated_string_fails() {
    let err = tokenize("x = \"abc").unwrap_err();
    assert_eq!(err.error_type(), ErrorType::Lex);
    assert!(matches!(err, VersaError::UnterminatedString { offset: 4, .. }));
}

#[test]
fn test_unsupported_character_is_named() {
    let err = tokenize("a @ b").unwrap_err();
    assert!(matches!(err, VersaError::UnexpectedCharacter { ch: '@', offset: 2, .. }));
    assert!(err.to_string().contains('@'));
}

#[test]
fn test_only_spaces_are_skipped() {
    let err = tokenize("a\tb").unwrap_err();
    assert!(matches!(err, VersaError::UnexpectedCharacter { ch: '\t', .. }));
}

#[test]
fn test_identical_input_identical_tokens() {
    let source = "var x = f(1, \"two\") # three";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}
