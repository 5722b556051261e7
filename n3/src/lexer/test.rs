use super::*;
use test_case::test_case;
use Keyword::*;
use Punct::*;
use TokenKind::{
    AtWord, BlankLabel, Iri, Number, PathForward, PathReverse, PrefixedName, Punct as P,
    String as Str, Variable,
};

fn tokens(input: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(input)
        .map(|res| res.unwrap())
        .filter(|tok| tok.kind != TokenKind::Eof)
        .map(|tok| (tok.kind, tok.text))
        .collect()
}

fn kinds(input: &str) -> Vec<TokenKind> {
    tokens(input).into_iter().map(|(kind, _)| kind).collect()
}

#[test_case("<http://example.org/>", Iri, "http://example.org/"; "iri")]
#[test_case("<>", Iri, ""; "empty iri")]
#[test_case(r"<http://example.org/\u00E9>", Iri, "http://example.org/é"; "iri with uchar")]
#[test_case("ex:foo", PrefixedName, "ex:foo"; "prefixed name")]
#[test_case("ex:", PrefixedName, "ex:"; "prefix only")]
#[test_case(":foo", PrefixedName, ":foo"; "default prefix")]
#[test_case(":", PrefixedName, ":"; "bare colon")]
#[test_case("ex:1a-b_c", PrefixedName, "ex:1a-b_c"; "local name starting with digit")]
#[test_case("has:x", PrefixedName, "has:x"; "keyword as prefix")]
#[test_case("is:", PrefixedName, "is:"; "keyword as prefix alone")]
#[test_case("_:b0", BlankLabel, "b0"; "blank node label")]
#[test_case("?x", Variable, "x"; "variable")]
#[test_case("@prefix", AtWord, "prefix"; "directive")]
#[test_case("@en-US", AtWord, "en-US"; "language tag")]
#[test_case("42", Number, "42"; "integer")]
#[test_case("-4.2", Number, "-4.2"; "decimal")]
#[test_case("+4.2E-10", Number, "+4.2E-10"; "double")]
#[test_case("a", TokenKind::Keyword(A), "a"; "a")]
#[test_case("has", TokenKind::Keyword(Has), "has"; "has")]
#[test_case("is", TokenKind::Keyword(Is), "is"; "is")]
#[test_case("of", TokenKind::Keyword(Of), "of"; "of")]
#[test_case("this", TokenKind::Keyword(This), "this"; "this")]
#[test_case("!", PathForward, "!"; "path forward")]
#[test_case("^", PathReverse, "^"; "path reverse")]
#[test_case("=>", P(Implies), "=>"; "implies")]
#[test_case("<=", P(ImpliedBy), "<="; "implied by")]
#[test_case("<=>", P(Means), "<=>"; "means")]
#[test_case("=", P(Equals), "="; "equals")]
#[test_case(":-", P(NameIt), ":-"; "name it")]
#[test_case(">-", P(VerbStart), ">-"; "verb start")]
#[test_case("->", P(VerbEnd), "->"; "verb end")]
#[test_case("^^", P(DoubleCaret), "^^"; "double caret")]
fn single_token(input: &str, kind: TokenKind, text: &str) {
    assert_eq!(tokens(input), vec![(kind, text.to_string())]);
}

#[test_case("1.", vec![Number, P(Dot)]; "dot after integer")]
#[test_case("1.5.", vec![Number, P(Dot)]; "dot after decimal")]
#[test_case("ex:a.", vec![PrefixedName, P(Dot)]; "no dot in local names")]
#[test_case("<<", vec![P(Lt), P(Lt)]; "double lt")]
#[test_case("< >", vec![P(Lt), P(Gt)]; "bare lt gt")]
#[test_case("<a a>", vec![P(Lt), TokenKind::Keyword(A), TokenKind::Keyword(A), P(Gt)]; "iri with space")]
#[test_case("a:b a", vec![PrefixedName, TokenKind::Keyword(A)]; "qualified before keyword")]
#[test_case(":a!:b^:c", vec![PrefixedName, PathForward, PrefixedName, PathReverse, PrefixedName]; "paths")]
#[test_case("\"x\"^^xsd:int", vec![Str, P(DoubleCaret), PrefixedName]; "datatype")]
#[test_case("\"x\"@en", vec![Str, AtWord]; "language")]
#[test_case("[ ] ( ) { } ; ,", vec![P(LBracket), P(RBracket), P(LParen), P(RParen), P(LBrace), P(RBrace), P(Semicolon), P(Comma)]; "brackets")]
#[test_case("ex:a # comment\n ex:b", vec![PrefixedName, PrefixedName]; "comment")]
#[test_case("is ex:p of", vec![TokenKind::Keyword(Is), PrefixedName, TokenKind::Keyword(Of)]; "is of")]
fn token_kinds(input: &str, expected: Vec<TokenKind>) {
    assert_eq!(kinds(input), expected);
}

#[test_case(r#""hello""#, "hello"; "simple")]
#[test_case(r#""""#, ""; "empty")]
#[test_case(r#"''"#, ""; "empty single quotes")]
#[test_case(r#"'it''s'"#, "it"; "single quotes stop early")]
#[test_case(r#""he said \"hi\"""#, r#"he said "hi""#; "escaped quotes")]
#[test_case(r#""a\tb\nc\\d""#, "a\tb\nc\\d"; "control escapes")]
#[test_case(r#""\a\b\f""#, "\u{7}\u{8}\u{c}"; "bell backspace formfeed")]
#[test_case(r#""\v""#, "\u{b}"; "vertical tab")]
#[test_case(r#""\q""#, "\\q"; "unknown escape passes through")]
#[test_case(r#""café \U0001F600""#, "café 😀"; "uchar")]
#[test_case(r#""\u00zz""#, "\\u00zz"; "bad uchar passes through")]
#[test_case("\"\"\"line 1\nline \"2\" ok\"\"\"", "line 1\nline \"2\" ok"; "long string")]
#[test_case("'''it's'''", "it's"; "long single quotes")]
fn strings(input: &str, expected: &str) {
    let got = tokens(input);
    assert_eq!(got[0], (Str, expected.to_string()));
}

#[test]
fn legacy_vertical_tab() {
    let mut lexer = Lexer::new(r#""\v""#).with_legacy_vertical_tab(true);
    assert_eq!(lexer.next_token().unwrap().text, "\u{c}");
}

#[test]
fn positions() {
    let input = "a\r\n  ex:b\r:c\n\n  \"\"\"x\ny\"\"\" .";
    let got: Vec<_> = Lexer::new(input)
        .map(|res| res.unwrap())
        .map(|tok| (tok.line, tok.col))
        .collect();
    assert_eq!(got, vec![(1, 1), (2, 3), (3, 1), (5, 3), (6, 6), (6, 7)]);
}

#[test]
fn eof_is_repeated() {
    let mut lexer = Lexer::new("  # nothing");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test_case("foo", 'f', 1, 1; "bare word")]
#[test_case("ex:a $", '$', 1, 6; "dollar")]
#[test_case("\n  \"abc", '"', 2, 3; "unterminated string")]
#[test_case("\"ab\ncd\"", '"', 1, 1; "line break in short string")]
#[test_case("\"\"\"abc\"\"", '"', 1, 1; "unterminated long string")]
#[test_case("?", '?', 1, 1; "empty variable")]
#[test_case("@ ", '@', 1, 1; "empty at-word")]
#[test_case("-", '-', 1, 1; "lone minus")]
fn errors(input: &str, ch: char, line: usize, col: usize) {
    let err = Lexer::new(input)
        .find_map(Result::err)
        .expect("an error should be raised");
    assert_eq!(err, LexError::NoViableToken { ch, line, col });
    assert_eq!(err.to_string(), format!("{line}:{col} no viable token starting with {ch:?}"));
}
