//! Tokenizer for N3.
//!
//! [`Lexer::next_token`] is called repeatedly until it returns a [`TokenKind::Eof`] token.
//! The token is chosen from its first character;
//! words that are ambiguous in N3 (prefixed names, keywords, numbers)
//! are resolved by a list of ordered trials,
//! each of which looks at the remaining input without consuming it.
//! The first trial that matches wins.

mod _error;
pub use _error::*;
mod _token;
pub use _token::*;
#[cfg(test)]
mod test;

/// A trial recognizes a token at the start of the remaining input,
/// returning its length in bytes and its kind.
type Trial = fn(&str) -> Option<(usize, TokenKind)>;

/// Ordered trials for everything that is not a punctuation, a string or an IRI reference.
const WORD_TRIALS: &[Trial] = &[
    qualified_name,
    has_keyword,
    this_keyword,
    default_prefix_name,
    prefix_only,
    name_it,
    of_keyword,
    is_keyword,
    bare_colon,
    number,
    a_keyword,
];

/// An N3 tokenizer, over a string.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,
    after_cr: bool,
    legacy_vertical_tab: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Build a new tokenizer for `input`.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            col: 1,
            after_cr: false,
            legacy_vertical_tab: false,
            finished: false,
        }
    }

    /// Whether the `\v` escape is decoded as a form-feed (as historical N3 tools do)
    /// rather than as a vertical tab.
    pub fn with_legacy_vertical_tab(mut self, legacy: bool) -> Self {
        self.legacy_vertical_tab = legacy;
        self
    }

    /// The current position in the input, as `(line, col)` (both starting at 1).
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    /// Recognize the next token.
    ///
    /// At the end of the input, a [`TokenKind::Eof`] token is returned (repeatedly).
    ///
    /// # Errors
    /// Fails if no token can be recognized at the current position.
    /// The tokenizer does not attempt to recover from such an error.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_blanks();
        let (line, col) = (self.line, self.col);
        let input = self.input;
        let rest = &input[self.pos..];
        let Some(first) = rest.chars().next() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                text: String::new(),
                line,
                col,
            });
        };
        let no_viable = LexError::NoViableToken {
            ch: first,
            line,
            col,
        };
        let (len, kind, text) = if first == '"' || first == '\'' {
            let (len, raw) = scan_string(rest, first).ok_or(no_viable)?;
            let text = unescape(raw, true, self.legacy_vertical_tab);
            (len, TokenKind::String, text)
        } else {
            let (len, kind) = recognize(rest).ok_or(no_viable)?;
            (len, kind, token_text(&rest[..len], kind))
        };
        self.bump(len);
        Ok(Token {
            kind,
            text,
            line,
            col,
        })
    }

    /// Skip whitespace and comments.
    fn skip_blanks(&mut self) {
        loop {
            let rest = &self.input[self.pos..];
            let len = match rest.chars().next() {
                Some(' ' | '\t' | '\n' | '\r' | '\u{c}') => 1,
                Some('#') => rest
                    .find(|c: char| c == '\n' || c == '\r')
                    .unwrap_or(rest.len()),
                _ => return,
            };
            self.bump(len);
        }
    }

    /// Consume `len` bytes of input, keeping track of lines and columns.
    ///
    /// `\r\n`, `\n` and `\r` each count as a single line break.
    fn bump(&mut self, len: usize) {
        for c in self.input[self.pos..self.pos + len].chars() {
            match c {
                '\n' if self.after_cr => self.after_cr = false,
                '\n' | '\r' => {
                    self.line += 1;
                    self.col = 1;
                    self.after_cr = c == '\r';
                }
                _ => {
                    self.col += 1;
                    self.after_cr = false;
                }
            }
        }
        self.pos += len;
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yield all tokens, the last one being [`TokenKind::Eof`] or an error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let ret = self.next_token();
        self.finished = !matches!(&ret, Ok(tok) if tok.kind != TokenKind::Eof);
        Some(ret)
    }
}

/// Recognize any token but a string.
fn recognize(rest: &str) -> Option<(usize, TokenKind)> {
    use Punct::*;
    use TokenKind::Punct as P;
    let mut chars = rest.chars();
    let first = chars.next()?;
    let second = chars.next();
    match first {
        '<' => Some(match second {
            Some('=') if rest[2..].starts_with('>') => (3, P(Means)),
            Some('=') => (2, P(ImpliedBy)),
            Some('<') => (1, P(Lt)),
            _ => iri_ref(rest).unwrap_or((1, P(Lt))),
        }),
        '>' if second == Some('-') => Some((2, P(VerbStart))),
        '>' => Some((1, P(Gt))),
        '=' if second == Some('>') => Some((2, P(Implies))),
        '=' => Some((1, P(Equals))),
        '^' if second == Some('^') => Some((2, P(DoubleCaret))),
        '^' => Some((1, TokenKind::PathReverse)),
        '!' => Some((1, TokenKind::PathForward)),
        '-' if second == Some('>') => Some((2, P(VerbEnd))),
        '?' => match local_len(&rest[1..]) {
            0 => None,
            len => Some((1 + len, TokenKind::Variable)),
        },
        '@' => match rest[1..].find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_')) {
            Some(0) => None,
            Some(len) => Some((1 + len, TokenKind::AtWord)),
            None if rest.len() > 1 => Some((rest.len(), TokenKind::AtWord)),
            None => None,
        },
        _ => match Punct::from_char(first) {
            Some(punct) => Some((1, P(punct))),
            None => WORD_TRIALS.iter().find_map(|trial| trial(rest)),
        },
    }
}

/// `<...>`, without any whitespace, `<` or `"` inside.
fn iri_ref(rest: &str) -> Option<(usize, TokenKind)> {
    for (i, c) in rest[1..].char_indices() {
        match c {
            '>' => return Some((i + 2, TokenKind::Iri)),
            '<' | '"' => return None,
            c if c.is_whitespace() => return None,
            _ => {}
        }
    }
    None
}

/// Find the end of a string starting with `quote`,
/// returning the length of the whole token and its raw content.
///
/// Short strings can not contain a line break.
fn scan_string(rest: &str, quote: char) -> Option<(usize, &str)> {
    let triple = if quote == '"' { "\"\"\"" } else { "'''" };
    if let Some(body) = rest.strip_prefix(triple) {
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                chars.next();
            } else if body[i..].starts_with(triple) {
                return Some((i + 6, &body[..i]));
            }
        }
        None
    } else {
        let body = &rest[1..];
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    chars.next();
                }
                '\n' | '\r' => return None,
                c if c == quote => return Some((i + 2, &body[..i])),
                _ => {}
            }
        }
        None
    }
}

/// Decode the text of a token from its lexeme.
fn token_text(lexeme: &str, kind: TokenKind) -> String {
    match kind {
        TokenKind::Iri => unescape(&lexeme[1..lexeme.len() - 1], false, false),
        TokenKind::BlankLabel => lexeme[2..].to_string(),
        TokenKind::Variable | TokenKind::AtWord => lexeme[1..].to_string(),
        _ => lexeme.to_string(),
    }
}

/// Decode escape sequences.
///
/// `\u` and `\U` escapes are always decoded;
/// other escapes are only decoded if `echar` is set.
/// Unrecognized escapes are kept as is, backslash included.
fn unescape(raw: &str, echar: bool, legacy_vertical_tab: bool) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }
    let mut ret = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            ret.push(c);
            continue;
        }
        let Some(e) = chars.next() else {
            ret.push('\\');
            break;
        };
        let decoded = match e {
            'u' => hex_char(&mut chars, 4),
            'U' => hex_char(&mut chars, 8),
            _ if !echar => None,
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            'b' => Some('\u{8}'),
            'f' => Some('\u{c}'),
            'a' => Some('\u{7}'),
            'v' if legacy_vertical_tab => Some('\u{c}'),
            'v' => Some('\u{b}'),
            '"' | '\'' | '\\' => Some(e),
            _ => None,
        };
        match decoded {
            Some(d) => ret.push(d),
            None => {
                ret.push('\\');
                ret.push(e);
            }
        }
    }
    ret
}

/// Decode `n` hexadecimal digits, only consuming them on success.
fn hex_char(chars: &mut std::str::Chars, n: usize) -> Option<char> {
    let digits: String = chars.clone().take(n).collect();
    if digits.chars().count() != n || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let c = char::from_u32(u32::from_str_radix(&digits, 16).ok()?)?;
    chars.nth(n - 1);
    Some(c)
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Length of the `NSNAME` at the start of `s` (0 if there is none).
fn name_len(s: &str) -> usize {
    match s.chars().next() {
        Some(c) if is_name_start(c) => s
            .char_indices()
            .find(|(_, c)| !is_name_char(*c))
            .map_or(s.len(), |(i, _)| i),
        _ => 0,
    }
}

/// Length of the `LNAME` at the start of `s` (0 if there is none).
///
/// Unlike prefixes, local names may start with a digit.
fn local_len(s: &str) -> usize {
    match s.chars().next() {
        Some(c) if c.is_alphanumeric() || c == '_' => s
            .char_indices()
            .find(|(_, c)| !is_name_char(*c))
            .map_or(s.len(), |(i, _)| i),
        _ => 0,
    }
}

/// Is `s[len..]` at a word boundary?
fn boundary(s: &str, len: usize) -> bool {
    match s[len..].chars().next() {
        Some(c) => !is_name_char(c) && c != ':',
        None => true,
    }
}

fn keyword(s: &str, kw: Keyword) -> Option<(usize, TokenKind)> {
    let word = kw.as_str();
    (s.starts_with(word) && boundary(s, word.len())).then_some((word.len(), TokenKind::Keyword(kw)))
}

/// `NSNAME ':' LNAME`, which is a blank node label if `NSNAME` is `_`.
fn qualified_name(s: &str) -> Option<(usize, TokenKind)> {
    let prefix = name_len(s);
    if prefix == 0 || !s[prefix..].starts_with(':') {
        return None;
    }
    let local = local_len(&s[prefix + 1..]);
    if local == 0 {
        return None;
    }
    let kind = if &s[..prefix] == "_" {
        TokenKind::BlankLabel
    } else {
        TokenKind::PrefixedName
    };
    Some((prefix + 1 + local, kind))
}

fn has_keyword(s: &str) -> Option<(usize, TokenKind)> {
    keyword(s, Keyword::Has)
}

fn this_keyword(s: &str) -> Option<(usize, TokenKind)> {
    keyword(s, Keyword::This)
}

/// `':' LNAME`
fn default_prefix_name(s: &str) -> Option<(usize, TokenKind)> {
    let local = local_len(s.strip_prefix(':')?);
    (local > 0).then_some((1 + local, TokenKind::PrefixedName))
}

/// `NSNAME ':'`
fn prefix_only(s: &str) -> Option<(usize, TokenKind)> {
    let prefix = name_len(s);
    (prefix > 0 && s[prefix..].starts_with(':')).then_some((prefix + 1, TokenKind::PrefixedName))
}

fn name_it(s: &str) -> Option<(usize, TokenKind)> {
    s.starts_with(":-")
        .then_some((2, TokenKind::Punct(Punct::NameIt)))
}

fn of_keyword(s: &str) -> Option<(usize, TokenKind)> {
    keyword(s, Keyword::Of)
}

fn is_keyword(s: &str) -> Option<(usize, TokenKind)> {
    keyword(s, Keyword::Is)
}

fn bare_colon(s: &str) -> Option<(usize, TokenKind)> {
    s.starts_with(':').then_some((1, TokenKind::PrefixedName))
}

/// `[+-]? digits ('.' digits)? ([eE] [+-]? digits)?`
fn number(s: &str) -> Option<(usize, TokenKind)> {
    let bytes = s.as_bytes();
    let digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |b| b.iter().take_while(|b| b.is_ascii_digit()).count())
    };
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits(end);
    if integer == 0 {
        return None;
    }
    end += integer;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits(end + 1);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    Some((end, TokenKind::Number))
}

fn a_keyword(s: &str) -> Option<(usize, TokenKind)> {
    keyword(s, Keyword::A)
}
