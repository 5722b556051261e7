// this module is transparently re-exported by its parent `lexer`
use std::fmt;

/// A lexical token, with the position of its first character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// The decoded text of the token.
    ///
    /// * IRI references: the content between `<` and `>`, with `\u` escapes decoded
    /// * prefixed names: `prefix:local`
    /// * blank node labels: the label, without `_:`
    /// * variables: the name, without `?`
    /// * strings: the decoded value, without quotes
    /// * at-words: the word, without `@`
    /// * anything else: the lexeme itself
    pub text: String,
    /// Line of the first character (starting at 1)
    pub line: usize,
    /// Column of the first character (starting at 1)
    pub col: usize,
}

impl Token {
    /// Split the text of a [`TokenKind::PrefixedName`] into its prefix and local part.
    pub fn split_prefixed_name(&self) -> (&str, &str) {
        match self.text.split_once(':') {
            Some(pair) => pair,
            None => ("", &self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Iri => write!(f, "<{}>", self.text),
            TokenKind::BlankLabel => write!(f, "_:{}", self.text),
            TokenKind::Variable => write!(f, "?{}", self.text),
            TokenKind::String => write!(f, "{:?}", self.text),
            TokenKind::AtWord => write!(f, "@{}", self.text),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// The different kinds of [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `<...>`
    Iri,
    /// `prefix:local`, where both parts may be empty
    PrefixedName,
    /// `_:label`
    BlankLabel,
    /// `?name`
    Variable,
    /// a quoted string, short or long
    String,
    /// `[+-]digits[.digits][e[+-]digits]`
    Number,
    /// `@word`: a directive name or a language tag
    AtWord,
    /// a bare keyword
    Keyword(Keyword),
    /// `!`
    PathForward,
    /// `^`
    PathReverse,
    /// any other punctuation or operator
    Punct(Punct),
    /// The end of the input; returned again on every subsequent call.
    Eof,
}

/// Bare keywords of N3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `a`, short for `rdf:type`
    A,
    /// `has`, introducing a verb
    Has,
    /// `is`, introducing a reversed verb
    Is,
    /// `of`, closing a reversed verb
    Of,
    /// `this`, the enclosing formula
    This,
}

impl Keyword {
    /// The keyword as written in N3.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::A => "a",
            Keyword::Has => "has",
            Keyword::Is => "is",
            Keyword::Of => "of",
            Keyword::This => "this",
        }
    }
}

/// Punctuation and operators of N3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punct {
    /// `.`
    Dot,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Equals,
    /// `=>`
    Implies,
    /// `<=`
    ImpliedBy,
    /// `<=>`
    Means,
    /// `^^`
    DoubleCaret,
    /// `>-`, opening an inline verb
    VerbStart,
    /// `->`, closing an inline verb
    VerbEnd,
    /// `:-`, labelling an anonymous node
    NameIt,
    /// a `<` that does not start an IRI reference
    Lt,
    /// a `>` that does not end an IRI reference
    Gt,
}

impl Punct {
    /// The punctuation as written in N3.
    pub fn as_str(&self) -> &'static str {
        match self {
            Punct::Dot => ".",
            Punct::Semicolon => ";",
            Punct::Comma => ",",
            Punct::LBracket => "[",
            Punct::RBracket => "]",
            Punct::LBrace => "{",
            Punct::RBrace => "}",
            Punct::LParen => "(",
            Punct::RParen => ")",
            Punct::Equals => "=",
            Punct::Implies => "=>",
            Punct::ImpliedBy => "<=",
            Punct::Means => "<=>",
            Punct::DoubleCaret => "^^",
            Punct::VerbStart => ">-",
            Punct::VerbEnd => "->",
            Punct::NameIt => ":-",
            Punct::Lt => "<",
            Punct::Gt => ">",
        }
    }

    /// Recognize a single-character punctuation.
    pub(crate) fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '.' => Punct::Dot,
            ';' => Punct::Semicolon,
            ',' => Punct::Comma,
            '[' => Punct::LBracket,
            ']' => Punct::RBracket,
            '{' => Punct::LBrace,
            '}' => Punct::RBrace,
            '(' => Punct::LParen,
            ')' => Punct::RParen,
            _ => return None,
        })
    }
}
