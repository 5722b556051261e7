//! Recursive-descent parser for N3.
//!
//! The parser does not build any graph:
//! it pushes [events](Event) into an [`EventSink`],
//! leaving it to the sink to interpret prefixed names, operators and formulas
//! (see [`Materializer`](crate::materializer::Materializer)).
//!
//! Anonymous nodes (`[ ]`, list cells, path hops) and formulas (`{ }`)
//! are given identifiers from a counter owned by each call to [`Parser::parse`];
//! they are written `=:n` and `{}:n`, which can not be confused with blank node labels.

mod _error;
pub use _error::*;
mod _event;
pub use _event::*;
mod _sink;
pub use _sink::*;

use crate::lexer::{Keyword, Lexer, Punct, Token, TokenKind};
use quill_api::ns::xsd;
use quill_api::source::{
    StreamError::{SinkError, SourceError},
    StreamResult,
};

/// Parser configuration.
#[derive(Clone, Debug, Default)]
pub struct ParserConfig {
    legacy_vertical_tab: bool,
}

impl ParserConfig {
    /// Build a new default [`ParserConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the `\v` escape is decoded as a form-feed, as historical N3 tools do
    /// (by default, it is decoded as a vertical tab).
    pub fn legacy_vertical_tab(&self) -> bool {
        self.legacy_vertical_tab
    }

    /// Transform a [`ParserConfig`] by setting [`legacy_vertical_tab`](Self::legacy_vertical_tab).
    pub fn with_legacy_vertical_tab(mut self, legacy: bool) -> Self {
        self.legacy_vertical_tab = legacy;
        self
    }
}

/// An N3 parser, for a given input text.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    input: &'a str,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    /// Build a new parser with the default config.
    pub fn new(input: &'a str) -> Self {
        Self::new_with_config(input, ParserConfig::default())
    }

    /// Build a new parser with the given config.
    pub fn new_with_config(input: &'a str, config: ParserConfig) -> Self {
        Parser { input, config }
    }

    /// Borrow this parser's configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse the whole input, pushing events into `sink`.
    ///
    /// Each call is an independent session:
    /// identifiers of anonymous nodes and formulas start afresh.
    ///
    /// # Errors
    /// A syntax error is returned as a [`SourceError`],
    /// after being reported to [`EventSink::error`].
    /// Errors of the sink are returned as a [`SinkError`].
    /// In both cases, parsing stops at the first error.
    pub fn parse<S: EventSink>(&self, sink: S) -> StreamResult<(), ParseError, S::Error> {
        let lexer =
            Lexer::new(self.input).with_legacy_vertical_tab(self.config.legacy_vertical_tab);
        let mut session = Session {
            lexer,
            sink,
            lookahead: None,
            counter: 0,
            context: None,
            line: 1,
        };
        let ret = session.document();
        if let Err(SourceError(err)) = &ret {
            session.sink.error(&err.to_string());
        }
        ret
    }
}

/// Parse `input` into a vector of events.
pub fn parse_events(input: &str) -> Result<Vec<Event>, ParseError> {
    let mut events = vec![];
    match Parser::new(input).parse(&mut events) {
        Ok(()) => Ok(events),
        Err(SourceError(err)) => Err(err),
        Err(SinkError(never)) => match never {},
    }
}

type PResult<T, E> = StreamResult<T, ParseError, E>;

/// The state of one call to [`Parser::parse`].
struct Session<'a, S> {
    lexer: Lexer<'a>,
    sink: S,
    lookahead: Option<Token>,
    counter: u64,
    context: Option<Node>,
    /// Line of the last consumed token
    line: usize,
}

impl<S: EventSink> Session<'_, S> {
    fn document(&mut self) -> PResult<(), S::Error> {
        self.emit(Event::StartDocument)?;
        self.statements(false)?;
        self.emit(Event::EndDocument)
    }

    /// Directives and statements, up to the end of the input or of the current formula.
    ///
    /// Inside a formula, the last `.` is optional.
    fn statements(&mut self, in_formula: bool) -> PResult<(), S::Error> {
        loop {
            match self.peek()?.kind {
                TokenKind::Eof if !in_formula => return Ok(()),
                TokenKind::Punct(Punct::RBrace) if in_formula => return Ok(()),
                TokenKind::AtWord => self.directive()?,
                _ => self.statement()?,
            }
            if in_formula && self.peek()?.kind == TokenKind::Punct(Punct::RBrace) {
                return Ok(());
            }
            self.expect(TokenKind::Punct(Punct::Dot), "'.'")?;
        }
    }

    /// `@word arg, arg`; keywords are accepted as arguments, as plain literals.
    fn directive(&mut self) -> PResult<(), S::Error> {
        let token = self.next()?;
        let mut args = vec![];
        loop {
            match self.peek()?.kind {
                TokenKind::Punct(Punct::Dot | Punct::RBrace) | TokenKind::Eof => break,
                TokenKind::Punct(Punct::Comma) => {
                    self.next()?;
                }
                TokenKind::Keyword(kw) => {
                    self.next()?;
                    args.push(Node::plain(kw.as_str()));
                }
                _ => args.push(self.item()?),
            }
        }
        self.emit(Event::Directive {
            line: token.line,
            name: token.text,
            args,
            context: self.context.clone(),
        })
    }

    fn statement(&mut self) -> PResult<(), S::Error> {
        let subject = self.item()?;
        self.property_list(&subject)
    }

    fn property_list(&mut self, subject: &Node) -> PResult<(), S::Error> {
        loop {
            let kind = self.peek()?.kind;
            if kind == TokenKind::Punct(Punct::NameIt) {
                self.next()?;
                let token = self.next()?;
                self.anonymous(token, Some(subject.clone()))?;
                continue;
            }
            if !starts_verb(kind) {
                return Ok(());
            }
            self.prop_value(subject)?;
            if !self.eat(TokenKind::Punct(Punct::Semicolon))? {
                return Ok(());
            }
            while self.eat(TokenKind::Punct(Punct::Semicolon))? {}
        }
    }

    /// A verb and its objects; `is verb of` swaps subject and objects.
    fn prop_value(&mut self, subject: &Node) -> PResult<(), S::Error> {
        let reversed = self.eat(TokenKind::Keyword(Keyword::Is))?;
        let verb = self.verb()?;
        if reversed {
            self.expect(TokenKind::Keyword(Keyword::Of), "'of'")?;
        }
        loop {
            let object = self.item()?;
            if reversed {
                self.quad(object, verb.clone(), subject.clone())?;
            } else {
                self.quad(subject.clone(), verb.clone(), object)?;
            }
            if !self.eat(TokenKind::Punct(Punct::Comma))? {
                return Ok(());
            }
        }
    }

    fn verb(&mut self) -> PResult<Node, S::Error> {
        let operator = match self.peek()?.kind {
            TokenKind::Keyword(Keyword::A) => Operator::A,
            TokenKind::Punct(Punct::Equals) => Operator::SameAs,
            TokenKind::Punct(Punct::Implies) => Operator::Implies,
            TokenKind::Punct(Punct::ImpliedBy) => Operator::ImpliedBy,
            TokenKind::Punct(Punct::Means) => Operator::Means,
            TokenKind::Keyword(Keyword::Has) => {
                self.next()?;
                return self.item();
            }
            TokenKind::Punct(Punct::VerbStart) => {
                self.next()?;
                let verb = self.item()?;
                self.expect(TokenKind::Punct(Punct::VerbEnd), "'->'")?;
                return Ok(verb);
            }
            _ => return self.item(),
        };
        self.next()?;
        Ok(Node::Operator(operator))
    }

    /// A node followed by any number of path hops.
    fn item(&mut self) -> PResult<Node, S::Error> {
        let mut node = self.node()?;
        loop {
            let forward = match self.peek()?.kind {
                TokenKind::PathForward => true,
                TokenKind::PathReverse => false,
                _ => return Ok(node),
            };
            self.next()?;
            let predicate = self.node()?;
            let hop = self.fresh_anon();
            if forward {
                self.quad(node, predicate, hop.clone())?;
            } else {
                self.quad(hop.clone(), predicate, node)?;
            }
            node = hop;
        }
    }

    fn node(&mut self) -> PResult<Node, S::Error> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Iri => Ok(Node::Iri(token.text)),
            TokenKind::PrefixedName => {
                let (prefix, local) = token.split_prefixed_name();
                Ok(Node::PrefixedName {
                    prefix: prefix.to_string(),
                    local: local.to_string(),
                })
            }
            TokenKind::BlankLabel => Ok(Node::BlankLabel(token.text)),
            TokenKind::Variable => Ok(Node::Variable(token.text)),
            TokenKind::String => self.literal(token.text),
            TokenKind::Number => Ok(number(token.text)),
            TokenKind::Keyword(Keyword::This) => Ok(Node::This),
            TokenKind::Punct(Punct::LBracket | Punct::LBrace | Punct::LParen) => {
                self.anonymous(token, None)
            }
            _ => Err(SourceError(ParseError::unexpected(&token, "a node"))),
        }
    }

    /// The suffix of a string, if any.
    fn literal(&mut self, lexical: String) -> PResult<Node, S::Error> {
        let (lang, datatype) = match self.peek()?.kind {
            TokenKind::AtWord => (Some(self.next()?.text), None),
            TokenKind::Punct(Punct::DoubleCaret) => {
                self.next()?;
                (None, Some(Box::new(self.node()?)))
            }
            _ => (None, None),
        };
        Ok(Node::Literal {
            lexical,
            lang,
            datatype,
        })
    }

    /// `[ ]`, `{ }` or `( )`, whose opening `token` has been consumed.
    ///
    /// If `label` is given, it is used instead of a fresh identifier.
    fn anonymous(&mut self, token: Token, label: Option<Node>) -> PResult<Node, S::Error> {
        match token.kind {
            TokenKind::Punct(Punct::LBracket) => {
                let node = label.unwrap_or_else(|| self.fresh_anon());
                self.property_list(&node)?;
                self.expect(TokenKind::Punct(Punct::RBracket), "']'")?;
                Ok(node)
            }
            TokenKind::Punct(Punct::LBrace) => self.formula(token.line, label),
            TokenKind::Punct(Punct::LParen) => self.list(label),
            _ => Err(SourceError(ParseError::unexpected(&token, "'[', '{' or '('"))),
        }
    }

    fn formula(&mut self, line: usize, label: Option<Node>) -> PResult<Node, S::Error> {
        let id = label.unwrap_or_else(|| self.fresh_formula());
        self.emit(Event::StartFormula {
            line,
            context: id.clone(),
        })?;
        let outer = self.context.replace(id.clone());
        self.statements(true)?;
        let close = self.expect(TokenKind::Punct(Punct::RBrace), "'}'")?;
        self.context = outer;
        self.emit(Event::EndFormula {
            line: close.line,
            context: id.clone(),
        })?;
        Ok(id)
    }

    /// The items of a list, whose `(` has been consumed.
    ///
    /// Each cell gets a type, a first and a rest quad, in that order.
    fn list(&mut self, label: Option<Node>) -> PResult<Node, S::Error> {
        let mut items = vec![];
        while !self.eat(TokenKind::Punct(Punct::RParen))? {
            items.push(self.item()?);
        }
        if items.is_empty() {
            if let Some(label) = label {
                log::warn!("line {}: ignoring label {label} of an empty list", self.line);
            }
            return Ok(Node::List(ListMarker::Nil));
        }
        let head = label.unwrap_or_else(|| self.fresh_anon());
        let mut cell = head.clone();
        let count = items.len();
        for (i, item) in items.into_iter().enumerate() {
            let rest = if i + 1 < count {
                self.fresh_anon()
            } else {
                Node::List(ListMarker::Nil)
            };
            self.quad(
                cell.clone(),
                Node::Operator(Operator::A),
                Node::List(ListMarker::Class),
            )?;
            self.quad(cell.clone(), Node::List(ListMarker::First), item)?;
            self.quad(cell, Node::List(ListMarker::Rest), rest.clone())?;
            cell = rest;
        }
        Ok(head)
    }

    fn fresh_anon(&mut self) -> Node {
        self.counter += 1;
        Node::Anon(self.counter)
    }

    fn fresh_formula(&mut self) -> Node {
        self.counter += 1;
        Node::Formula(self.counter)
    }

    fn quad(&mut self, subject: Node, predicate: Node, object: Node) -> PResult<(), S::Error> {
        log::trace!("{subject} {predicate} {object} .");
        self.emit(Event::Quad {
            line: self.line,
            subject,
            predicate,
            object,
            context: self.context.clone(),
        })
    }

    fn emit(&mut self, event: Event) -> PResult<(), S::Error> {
        self.sink.event(event).map_err(SinkError)
    }

    fn peek(&mut self) -> PResult<&Token, S::Error> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token().map_err(|e| SourceError(e.into()))?,
        };
        Ok(self.lookahead.insert(token))
    }

    fn next(&mut self) -> PResult<Token, S::Error> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token().map_err(|e| SourceError(e.into()))?,
        };
        self.line = token.line;
        Ok(token)
    }

    /// Consume the next token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> PResult<bool, S::Error> {
        if self.peek()?.kind == kind {
            self.next()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> PResult<Token, S::Error> {
        let token = self.next()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(SourceError(ParseError::unexpected(&token, expected)))
        }
    }
}

/// Can a token of this kind start a verb?
fn starts_verb(kind: TokenKind) -> bool {
    use Punct::*;
    match kind {
        TokenKind::Iri
        | TokenKind::PrefixedName
        | TokenKind::BlankLabel
        | TokenKind::Variable
        | TokenKind::String
        | TokenKind::Number
        | TokenKind::Keyword(_) => kind != TokenKind::Keyword(Keyword::Of),
        TokenKind::Punct(punct) => matches!(
            punct,
            LBracket | LBrace | LParen | Equals | Implies | ImpliedBy | Means | VerbStart
        ),
        _ => false,
    }
}

/// A number, typed after its shape.
fn number(lexical: String) -> Node {
    let datatype = if lexical.contains(|c: char| c == 'e' || c == 'E') {
        xsd::double
    } else if lexical.contains('.') {
        xsd::decimal
    } else {
        xsd::integer
    };
    Node::Literal {
        lexical,
        lang: None,
        datatype: Some(Box::new(Node::Iri(datatype.iri()))),
    }
}
