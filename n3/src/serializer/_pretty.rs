//! Second pass of the writer: emitting N3 text.
//!
//! Subjects are written in the order given by the graph.
//! In [`N3Style::Pretty`], lists are written as `( … )`
//! and blank nodes referenced once are written as `[ … ]` where they are referenced;
//! those that are never reached that way
//! (lists or blank nodes only referenced from each other)
//! are written as top-level statements at the end.

use super::_analysis::{analyze, Analysis, List};
use super::{IndentedWriter, N3Config, N3Style};
use quill_api::ns::{log as n3log, owl, rdf, xsd, WELL_KNOWN};
use quill_api::prefix::PrefixMap;
use quill_api::term::{Literal, Term};
use quill_api::triple::Triple;
use quill_iri::relativize::Relativizer;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;
use std::io;

/// Write `triples` as N3 on `write`.
///
/// `subjects` gives the order in which subjects are written,
/// `prefixes` the prefixes declared on the graph.
pub(crate) fn prettify<W: io::Write>(
    triples: &[Triple],
    subjects: &[Term],
    prefixes: &PrefixMap,
    write: W,
    config: &N3Config,
) -> io::Result<()> {
    let mut p = Prettifier::new(triples, prefixes, write, config);
    p.write_prefixes()?;
    match config.style {
        N3Style::Triples => p.write_triples()?,
        N3Style::Pretty | N3Style::Plain => p.write_subjects(subjects)?,
    }
    p.out.flush()
}

struct Prettifier<'a, W> {
    out: IndentedWriter<W>,
    config: &'a N3Config,
    prefixes: PrefixMap,
    relativizer: Option<Relativizer>,
    triples: &'a [Triple],
    by_subject: HashMap<&'a Term, Vec<&'a Triple>>,
    analysis: Analysis,
    /// Lists not written yet, by head
    lists: HashMap<Term, List>,
    /// Cells of lists that could not be written as `( … )`
    demoted: HashSet<Term>,
    written: HashSet<Term>,
    labels: HashMap<Term, String>,
    statements: usize,
}

impl<'a, W: io::Write> Prettifier<'a, W> {
    fn new(
        triples: &'a [Triple],
        graph_prefixes: &PrefixMap,
        write: W,
        config: &'a N3Config,
    ) -> Self {
        let mut by_subject: HashMap<&Term, Vec<&Triple>> = HashMap::new();
        for t in triples {
            by_subject.entry(&t[0]).or_default().push(t);
        }
        let analysis = if config.style == N3Style::Pretty {
            analyze(triples, config.list_types)
        } else {
            Analysis::default()
        };
        let prefixes = select_prefixes(
            graph_prefixes,
            &config.prefix_map,
            triples,
            &analysis.list_cells,
        );
        let lists = analysis
            .lists
            .iter()
            .map(|list| (list.head().clone(), list.clone()))
            .collect();
        let relativizer = match &config.base {
            Some(base) if config.relative_iris => match Relativizer::new(base) {
                Ok(relativizer) => Some(relativizer),
                Err(err) => {
                    log::warn!("writing absolute IRIs, as the base can not be used: {err}");
                    None
                }
            },
            _ => None,
        };
        Prettifier {
            out: IndentedWriter::new(write),
            config,
            prefixes,
            relativizer,
            triples,
            by_subject,
            analysis,
            lists,
            demoted: HashSet::new(),
            written: HashSet::new(),
            labels: HashMap::new(),
            statements: 0,
        }
    }

    fn write_prefixes(&mut self) -> io::Result<()> {
        for (prefix, ns) in self.prefixes.iter() {
            self.out.write_str(&format!("@prefix {prefix}: <{ns}> ."))?;
            self.out.newline()?;
        }
        Ok(())
    }

    fn write_triples(&mut self) -> io::Result<()> {
        if !self.prefixes.is_empty() {
            self.out.newline()?;
        }
        let triples = self.triples;
        for [s, p, o] in triples {
            let s = self.term_text(s);
            let p = self.predicate_text(p);
            let o = self.term_text(o);
            self.out.write_str(&format!("{s} {p} {o} ."))?;
            self.out.newline()?;
        }
        Ok(())
    }

    fn write_subjects(&mut self, subjects: &[Term]) -> io::Result<()> {
        for s in subjects {
            if self.written.contains(s)
                || self.analysis.list_cells.contains(s)
                || self.analysis.single_refs.contains(s)
            {
                continue;
            }
            self.write_statement(s)?;
        }

        // lists that nothing references
        let heads: Vec<Term> = self
            .analysis
            .lists
            .iter()
            .map(|list| list.head().clone())
            .collect();
        for head in &heads {
            if self.analysis.ref_count(head) == 0 {
                if let Some(list) = self.lists.remove(head) {
                    self.begin_statement()?;
                    self.write_list(list)?;
                    self.end_statement()?;
                }
            }
        }
        // lists and blank nodes that are only referenced from each other
        for head in &heads {
            if let Some(list) = self.lists.remove(head) {
                self.demoted.extend(list.cells);
            }
        }
        for s in subjects {
            if self.written.contains(s) {
                continue;
            }
            if self.analysis.single_refs.contains(s) || self.demoted.contains(s) {
                log::debug!("breaking cycle: writing {s} as a top-level statement");
                self.write_statement(s)?;
            }
        }
        Ok(())
    }

    fn write_statement(&mut self, subject: &Term) -> io::Result<()> {
        self.begin_statement()?;
        self.written.insert(subject.clone());
        let text = if self.config.style == N3Style::Pretty
            && subject.is_blank_node()
            && self.analysis.ref_count(subject) == 0
        {
            "[]".to_string()
        } else {
            self.term_text(subject)
        };
        self.out.write_str(&text)?;
        let column = self.out.indent() + self.config.property_column;
        if self.out.column() + self.config.min_gap > column {
            self.out.newline()?;
        }
        self.out.pad_to(column)?;
        self.write_properties(subject, column)?;
        self.end_statement()
    }

    /// Write the properties of `subject`, the first one at the current position,
    /// the next ones at `column`.
    fn write_properties(&mut self, subject: &Term, column: usize) -> io::Result<()> {
        let groups = self.groups(subject);
        self.indented(column, |this| {
            for (i, (predicate, objects)) in groups.iter().enumerate() {
                if i > 0 {
                    this.out.write_str(" ;")?;
                    this.out.newline()?;
                }
                let text = this.predicate_text(predicate);
                this.out.write_str(&text)?;
                let object_column = if text.chars().count() > this.config.wide_property_len {
                    let object_column = column + this.config.indent_property;
                    this.out.newline()?;
                    this.out.pad_to(object_column)?;
                    object_column
                } else {
                    this.out.spaces(this.config.min_gap)?;
                    this.out.column()
                };
                this.indented(object_column, |this| {
                    for (j, object) in objects.iter().enumerate() {
                        if j > 0 {
                            this.out.write_str(",")?;
                            this.out.newline()?;
                        }
                        this.write_object(object)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })
    }

    fn write_object(&mut self, object: &Term) -> io::Result<()> {
        if let Some(list) = self.lists.remove(object) {
            return self.write_list(list);
        }
        if self.analysis.single_refs.contains(object) && self.written.insert(object.clone()) {
            return self.write_inline(object);
        }
        let text = self.term_text(object);
        self.out.write_str(&text)
    }

    fn write_list(&mut self, list: List) -> io::Result<()> {
        self.written.extend(list.cells);
        self.out.write_str("(")?;
        for item in &list.items {
            self.out.write_str(" ")?;
            self.write_object(item)?;
        }
        self.out.write_str(" )")
    }

    fn write_inline(&mut self, node: &Term) -> io::Result<()> {
        if !self.by_subject.contains_key(node) {
            return self.out.write_str("[]");
        }
        self.out.write_str("[ ")?;
        let column = self.out.column();
        self.write_properties(node, column)?;
        self.out.write_str(" ]")
    }

    fn begin_statement(&mut self) -> io::Result<()> {
        if self.statements > 0 || !self.prefixes.is_empty() {
            self.out.newline()?;
        }
        self.statements += 1;
        Ok(())
    }

    fn end_statement(&mut self) -> io::Result<()> {
        self.out.write_str(" .")?;
        self.out.newline()
    }

    /// Like [`IndentedWriter::with_indent`], but the closure gets the
    /// whole prettifier rather than the writer alone.
    fn indented<T, F>(&mut self, indent: usize, f: F) -> io::Result<T>
    where
        F: FnOnce(&mut Self) -> io::Result<T>,
    {
        let saved = self.out.set_indent(indent);
        let ret = f(self);
        self.out.set_indent(saved);
        ret
    }

    /// The properties of `subject`, grouped by predicate, `rdf:type` first.
    fn groups(&self, subject: &Term) -> Vec<(&'a Term, Vec<&'a Term>)> {
        let mut groups: Vec<(&'a Term, Vec<&'a Term>)> = vec![];
        let Some(triples) = self.by_subject.get(subject) else {
            return groups;
        };
        for [_, p, o] in triples.iter().copied() {
            match groups.iter_mut().find(|(q, _)| *q == p) {
                Some((_, objects)) => objects.push(o),
                None => groups.push((p, vec![o])),
            }
        }
        if let Some(i) = groups.iter().position(|(p, _)| rdf::type_ == **p) {
            let types = groups.remove(i);
            groups.insert(0, types);
        }
        groups
    }

    fn term_text(&mut self, term: &Term) -> String {
        match term {
            Term::Iri(iri) if rdf::nil.matches_iri(iri) => "()".to_string(),
            Term::Iri(iri) => self.iri_text(iri),
            Term::BlankNode(_) => self.label(term),
            Term::Literal(lit) => self.literal_text(lit),
        }
    }

    fn predicate_text(&mut self, predicate: &Term) -> String {
        match (short_form(predicate), predicate) {
            (Some(short), _) => short.to_string(),
            (None, Term::Iri(iri)) => self.iri_text(iri),
            (None, _) => self.term_text(predicate),
        }
    }

    fn iri_text(&self, iri: &str) -> String {
        if let Some((prefix, local)) = self
            .prefixes
            .get_checked_prefixed_pair(iri, |local| LOCAL.is_match(local))
        {
            return format!("{prefix}:{local}");
        }
        match self.relativizer.as_ref().and_then(|r| r.relativize(iri)) {
            Some(relative) => format!("<{relative}>"),
            None => format!("<{iri}>"),
        }
    }

    fn literal_text(&self, lit: &Literal) -> String {
        let lexical = lit.lexical_form();
        if is_bare(lit) {
            return lexical.to_string();
        }
        let mut ret = quoted(lexical);
        if let Some(tag) = lit.language_tag() {
            ret.push('@');
            ret.push_str(tag);
        } else if let Some(datatype) = lit.datatype() {
            ret.push_str("^^");
            ret.push_str(&self.iri_text(datatype));
        }
        ret
    }

    /// Blank node labels are allocated in order of first use.
    fn label(&mut self, bnode: &Term) -> String {
        let n = self.labels.len();
        self.labels
            .entry(bnode.clone())
            .or_insert_with(|| format!("_:b{n}"))
            .clone()
    }
}

/// The prefixes of the graph, then those of the config,
/// then the well-known ones that some written IRI of `triples` can use.
fn select_prefixes(
    graph: &PrefixMap,
    config: &PrefixMap,
    triples: &[Triple],
    list_cells: &HashSet<Term>,
) -> PrefixMap {
    let mut ret = PrefixMap::new();
    for (prefix, ns) in graph.iter().chain(config.iter()) {
        if prefix == "_" {
            log::warn!("prefix '_:' can not be written, ignoring it");
            continue;
        }
        if let Err(err) = ret.insert(prefix, ns) {
            log::warn!("ignoring prefix: {err}");
        }
    }
    for (prefix, ns) in WELL_KNOWN {
        if ret.get_namespace(prefix).is_some() || ret.get_prefix(ns).is_some() {
            continue;
        }
        let used = triples.iter().any(|[s, p, o]| {
            if list_cells.contains(s) {
                return rdf::first == *p && uses_namespace(o, ns);
            }
            uses_namespace(s, ns)
                || short_form(p).is_none() && uses_namespace(p, ns)
                || uses_namespace(o, ns)
        });
        if used {
            if let Err(err) = ret.insert(*prefix, *ns) {
                log::warn!("ignoring prefix: {err}");
            }
        }
    }
    ret
}

fn uses_namespace(term: &Term, ns: &str) -> bool {
    let iri = match term {
        Term::Iri(iri) if !rdf::nil.matches_iri(iri) => iri.as_str(),
        Term::Literal(lit) if !is_bare(lit) => match lit.datatype() {
            Some(datatype) => datatype,
            None => return false,
        },
        _ => return false,
    };
    iri.strip_prefix(ns)
        .map_or(false, |local| LOCAL.is_match(local))
}

/// The keyword standing for `predicate`, if any.
fn short_form(predicate: &Term) -> Option<&'static str> {
    if rdf::type_ == *predicate {
        Some("a")
    } else if owl::sameAs == *predicate {
        Some("=")
    } else if n3log::implies == *predicate {
        Some("=>")
    } else if n3log::means == *predicate {
        Some("<=>")
    } else {
        None
    }
}

/// Numbers are written without quotes when they read back with the same datatype.
fn is_bare(lit: &Literal) -> bool {
    let lexical = lit.lexical_form();
    match lit.datatype() {
        Some(dt) if xsd::integer.matches_iri(dt) => INTEGER.is_match(lexical),
        Some(dt) if xsd::decimal.matches_iri(dt) => DECIMAL.is_match(lexical),
        Some(dt) if xsd::double.matches_iri(dt) => DOUBLE.is_match(lexical),
        _ => false,
    }
}

/// The N3 string for `lexical`, using the long form if it contains a line break.
pub(crate) fn quoted(lexical: &str) -> String {
    let long = lexical.contains('\n');
    let delimiter = if long { "\"\"\"" } else { "\"" };
    let mut ret = String::with_capacity(lexical.len() + 6);
    ret.push_str(delimiter);
    for c in lexical.chars() {
        match c {
            '\\' => ret.push_str("\\\\"),
            '"' => ret.push_str("\\\""),
            '\n' if long => ret.push('\n'),
            '\n' => ret.push_str("\\n"),
            '\r' => ret.push_str("\\r"),
            '\t' => ret.push_str("\\t"),
            '\u{8}' => ret.push_str("\\b"),
            '\u{c}' => ret.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(ret, "\\u{:04X}", c as u32);
            }
            c => ret.push(c),
        }
    }
    ret.push_str(delimiter);
    ret
}

lazy_static::lazy_static! {
    /// Local names that can follow a prefix.
    pub(crate) static ref LOCAL: Regex =
        Regex::new(r"^([\p{Alphabetic}\p{Nd}_][\p{Alphabetic}\p{Nd}_-]*)?$").unwrap();
    pub(crate) static ref INTEGER: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    pub(crate) static ref DECIMAL: Regex = Regex::new(r"^[+-]?[0-9]+\.[0-9]+$").unwrap();
    pub(crate) static ref DOUBLE: Regex =
        Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?[eE][+-]?[0-9]+$").unwrap();
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("plain", "\"plain\""; "plain")]
    #[test_case("he said \"hi\"", r#""he said \"hi\"""#; "quotes")]
    #[test_case("a\\b", r#""a\\b""#; "backslash")]
    #[test_case("tab\there\r", r#""tab\there\r""#; "tab and carriage return")]
    #[test_case("\u{8}\u{c}\u{1}", r#""\b\f\u0001""#; "control characters")]
    #[test_case("two\nlines", "\"\"\"two\nlines\"\"\""; "long")]
    #[test_case("two\n\"lines\"", "\"\"\"two\n\\\"lines\\\"\"\"\""; "long with quotes")]
    fn quoting(lexical: &str, expected: &str) {
        assert_eq!(quoted(lexical), expected);
    }

    #[test_case("abc", true)]
    #[test_case("", true)]
    #[test_case("a-b_c9", true)]
    #[test_case("9a", true)]
    #[test_case("été", true)]
    #[test_case("a.b", false)]
    #[test_case("a/b", false)]
    #[test_case("-a", false)]
    #[test_case("a#", false)]
    fn local_names(local: &str, expected: bool) {
        assert_eq!(LOCAL.is_match(local), expected);
    }

    #[test]
    fn well_known_prefixes_only_when_used() {
        let selected = |triples: &[Triple]| -> Vec<String> {
            select_prefixes(&PrefixMap::new(), &PrefixMap::new(), triples, &HashSet::new())
                .iter()
                .map(|(p, _)| p.to_string())
                .collect()
        };
        let s = Term::iri("http://example.org/s");
        let mut triples = vec![[
            s.clone(),
            Term::iri(quill_api::ns::rdfs::label.iri()),
            Term::Literal(Literal::new_dt("1", xsd::integer.iri())),
        ]];
        // a bare number does not need its datatype to be declared
        assert_eq!(selected(&triples), vec!["rdfs"]);
        triples.push([
            s,
            Term::iri("http://example.org/p"),
            Term::Literal(Literal::new_dt("x", xsd::string.iri())),
        ]);
        assert_eq!(selected(&triples), vec!["rdfs", "xsd"]);
    }

    #[test]
    fn declared_namespace_is_not_redeclared() {
        let mut graph = PrefixMap::new();
        graph.insert("r", rdf::PREFIX).unwrap();
        graph.insert("_", "http://example.org/").unwrap();
        let triples = vec![[
            Term::iri("http://example.org/s"),
            rdf::value.term(),
            Term::plain("v"),
        ]];
        let selected = select_prefixes(&graph, &PrefixMap::new(), &triples, &HashSet::new());
        let prefixes: Vec<_> = selected.iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(prefixes, vec!["r"]);
    }
}
