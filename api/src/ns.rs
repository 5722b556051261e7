//! Standard and custom namespaces.
//!
//! This module provides:
//! * the [`NsTerm`] type, an IRI made of a namespace and a suffix;
//! * the [`namespace`](crate::namespace) macro, for defining custom static namespaces;
//! * modules corresponding to the namespaces that N3 documents use most
//!   (generated via the [`namespace`](crate::namespace) macro).
//!
//! # Example use
//! ```
//! use quill_api::ns::{rdf, rdfs};
//! use quill_api::term::Term;
//!
//! let triple = [Term::iri("http://example.org/p"), rdf::type_.term(), rdf::Property.term()];
//! assert!(rdf::type_ == triple[1]);
//! assert_eq!(rdfs::label.iri(), "http://www.w3.org/2000/01/rdf-schema#label");
//! ```

#[macro_use]
mod _macro;
mod _term;
pub use _term::*;

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        Alt,
        Bag,
        List,
        Property,
        Seq,
        Statement,
        // datatypes
        langString,
        XMLLiteral,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil;
        // keywords
        type_, "type"
    );
}

/// The standard `xsd:` namespace.
#[allow(missing_docs)]
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyURI,
        base64Binary,
        boolean,
        byte,
        date,
        dateTime,
        decimal,
        double,
        duration,
        float,
        hexBinary,
        int,
        integer,
        language,
        long,
        negativeInteger,
        nonNegativeInteger,
        nonPositiveInteger,
        normalizedString,
        positiveInteger,
        short,
        string,
        time,
        token,
        unsignedByte,
        unsignedInt,
        unsignedLong,
        unsignedShort
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        Class,
        Container,
        ContainerMembershipProperty,
        Datatype,
        Literal,
        Resource,
        comment,
        domain,
        isDefinedBy,
        label,
        member,
        range,
        seeAlso,
        subClassOf,
        subPropertyOf
    );
}

/// The standard `owl:` namespace.
pub mod owl {
    namespace!(
        "http://www.w3.org/2002/07/owl#",
        Class,
        DatatypeProperty,
        FunctionalProperty,
        InverseFunctionalProperty,
        Nothing,
        ObjectProperty,
        Ontology,
        Thing,
        TransitiveProperty,
        differentFrom,
        equivalentClass,
        equivalentProperty,
        inverseOf,
        sameAs
    );
}

/// The `log:` namespace of the N3 builtins,
/// which gives a predicate to the `=>` and `<=>` operators.
pub mod log {
    namespace!(
        "http://www.w3.org/2000/10/swap/log#",
        Chaff,
        Formula,
        Truth,
        conclusion,
        implies,
        includes,
        means,
        notIncludes,
        semantics,
        uri
    );
}

/// The namespaces that serializers know a conventional prefix for,
/// as `(prefix, namespace)` pairs.
pub const WELL_KNOWN: &[(&str, &str)] = &[
    ("rdf", rdf::PREFIX),
    ("rdfs", rdfs::PREFIX),
    ("xsd", xsd::PREFIX),
    ("owl", owl::PREFIX),
    ("log", log::PREFIX),
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::Term;

    #[test]
    fn type_is_renamed() {
        assert_eq!(
            rdf::type_.iri(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
        );
    }

    #[test]
    fn compare_with_terms() {
        let implies = Term::iri("http://www.w3.org/2000/10/swap/log#implies");
        assert!(log::implies == implies);
        assert!(implies == log::implies);
        assert!(log::means != implies);
        assert!(!owl::sameAs.matches(&Term::plain(owl::sameAs.iri())));
    }

    #[test]
    fn matches_iri_needs_exact_length() {
        assert!(rdf::first.matches_iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#first"));
        assert!(!rdf::first.matches_iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#firstly"));
        assert!(!rdf::first.matches_iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#"));
    }
}
