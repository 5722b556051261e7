//! Errors raised when moving data from a fallible source
//! (a text being parsed, a graph being serialized)
//! into a fallible sink (an event handler, a graph, an output stream).
//!
//! [`StreamError`] tells which side of the pipeline failed,
//! so that callers can, for example,
//! report a syntax error differently from a full disk.

use std::error::Error;

/// A error that is raised by functions that move data
/// from a fallible source into a fallible sink.
///
/// In case this error is raised it can be matched to investigate
/// whether the source or the sink failed.
///
/// # Conversion
///
/// Both variants `SourceError` and `SinkError` are public exported.
/// Consequently, `StreamError` can be constructed with `.map_err(SourceError)`
/// and `.map_err(SinkError)`.
#[derive(Debug, thiserror::Error)]
pub enum StreamError<SourceErr, SinkErr>
where
    SourceErr: Error,
    SinkErr: Error,
{
    /// Error caused by the source
    #[error("Source failed: {0}")]
    SourceError(#[source] SourceErr),
    /// Error caused by the sink
    #[error("Sink failed: {0}")]
    SinkError(#[source] SinkErr),
}
pub use StreamError::*;

impl<SourceErr, SinkErr> StreamError<SourceErr, SinkErr>
where
    SourceErr: Error,
    SinkErr: Error,
{
    /// Checks if `StreamError` was raised by the source.
    pub fn is_source_error(&self) -> bool {
        matches!(self, SourceError(_))
    }
    /// Checks if `StreamError` was raised by the sink.
    pub fn is_sink_error(&self) -> bool {
        matches!(self, SinkError(_))
    }
    /// Converts `StreamError` into a common error type.
    pub fn inner_into<Err>(self) -> Err
    where
        SourceErr: Into<Err>,
        SinkErr: Into<Err>,
    {
        match self {
            SourceError(err) => err.into(),
            SinkError(err) => err.into(),
        }
    }
    /// Convert using `f` if a `SourceError`
    pub fn map_source<E, F>(self, f: F) -> StreamError<E, SinkErr>
    where
        E: Error,
        F: FnOnce(SourceErr) -> E,
    {
        match self {
            SourceError(e) => SourceError(f(e)),
            SinkError(e) => SinkError(e),
        }
    }
    /// Convert using `f` if a `SinkError`
    pub fn map_sink<E, F>(self, f: F) -> StreamError<SourceErr, E>
    where
        E: Error,
        F: FnOnce(SinkErr) -> E,
    {
        match self {
            SourceError(e) => SourceError(e),
            SinkError(e) => SinkError(f(e)),
        }
    }
}

/// Convenient type alias for [`Result`] whose error is [`StreamError`].
pub type StreamResult<T, E1, E2> = Result<T, StreamError<E1, E2>>;

#[cfg(test)]
mod test {
    use super::*;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Syntax;
    impl fmt::Display for Syntax {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("bad syntax")
        }
    }
    impl Error for Syntax {}

    fn failing(source: bool) -> StreamResult<(), Syntax, std::io::Error> {
        if source {
            Err(SourceError(Syntax))
        } else {
            Err(SinkError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )))
        }
    }

    #[test]
    fn sides() {
        let err = failing(true).unwrap_err();
        assert!(err.is_source_error() && !err.is_sink_error());
        assert_eq!(err.to_string(), "Source failed: bad syntax");
        let err = failing(false).unwrap_err();
        assert!(err.is_sink_error());
        assert_eq!(err.to_string(), "Sink failed: disk full");
    }

    #[test]
    fn map_sides() {
        let err = failing(true).unwrap_err().map_sink(|_| fmt::Error);
        assert!(matches!(err, SourceError(Syntax)));
        let err = failing(false).unwrap_err().map_source(|_| Syntax);
        let msg: Box<dyn Error> = err.inner_into();
        assert_eq!(msg.to_string(), "disk full");
    }
}
