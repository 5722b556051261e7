// this module is transparently re-exported by its parent `parser`
use super::Event;
use std::convert::Infallible;
use std::error::Error;

/// A receiver of the [events](Event) produced by the [`Parser`](super::Parser).
pub trait EventSink {
    /// The error type that this sink may raise.
    type Error: 'static + Error;

    /// Receive one event.
    fn event(&mut self, event: Event) -> Result<(), Self::Error>;

    /// Called with a message of the form `"<line>:<col> <message>"`
    /// when the parser fails, before the error is returned to the caller.
    ///
    /// The default implementation logs the message.
    fn error(&mut self, message: &str) {
        log::error!("{message}");
    }
}

/// Collects all events.
impl EventSink for Vec<Event> {
    type Error = Infallible;

    fn event(&mut self, event: Event) -> Result<(), Self::Error> {
        self.push(event);
        Ok(())
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    type Error = S::Error;

    fn event(&mut self, event: Event) -> Result<(), Self::Error> {
        (**self).event(event)
    }

    fn error(&mut self, message: &str) {
        (**self).error(message)
    }
}

/// Sends every event to two sinks, in order.
///
/// Errors of the second sink are converted into errors of the first one.
#[derive(Clone, Debug, Default)]
pub struct Tee<A, B>(pub A, pub B);

impl<A, B> EventSink for Tee<A, B>
where
    A: EventSink,
    B: EventSink,
    B::Error: Into<A::Error>,
{
    type Error = A::Error;

    fn event(&mut self, event: Event) -> Result<(), Self::Error> {
        self.0.event(event.clone())?;
        self.1.event(event).map_err(Into::into)
    }

    fn error(&mut self, message: &str) {
        self.0.error(message);
        self.1.error(message);
    }
}
