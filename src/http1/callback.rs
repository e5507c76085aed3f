// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+
// | Author: Sean Kerr <sean@code-box.org>                                                         |
// +-----------------------------------------------------------------------------------------------+

//! Parse event handlers.

use crate::http1::session::Session;

use std::fmt;

/// Parse events.
#[derive(Clone,Copy,Debug,Eq,Hash,PartialEq)]
pub enum Event {
    /// A message has begun.
    MessageBegin,

    /// Request target fragment.
    Url,

    /// Request target path fragment.
    Path,

    /// Request target query string fragment, without the leading `?`.
    Query,

    /// Request target fragment identifier fragment, without the leading `#`.
    Fragment,

    /// Response reason phrase fragment.
    Status,

    /// Header field fragment.
    HeaderField,

    /// Header value fragment.
    HeaderValue,

    /// The header section is complete. Framing details are available.
    HeadersComplete,

    /// Body fragment. Chunked bodies are delivered without chunk framing.
    Body,

    /// A message is complete.
    MessageComplete,

    /// A syntax error occurred. Receives the offending chunk.
    Error
}

impl Event {
    /// All events, in table order.
    pub const ALL: [Event; 12] = [
        Event::MessageBegin,
        Event::Url,
        Event::Path,
        Event::Query,
        Event::Fragment,
        Event::Status,
        Event::HeaderField,
        Event::HeaderValue,
        Event::HeadersComplete,
        Event::Body,
        Event::MessageComplete,
        Event::Error
    ];

    /// Indicates that handlers for this event receive a byte span.
    pub fn is_data(&self) -> bool {
        match *self {
            Event::MessageBegin | Event::HeadersComplete | Event::MessageComplete => false,
            _ => true
        }
    }

    /// Retrieve the event name.
    pub fn name(&self) -> &'static str {
        match *self {
            Event::MessageBegin    => "message_begin",
            Event::Url             => "url",
            Event::Path            => "path",
            Event::Query           => "query_string",
            Event::Fragment        => "fragment",
            Event::Status          => "status",
            Event::HeaderField     => "header_field",
            Event::HeaderValue     => "header_value",
            Event::HeadersComplete => "headers_complete",
            Event::Body            => "body",
            Event::MessageComplete => "message_complete",
            Event::Error           => "error"
        }
    }

    /// Retrieve the table index.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Event {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

// -------------------------------------------------------------------------------------------------

/// Handler verdict.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum Signal {
    /// Continue parsing.
    Continue,

    /// Stop parsing. The parser enters the errored state until it is reset.
    Abort
}

impl From<()> for Signal {
    fn from(_: ()) -> Signal {
        Signal::Continue
    }
}

/// `false` continues, and `true` aborts.
impl From<bool> for Signal {
    fn from(abort: bool) -> Signal {
        if abort {
            Signal::Abort
        } else {
            Signal::Continue
        }
    }
}

/// `Ok` continues, and `Err` aborts.
impl<E> From<Result<(), E>> for Signal {
    fn from(result: Result<(), E>) -> Signal {
        match result {
            Ok(())  => Signal::Continue,
            Err(_)  => Signal::Abort
        }
    }
}

/// Notification handler.
pub type NotifyFn<'a, D> = Box<dyn FnMut(&mut Session<D>) -> Signal + 'a>;

/// Data handler.
pub type DataFn<'a, D> = Box<dyn FnMut(&mut Session<D>, &[u8]) -> Signal + 'a>;

/// Event handler.
pub enum Handler<'a, D> {
    /// Handler for events without data.
    Notify(NotifyFn<'a, D>),

    /// Handler for events with a byte span.
    Data(DataFn<'a, D>)
}

impl<'a, D> Handler<'a, D> {
    /// Create a handler for events without data.
    pub fn notify<F, R>(mut function: F) -> Handler<'a, D>
    where F: FnMut(&mut Session<D>) -> R + 'a, R: Into<Signal> {
        Handler::Notify(Box::new(move |session: &mut Session<D>| -> Signal {
            function(session).into()
        }))
    }

    /// Create a handler for events with a byte span.
    pub fn data<F, R>(mut function: F) -> Handler<'a, D>
    where F: FnMut(&mut Session<D>, &[u8]) -> R + 'a, R: Into<Signal> {
        Handler::Data(Box::new(move |session: &mut Session<D>, data: &[u8]| -> Signal {
            function(session, data).into()
        }))
    }

    /// Indicates that this handler receives a byte span.
    pub fn is_data(&self) -> bool {
        match *self {
            Handler::Notify(_) => false,
            Handler::Data(_)   => true
        }
    }
}

impl<'a, D> fmt::Debug for Handler<'a, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Handler::Notify(_) => formatter.write_str("Handler::Notify"),
            Handler::Data(_)   => formatter.write_str("Handler::Data")
        }
    }
}

/// Error returned when registering a handler whose kind does not fit the event.
#[derive(Clone,Copy,Debug,PartialEq,thiserror::Error)]
#[error("handler kind does not match the {event} event")]
pub struct HandlerError {
    /// The event.
    pub event: Event
}

// -------------------------------------------------------------------------------------------------

/// Handler table, indexed by event.
pub struct Callbacks<'a, D> {
    handlers: [Option<Handler<'a, D>>; 12]
}

impl<'a, D> Callbacks<'a, D> {
    /// Create an empty table.
    pub fn new() -> Callbacks<'a, D> {
        Callbacks{
            handlers: Default::default()
        }
    }

    /// Register or remove the handler for `event`.
    pub fn set(&mut self, event: Event, handler: Option<Handler<'a, D>>)
    -> Result<(), HandlerError> {
        if let Some(ref handler) = handler {
            if handler.is_data() != event.is_data() {
                return Err(HandlerError{ event: event });
            }
        }

        self.handlers[event.index()] = handler;

        Ok(())
    }

    /// Register the handler for `event`, whose kind is known to fit.
    pub(crate) fn insert(&mut self, event: Event, handler: Handler<'a, D>) {
        self.handlers[event.index()] = Some(handler);
    }

    /// Remove the handler for `event`.
    pub fn remove(&mut self, event: Event) {
        self.handlers[event.index()] = None;
    }

    /// Indicates that a handler is registered for `event`.
    pub fn is_set(&self, event: Event) -> bool {
        self.handlers[event.index()].is_some()
    }

    /// Remove all handlers.
    pub fn clear(&mut self) {
        self.handlers = Default::default();
    }

    /// Execute the handler for notification `event`.
    ///
    /// Returns `true` when parsing should continue.
    pub fn notify(&mut self, event: Event, session: &mut Session<D>) -> bool {
        let signal = match self.handlers[event.index()] {
            Some(Handler::Notify(ref mut function)) => function(session),
            _ => Signal::Continue
        };

        self.verdict(event, signal)
    }

    /// Execute the handler for data `event`.
    ///
    /// Returns `true` when parsing should continue.
    pub fn data(&mut self, event: Event, session: &mut Session<D>, data: &[u8]) -> bool {
        let signal = match self.handlers[event.index()] {
            Some(Handler::Data(ref mut function)) => function(session, data),
            _ => Signal::Continue
        };

        self.verdict(event, signal)
    }

    /// Execute the error handler with the offending chunk. The verdict is ignored.
    pub fn error(&mut self, session: &mut Session<D>, chunk: &[u8]) {
        if let Some(Handler::Data(ref mut function)) = self.handlers[Event::Error.index()] {
            function(session, chunk);
        }
    }

    fn verdict(&self, event: Event, signal: Signal) -> bool {
        if signal == Signal::Abort {
            debug!("{} handler aborted", event);

            false
        } else {
            true
        }
    }
}

impl<'a, D> Default for Callbacks<'a, D> {
    fn default() -> Callbacks<'a, D> {
        Callbacks::new()
    }
}
