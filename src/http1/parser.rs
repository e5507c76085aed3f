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

//! HTTP 1.x request and response parser.

use crate::byte::{ hex_value, is_field_value, is_target, is_token };
use crate::fsm::{ ParserValue, Success };
use crate::http1::callback::{ Callbacks, Event, Handler, HandlerError, Signal };
use crate::http1::config::Config;
use crate::http1::framing::{ self, BodyFraming };
use crate::http1::header::{ ContentLength, HeaderScanner };
use crate::http1::matcher::Matcher;
use crate::http1::method::{ Method, METHODS };
use crate::http1::parser_error::{ ErrorState, ParserError, ReadError, SyntaxError };
use crate::http1::parser_state::{ ParserState, State };
use crate::http1::session::{ ParserType, Session };

use byte_slice::ByteStream;
use std::cmp;
use std::io::{ ErrorKind, Read };

// -------------------------------------------------------------------------------------------------
// FLAGS
// -------------------------------------------------------------------------------------------------

// A header line has been parsed, so the next line may fold into its value.
const F_HEADER: u8 = 1;

// Parsing the trailer section of a chunked body.
const F_TRAILERS: u8 = 2;

// -------------------------------------------------------------------------------------------------
// MACROS
// -------------------------------------------------------------------------------------------------

/// Expect `$byte`, and transition to `$state`. Otherwise return `SyntaxError::$error`.
macro_rules! expect_transition {
    ($parser:expr, $context:expr, $byte:expr, $state:ident, $error:ident) => ({
        exit_if_eos!($parser, $context);
        bs_next!($context);

        if $context.byte == $byte {
            transition!($parser, $context, $state);
        }

        Err(SyntaxError::$error($context.byte))
    });
}

/// Execute the handler for request target component `$event`, followed by the URL handler, and
/// exit with `Success::Eos`.
macro_rules! target_eos {
    ($parser:expr, $context:expr, $event:ident) => ({
        callback!($parser, $context, $event, bs_slice!($context), {
            callback!($parser, $context, Url, &$context.stream[$parser.url_mark..], {
                exit_eos!($parser, $context);
            });
        });
    });
}

/// Execute the handler for request target component `$event`, followed by the URL handler, both
/// ignoring the space that ended the target. Then transition to the HTTP version.
macro_rules! target_end {
    ($parser:expr, $context:expr, $event:ident) => ({
        set_state!($parser, Http1);

        callback!($parser, $context, $event, bs_slice_ignore!($context), {
            callback!(
                $parser,
                $context,
                Url,
                &$context.stream[$parser.url_mark..$context.stream_index - 1],
                {
                    transition!($parser, $context);
                }
            );
        });
    });
}

// -------------------------------------------------------------------------------------------------

/// HTTP 1.x parser.
///
/// A parser accepts either requests or responses, fixed by its [`ParserType`]. Data is fed with
/// [`execute()`](#method.execute) in chunks of any size. Parse events are delivered to the
/// handlers registered on the parser, in the same order and with the same concatenated data no
/// matter how the message is split into chunks. After a message completes the parser resets
/// itself, so pipelined messages may follow in the same or later chunks.
///
/// Each handler receives the [`Session`], which holds the details parsed so far along with the
/// user data `D`.
///
/// ```
/// use http_feed::http1::{ Method, Parser, ParserType };
///
/// let mut parser = Parser::new(ParserType::Request);
///
/// parser.on_headers_complete(|session| {
///     assert_eq!(session.method(), Some(Method::Get));
///     assert_eq!(session.http_version(), "1.1");
///     assert!(session.is_keep_alive());
/// });
///
/// parser.execute(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
/// ```
///
/// [`ParserType`]: enum.ParserType.html
/// [`Session`]: struct.Session.html
pub struct Parser<'a, D = ()> {
    /// Remaining body length.
    body_length: u64,

    /// Total byte count processed.
    byte_count: usize,

    /// Event handlers.
    callbacks: Callbacks<'a, D>,

    /// Remaining chunk length.
    chunk_length: u64,

    /// Configuration.
    config: Config,

    /// Parser flags.
    flags: u8,

    /// Bytes of start-line, header section, and trailer section parsed.
    head_length: usize,

    /// Framing header scanner.
    headers: HeaderScanner,

    /// Method matcher.
    method: Matcher,

    /// Message details and user data.
    session: Session<D>,

    /// Current state.
    state: ParserState,

    /// Status code storage.
    status_code: u16,

    /// Index within the current stream where the request target begins.
    url_mark: usize
}

impl<'a> Parser<'a, ()> {
    /// Create a new `Parser` without user data.
    pub fn new(kind: ParserType) -> Parser<'a, ()> {
        Parser::with_data(kind, ())
    }
}

impl<'a, D> Parser<'a, D> {
    /// Create a new `Parser` with user data.
    pub fn with_data(kind: ParserType, data: D) -> Parser<'a, D> {
        Parser::with_config(kind, Config::default(), data)
    }

    /// Create a new `Parser` with configuration and user data.
    pub fn with_config(kind: ParserType, config: Config, data: D) -> Parser<'a, D> {
        Parser{
            body_length:  0,
            byte_count:   0,
            callbacks:    Callbacks::new(),
            chunk_length: 0,
            config:       config,
            flags:        0,
            head_length:  0,
            headers:      HeaderScanner::new(),
            method:       Matcher::new(METHODS.len()),
            session:      Session::new(kind, data),
            state:        ParserState::Start,
            status_code:  0,
            url_mark:     0
        }
    }

    /// Parse a chunk of data.
    ///
    /// Returns `Success::Eos` when the whole chunk was consumed, `Success::Callback` when a
    /// handler aborted, and `Success::Handled` when a syntax error was delivered to the
    /// registered error handler. Each carries the amount of bytes consumed.
    ///
    /// Once an error has occurred, every call consumes nothing and reports the same error until
    /// [`reset()`](#method.reset).
    ///
    /// # Errors
    ///
    /// `ParserError` when a syntax error occurs and no error handler is registered.
    pub fn execute(&mut self, stream: &[u8]) -> Result<Success, ParserError> {
        if let Some(result) = self.errored() {
            return result;
        }

        let mut context = ByteStream::new(stream);

        self.url_mark = 0;

        loop {
            let state = self.state;
            let index = context.stream_index;
            let mut value = self.dispatch(&mut context);

            if state.is_head() {
                self.head_length += context.stream_index - index;

                if let Some(length) = self.config.max_head_length() {
                    if self.head_length > length {
                        match value {
                            Ok(ParserValue::Exit(Success::Callback(_))) | Err(_) => {},
                            _ => value = Err(SyntaxError::HeadTooLarge(length))
                        }
                    }
                }
            }

            match value {
                Ok(ParserValue::Continue) => {
                },
                Ok(ParserValue::Exit(success)) => {
                    self.byte_count += context.stream_index;

                    if let Success::Callback(_) = success {
                        self.state = ParserState::Dead;
                    }

                    return Ok(success);
                },
                Err(error) => {
                    self.byte_count += context.stream_index;

                    return self.syntax_error(error, context.stream_index, stream);
                }
            }
        }
    }

    /// Signal that no more data will arrive.
    ///
    /// A body that ends with the input is completed, and its message complete handler is
    /// executed. Between messages this does nothing. Anywhere else the message is incomplete,
    /// which is `SyntaxError::UnexpectedEof`.
    ///
    /// # Errors
    ///
    /// `ParserError` when the message is incomplete and no error handler is registered.
    pub fn finish(&mut self) -> Result<Success, ParserError> {
        if let Some(result) = self.errored() {
            return result;
        }

        match self.state {
            ParserState::Start => {
                Ok(Success::Eos(0))
            },
            ParserState::BodyUntilEof => {
                debug!("{:?} message complete at end of input", self.session.kind);

                if self.callbacks.notify(Event::MessageComplete, &mut self.session) {
                    self.reset_message();

                    Ok(Success::Eos(0))
                } else {
                    self.session.error = ErrorState::CallbackAbort(Event::MessageComplete);
                    self.state         = ParserState::Dead;

                    Ok(Success::Callback(0))
                }
            },
            _ => {
                self.syntax_error(SyntaxError::UnexpectedEof, 0, &[])
            }
        }
    }

    /// Parse everything `reader` produces, in chunks of
    /// [`Config::buffer_size()`](struct.Config.html#method.buffer_size) bytes, and then
    /// [`finish()`](#method.finish).
    ///
    /// Returns early with `Success::Callback` or `Success::Handled` when a handler aborts, or a
    /// syntax error is delivered to the error handler.
    ///
    /// # Errors
    ///
    /// `ReadError::Io` when reading fails, and `ReadError::Parse` on a syntax error with no
    /// error handler registered.
    pub fn parse_reader<R: Read>(&mut self, mut reader: R) -> Result<Success, ReadError> {
        let mut buffer = vec![0; self.config.buffer_size()];

        loop {
            let length = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(length) => length,
                Err(ref error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(error.into())
            };

            match self.execute(&buffer[..length])? {
                Success::Eos(_) => {},
                success => return Ok(success)
            }
        }

        Ok(self.finish()?)
    }

    /// Reset `Parser` to its initial state.
    ///
    /// This clears the error state and byte count. The parser type, handlers, and user data are
    /// kept.
    pub fn reset(&mut self) {
        debug!("{:?} parser reset", self.session.kind);

        self.byte_count    = 0;
        self.session.error = ErrorState::None;

        self.reset_message();
    }

    // ---------------------------------------------------------------------------------------------
    // ACCESSORS
    // ---------------------------------------------------------------------------------------------

    /// Retrieve the total byte count processed since instantiation, or the last reset.
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Retrieve the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Retrieve the `Content-Length` value of the current message.
    pub fn content_length(&self) -> Option<u64> {
        self.session.content_length()
    }

    /// Retrieve the user data.
    pub fn data(&self) -> &D {
        self.session.data()
    }

    /// Retrieve the mutable user data.
    pub fn data_mut(&mut self) -> &mut D {
        self.session.data_mut()
    }

    /// Retrieve the error state.
    pub fn error_state(&self) -> ErrorState {
        self.session.error_state()
    }

    /// Indicates that a syntax error occurred, or a handler aborted, since the last reset.
    pub fn has_error(&self) -> bool {
        self.session.has_error()
    }

    /// Retrieve the HTTP version of the current message as `major.minor`.
    pub fn http_version(&self) -> String {
        self.session.http_version()
    }

    /// Indicates that the current message uses chunked transfer encoding.
    pub fn is_chunked(&self) -> bool {
        self.session.is_chunked()
    }

    /// Indicates that the connection persists after the current message.
    pub fn is_keep_alive(&self) -> bool {
        self.session.is_keep_alive()
    }

    /// Retrieve the parser type.
    pub fn kind(&self) -> ParserType {
        self.session.kind()
    }

    /// Retrieve the request method of the current message.
    pub fn method(&self) -> Option<Method> {
        self.session.method()
    }

    /// Retrieve the current fine-grained state.
    pub fn parser_state(&self) -> ParserState {
        self.state
    }

    /// Retrieve the session.
    pub fn session(&self) -> &Session<D> {
        &self.session
    }

    /// Retrieve the current state.
    pub fn state(&self) -> State {
        if self.session.has_error() {
            return State::Errored;
        }

        let trailers = self.flags & F_TRAILERS == F_TRAILERS;

        match self.state {
            ParserState::Dead => State::Errored,
            ParserState::Start => State::Start,
            ParserState::RequestMethod => State::Method,
            ParserState::RequestTarget
          | ParserState::RequestPath
          | ParserState::RequestQuery
          | ParserState::RequestFragment => State::Target,
            ParserState::Http1
          | ParserState::Http2
          | ParserState::Http3
          | ParserState::Http4
          | ParserState::Http5
          | ParserState::VersionMajor1
          | ParserState::VersionMajor
          | ParserState::VersionMinor1
          | ParserState::VersionMinor => State::Version,
            ParserState::StartLineLf => match self.session.kind {
                ParserType::Request  => State::Version,
                ParserType::Response => State::StatusReason
            },
            ParserState::StatusCode1
          | ParserState::StatusCode2
          | ParserState::StatusCode3
          | ParserState::StatusCodeEnd => State::StatusCode,
            ParserState::StatusReason => State::StatusReason,
            ParserState::HeaderLineStart
          | ParserState::HeaderField
          | ParserState::HeaderValueStrip
          | ParserState::HeaderValueFold
          | ParserState::HeaderValue
          | ParserState::HeaderValueLf
          | ParserState::HeadersAlmostDone if trailers => State::Trailers,
            ParserState::HeaderLineStart
          | ParserState::HeaderField => State::HeaderField,
            ParserState::HeaderValueStrip
          | ParserState::HeaderValueFold
          | ParserState::HeaderValue
          | ParserState::HeaderValueLf => State::HeaderValue,
            ParserState::HeadersAlmostDone
          | ParserState::HeadersComplete => State::HeadersComplete,
            ParserState::BodyIdentity
          | ParserState::BodyUntilEof => State::Body,
            ParserState::ChunkSize1 => State::ChunkSize,
            ParserState::ChunkSize
          | ParserState::ChunkExtension
          | ParserState::ChunkSizeLf if self.chunk_length == 0 => State::LastChunk,
            ParserState::ChunkSize
          | ParserState::ChunkExtension
          | ParserState::ChunkSizeLf => State::ChunkSize,
            ParserState::ChunkData => State::ChunkData,
            ParserState::ChunkDataCr
          | ParserState::ChunkDataLf => State::ChunkCrlf,
            ParserState::MessageComplete => State::MessageComplete
        }
    }

    /// Retrieve the response status code of the current message.
    pub fn status_code(&self) -> Option<u16> {
        self.session.status_code()
    }

    /// Retrieve the HTTP major and minor version of the current message.
    pub fn version(&self) -> (u16, u16) {
        self.session.version()
    }

    // ---------------------------------------------------------------------------------------------
    // HANDLERS
    // ---------------------------------------------------------------------------------------------

    /// Register the handler for `event`, or remove it with `None`.
    ///
    /// # Errors
    ///
    /// `HandlerError` when a data handler is given for a notification event, or the reverse.
    pub fn set_handler(&mut self, event: Event, handler: Option<Handler<'a, D>>)
    -> Result<(), HandlerError> {
        self.callbacks.set(event, handler)
    }

    /// Remove the handler for `event`.
    pub fn clear_handler(&mut self, event: Event) {
        self.callbacks.remove(event);
    }

    /// Remove all handlers.
    pub fn clear_handlers(&mut self) {
        self.callbacks.clear();
    }

    /// Register the message begin handler.
    pub fn on_message_begin<F, R>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>) -> R + 'a, R: Into<Signal> {
        self.callbacks.insert(Event::MessageBegin, Handler::notify(handler));
    }

    /// Register the URL handler.
    ///
    /// The request target is delivered in fragments. Each is delivered after the path, query
    /// string, or fragment handler for the same bytes.
    pub fn on_url<F, R>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>, &[u8]) -> R + 'a, R: Into<Signal> {
        self.callbacks.insert(Event::Url, Handler::data(handler));
    }

    /// Register the path handler.
    pub fn on_path<F, R>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>, &[u8]) -> R + 'a, R: Into<Signal> {
        self.callbacks.insert(Event::Path, Handler::data(handler));
    }

    /// Register the query string handler.
    pub fn on_query<F, R>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>, &[u8]) -> R + 'a, R: Into<Signal> {
        self.callbacks.insert(Event::Query, Handler::data(handler));
    }

    /// Register the fragment handler.
    pub fn on_fragment<F, R>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>, &[u8]) -> R + 'a, R: Into<Signal> {
        self.callbacks.insert(Event::Fragment, Handler::data(handler));
    }

    /// Register the reason phrase handler.
    pub fn on_status<F, R>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>, &[u8]) -> R + 'a, R: Into<Signal> {
        self.callbacks.insert(Event::Status, Handler::data(handler));
    }

    /// Register the header field handler.
    pub fn on_header_field<F, R>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>, &[u8]) -> R + 'a, R: Into<Signal> {
        self.callbacks.insert(Event::HeaderField, Handler::data(handler));
    }

    /// Register the header value handler.
    ///
    /// An empty value is delivered as one empty slice. A folded line is delivered as a single
    /// space followed by the continuation.
    pub fn on_header_value<F, R>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>, &[u8]) -> R + 'a, R: Into<Signal> {
        self.callbacks.insert(Event::HeaderValue, Handler::data(handler));
    }

    /// Register the headers complete handler.
    pub fn on_headers_complete<F, R>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>) -> R + 'a, R: Into<Signal> {
        self.callbacks.insert(Event::HeadersComplete, Handler::notify(handler));
    }

    /// Register the body handler.
    pub fn on_body<F, R>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>, &[u8]) -> R + 'a, R: Into<Signal> {
        self.callbacks.insert(Event::Body, Handler::data(handler));
    }

    /// Register the message complete handler.
    pub fn on_message_complete<F, R>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>) -> R + 'a, R: Into<Signal> {
        self.callbacks.insert(Event::MessageComplete, Handler::notify(handler));
    }

    /// Register the error handler. It receives the chunk that contained the syntax error.
    ///
    /// Errors raised by [`finish()`](#method.finish) have no chunk, so the handler receives an
    /// empty slice.
    ///
    /// With an error handler registered, [`execute()`](#method.execute) reports syntax errors as
    /// `Success::Handled` instead of `Err`.
    pub fn on_error<F>(&mut self, handler: F)
    where F: FnMut(&mut Session<D>, &[u8]) + 'a {
        self.callbacks.insert(Event::Error, Handler::data(handler));
    }

    // ---------------------------------------------------------------------------------------------
    // INTERNALS
    // ---------------------------------------------------------------------------------------------

    /// Retrieve the result reported while in the errored state.
    fn errored(&self) -> Option<Result<Success, ParserError>> {
        match self.session.error {
            ErrorState::None => {
                None
            },
            ErrorState::CallbackAbort(_) => {
                Some(Ok(Success::Callback(0)))
            },
            ErrorState::Syntax(_) if self.callbacks.is_set(Event::Error) => {
                Some(Ok(Success::Handled(0)))
            },
            ErrorState::Syntax(error) => {
                Some(Err(ParserError{
                    error:    error,
                    consumed: 0,
                    chunk:    Vec::new()
                }))
            }
        }
    }

    /// Enter the errored state with `error`, and deliver it.
    fn syntax_error(&mut self, error: SyntaxError, consumed: usize, chunk: &[u8])
    -> Result<Success, ParserError> {
        debug!("{:?} syntax error: {}", self.session.kind, error);

        self.session.error = ErrorState::Syntax(error);
        self.state         = ParserState::Dead;

        if self.callbacks.is_set(Event::Error) {
            self.callbacks.error(&mut self.session, chunk);

            Ok(Success::Handled(consumed))
        } else {
            Err(ParserError{
                error:    error,
                consumed: consumed,
                chunk:    chunk.to_vec()
            })
        }
    }

    /// Clear everything specific to the current message.
    fn reset_message(&mut self) {
        self.body_length  = 0;
        self.chunk_length = 0;
        self.flags        = 0;
        self.head_length  = 0;
        self.method       = Matcher::new(METHODS.len());
        self.state        = ParserState::Start;
        self.status_code  = 0;

        self.headers.reset();
        self.session.reset_message();
    }

    /// Indicates that header bytes contribute to framing. Trailers never do.
    #[inline]
    fn scanning(&self) -> bool {
        self.flags & F_TRAILERS == 0
    }

    #[inline]
    fn scan_field(&mut self, bytes: &[u8]) {
        if self.scanning() {
            self.headers.field(bytes);
        }
    }

    #[inline]
    fn scan_value(&mut self, bytes: &[u8]) {
        if self.scanning() {
            self.headers.value(bytes);
        }
    }

    /// Finish scanning the previous header line, if there is one.
    #[inline]
    fn end_header(&mut self) {
        if self.flags & F_HEADER == F_HEADER && self.scanning() {
            self.headers.end_value();
        }
    }

    /// Dispatch the current state.
    #[inline]
    fn dispatch(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        match self.state {
            ParserState::Dead              => self.dead(context),
            ParserState::Start             => self.start(context),
            ParserState::RequestMethod     => self.request_method(context),
            ParserState::RequestTarget     => self.request_target(context),
            ParserState::RequestPath       => self.request_path(context),
            ParserState::RequestQuery      => self.request_query(context),
            ParserState::RequestFragment   => self.request_fragment(context),
            ParserState::Http1             => self.http1(context),
            ParserState::Http2             => self.http2(context),
            ParserState::Http3             => self.http3(context),
            ParserState::Http4             => self.http4(context),
            ParserState::Http5             => self.http5(context),
            ParserState::VersionMajor1     => self.version_major1(context),
            ParserState::VersionMajor      => self.version_major(context),
            ParserState::VersionMinor1     => self.version_minor1(context),
            ParserState::VersionMinor      => self.version_minor(context),
            ParserState::StatusCode1       => self.status_code1(context),
            ParserState::StatusCode2       => self.status_code2(context),
            ParserState::StatusCode3       => self.status_code3(context),
            ParserState::StatusCodeEnd     => self.status_code_end(context),
            ParserState::StatusReason      => self.status_reason(context),
            ParserState::StartLineLf       => self.start_line_lf(context),
            ParserState::HeaderLineStart   => self.header_line_start(context),
            ParserState::HeaderField       => self.header_field(context),
            ParserState::HeaderValueStrip  => self.header_value_strip(context),
            ParserState::HeaderValueFold   => self.header_value_fold(context),
            ParserState::HeaderValue       => self.header_value(context),
            ParserState::HeaderValueLf     => self.header_value_lf(context),
            ParserState::HeadersAlmostDone => self.headers_almost_done(context),
            ParserState::HeadersComplete   => self.headers_complete(context),
            ParserState::BodyIdentity      => self.body_identity(context),
            ParserState::BodyUntilEof      => self.body_until_eof(context),
            ParserState::ChunkSize1        => self.chunk_size1(context),
            ParserState::ChunkSize         => self.chunk_size(context),
            ParserState::ChunkExtension    => self.chunk_extension(context),
            ParserState::ChunkSizeLf       => self.chunk_size_lf(context),
            ParserState::ChunkData         => self.chunk_data(context),
            ParserState::ChunkDataCr       => self.chunk_data_cr(context),
            ParserState::ChunkDataLf       => self.chunk_data_lf(context),
            ParserState::MessageComplete   => self.message_complete(context)
        }
    }

    // ---------------------------------------------------------------------------------------------
    // START STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn start(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        // empty lines before a message are ignored
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if context.byte != b'\r' && context.byte != b'\n' {
                break;
            }
        }

        match self.session.kind {
            ParserType::Request if !is_upper_alpha!(context.byte) => {
                Err(SyntaxError::Method(context.byte))
            },
            ParserType::Response if context.byte != b'H' => {
                Err(SyntaxError::Version(context.byte))
            },
            ParserType::Request => {
                bs_replay!(context);

                notify_transition!(self, context, MessageBegin, RequestMethod);
            },
            ParserType::Response => {
                bs_replay!(context);

                notify_transition!(self, context, MessageBegin, Http1);
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // REQUEST LINE STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn request_method(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if context.byte == b' ' {
                break;
            }

            if !is_upper_alpha!(context.byte) || !self.method.feed(&METHODS, context.byte) {
                return Err(SyntaxError::Method(context.byte));
            }
        }

        if let Some(index) = self.method.matched(&METHODS) {
            self.session.method = Some(Method::ALL[index]);

            transition!(self, context, RequestTarget);
        }

        Err(SyntaxError::Method(context.byte))
    }

    #[inline]
    fn request_target(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b' ' || !is_target(context.byte) {
            return Err(SyntaxError::Url(context.byte));
        }

        bs_replay!(context);

        self.url_mark = context.stream_index;

        transition!(self, context, RequestPath);
    }

    #[inline]
    fn request_path(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        loop {
            if bs_available!(context) == 0 {
                target_eos!(self, context, Path);
            }

            bs_next!(context);

            match context.byte {
                b'?' => {
                    callback_ignore_transition!(self, context, Path, RequestQuery);
                },
                b'#' => {
                    callback_ignore_transition!(self, context, Path, RequestFragment);
                },
                b' ' => {
                    target_end!(self, context, Path);
                },
                byte if !is_target(byte) => {
                    return Err(SyntaxError::Url(byte));
                },
                _ => {
                }
            }
        }
    }

    #[inline]
    fn request_query(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        loop {
            if bs_available!(context) == 0 {
                target_eos!(self, context, Query);
            }

            bs_next!(context);

            match context.byte {
                b'#' => {
                    callback_ignore_transition!(self, context, Query, RequestFragment);
                },
                b' ' => {
                    target_end!(self, context, Query);
                },
                byte if !is_target(byte) => {
                    return Err(SyntaxError::Url(byte));
                },
                _ => {
                }
            }
        }
    }

    #[inline]
    fn request_fragment(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        loop {
            if bs_available!(context) == 0 {
                target_eos!(self, context, Fragment);
            }

            bs_next!(context);

            match context.byte {
                b' ' => {
                    target_end!(self, context, Fragment);
                },
                byte if !is_target(byte) => {
                    return Err(SyntaxError::Url(byte));
                },
                _ => {
                }
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // VERSION STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn http1(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        expect_transition!(self, context, b'H', Http2, Version)
    }

    #[inline]
    fn http2(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        expect_transition!(self, context, b'T', Http3, Version)
    }

    #[inline]
    fn http3(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        expect_transition!(self, context, b'T', Http4, Version)
    }

    #[inline]
    fn http4(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        expect_transition!(self, context, b'P', Http5, Version)
    }

    #[inline]
    fn http5(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        expect_transition!(self, context, b'/', VersionMajor1, Version)
    }

    #[inline]
    fn version_major1(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.session.version_major = (context.byte - b'0') as u16;

            transition!(self, context, VersionMajor);
        }

        Err(SyntaxError::Version(context.byte))
    }

    #[inline]
    fn version_major(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if !is_digit!(context.byte) {
                break;
            }

            self.session.version_major = self.session.version_major * 10
                                       + (context.byte - b'0') as u16;

            if self.session.version_major > 999 {
                return Err(SyntaxError::Version(context.byte));
            }
        }

        if context.byte == b'.' {
            transition!(self, context, VersionMinor1);
        }

        Err(SyntaxError::Version(context.byte))
    }

    #[inline]
    fn version_minor1(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.session.version_minor = (context.byte - b'0') as u16;

            transition!(self, context, VersionMinor);
        }

        Err(SyntaxError::Version(context.byte))
    }

    #[inline]
    fn version_minor(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if !is_digit!(context.byte) {
                break;
            }

            self.session.version_minor = self.session.version_minor * 10
                                       + (context.byte - b'0') as u16;

            if self.session.version_minor > 999 {
                return Err(SyntaxError::Version(context.byte));
            }
        }

        match (self.session.kind, context.byte) {
            (ParserType::Request, b'\r') => {
                transition!(self, context, StartLineLf);
            },
            (ParserType::Response, b' ') => {
                transition!(self, context, StatusCode1);
            },
            _ => {
                Err(SyntaxError::Version(context.byte))
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // STATUS LINE STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn status_code1(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.status_code = (context.byte - b'0') as u16;

            transition!(self, context, StatusCode2);
        }

        Err(SyntaxError::StatusCode(context.byte))
    }

    #[inline]
    fn status_code2(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.status_code = self.status_code * 10 + (context.byte - b'0') as u16;

            transition!(self, context, StatusCode3);
        }

        Err(SyntaxError::StatusCode(context.byte))
    }

    #[inline]
    fn status_code3(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.status_code         = self.status_code * 10 + (context.byte - b'0') as u16;
            self.session.status_code = Some(self.status_code);

            transition!(self, context, StatusCodeEnd);
        }

        Err(SyntaxError::StatusCode(context.byte))
    }

    #[inline]
    fn status_code_end(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        match context.byte {
            b' ' => {
                transition!(self, context, StatusReason);
            },
            b'\r' => {
                transition!(self, context, StartLineLf);
            },
            byte => {
                Err(SyntaxError::StatusCode(byte))
            }
        }
    }

    #[inline]
    fn status_reason(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        loop {
            if bs_available!(context) == 0 {
                callback_eos_expr!(self, context, Status);
            }

            bs_next!(context);

            if context.byte == b'\r' {
                callback_ignore_transition!(self, context, Status, StartLineLf);
            }

            if !is_field_value(context.byte) {
                return Err(SyntaxError::Status(context.byte));
            }
        }
    }

    #[inline]
    fn start_line_lf(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        expect_transition!(self, context, b'\n', HeaderLineStart, CrlfSequence)
    }

    // ---------------------------------------------------------------------------------------------
    // HEADER STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn header_line_start(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_linear_space!(context.byte) {
            // obsolete line folding continues the previous value
            if self.flags & F_HEADER == 0 {
                return Err(SyntaxError::HeaderField(context.byte));
            }

            self.scan_value(b" ");

            set_state!(self, HeaderValueFold);

            callback!(self, context, HeaderValue, b" ", {
                transition!(self, context);
            });
        }

        self.end_header();

        if context.byte == b'\r' {
            transition!(self, context, HeadersAlmostDone);
        }

        if is_token(context.byte) {
            self.flags |= F_HEADER;

            if self.scanning() {
                self.headers.begin_field();
            }

            bs_replay!(context);

            transition!(self, context, HeaderField);
        }

        Err(SyntaxError::HeaderField(context.byte))
    }

    #[inline]
    fn header_field(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        loop {
            if bs_available!(context) == 0 {
                self.scan_field(bs_slice!(context));

                callback_eos_expr!(self, context, HeaderField);
            }

            bs_next!(context);

            if context.byte == b':' {
                self.scan_field(bs_slice_ignore!(context));

                if self.scanning() {
                    self.headers.begin_value();
                }

                callback_ignore_transition!(self, context, HeaderField, HeaderValueStrip);
            }

            if !is_token(context.byte) {
                return Err(SyntaxError::HeaderField(context.byte));
            }
        }
    }

    #[inline]
    fn header_value_strip(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, SyntaxError> {
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if !is_linear_space!(context.byte) {
                break;
            }
        }

        if context.byte == b'\r' {
            set_state!(self, HeaderValueLf);

            // an empty value is still delivered so each field has a value
            if self.callbacks.data(Event::HeaderValue, &mut self.session, b"") {
                transition!(self, context);
            }

            exit_callback!(self, context, HeaderValue);
        }

        bs_replay!(context);

        transition!(self, context, HeaderValue);
    }

    #[inline]
    fn header_value_fold(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if !is_linear_space!(context.byte) {
                break;
            }
        }

        bs_replay!(context);

        transition!(self, context, HeaderValue);
    }

    #[inline]
    fn header_value(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        loop {
            if bs_available!(context) == 0 {
                self.scan_value(bs_slice!(context));

                callback_eos_expr!(self, context, HeaderValue);
            }

            bs_next!(context);

            if context.byte == b'\r' {
                self.scan_value(bs_slice_ignore!(context));

                callback_ignore_transition!(self, context, HeaderValue, HeaderValueLf);
            }

            if !is_field_value(context.byte) {
                return Err(SyntaxError::HeaderValue(context.byte));
            }
        }
    }

    #[inline]
    fn header_value_lf(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        expect_transition!(self, context, b'\n', HeaderLineStart, CrlfSequence)
    }

    #[inline]
    fn headers_almost_done(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte != b'\n' {
            return Err(SyntaxError::CrlfSequence(context.byte));
        }

        if self.flags & F_TRAILERS == F_TRAILERS {
            transition!(self, context, MessageComplete);
        }

        transition!(self, context, HeadersComplete);
    }

    #[inline]
    fn headers_complete(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        let summary  = *self.headers.summary();
        let resolved = framing::resolve(
            &summary,
            self.session.kind,
            self.session.version(),
            self.session.status_code
        )?;

        trace!(
            "{:?} framing {:?}, keep-alive {}",
            self.session.kind,
            resolved.body,
            resolved.keep_alive
        );

        self.session.chunked        = resolved.body == BodyFraming::Chunked;
        self.session.keep_alive     = resolved.keep_alive;
        self.session.content_length = match summary.content_length {
            ContentLength::Length(length) => Some(length),
            _ => None
        };

        if !self.callbacks.notify(Event::HeadersComplete, &mut self.session) {
            exit_callback!(self, context, HeadersComplete);
        }

        let body = if self.session.skip_body {
            self.session.chunked = false;

            BodyFraming::None
        } else {
            resolved.body
        };

        match body {
            BodyFraming::None => {
                transition!(self, context, MessageComplete);
            },
            BodyFraming::Length(length) => {
                self.body_length = length;

                transition!(self, context, BodyIdentity);
            },
            BodyFraming::Chunked => {
                transition!(self, context, ChunkSize1);
            },
            BodyFraming::UntilEof => {
                transition!(self, context, BodyUntilEof);
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // BODY STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn body_identity(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);

        let length = cmp::min(bs_available!(context) as u64, self.body_length) as usize;

        context.mark_index = context.stream_index;

        bs_jump!(context, length);

        self.body_length -= length as u64;

        if self.body_length == 0 {
            set_state!(self, MessageComplete);
        }

        callback!(self, context, Body, bs_slice!(context), {
            transition!(self, context);
        });
    }

    #[inline]
    fn body_until_eof(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);

        context.mark_index = context.stream_index;

        bs_jump!(context, bs_available!(context));

        callback_eos_expr!(self, context, Body);
    }

    // ---------------------------------------------------------------------------------------------
    // CHUNK STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn chunk_size1(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if let Some(digit) = hex_value(context.byte) {
            self.chunk_length = digit as u64;

            transition!(self, context, ChunkSize);
        }

        Err(SyntaxError::ChunkSize(context.byte))
    }

    #[inline]
    fn chunk_size(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if let Some(digit) = hex_value(context.byte) {
                self.chunk_length = self.chunk_length
                                        .checked_mul(16)
                                        .and_then(|length| length.checked_add(digit as u64))
                                        .ok_or(SyntaxError::ChunkSizeOverflow)?;

                continue;
            }

            match context.byte {
                b'\r' => {
                    transition!(self, context, ChunkSizeLf);
                },
                b';' | b' ' | b'\t' => {
                    transition!(self, context, ChunkExtension);
                },
                byte => {
                    return Err(SyntaxError::ChunkSize(byte));
                }
            }
        }
    }

    #[inline]
    fn chunk_extension(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        // extensions are not interpreted
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if context.byte == b'\r' {
                transition!(self, context, ChunkSizeLf);
            }

            if (context.byte < 0x20 && context.byte != b'\t') || context.byte == 0x7F {
                return Err(SyntaxError::ChunkExtension(context.byte));
            }
        }
    }

    #[inline]
    fn chunk_size_lf(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte != b'\n' {
            return Err(SyntaxError::CrlfSequence(context.byte));
        }

        if self.chunk_length == 0 {
            self.flags = F_TRAILERS;

            transition!(self, context, HeaderLineStart);
        }

        transition!(self, context, ChunkData);
    }

    #[inline]
    fn chunk_data(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_if_eos!(self, context);

        let length = cmp::min(bs_available!(context) as u64, self.chunk_length) as usize;

        context.mark_index = context.stream_index;

        bs_jump!(context, length);

        self.chunk_length -= length as u64;

        if self.chunk_length == 0 {
            set_state!(self, ChunkDataCr);
        }

        callback!(self, context, Body, bs_slice!(context), {
            transition!(self, context);
        });
    }

    #[inline]
    fn chunk_data_cr(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        expect_transition!(self, context, b'\r', ChunkDataLf, CrlfSequence)
    }

    #[inline]
    fn chunk_data_lf(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        expect_transition!(self, context, b'\n', ChunkSize1, CrlfSequence)
    }

    // ---------------------------------------------------------------------------------------------
    // DEAD & FINISHED STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn dead(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        exit_eos!(self, context);
    }

    #[inline]
    fn message_complete(&mut self, context: &mut ByteStream) -> Result<ParserValue, SyntaxError> {
        debug!("{:?} message complete", self.session.kind);

        if !self.callbacks.notify(Event::MessageComplete, &mut self.session) {
            exit_callback!(self, context, MessageComplete);
        }

        self.reset_message();

        transition!(self, context);
    }
}
