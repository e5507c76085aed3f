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

//! Collection of complete messages from a parser.

use crate::handler::Headers;
use crate::http1::{ reason_phrase, Method, Parser, ParserType };

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

/// A parsed message.
#[derive(Clone,Debug,Default,PartialEq)]
pub struct Message {
    /// Parser type, when known.
    pub kind: Option<ParserType>,

    /// Request method.
    pub method: Option<Method>,

    /// Request target.
    pub url: String,

    /// Request target path.
    pub path: String,

    /// Request target query string.
    pub query_string: String,

    /// Request target fragment.
    pub fragment: String,

    /// Response status code.
    pub status_code: Option<u16>,

    /// Response reason phrase.
    pub status: String,

    /// HTTP major and minor version.
    pub version: (u16, u16),

    /// Headers.
    pub headers: Headers,

    /// Trailers of a chunked body.
    pub trailers: Headers,

    /// Body, without chunk framing.
    pub body: Vec<u8>,

    /// `Content-Length` value.
    pub content_length: Option<u64>,

    /// The body used chunked transfer encoding.
    pub chunked: bool,

    /// The connection persists after this message.
    pub keep_alive: bool
}

impl Message {
    /// Retrieve the start-line, ending with CRLF.
    ///
    /// A response status line uses the standard reason phrase for its status code.
    pub fn start_line(&self) -> String {
        match self.kind {
            Some(ParserType::Response) => {
                let status_code = self.status_code.unwrap_or(0);

                format!(
                    "HTTP/{}.{} {} {}\r\n",
                    self.version.0,
                    self.version.1,
                    status_code,
                    reason_phrase(status_code).unwrap_or("")
                )
            },
            _ => {
                format!(
                    "{} {} HTTP/{}.{}\r\n",
                    self.method.map_or("", |method| method.as_str()),
                    self.url,
                    self.version.0,
                    self.version.1
                )
            }
        }
    }
}

// -------------------------------------------------------------------------------------------------

#[derive(Debug,Default)]
struct Collector {
    /// Message being collected.
    current: Message,

    /// Header field buffer.
    field_buffer: Vec<u8>,

    /// Header value buffer.
    value_buffer: Vec<u8>,

    /// Reason phrase buffer.
    status_buffer: Vec<u8>,

    /// Field/value toggle.
    toggle: bool,

    /// Headers are complete, so fields belong to the trailer section.
    trailers: bool,

    /// Completed messages.
    messages: Vec<Message>
}

impl Collector {
    /// Flush the most recent header field/value.
    fn flush(&mut self) {
        if self.toggle {
            let name  = String::from_utf8_lossy(&self.field_buffer).into_owned();
            let value = String::from_utf8_lossy(&self.value_buffer);
            let value = value.trim_end_matches(|c: char| c == ' ' || c == '\t');

            if self.trailers {
                self.current.trailers.append(name, value);
            } else {
                self.current.headers.append(name, value);
            }
        }

        self.field_buffer.clear();
        self.value_buffer.clear();

        self.toggle = false;
    }
}

/// Collects complete [`Message`](struct.Message.html)s from every parser it is bound to.
///
/// ```
/// use http_feed::handler::MessageCollector;
/// use http_feed::http1::{ Parser, ParserType };
///
/// let collector  = MessageCollector::new();
/// let mut parser = Parser::new(ParserType::Response);
///
/// collector.bind(&mut parser);
///
/// parser.execute(b"HTTP/1.1 200 OK\r\n\
///                  Content-Length: 5\r\n\
///                  \r\n\
///                  hello").unwrap();
///
/// let messages = collector.take();
///
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].status_code, Some(200));
/// assert_eq!(messages[0].headers.get("content-length"), Some("5"));
/// assert_eq!(messages[0].body, b"hello");
/// ```
#[derive(Clone,Debug,Default)]
pub struct MessageCollector {
    inner: Rc<RefCell<Collector>>
}

impl MessageCollector {
    /// Create a new `MessageCollector`.
    pub fn new() -> MessageCollector {
        MessageCollector::default()
    }

    /// Register handlers on `parser` for every event except `Error`, replacing existing ones.
    pub fn bind<'a, D>(&self, parser: &mut Parser<'a, D>) {
        let inner = self.inner.clone();

        parser.on_message_begin(move |session| {
            let mut collector = inner.borrow_mut();

            collector.current      = Message::default();
            collector.current.kind = Some(session.kind());
            collector.toggle       = false;
            collector.trailers     = false;

            collector.field_buffer.clear();
            collector.value_buffer.clear();
            collector.status_buffer.clear();
        });

        let inner = self.inner.clone();

        parser.on_url(move |_, data| {
            // targets are 7-bit, so fragments convert independently
            inner.borrow_mut().current.url.push_str(&String::from_utf8_lossy(data));
        });

        let inner = self.inner.clone();

        parser.on_path(move |_, data| {
            inner.borrow_mut().current.path.push_str(&String::from_utf8_lossy(data));
        });

        let inner = self.inner.clone();

        parser.on_query(move |_, data| {
            inner.borrow_mut().current.query_string.push_str(&String::from_utf8_lossy(data));
        });

        let inner = self.inner.clone();

        parser.on_fragment(move |_, data| {
            inner.borrow_mut().current.fragment.push_str(&String::from_utf8_lossy(data));
        });

        let inner = self.inner.clone();

        parser.on_status(move |_, data| {
            inner.borrow_mut().status_buffer.extend_from_slice(data);
        });

        let inner = self.inner.clone();

        parser.on_header_field(move |_, data| {
            let mut collector = inner.borrow_mut();

            if collector.toggle {
                collector.flush();
            }

            collector.field_buffer.extend_from_slice(data);
        });

        let inner = self.inner.clone();

        parser.on_header_value(move |_, data| {
            let mut collector = inner.borrow_mut();

            collector.value_buffer.extend_from_slice(data);

            collector.toggle = true;
        });

        let inner = self.inner.clone();

        parser.on_headers_complete(move |session| {
            let mut guard     = inner.borrow_mut();
            let collector     = &mut *guard;
            let current       = &mut collector.current;

            current.method         = session.method();
            current.status_code    = session.status_code();
            current.status         = String::from_utf8_lossy(&collector.status_buffer).into_owned();
            current.version        = session.version();
            current.content_length = session.content_length();
            current.chunked        = session.is_chunked();
            current.keep_alive     = session.is_keep_alive();

            collector.flush();

            collector.trailers = true;
        });

        let inner = self.inner.clone();

        parser.on_body(move |_, data| {
            inner.borrow_mut().current.body.extend_from_slice(data);
        });

        let inner = self.inner.clone();

        parser.on_message_complete(move |_| {
            let mut guard = inner.borrow_mut();
            let collector = &mut *guard;

            collector.flush();

            let message = mem::take(&mut collector.current);

            collector.messages.push(message);
        });
    }

    /// Indicates that no message has been collected.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().messages.is_empty()
    }

    /// Retrieve the amount of collected messages.
    pub fn len(&self) -> usize {
        self.inner.borrow().messages.len()
    }

    /// Retrieve a copy of the collected messages.
    pub fn messages(&self) -> Vec<Message> {
        self.inner.borrow().messages.clone()
    }

    /// Remove and return the collected messages.
    pub fn take(&self) -> Vec<Message> {
        mem::take(&mut self.inner.borrow_mut().messages)
    }
}
