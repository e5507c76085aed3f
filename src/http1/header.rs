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

//! Streaming recognition of the headers that decide message framing.
//!
//! Header names and values arrive in fragments. Nothing is buffered: names are matched
//! incrementally, and values are folded into a small amount of running state, one byte at a time.

use crate::http1::matcher::Matcher;

/// Header names that affect framing, lower-cased.
const NAMES: [&[u8]; 3] = [
    b"content-length",
    b"transfer-encoding",
    b"connection"
];

/// `Transfer-Encoding` codings of interest.
const CODINGS: [&[u8]; 1] = [b"chunked"];

/// `Connection` options of interest.
const OPTIONS: [&[u8]; 2] = [b"close", b"keep-alive"];

/// Accumulated `Content-Length` value.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum ContentLength {
    /// No `Content-Length` header was found.
    Absent,

    /// Every `Content-Length` header carried this value.
    Length(u64),

    /// A `Content-Length` header was malformed, overflowed, or disagreed with another.
    Invalid
}

impl Default for ContentLength {
    fn default() -> ContentLength {
        ContentLength::Absent
    }
}

/// Framing details collected from a header section.
#[derive(Clone,Copy,Debug,Default,PartialEq)]
pub struct HeaderSummary {
    /// `Content-Length` value.
    pub content_length: ContentLength,

    /// The final transfer coding is `chunked`.
    pub chunked: bool,

    /// A `Connection: close` option was found.
    pub connection_close: bool,

    /// A `Connection: keep-alive` option was found.
    pub connection_keep_alive: bool
}

// -------------------------------------------------------------------------------------------------

/// Header currently being scanned.
#[derive(Clone,Copy,Debug,PartialEq)]
enum Field {
    Other,
    ContentLength,
    TransferEncoding,
    Connection
}

/// Position within a `Content-Length` value.
#[derive(Clone,Copy,Debug,PartialEq)]
enum Digits {
    Leading,
    Value(u64),
    Trailing(u64),
    Invalid
}

/// Scanner for one comma separated token list value.
#[derive(Clone,Copy,Debug)]
struct TokenList {
    /// Current token.
    token: Matcher,

    /// Whitespace followed the current token.
    spaced: bool
}

impl TokenList {
    fn new(count: usize) -> TokenList {
        TokenList{
            token:  Matcher::new(count),
            spaced: false
        }
    }

    /// Feed one byte. Returns the finished token when `byte` ends one.
    fn feed(&mut self, table: &[&[u8]], byte: u8) -> Option<Option<usize>> {
        if byte == b',' {
            return Some(self.finish(table));
        }

        if is_linear_space!(byte) {
            if !self.token.is_empty() {
                self.spaced = true;
            }
        } else if self.spaced {
            self.token.reject();
        } else {
            self.token.feed(table, byte);
        }

        None
    }

    /// Finish the current token, returning its table index when it was recognized. Empty list
    /// elements are reported as `None`, and leave the previous result untouched.
    fn finish(&mut self, table: &[&[u8]]) -> Option<usize> {
        let matched = if self.token.is_empty() {
            None
        } else {
            Some(self.token.matched(table).map_or(usize::MAX, |n| n))
        };

        *self = TokenList::new(table.len());

        matched
    }
}

// -------------------------------------------------------------------------------------------------

/// Incremental scanner fed with header field and value fragments.
#[derive(Clone,Debug)]
pub struct HeaderScanner {
    /// Current header.
    field: Field,

    /// Field name matcher.
    name: Matcher,

    /// `Content-Length` value state.
    digits: Digits,

    /// Token list state for `Transfer-Encoding` and `Connection`.
    tokens: TokenList,

    /// The most recent transfer coding in the current value is `chunked`.
    last_chunked: Option<bool>,

    /// Collected summary.
    summary: HeaderSummary
}

impl HeaderScanner {
    /// Create a new `HeaderScanner`.
    pub fn new() -> HeaderScanner {
        HeaderScanner{
            field:        Field::Other,
            name:         Matcher::new(NAMES.len()),
            digits:       Digits::Leading,
            tokens:       TokenList::new(0),
            last_chunked: None,
            summary:      HeaderSummary::default()
        }
    }

    /// Begin a new header name.
    pub fn begin_field(&mut self) {
        self.field = Field::Other;
        self.name  = Matcher::new(NAMES.len());
    }

    /// Feed a header name fragment.
    pub fn field(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if !self.name.feed(&NAMES, byte) {
                break;
            }
        }
    }

    /// The header name is complete and its value follows.
    pub fn begin_value(&mut self) {
        self.field = match self.name.matched(&NAMES) {
            Some(0) => Field::ContentLength,
            Some(1) => Field::TransferEncoding,
            Some(2) => Field::Connection,
            _       => Field::Other
        };

        self.digits       = Digits::Leading;
        self.last_chunked = None;
        self.tokens       = TokenList::new(match self.field {
            Field::TransferEncoding => CODINGS.len(),
            Field::Connection       => OPTIONS.len(),
            _                       => 0
        });
    }

    /// Feed a header value fragment.
    pub fn value(&mut self, bytes: &[u8]) {
        match self.field {
            Field::Other => {
            },
            Field::ContentLength => {
                for &byte in bytes {
                    self.digits = next_digit(self.digits, byte);
                }
            },
            Field::TransferEncoding => {
                for &byte in bytes {
                    if let Some(token) = self.tokens.feed(&CODINGS, byte) {
                        self.coding(token);
                    }
                }
            },
            Field::Connection => {
                for &byte in bytes {
                    if let Some(token) = self.tokens.feed(&OPTIONS, byte) {
                        self.option(token);
                    }
                }
            }
        }
    }

    /// The header value is complete.
    pub fn end_value(&mut self) {
        match self.field {
            Field::Other => {
            },
            Field::ContentLength => {
                let length = match self.digits {
                    Digits::Value(length) | Digits::Trailing(length) => Some(length),
                    _ => None
                };

                self.summary.content_length = match (self.summary.content_length, length) {
                    (ContentLength::Absent, Some(length)) => ContentLength::Length(length),
                    (ContentLength::Length(previous), Some(length)) if previous == length => {
                        ContentLength::Length(length)
                    },
                    _ => ContentLength::Invalid
                };
            },
            Field::TransferEncoding => {
                let token = self.tokens.finish(&CODINGS);

                self.coding(token);

                // a later header continues the same coding list
                if let Some(chunked) = self.last_chunked {
                    self.summary.chunked = chunked;
                }
            },
            Field::Connection => {
                let token = self.tokens.finish(&OPTIONS);

                self.option(token);
            }
        }

        self.field = Field::Other;
    }

    /// Retrieve the collected summary.
    pub fn summary(&self) -> &HeaderSummary {
        &self.summary
    }

    /// Discard everything collected.
    pub fn reset(&mut self) {
        *self = HeaderScanner::new();
    }

    fn coding(&mut self, token: Option<usize>) {
        if let Some(index) = token {
            self.last_chunked = Some(index == 0);
        }
    }

    fn option(&mut self, token: Option<usize>) {
        match token {
            Some(0) => self.summary.connection_close = true,
            Some(1) => self.summary.connection_keep_alive = true,
            _ => {}
        }
    }
}

impl Default for HeaderScanner {
    fn default() -> HeaderScanner {
        HeaderScanner::new()
    }
}

/// Advance the `Content-Length` state with `byte`.
fn next_digit(digits: Digits, byte: u8) -> Digits {
    match digits {
        Digits::Leading if is_linear_space!(byte) => Digits::Leading,
        Digits::Leading if is_digit!(byte) => Digits::Value((byte - b'0') as u64),
        Digits::Value(length) if is_digit!(byte) => {
            length.checked_mul(10)
                  .and_then(|length| length.checked_add((byte - b'0') as u64))
                  .map_or(Digits::Invalid, Digits::Value)
        },
        Digits::Value(length) | Digits::Trailing(length) if is_linear_space!(byte) => {
            Digits::Trailing(length)
        },
        _ => Digits::Invalid
    }
}
