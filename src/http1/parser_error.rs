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

//! HTTP 1.x parser errors.

use crate::http1::callback::Event;

use std::io;

/// Grammar violations and framing failures.
#[derive(Clone,Copy,Debug,PartialEq,thiserror::Error)]
pub enum SyntaxError {
    /// Invalid chunk extension on byte `u8`.
    #[error("invalid chunk extension on byte {0}")]
    ChunkExtension(u8),

    /// Invalid chunk size on byte `u8`.
    #[error("invalid chunk size on byte {0}")]
    ChunkSize(u8),

    /// Chunk size does not fit in 64 bits.
    #[error("chunk size overflow")]
    ChunkSizeOverflow,

    /// Unparsable, overflowing, or conflicting `Content-Length` value.
    #[error("invalid content length")]
    ContentLength,

    /// Invalid CRLF sequence on byte `u8`.
    #[error("invalid CRLF sequence on byte {0}")]
    CrlfSequence(u8),

    /// Both `Content-Length` and chunked `Transfer-Encoding` are present.
    #[error("content length and chunked transfer encoding are both present")]
    FramingConflict,

    /// The start-line and header section exceeded `usize` bytes.
    #[error("head exceeds {0} bytes")]
    HeadTooLarge(usize),

    /// Invalid header field on byte `u8`.
    #[error("invalid header field on byte {0}")]
    HeaderField(u8),

    /// Invalid header value on byte `u8`.
    #[error("invalid header value on byte {0}")]
    HeaderValue(u8),

    /// Invalid request method on byte `u8`.
    #[error("invalid method on byte {0}")]
    Method(u8),

    /// Invalid status on byte `u8`.
    #[error("invalid status on byte {0}")]
    Status(u8),

    /// Invalid status code on byte `u8`.
    #[error("invalid status code on byte {0}")]
    StatusCode(u8),

    /// Input ended in the middle of a message.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Invalid URL character on byte `u8`.
    #[error("invalid URL on byte {0}")]
    Url(u8),

    /// Invalid HTTP version on byte `u8`.
    #[error("invalid HTTP version on byte {0}")]
    Version(u8)
}

/// Error returned by [`Parser::execute()`](struct.Parser.html#method.execute) when a syntax
/// error occurs and no error handler is registered.
#[derive(Clone,Debug,PartialEq,thiserror::Error)]
#[error("{error} ({consumed} bytes consumed)")]
pub struct ParserError {
    /// The syntax error.
    #[source]
    pub error: SyntaxError,

    /// Amount of bytes consumed from the chunk, including the offending byte.
    pub consumed: usize,

    /// Copy of the offending chunk.
    pub chunk: Vec<u8>
}

/// Error state of a parser.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum ErrorState {
    /// No error.
    None,

    /// The input was malformed.
    Syntax(SyntaxError),

    /// The handler for the event requested an abort.
    CallbackAbort(Event)
}

impl ErrorState {
    /// Indicates that an error has occurred.
    pub fn is_error(&self) -> bool {
        *self != ErrorState::None
    }
}

impl Default for ErrorState {
    fn default() -> ErrorState {
        ErrorState::None
    }
}

/// Error returned by [`Parser::parse_reader()`](struct.Parser.html#method.parse_reader).
#[derive(Debug,thiserror::Error)]
pub enum ReadError {
    /// Reading from the source failed.
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    /// The data was malformed.
    #[error(transparent)]
    Parse(#[from] ParserError)
}
