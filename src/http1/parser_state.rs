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

//! HTTP 1.x parser states.

/// Parser states.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
#[repr(u8)]
pub enum ParserState {
    /// A syntax error occurred, or a handler aborted.
    Dead,

    /// Skipping empty lines before a message.
    Start,

    // ---------------------------------------------------------------------------------------------
    // REQUEST LINE
    // ---------------------------------------------------------------------------------------------

    /// Parsing request method.
    RequestMethod,

    /// Parsing request target byte 1.
    RequestTarget,

    /// Parsing request target path.
    RequestPath,

    /// Parsing request target query string.
    RequestQuery,

    /// Parsing request target fragment.
    RequestFragment,

    // ---------------------------------------------------------------------------------------------
    // VERSION
    // ---------------------------------------------------------------------------------------------

    /// Parsing HTTP version byte 1.
    Http1,

    /// Parsing HTTP version byte 2.
    Http2,

    /// Parsing HTTP version byte 3.
    Http3,

    /// Parsing HTTP version byte 4.
    Http4,

    /// Parsing HTTP version byte 5.
    Http5,

    /// Parsing HTTP major version byte 1.
    VersionMajor1,

    /// Parsing HTTP major version byte 2+.
    VersionMajor,

    /// Parsing HTTP minor version byte 1.
    VersionMinor1,

    /// Parsing HTTP minor version byte 2+.
    VersionMinor,

    // ---------------------------------------------------------------------------------------------
    // STATUS LINE
    // ---------------------------------------------------------------------------------------------

    /// Parsing response status code byte 1.
    StatusCode1,

    /// Parsing response status code byte 2.
    StatusCode2,

    /// Parsing response status code byte 3.
    StatusCode3,

    /// Parsing the byte following the response status code.
    StatusCodeEnd,

    /// Parsing response reason phrase.
    StatusReason,

    /// Parsing start-line LF.
    StartLineLf,

    // ---------------------------------------------------------------------------------------------
    // HEADERS
    // ---------------------------------------------------------------------------------------------

    /// Parsing first byte of a header line.
    HeaderLineStart,

    /// Parsing header field.
    HeaderField,

    /// Stripping linear white space before header value.
    HeaderValueStrip,

    /// Stripping linear white space from a folded header line.
    HeaderValueFold,

    /// Parsing header value.
    HeaderValue,

    /// Parsing header line LF.
    HeaderValueLf,

    /// Parsing LF of the empty line ending the header section.
    HeadersAlmostDone,

    /// Resolving framing and executing the headers complete handler.
    HeadersComplete,

    // ---------------------------------------------------------------------------------------------
    // BODY
    // ---------------------------------------------------------------------------------------------

    /// Parsing a body of known length.
    BodyIdentity,

    /// Parsing a body that ends with the input.
    BodyUntilEof,

    // ---------------------------------------------------------------------------------------------
    // CHUNKED TRANSFER ENCODING
    // ---------------------------------------------------------------------------------------------

    /// Parsing chunk size byte 1.
    ChunkSize1,

    /// Parsing chunk size byte 2+.
    ChunkSize,

    /// Skipping chunk extensions.
    ChunkExtension,

    /// Parsing chunk size line LF.
    ChunkSizeLf,

    /// Parsing chunk data.
    ChunkData,

    /// Parsing chunk data CR.
    ChunkDataCr,

    /// Parsing chunk data LF.
    ChunkDataLf,

    // ---------------------------------------------------------------------------------------------
    // FINISHED
    // ---------------------------------------------------------------------------------------------

    /// Executing the message complete handler.
    MessageComplete
}

impl ParserState {
    /// Indicates that bytes parsed in this state count towards the head length limit.
    pub fn is_head(&self) -> bool {
        match *self {
            ParserState::RequestMethod
          | ParserState::RequestTarget
          | ParserState::RequestPath
          | ParserState::RequestQuery
          | ParserState::RequestFragment
          | ParserState::Http1
          | ParserState::Http2
          | ParserState::Http3
          | ParserState::Http4
          | ParserState::Http5
          | ParserState::VersionMajor1
          | ParserState::VersionMajor
          | ParserState::VersionMinor1
          | ParserState::VersionMinor
          | ParserState::StatusCode1
          | ParserState::StatusCode2
          | ParserState::StatusCode3
          | ParserState::StatusCodeEnd
          | ParserState::StatusReason
          | ParserState::StartLineLf
          | ParserState::HeaderLineStart
          | ParserState::HeaderField
          | ParserState::HeaderValueStrip
          | ParserState::HeaderValueFold
          | ParserState::HeaderValue
          | ParserState::HeaderValueLf
          | ParserState::HeadersAlmostDone => true,
            _ => false
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// State listing in parsing order.
///
/// This is a coarse view of [`ParserState`](enum.ParserState.html), retrieved with
/// [`Parser::state()`](struct.Parser.html#method.state).
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
#[repr(u8)]
pub enum State {
    /// Waiting for a message.
    Start,

    // ---------------------------------------------------------------------------------------------
    // START-LINE STATES
    // ---------------------------------------------------------------------------------------------

    /// Request method.
    Method,

    /// Request target.
    Target,

    /// HTTP version.
    Version,

    /// Response status code.
    StatusCode,

    /// Response reason phrase.
    StatusReason,

    // ---------------------------------------------------------------------------------------------
    // HEADER STATES
    // ---------------------------------------------------------------------------------------------

    /// Header field.
    HeaderField,

    /// Header value.
    HeaderValue,

    /// End of the header section.
    HeadersComplete,

    // ---------------------------------------------------------------------------------------------
    // BODY STATES
    // ---------------------------------------------------------------------------------------------

    /// Body of known length, or a body ending with the input.
    Body,

    /// Chunk size line.
    ChunkSize,

    /// Chunk data.
    ChunkData,

    /// CRLF following chunk data.
    ChunkCrlf,

    /// Size line of the final, zero-length chunk.
    LastChunk,

    /// Trailer section.
    Trailers,

    // ---------------------------------------------------------------------------------------------
    // FINISHED STATES
    // ---------------------------------------------------------------------------------------------

    /// Message complete.
    MessageComplete,

    /// A syntax error occurred, or a handler aborted. Only a reset leaves this state.
    Errored
}
