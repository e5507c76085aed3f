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

//! Per-message parse results visible to handlers.

use crate::http1::method::Method;
use crate::http1::parser_error::ErrorState;

/// Message type a parser accepts.
#[derive(Clone,Copy,Debug,Eq,Hash,PartialEq)]
pub enum ParserType {
    /// Request messages.
    Request,

    /// Response messages.
    Response
}

/// Details of the message being parsed, along with the user data slot.
///
/// Each handler receives the session as its first argument. Fields are filled in as the message
/// is parsed, and cleared again after the message completes.
#[derive(Clone,Debug)]
pub struct Session<D> {
    /// Parser type.
    pub(crate) kind: ParserType,

    /// Request method.
    pub(crate) method: Option<Method>,

    /// Response status code.
    pub(crate) status_code: Option<u16>,

    /// HTTP major version.
    pub(crate) version_major: u16,

    /// HTTP minor version.
    pub(crate) version_minor: u16,

    /// `Content-Length` value of a non-chunked message.
    pub(crate) content_length: Option<u64>,

    /// The body uses chunked transfer encoding.
    pub(crate) chunked: bool,

    /// The connection persists after this message.
    pub(crate) keep_alive: bool,

    /// A handler declared that this message has no body.
    pub(crate) skip_body: bool,

    /// Error state.
    pub(crate) error: ErrorState,

    /// User data.
    pub(crate) data: D
}

impl<D> Session<D> {
    /// Create a new `Session`.
    pub(crate) fn new(kind: ParserType, data: D) -> Session<D> {
        Session{
            kind:           kind,
            method:         None,
            status_code:    None,
            version_major:  0,
            version_minor:  0,
            content_length: None,
            chunked:        false,
            keep_alive:     false,
            skip_body:      false,
            error:          ErrorState::None,
            data:           data
        }
    }

    /// Clear the message details. The parser type, error state, and user data are kept.
    pub(crate) fn reset_message(&mut self) {
        self.method         = None;
        self.status_code    = None;
        self.version_major  = 0;
        self.version_minor  = 0;
        self.content_length = None;
        self.chunked        = false;
        self.keep_alive     = false;
        self.skip_body      = false;
    }

    /// Retrieve the parser type.
    pub fn kind(&self) -> ParserType {
        self.kind
    }

    /// Retrieve the request method.
    ///
    /// This is available once the method has been parsed.
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Retrieve the response status code.
    ///
    /// This is available once all three digits have been parsed.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Retrieve the HTTP major and minor version.
    pub fn version(&self) -> (u16, u16) {
        (self.version_major, self.version_minor)
    }

    /// Retrieve the HTTP version as `major.minor`.
    pub fn http_version(&self) -> String {
        format!("{}.{}", self.version_major, self.version_minor)
    }

    /// Retrieve the `Content-Length` value.
    ///
    /// This is available once the header section is complete, and only for messages that are not
    /// chunked.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Indicates that the body uses chunked transfer encoding.
    ///
    /// This is available once the header section is complete.
    pub fn is_chunked(&self) -> bool {
        self.chunked
    }

    /// Indicates that the connection persists after this message.
    ///
    /// This is available once the header section is complete.
    pub fn is_keep_alive(&self) -> bool {
        self.keep_alive
    }

    /// Indicates that a syntax error occurred, or a handler aborted.
    pub fn has_error(&self) -> bool {
        self.error.is_error()
    }

    /// Retrieve the error state.
    pub fn error_state(&self) -> ErrorState {
        self.error
    }

    /// Declare that the current message has no body, regardless of its framing headers.
    ///
    /// This is meant to be called from a `HeadersComplete` handler, such as when parsing the
    /// response to a `HEAD` request.
    pub fn skip_body(&mut self) {
        self.skip_body = true;
    }

    /// Retrieve the user data.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Retrieve the mutable user data.
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }
}
