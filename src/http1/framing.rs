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

//! Message body framing and keep-alive resolution.

use crate::http1::header::{ ContentLength, HeaderSummary };
use crate::http1::parser_error::SyntaxError;
use crate::http1::session::ParserType;
use crate::http1::status::is_bodiless;

/// How the message body is delimited.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum BodyFraming {
    /// There is no body.
    None,

    /// The body is exactly this many bytes.
    Length(u64),

    /// The body uses chunked transfer encoding.
    Chunked,

    /// The body ends when the connection closes.
    UntilEof
}

/// Resolved framing for a message.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Framing {
    /// Body delimitation.
    pub body: BodyFraming,

    /// The connection may carry another message after this one.
    pub keep_alive: bool
}

/// Resolve framing once the header section of a message is complete.
///
/// # Arguments
///
/// **`summary`**
///
/// The framing headers collected from the header section.
///
/// **`kind`**
///
/// Whether the message is a request or a response.
///
/// **`version`**
///
/// The major and minor HTTP version.
///
/// **`status_code`**
///
/// The response status code. Ignored for requests.
///
/// # Errors
///
/// `SyntaxError::FramingConflict` when both `Content-Length` and chunked transfer encoding are
/// present, and `SyntaxError::ContentLength` when the `Content-Length` value is unusable.
pub fn resolve(summary: &HeaderSummary, kind: ParserType, version: (u16, u16),
               status_code: Option<u16>)
-> Result<Framing, SyntaxError> {
    if summary.chunked && summary.content_length != ContentLength::Absent {
        return Err(SyntaxError::FramingConflict);
    }

    let body = match (kind, summary.content_length) {
        (_, ContentLength::Invalid) => {
            return Err(SyntaxError::ContentLength);
        },
        (ParserType::Response, _) if status_code.map_or(false, is_bodiless) => {
            BodyFraming::None
        },
        _ if summary.chunked => {
            BodyFraming::Chunked
        },
        (_, ContentLength::Length(0)) => {
            BodyFraming::None
        },
        (_, ContentLength::Length(length)) => {
            BodyFraming::Length(length)
        },
        (ParserType::Response, ContentLength::Absent) => {
            BodyFraming::UntilEof
        },
        (ParserType::Request, ContentLength::Absent) => {
            BodyFraming::None
        }
    };

    Ok(Framing{
        body:       body,
        keep_alive: keep_alive(summary, version)
    })
}

/// Determine whether the connection persists, by version and `Connection` options alone.
///
/// `close` takes precedence over `keep-alive`.
pub fn keep_alive(summary: &HeaderSummary, version: (u16, u16)) -> bool {
    if summary.connection_close {
        false
    } else if summary.connection_keep_alive {
        true
    } else {
        version >= (1, 1)
    }
}
