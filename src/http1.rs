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

//! HTTP 1.x parser, states, and errors.

mod callback;
mod config;
mod matcher;
mod method;
mod parser;
mod parser_error;
mod parser_state;
mod session;
mod status;

pub mod framing;
pub mod header;

#[cfg(test)]
mod test;

pub use crate::fsm::Success;
pub use self::callback::{ DataFn, Event, Handler, HandlerError, NotifyFn, Signal };
pub use self::config::{ Config, ConfigError, DEFAULT_BUFFER_SIZE, DEFAULT_MAX_HEAD_LENGTH };
pub use self::framing::{ BodyFraming, Framing };
pub use self::header::{ ContentLength, HeaderSummary };
pub use self::method::{ Method, UnknownMethod };
pub use self::parser::Parser;
pub use self::parser_error::{ ErrorState, ParserError, ReadError, SyntaxError };
pub use self::parser_state::{ ParserState, State };
pub use self::session::{ ParserType, Session };
pub use self::status::{ is_bodiless, reason_phrase };
