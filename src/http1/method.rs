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

//! HTTP request methods.

use std::fmt;
use std::str::FromStr;

/// Request method names, in the same order as [`Method::ALL`](enum.Method.html#associatedconstant.ALL).
pub(crate) const METHODS: [&[u8]; 16] = [
    b"CONNECT",
    b"COPY",
    b"DELETE",
    b"GET",
    b"HEAD",
    b"LOCK",
    b"MKCOL",
    b"MOVE",
    b"OPTIONS",
    b"PATCH",
    b"POST",
    b"PROPFIND",
    b"PROPPATCH",
    b"PUT",
    b"TRACE",
    b"UNLOCK"
];

/// Request methods.
#[derive(Clone,Copy,Debug,Eq,Hash,PartialEq)]
pub enum Method {
    /// CONNECT
    Connect,

    /// COPY (WebDAV)
    Copy,

    /// DELETE
    Delete,

    /// GET
    Get,

    /// HEAD
    Head,

    /// LOCK (WebDAV)
    Lock,

    /// MKCOL (WebDAV)
    Mkcol,

    /// MOVE (WebDAV)
    Move,

    /// OPTIONS
    Options,

    /// PATCH
    Patch,

    /// POST
    Post,

    /// PROPFIND (WebDAV)
    Propfind,

    /// PROPPATCH (WebDAV)
    Proppatch,

    /// PUT
    Put,

    /// TRACE
    Trace,

    /// UNLOCK (WebDAV)
    Unlock
}

impl Method {
    /// All methods, in name order.
    pub const ALL: [Method; 16] = [
        Method::Connect,
        Method::Copy,
        Method::Delete,
        Method::Get,
        Method::Head,
        Method::Lock,
        Method::Mkcol,
        Method::Move,
        Method::Options,
        Method::Patch,
        Method::Post,
        Method::Propfind,
        Method::Proppatch,
        Method::Put,
        Method::Trace,
        Method::Unlock
    ];

    /// Retrieve the method by its exact, upper-cased token.
    pub fn from_bytes(bytes: &[u8]) -> Option<Method> {
        METHODS.iter()
               .position(|name| *name == bytes)
               .map(|n| Method::ALL[n])
    }

    /// Retrieve the textual form of the method.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Method::Connect   => "CONNECT",
            Method::Copy      => "COPY",
            Method::Delete    => "DELETE",
            Method::Get       => "GET",
            Method::Head      => "HEAD",
            Method::Lock      => "LOCK",
            Method::Mkcol     => "MKCOL",
            Method::Move      => "MOVE",
            Method::Options   => "OPTIONS",
            Method::Patch     => "PATCH",
            Method::Post      => "POST",
            Method::Propfind  => "PROPFIND",
            Method::Proppatch => "PROPPATCH",
            Method::Put       => "PUT",
            Method::Trace     => "TRACE",
            Method::Unlock    => "UNLOCK"
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown method name.
#[derive(Clone,Copy,Debug,PartialEq,thiserror::Error)]
#[error("unknown request method")]
pub struct UnknownMethod;

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Method, UnknownMethod> {
        Method::from_bytes(s.as_bytes()).ok_or(UnknownMethod)
    }
}
