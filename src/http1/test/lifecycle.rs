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

use crate::http1::*;
use crate::http1::test::*;

use std::io::{ self, Cursor, Read };

/// Reader that is interrupted before every read.
struct Interrupting<R> {
    inner:       R,
    interrupted: bool
}

impl<R: Read> Read for Interrupting<R> {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        self.interrupted = !self.interrupted;

        if self.interrupted {
            Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"))
        } else {
            self.inner.read(buffer)
        }
    }
}

/// Reader that fails after its data runs out.
struct Failing<R> {
    inner: R
}

impl<R: Read> Read for Failing<R> {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        match self.inner.read(buffer)? {
            0 => Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")),
            length => Ok(length)
        }
    }
}

fn message_count(log: &Log) -> usize {
    log.borrow().iter().filter(|&&(event, _)| event == Event::MessageComplete).count()
}

#[test]
fn pipelined() {
    let (mut parser, log) = setup!(Request);

    assert_eos(
        &mut parser,
        b"GET /1 HTTP/1.1\r\n\r\n\
          POST /2 HTTP/1.1\r\nContent-Length: 1\r\n\r\nx\
          PUT /3 HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n1\r\ny\r\n0\r\n\r\n\
          DELETE /4",
        State::Target
    );

    assert_eq!(message_count(&log), 3);
    assert_eq!(parser.method(), Some(Method::Delete));
    assert_eq!(collect(&log.borrow(), Event::Url), b"/1/2/3/4");
    assert_eq!(collect(&log.borrow(), Event::Body), b"xy");
}

#[test]
fn implicit_reset() {
    let (mut parser, _) = setup!(Response);

    assert_eos(
        &mut parser,
        b"HTTP/1.0 404 Not Found\r\nContent-Length: 1\r\nConnection: keep-alive\r\n\r\n",
        State::Body
    );

    assert_eq!(parser.status_code(), Some(404));
    assert_eq!(parser.version(), (1, 0));
    assert_eq!(parser.content_length(), Some(1));
    assert!(parser.is_keep_alive());

    assert_eos(&mut parser, b"x", State::Start);

    assert_eq!(parser.status_code(), None);
    assert_eq!(parser.http_version(), "0.0");
    assert_eq!(parser.content_length(), None);
    assert!(!parser.is_keep_alive());
    assert!(!parser.is_chunked());
    assert_eq!(parser.kind(), ParserType::Response);
}

#[test]
fn byte_count() {
    let (mut parser, _) = setup!(Request);

    assert_eos(&mut parser, b"GET / HTTP/1.1\r\n", State::HeaderField);
    assert_eq!(parser.byte_count(), 16);

    assert_eos(&mut parser, b"\r\nGET", State::Method);
    assert_eq!(parser.byte_count(), 21);

    parser.reset();

    assert_eq!(parser.byte_count(), 0);
}

#[test]
fn reset_after_error() {
    let (mut parser, log) = setup!(Request);

    assert_error(&mut parser, b"GET / HTTP/1.1\r\nX\x01", SyntaxError::HeaderField(0x01), 18);

    parser.reset();

    assert!(!parser.has_error());
    assert_eq!(parser.error_state(), ErrorState::None);
    assert_eq!(parser.state(), State::Start);
    assert_eq!(parser.parser_state(), ParserState::Start);

    log.borrow_mut().clear();

    assert_eos(&mut parser, b"GET /again HTTP/1.1\r\n\r\n", State::Start);
    assert_eq!(collect(&log.borrow(), Event::Url), b"/again");
}

#[test]
fn reset_after_abort() {
    let (mut parser, log) = setup!(Request);

    parser.on_headers_complete(|_| Signal::Abort);

    assert_callback(&mut parser, b"GET / HTTP/1.1\r\n\r\n", 18);

    parser.reset();
    parser.clear_handler(Event::HeadersComplete);

    assert_eos(&mut parser, b"GET / HTTP/1.1\r\n\r\n", State::Start);
    assert_eq!(message_count(&log), 1);
}

#[test]
fn reset_mid_message() {
    let (mut parser, log) = setup!(Request);

    assert_eos(&mut parser, b"POST /a HTTP/1.1\r\nContent-Length: 10\r\n\r\nab", State::Body);

    parser.reset();

    assert_eq!(parser.method(), None);

    assert_eos(&mut parser, b"GET /b HTTP/1.1\r\n\r\n", State::Start);
    assert_eq!(message_count(&log), 1);
}

#[test]
fn finish_between_messages() {
    let (mut parser, _) = setup!(Request);

    assert_eq!(parser.finish(), Ok(Success::Eos(0)));

    assert_eos(&mut parser, b"GET / HTTP/1.1\r\n\r\n", State::Start);
    assert_eq!(parser.finish(), Ok(Success::Eos(0)));
    assert!(!parser.has_error());
}

#[test]
fn finish_incomplete() {
    let streams: [&[u8]; 5] = [
        b"G",
        b"GET /",
        b"GET / HTTP/1.1\r\nHost",
        b"POST / HTTP/1.1\r\nContent-Length: 3\r\n\r\nab",
        b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n3\r\nabc\r\n"
    ];

    for stream in streams.iter() {
        let (mut parser, _) = setup!(Request);

        assert_eq!(parser.execute(stream), Ok(Success::Eos(stream.len())));

        assert_eq!(
            parser.finish(),
            Err(ParserError{
                error:    SyntaxError::UnexpectedEof,
                consumed: 0,
                chunk:    Vec::new()
            })
        );

        assert_eq!(parser.state(), State::Errored);
    }
}

#[test]
fn finish_until_eof_abort() {
    let (mut parser, _) = setup!(Response);

    parser.on_message_complete(|_| Signal::Abort);

    assert_eos(&mut parser, b"HTTP/1.1 200 OK\r\n\r\nbody", State::Body);
    assert_eq!(parser.finish(), Ok(Success::Callback(0)));
    assert_eq!(parser.error_state(), ErrorState::CallbackAbort(Event::MessageComplete));
    assert_eq!(parser.finish(), Ok(Success::Callback(0)));
}

#[test]
fn parse_reader() {
    let config = Config::new().with_buffer_size(3).unwrap();

    let (mut parser, log) = recorder_with_config(ParserType::Response, config);

    let reader = Cursor::new(
        b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello\
          HTTP/1.0 200 OK\r\n\r\nuntil the end".to_vec()
    );

    assert_eq!(parser.parse_reader(reader).unwrap(), Success::Eos(0));
    assert_eq!(message_count(&log), 2);
    assert_eq!(collect(&log.borrow(), Event::Body), b"hellountil the end");
}

#[test]
fn parse_reader_interrupted() {
    let (mut parser, log) = setup!(Request);

    let reader = Interrupting{
        inner:       Cursor::new(b"GET / HTTP/1.1\r\n\r\n".to_vec()),
        interrupted: false
    };

    assert_eq!(parser.parse_reader(reader).unwrap(), Success::Eos(0));
    assert_eq!(message_count(&log), 1);
}

#[test]
fn parse_reader_errors() {
    let (mut parser, _) = setup!(Request);

    let reader = Failing{
        inner: Cursor::new(b"GET / HTTP/1.1\r\n".to_vec())
    };

    match parser.parse_reader(reader) {
        Err(ReadError::Io(error)) => assert_eq!(error.kind(), io::ErrorKind::ConnectionReset),
        result => panic!("parse_reader_errors() Io match failed: {:?}", result)
    }

    let (mut parser, _) = setup!(Request);

    match parser.parse_reader(Cursor::new(b"GET / HTTP/1.1\r\nBad Header\r\n".to_vec())) {
        Err(ReadError::Parse(error)) => {
            assert_eq!(error.error, SyntaxError::HeaderField(b' '));
            assert_eq!(error.consumed, 20);
        },
        result => panic!("parse_reader_errors() Parse match failed: {:?}", result)
    }

    let (mut parser, _) = setup!(Request);

    match parser.parse_reader(Cursor::new(b"GET / HTTP/1.1\r\nHost".to_vec())) {
        Err(ReadError::Parse(error)) => assert_eq!(error.error, SyntaxError::UnexpectedEof),
        result => panic!("parse_reader_errors() Eof match failed: {:?}", result)
    }
}

#[test]
fn parse_reader_abort() {
    let (mut parser, log) = setup!(Request);

    parser.on_message_begin(|_| Signal::Abort);

    let reader = Cursor::new(b"GET / HTTP/1.1\r\n\r\nGET / HTTP/1.1\r\n\r\n".to_vec());

    assert_eq!(parser.parse_reader(reader).unwrap(), Success::Callback(0));
    assert!(log.borrow().is_empty());
}

#[test]
fn config() {
    assert_eq!(Config::new().with_buffer_size(0), Err(ConfigError::BufferSize));

    let parser = Parser::with_config(
        ParserType::Request,
        Config::new().with_max_head_length(Some(1024)),
        ()
    );

    assert_eq!(parser.config().buffer_size(), DEFAULT_BUFFER_SIZE);
    assert_eq!(parser.config().max_head_length(), Some(1024));
}
