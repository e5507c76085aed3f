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

use std::cell::Cell;
use std::rc::Rc;

const HEAD: &[u8] = b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n";

macro_rules! chunked_setup {
    () => ({
        let (mut parser, log) = setup!(Response);

        assert_eos(&mut parser, HEAD, State::ChunkSize);

        (parser, log)
    });
}

#[test]
fn body() {
    let (mut parser, log) = setup!(Response);
    let details           = Rc::new(Cell::new((false, Some(0))));
    let details_          = details.clone();

    parser.on_headers_complete(move |session| {
        details_.set((session.is_chunked(), session.content_length()));
    });

    assert_eos(&mut parser, HEAD, State::ChunkSize);

    assert_eos(
        &mut parser,
        b"4\r\nWiki\r\n5\r\npedia\r\nE\r\n in\r\n\r\nchunks.\r\n0\r\n\r\n",
        State::Start
    );

    assert_eq!(details.get(), (true, None));

    let log = log.borrow();

    assert_eq!(collect(&log, Event::Body), b"Wikipedia in\r\n\r\nchunks.");
    assert_eq!(log.last(), Some(&(Event::MessageComplete, Vec::new())));
}

#[test]
fn states() {
    let (mut parser, _) = chunked_setup!();

    assert_eos(&mut parser, b"1", State::ChunkSize);
    assert_eos(&mut parser, b"0", State::ChunkSize);
    assert_eos(&mut parser, b"\r", State::ChunkSize);
    assert_eos(&mut parser, b"\n", State::ChunkData);
    assert_eos(&mut parser, b"0123456789", State::ChunkData);
    assert_eos(&mut parser, b"abcdef", State::ChunkCrlf);
    assert_eos(&mut parser, b"\r", State::ChunkCrlf);
    assert_eos(&mut parser, b"\n", State::ChunkSize);
    assert_eos(&mut parser, b"0", State::LastChunk);
    assert_eos(&mut parser, b"\r", State::LastChunk);
    assert_eos(&mut parser, b"\n", State::Trailers);
    assert_eos(&mut parser, b"\r", State::Trailers);
    assert_eos(&mut parser, b"\n", State::Start);
}

#[test]
fn hex_sizes() {
    let sizes: [(&[u8], usize); 5] = [
        (b"a", 10),
        (b"F", 15),
        (b"1f", 31),
        (b"aB", 171),
        (b"000003", 3)
    ];

    for &(size, length) in sizes.iter() {
        let (mut parser, log) = chunked_setup!();

        let mut stream = size.to_vec();

        stream.extend_from_slice(b"\r\n");
        stream.extend_from_slice(&vec![b'x'; length]);
        stream.extend_from_slice(b"\r\n0\r\n\r\n");

        assert_eos(&mut parser, &stream, State::Start);
        assert_eq!(collect(&log.borrow(), Event::Body).len(), length);
    }
}

#[test]
fn size_limit() {
    let (mut parser, _) = chunked_setup!();

    assert_eos(&mut parser, b"FFFFFFFFFFFFFFFF\r\n", State::ChunkData);

    let (mut parser, _) = chunked_setup!();

    assert_error(&mut parser, b"10000000000000000", SyntaxError::ChunkSizeOverflow, 17);
}

#[test]
fn size_invalid() {
    let streams: [(&[u8], SyntaxError, usize); 4] = [
        (b"x\r\n", SyntaxError::ChunkSize(b'x'), 1),
        (b"4x\r\n", SyntaxError::ChunkSize(b'x'), 2),
        (b"\r\n", SyntaxError::ChunkSize(b'\r'), 1),
        (b"-1\r\n", SyntaxError::ChunkSize(b'-'), 1)
    ];

    for &(stream, error, length) in streams.iter() {
        let (mut parser, _) = chunked_setup!();

        assert_error(&mut parser, stream, error, length);
    }
}

#[test]
fn extensions() {
    let (mut parser, log) = chunked_setup!();

    assert_eos(
        &mut parser,
        b"4;name=value;quoted=\"a b\"\r\nWiki\r\n5 ; x\r\npedia\r\n0;last\r\n\r\n",
        State::Start
    );

    assert_eq!(collect(&log.borrow(), Event::Body), b"Wikipedia");

    let (mut parser, _) = chunked_setup!();

    assert_error(&mut parser, b"4;a\x01\r\n", SyntaxError::ChunkExtension(0x01), 4);

    let (mut parser, _) = chunked_setup!();

    assert_error(&mut parser, b"4;a\n", SyntaxError::ChunkExtension(b'\n'), 4);
}

#[test]
fn crlf() {
    let streams: [(&[u8], SyntaxError, usize); 3] = [
        (b"4\rX", SyntaxError::CrlfSequence(b'X'), 3),
        (b"4\r\nWikiX", SyntaxError::CrlfSequence(b'X'), 8),
        (b"4\r\nWiki\rX", SyntaxError::CrlfSequence(b'X'), 9)
    ];

    for &(stream, error, length) in streams.iter() {
        let (mut parser, _) = chunked_setup!();

        assert_error(&mut parser, stream, error, length);
    }

    let (mut parser, _) = chunked_setup!();

    assert_error(&mut parser, b"0\r\n\rX", SyntaxError::CrlfSequence(b'X'), 5);
}

#[test]
fn trailers() {
    let (mut parser, log) = chunked_setup!();

    assert_eos(
        &mut parser,
        b"3\r\nabc\r\n0\r\nExpires: never\r\nContent-Length: 5\r\n\r\n",
        State::Start
    );

    let log = log.borrow();

    assert_eq!(
        merge(&log[log.len() - 6..]),
        vec![
            (Event::Body, b"abc".to_vec()),
            (Event::HeaderField, b"Expires".to_vec()),
            (Event::HeaderValue, b"never".to_vec()),
            (Event::HeaderField, b"Content-Length".to_vec()),
            (Event::HeaderValue, b"5".to_vec()),
            (Event::MessageComplete, b"".to_vec())
        ]
    );
}

#[test]
fn trailer_fold() {
    let (mut parser, log) = chunked_setup!();

    assert_eos(&mut parser, b"0\r\nX: a\r\n b\r\n\r\n", State::Start);
    assert_eq!(collect(&log.borrow(), Event::HeaderValue), b"a b");

    let (mut parser, _) = chunked_setup!();

    assert_error(&mut parser, b"0\r\n b\r\n", SyntaxError::HeaderField(b' '), 4);
}

#[test]
fn request() {
    let (mut parser, log) = setup!(Request);

    assert_eos(
        &mut parser,
        b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n3\r\nabc\r\n0\r\n\r\n\
          GET / HTTP/1.1\r\n\r\n",
        State::Start
    );

    let log = log.borrow();

    assert_eq!(collect(&log, Event::Body), b"abc");
    assert_eq!(
        log.iter().filter(|&&(event, _)| event == Event::MessageComplete).count(),
        2
    );
}

#[test]
fn split_invariant() {
    let mut stream = HEAD.to_vec();

    stream.extend_from_slice(b"a;ext=1\r\n0123456789\r\n1\r\nX\r\n0\r\nTrailer: yes\r\n\r\n");

    assert_split_invariant(ParserType::Response, &stream);
}
