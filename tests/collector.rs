use http_feed::handler::{ Headers, MessageCollector };
use http_feed::http1::{ Config, Method, Parser, ParserType, Success };

use std::fs::File;
use std::io::prelude::*;

fn pipelined() -> Vec<u8> {
    let mut d = Vec::new();

    File::open("tests/data/pipelined.dat").unwrap().read_to_end(&mut d).unwrap();

    d
}

#[test]
fn pipelined_requests() {
    let c     = MessageCollector::new();
    let mut p = Parser::new(ParserType::Request);

    c.bind(&mut p);

    let d = pipelined();

    assert_eq!(p.execute(&d), Ok(Success::Eos(d.len())));

    let m = c.take();

    assert_eq!(m.len(), 3);

    assert_eq!(m[0].method, Some(Method::Get));
    assert_eq!(m[0].url, "/search?q=rust#results");
    assert_eq!(m[0].path, "/search");
    assert_eq!(m[0].query_string, "q=rust");
    assert_eq!(m[0].fragment, "results");
    assert!(m[0].keep_alive);
    assert!(m[0].body.is_empty());

    assert_eq!(m[1].method, Some(Method::Post));
    assert_eq!(m[1].content_length, Some(26));
    assert_eq!(m[1].body, b"name=http-feed&version=0.1");
    assert_eq!(
        m[1].headers.get("CONTENT-TYPE"),
        Some("application/x-www-form-urlencoded")
    );

    assert_eq!(m[2].method, Some(Method::Put));
    assert!(m[2].chunked);
    assert!(!m[2].keep_alive);
    assert_eq!(m[2].content_length, None);
    assert_eq!(m[2].body, b"hello");
    assert!(m[2].trailers.is_empty());
    assert_eq!(m[2].start_line(), "PUT /upload HTTP/1.1\r\n");
}

#[test]
fn pipelined_reader() {
    for size in 1..24 {
        let c      = MessageCollector::new();
        let config = Config::new().with_buffer_size(size).unwrap();
        let mut p  = Parser::with_config(ParserType::Request, config, ());

        c.bind(&mut p);

        assert_eq!(p.parse_reader(&pipelined()[..]).unwrap(), Success::Eos(0));
        assert_eq!(c.len(), 3);

        let whole = MessageCollector::new();
        let mut p = Parser::new(ParserType::Request);

        whole.bind(&mut p);
        p.execute(&pipelined()).unwrap();

        assert_eq!(c.messages(), whole.messages());
    }
}

#[test]
fn headers_display() {
    let c     = MessageCollector::new();
    let mut p = Parser::new(ParserType::Response);

    c.bind(&mut p);

    p.execute(b"HTTP/1.1 200 OK\r\n\
                Set-Cookie: a=1\r\n\
                set-cookie: b=2\r\n\
                Content-Length: 0\r\n\
                \r\n").unwrap();

    let m = c.take();
    let h: &Headers = &m[0].headers;

    assert_eq!(h.get_all("set-cookie"), ["a=1", "b=2"]);
    assert_eq!(h.get_joined("Set-Cookie"), Some("a=1,b=2".to_string()));
    assert_eq!(h.to_string(), "set-cookie: a=1\r\nset-cookie: b=2\r\nContent-Length: 0\r\n");
    assert_eq!(m[0].start_line(), "HTTP/1.1 200 OK\r\n");
}
