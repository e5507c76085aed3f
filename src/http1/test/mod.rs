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

use std::cell::RefCell;
use std::rc::Rc;

/// Create a parser that records every event except `Error`.
macro_rules! setup {
    ($kind:ident) => (
        recorder(ParserType::$kind)
    );
}

mod chunked;
mod lifecycle;

/// Recorded events along with their data.
pub type Log = Rc<RefCell<Vec<(Event, Vec<u8>)>>>;

/// Create a parser that records every event except `Error`.
pub fn recorder<'a>(kind: ParserType) -> (Parser<'a>, Log) {
    recorder_with_config(kind, Config::default())
}

/// Create a parser with `config` that records every event except `Error`.
pub fn recorder_with_config<'a>(kind: ParserType, config: Config) -> (Parser<'a>, Log) {
    let log: Log   = Rc::new(RefCell::new(Vec::new()));
    let mut parser = Parser::with_config(kind, config, ());

    for &event in Event::ALL.iter().filter(|&&event| event != Event::Error) {
        let log = log.clone();

        let handler = if event.is_data() {
            Handler::data(move |_: &mut Session<()>, data: &[u8]| {
                log.borrow_mut().push((event, data.to_vec()));
            })
        } else {
            Handler::notify(move |_: &mut Session<()>| {
                log.borrow_mut().push((event, Vec::new()));
            })
        };

        parser.set_handler(event, Some(handler)).unwrap();
    }

    (parser, log)
}

/// Concatenate the data of consecutive data events of the same kind.
pub fn merge(log: &[(Event, Vec<u8>)]) -> Vec<(Event, Vec<u8>)> {
    let mut merged: Vec<(Event, Vec<u8>)> = Vec::new();

    for &(event, ref data) in log.iter() {
        match merged.last_mut() {
            Some(last) if last.0 == event && event.is_data() => {
                last.1.extend_from_slice(data);
            },
            _ => {
                merged.push((event, data.clone()));
            }
        }
    }

    merged
}

/// Concatenate the data of every `event`.
pub fn collect(log: &[(Event, Vec<u8>)], event: Event) -> Vec<u8> {
    log.iter()
       .filter(|&&(event_, _)| event_ == event)
       .fold(Vec::new(), |mut data, &(_, ref bytes)| {
           data.extend_from_slice(bytes);
           data
       })
}

/// Retrieve the recorded events, merged, without the request target events.
///
/// Target component events precede the URL event of the same chunk, so only their
/// concatenation is independent of chunk boundaries.
pub fn outline(log: &[(Event, Vec<u8>)]) -> Vec<(Event, Vec<u8>)> {
    let filtered = log.iter()
                      .filter(|&&(event, _)| match event {
                          Event::Url | Event::Path | Event::Query | Event::Fragment => false,
                          _ => true
                      })
                      .cloned()
                      .collect::<Vec<(Event, Vec<u8>)>>();

    merge(&filtered)
}

/// Parse `stream` whole, then split at every index, and finally a byte at a time. Every run
/// must produce the same events.
pub fn assert_split_invariant(kind: ParserType, stream: &[u8]) {
    let (mut parser, log) = recorder(kind);

    assert_eq!(parser.execute(stream), Ok(Success::Eos(stream.len())));

    let whole = log.borrow().clone();

    let compare = |split: &[(Event, Vec<u8>)], description: &str| {
        assert_eq!(outline(split), outline(&whole), "{}", description);

        for &event in [Event::Url, Event::Path, Event::Query, Event::Fragment].iter() {
            assert_eq!(collect(split, event), collect(&whole, event), "{} {}", description, event);
        }
    };

    for index in 0..stream.len() + 1 {
        let (mut parser, log) = recorder(kind);

        assert_eq!(parser.execute(&stream[..index]), Ok(Success::Eos(index)));
        assert_eq!(
            parser.execute(&stream[index..]),
            Ok(Success::Eos(stream.len() - index))
        );

        compare(&log.borrow()[..], &format!("split at {}", index)[..]);
    }

    let (mut parser, log) = recorder(kind);

    for byte in stream.iter() {
        assert_eq!(parser.execute(&[*byte]), Ok(Success::Eos(1)));
    }

    compare(&log.borrow()[..], "byte at a time");
}

/// Parse `stream`, expecting every byte consumed and the parser left in `state`.
pub fn assert_eos<D>(parser: &mut Parser<'_, D>, stream: &[u8], state: State) {
    match parser.execute(stream) {
        Ok(Success::Eos(length)) => {
            assert_eq!(length, stream.len());
            assert_eq!(state, parser.state());
        },
        result => panic!("assert_eos() Eos match failed: {:?}", result)
    }
}

/// Parse `stream`, expecting a handler to abort after `length` bytes.
pub fn assert_callback<D>(parser: &mut Parser<'_, D>, stream: &[u8], length: usize) {
    match parser.execute(stream) {
        Ok(Success::Callback(length_)) => {
            assert_eq!(length, length_);
            assert_eq!(State::Errored, parser.state());
        },
        result => panic!("assert_callback() Callback match failed: {:?}", result)
    }
}

/// Parse `stream`, expecting `error` after `length` bytes.
pub fn assert_error<D>(parser: &mut Parser<'_, D>, stream: &[u8], error: SyntaxError,
                       length: usize) {
    match parser.execute(stream) {
        Err(error_) => {
            assert_eq!(error, error_.error);
            assert_eq!(length, error_.consumed);
            assert_eq!(stream, &error_.chunk[..]);
            assert_eq!(State::Errored, parser.state());
            assert_eq!(ErrorState::Syntax(error), parser.error_state());
        },
        result => panic!("assert_error() Err match failed: {:?}", result)
    }
}
