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

//! Finite state machine macros and enums.

use std::fmt;

/// Execute data callback `$event` with `$data`. If the handler continues, execute `$exec`.
/// Otherwise exit with `Success::Callback`.
///
/// Empty data is never delivered, and `$exec` is executed directly.
macro_rules! callback {
    ($parser:expr, $context:expr, $event:ident, $data:expr, $exec:expr) => ({
        let data: &[u8] = $data;

        if data.is_empty() || $parser.callbacks.data(Event::$event, &mut $parser.session, data) {
            $exec
        } else {
            exit_callback!($parser, $context, $event);
        }
    });
}

/// Execute data callback `$event` with the collected bytes, ignoring the last collected byte.
/// If the handler continues, transition to `$state`. Otherwise exit with `Success::Callback`.
macro_rules! callback_ignore_transition {
    ($parser:expr, $context:expr, $event:ident, $state:ident) => ({
        set_state!($parser, $state);

        callback!($parser, $context, $event, bs_slice_ignore!($context), {
            transition!($parser, $context);
        });
    });
}

/// Execute data callback `$event` with the collected bytes. If the handler continues, exit
/// with `Success::Eos`. Otherwise exit with `Success::Callback`.
macro_rules! callback_eos_expr {
    ($parser:expr, $context:expr, $event:ident) => ({
        callback!($parser, $context, $event, bs_slice!($context), {
            exit_eos!($parser, $context);
        });
    });
}

/// Execute notification callback `$event`. If the handler continues, transition to `$state`.
/// Otherwise exit with `Success::Callback`.
///
/// This macro exists to enforce the design decision that after each callback, state must either
/// change, or the parser must exit with `Success::Callback`.
macro_rules! notify_transition {
    ($parser:expr, $context:expr, $event:ident, $state:ident) => ({
        set_state!($parser, $state);

        if $parser.callbacks.notify(Event::$event, &mut $parser.session) {
            transition!($parser, $context);
        }

        exit_callback!($parser, $context, $event);
    });
}

/// Exit parser with `Success::Callback`, recording which handler requested the abort.
macro_rules! exit_callback {
    ($parser:expr, $context:expr, $event:ident) => ({
        $parser.session.error = ErrorState::CallbackAbort(Event::$event);

        return Ok(ParserValue::Exit(Success::Callback($context.stream_index)));
    });
}

/// Exit parser with `Success::Eos`.
macro_rules! exit_eos {
    ($parser:expr, $context:expr) => ({
        return Ok(ParserValue::Exit(Success::Eos($context.stream_index)));
    });
}

/// If the stream is EOS, exit with `Success::Eos`. Otherwise do nothing.
macro_rules! exit_if_eos {
    ($parser:expr, $context:expr) => ({
        if bs_available!($context) == 0 {
            exit_eos!($parser, $context);
        }
    });
}

/// Set state.
macro_rules! set_state {
    ($parser:expr, $state:ident) => ({
        $parser.state = ParserState::$state;
    });
}

/// Transition to `$state`, marking the current stream index as the start of the next token.
macro_rules! transition {
    ($parser:expr, $context:expr, $state:ident) => ({
        set_state!($parser, $state);

        $context.mark_index = $context.stream_index;

        return Ok(ParserValue::Continue);
    });

    ($parser:expr, $context:expr) => ({
        $context.mark_index = $context.stream_index;

        return Ok(ParserValue::Continue);
    });
}

// -------------------------------------------------------------------------------------------------

/// Parsing function return values.
pub enum ParserValue {
    /// Continue the parser loop.
    Continue,

    /// Exit the parser loop.
    Exit(Success)
}

// -------------------------------------------------------------------------------------------------

/// Parsing function success return values.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum Success {
    /// A handler requested an abort and the parser function exited prematurely. The parser is
    /// now in the errored state until it is reset.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of `stream` bytes that were processed before the abort. Bytes after
    ///          this point were not consumed.
    Callback(usize),

    /// All `stream` data was processed. Additional data may be supplied with another call.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of `stream` bytes that were processed. This value will always match
    ///          `stream.len()`.
    Eos(usize),

    /// A syntax error was found and delivered to the registered error handler. The parser is
    /// now in the errored state until it is reset.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of `stream` bytes that were processed, including the offending byte.
    Handled(usize)
}

impl Success {
    /// Retrieve the amount of bytes that were processed.
    pub fn consumed(&self) -> usize {
        match *self {
            Success::Callback(length)
          | Success::Eos(length)
          | Success::Handled(length) => length
        }
    }
}

impl fmt::Display for Success {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.consumed())
    }
}
