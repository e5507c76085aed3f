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

//! Byte verification functions and macros.

/// Indicates that a byte is a digit.
macro_rules! is_digit {
    ($byte:expr) => (
        $byte > 0x2F && $byte < 0x3A
    );
}

/// Indicates that a byte is a hex digit.
macro_rules! is_hex {
    ($byte:expr) => (
        ($byte > 0x2F && $byte < 0x3A)
     || ($byte > 0x40 && $byte < 0x47)
     || ($byte > 0x60 && $byte < 0x67)
    );
}

/// Indicates that a byte is a space or horizontal tab.
macro_rules! is_linear_space {
    ($byte:expr) => (
        $byte == b' ' || $byte == b'\t'
    );
}

/// Indicates that a byte is an upper-cased alphabetical character.
macro_rules! is_upper_alpha {
    ($byte:expr) => (
        $byte > 0x40 && $byte < 0x5B
    );
}

/// Indicates that a byte is a visible 7-bit character. Visible bytes are 0x21 thru 0x7E.
macro_rules! is_visible_7bit {
    ($byte:expr) => (
        $byte > 0x20 && $byte < 0x7F
    );
}

/// Convert a hex digit to its numeric value.
///
/// Returns `None` when `byte` is not `0-9`, `A-F`, or `a-f`.
#[inline]
pub fn hex_value(byte: u8) -> Option<u8> {
    if !is_hex!(byte) {
        None
    } else if is_digit!(byte) {
        Some(byte - b'0')
    } else {
        // fold to lower-case
        Some((byte | 0x20) - 0x57)
    }
}

/// Indicates that a byte is allowed within a header value.
///
/// This is any visible 7-bit character, space, horizontal tab, and `obs-text` (`0x80` thru
/// `0xFF`).
#[inline]
pub fn is_field_value(byte: u8) -> bool {
    is_visible_7bit!(byte) || is_linear_space!(byte) || byte > 0x7F
}

/// Indicates that a byte is allowed within a request target.
#[inline]
pub fn is_target(byte: u8) -> bool {
    is_visible_7bit!(byte)
}

/// Indicates that a byte is a HTTP token.
#[inline]
pub fn is_token(byte: u8) -> bool {
    [

    // NUL SOH    STX    ETX    EOT    ENQ    ACK    BEL    BS     TAB
    false, false, false, false, false, false, false, false, false, false,

    // LF  VT     FF     CR     SO     SI     DLE    DC1    DC2    DC3
    false, false, false, false, false, false, false, false, false, false,

    // DC4 NAK    SYN    ETB    CAN    EM     SUB    ESC    FS     GS
    false, false, false, false, false, false, false, false, false, false,

    // RS  US
    false, false,

    // space
    false,

    // !   "      #      $      %      &      '      (      )      *
    true,  false, true,  true,  true,  true,  true,  false, false, true,

    // +   ,      -      .      /
    true,  false, true,  true,  false,

    // 0   1      2      3      4      5      6      7      8      9
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // :   ;      <      =      >      ?      @
    false, false, false, false, false, false, false,

    // A   B      C      D      E      F      G      H      I      J
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // K   L      M      N      O      P      Q      R      S      T
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // U   V      W      X      Y      Z
    true,  true,  true,  true,  true,  true,

    // [   \      ]      ^      _      `
    false, false, false, true,  true,  true,

    // a   b      c      d      e      f      g      h      i      j
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // k   l      m      n      o      p      q      r      s      t
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // u   v      w      x      y      z
    true,  true,  true,  true,  true,  true,

    // {   |      }      ~
    false, true,  false, true,

    // DEL
    false,

    // 128 - 255
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false

    ][byte as usize]
}
