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

//! Incremental word recognition.

/// Recognizes one word out of a fixed table, one byte at a time.
///
/// Each call to [`feed()`](#method.feed) narrows the set of candidate words. No bytes are
/// retained, so a word may be split across any number of streams. Comparison is ASCII
/// case-insensitive.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Matcher {
    /// Bit `n` is set while word `n` of the table still matches.
    candidates: u32,

    /// Amount of bytes fed.
    index: usize
}

impl Matcher {
    /// Create a new `Matcher` for a table of `count` words.
    ///
    /// A table holds at most 32 words.
    pub fn new(count: usize) -> Matcher {
        Matcher{
            candidates: if count >= 32 { u32::MAX } else { (1 << count) - 1 },
            index:      0
        }
    }

    /// Feed the next byte of the word.
    ///
    /// Returns `true` while at least one word still matches.
    pub fn feed(&mut self, table: &[&[u8]], byte: u8) -> bool {
        for (n, word) in table.iter().enumerate() {
            if self.candidates & (1 << n) == 0 {
                continue;
            }

            if self.index >= word.len() || !word[self.index].eq_ignore_ascii_case(&byte) {
                self.candidates &= !(1 << n);
            }
        }

        self.index += 1;

        self.candidates != 0
    }

    /// Indicates that no bytes have been fed.
    pub fn is_empty(&self) -> bool {
        self.index == 0
    }

    /// Retrieve the table index of the fully matched word, if any.
    pub fn matched(&self, table: &[&[u8]]) -> Option<usize> {
        table.iter()
             .enumerate()
             .find(|&(n, word)| self.candidates & (1 << n) != 0 && word.len() == self.index)
             .map(|(n, _)| n)
    }

    /// Discard all candidates. No word can match until the `Matcher` is recreated.
    pub fn reject(&mut self) {
        self.candidates = 0;
    }
}
