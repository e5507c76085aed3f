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

//! Parser configuration.

/// Default read buffer size, in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Default limit on the start-line and header section, in bytes.
pub const DEFAULT_MAX_HEAD_LENGTH: usize = 80 * 1024;

/// Configuration errors.
#[derive(Clone,Copy,Debug,PartialEq,thiserror::Error)]
pub enum ConfigError {
    /// The read buffer size is zero.
    #[error("buffer size must be greater than zero")]
    BufferSize
}

/// Parser configuration.
///
/// ```
/// use http_feed::http1::Config;
///
/// let config = Config::new().with_buffer_size(4096)
///                           .unwrap()
///                           .with_max_head_length(None);
///
/// assert_eq!(config.buffer_size(), 4096);
/// assert_eq!(config.max_head_length(), None);
/// ```
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Config {
    /// Read buffer size.
    buffer_size: usize,

    /// Head length limit.
    max_head_length: Option<usize>
}

impl Config {
    /// Create a new `Config` with default values.
    pub fn new() -> Config {
        Config{
            buffer_size:     DEFAULT_BUFFER_SIZE,
            max_head_length: Some(DEFAULT_MAX_HEAD_LENGTH)
        }
    }

    /// Retrieve the size of each chunk read by
    /// [`Parser::parse_reader()`](struct.Parser.html#method.parse_reader).
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Retrieve the limit on the start-line, header section, and trailer section of a message,
    /// combined.
    pub fn max_head_length(&self) -> Option<usize> {
        self.max_head_length
    }

    /// Set the read buffer size.
    ///
    /// # Errors
    ///
    /// `ConfigError::BufferSize` when `size` is zero.
    pub fn with_buffer_size(mut self, size: usize) -> Result<Config, ConfigError> {
        if size == 0 {
            return Err(ConfigError::BufferSize);
        }

        self.buffer_size = size;

        Ok(self)
    }

    /// Set the head length limit. `None` disables the limit.
    pub fn with_max_head_length(mut self, length: Option<usize>) -> Config {
        self.max_head_length = length;
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}
