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

//! Case-insensitive, multi-valued header collection.

use std::fmt;

/// Header collection.
///
/// Names compare ASCII case-insensitively. A name seen more than once keeps every value in
/// arrival order, and takes the casing it was most recently seen with.
///
/// ```
/// use http_feed::handler::Headers;
///
/// let mut headers = Headers::new();
///
/// headers.append("Set-cookie", "a=1");
/// headers.append("Set-Cookie", "b=2");
///
/// assert_eq!(headers.get("set-cookie"), Some("a=1"));
/// assert_eq!(headers.get_all("SET-COOKIE"), &["a=1", "b=2"]);
/// assert_eq!(headers.names().collect::<Vec<_>>(), vec!["Set-Cookie"]);
/// ```
#[derive(Clone,Debug,Default,PartialEq)]
pub struct Headers {
    entries: Vec<Entry>
}

#[derive(Clone,Debug,PartialEq)]
struct Entry {
    name:   String,
    values: Vec<String>
}

impl Headers {
    /// Create a new `Headers`.
    pub fn new() -> Headers {
        Headers{ entries: Vec::new() }
    }

    /// Append `value` to header `name`.
    pub fn append<N, V>(&mut self, name: N, value: V)
    where N: Into<String>, V: Into<String> {
        let name  = name.into();
        let value = value.into();

        match self.position(&name) {
            Some(index) => {
                let entry = &mut self.entries[index];

                entry.name = name;
                entry.values.push(value);
            },
            None => {
                self.entries.push(Entry{
                    name:   name,
                    values: vec![value]
                });
            }
        }
    }

    /// Indicates that header `name` exists.
    pub fn contains<T: AsRef<str>>(&self, name: T) -> bool {
        self.position(name.as_ref()).is_some()
    }

    /// Retrieve the first value of header `name`.
    pub fn get<T: AsRef<str>>(&self, name: T) -> Option<&str> {
        self.position(name.as_ref())
            .map(|index| self.entries[index].values[0].as_str())
    }

    /// Retrieve every value of header `name`, in arrival order.
    pub fn get_all<T: AsRef<str>>(&self, name: T) -> &[String] {
        match self.position(name.as_ref()) {
            Some(index) => self.entries[index].values.as_slice(),
            None        => &[]
        }
    }

    /// Retrieve the values of header `name` joined with commas.
    pub fn get_joined<T: AsRef<str>>(&self, name: T) -> Option<String> {
        self.position(name.as_ref())
            .map(|index| self.entries[index].values.join(","))
    }

    /// Indicates that the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over each name and its values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.values.as_slice()))
    }

    /// Retrieve the amount of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over the names, in the casing each was most recently seen with.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Remove header `name`, returning its values.
    pub fn remove<T: AsRef<str>>(&mut self, name: T) -> Option<Vec<String>> {
        self.position(name.as_ref())
            .map(|index| self.entries.remove(index).values)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.name.eq_ignore_ascii_case(name))
    }
}

/// Formats one `name: value` line per value, each ending with CRLF.
impl fmt::Display for Headers {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.entries {
            for value in &entry.values {
                write!(formatter, "{}: {}\r\n", entry.name, value)?;
            }
        }

        Ok(())
    }
}
