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

use crate::byte::{ hex_value, is_field_value, is_target, is_token };

pub fn alpha_upper_vec() -> Vec<u8> {
    (0x41..0x5B).collect::<Vec<u8>>()
}

pub fn control_vec() -> Vec<u8> {
    (0..128).filter(|&x| x < 0x20 || x == 0x7F).collect::<Vec<u8>>()
}

pub fn digit_vec() -> Vec<u8> {
    (0x30..0x3A).collect::<Vec<u8>>()
}

pub fn non_digit_vec() -> Vec<u8> {
    (0..=255).filter(|&x| !is_digit!(x)).collect::<Vec<u8>>()
}

pub fn non_token_vec() -> Vec<u8> {
    (0..=255).filter(|&x| !is_token(x)).collect::<Vec<u8>>()
}

pub fn token_vec() -> Vec<u8> {
    (0..128).filter(|&x| is_token(x)).collect::<Vec<u8>>()
}

pub fn visible_7bit_vec() -> Vec<u8> {
    (0..128).filter(|&x| is_visible_7bit!(x)).collect::<Vec<u8>>()
}

#[test]
fn hex_values() {
    for (n, byte) in b"0123456789abcdef".iter().enumerate() {
        assert_eq!(hex_value(*byte), Some(n as u8));
    }

    for (n, byte) in b"ABCDEF".iter().enumerate() {
        assert_eq!(hex_value(*byte), Some(n as u8 + 10));
    }

    for byte in b"gG/:@`\r ".iter() {
        assert_eq!(hex_value(*byte), None);
    }
}

#[test]
fn tokens() {
    let token = token_vec();

    assert_eq!(token.len(), 77);

    for byte in b"()<>@,;:\\\"/[]?={} \t".iter() {
        assert!(!token.contains(byte));
    }

    for byte in control_vec() {
        assert!(!is_token(byte));
    }

    assert!(non_token_vec().iter().all(|&x| !token.contains(&x)));
    assert!(alpha_upper_vec().iter().all(|&x| is_token(x)));
    assert!(digit_vec().iter().all(|&x| is_token(x)));
}

#[test]
fn field_values() {
    for byte in visible_7bit_vec() {
        assert!(is_field_value(byte));
    }

    assert!(is_field_value(b' '));
    assert!(is_field_value(b'\t'));
    assert!(is_field_value(0x80));
    assert!(is_field_value(0xFF));

    for byte in control_vec().into_iter().filter(|&x| x != b'\t') {
        assert!(!is_field_value(byte));
    }
}

#[test]
fn targets() {
    for byte in visible_7bit_vec() {
        assert!(is_target(byte));
    }

    assert!(!is_target(b' '));
    assert!(!is_target(0x7F));
    assert!(!is_target(0x80));
}

#[test]
fn digits() {
    assert_eq!(digit_vec().len(), 10);
    assert_eq!(non_digit_vec().len(), 246);
}
