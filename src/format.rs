// Copyright (c) 2025 Sean McNamara <smcnam@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Message body rendering: positional `{}` substitution and `null` for
//! absent values.

use std::fmt;

use crate::constants::{NULL, PLACEHOLDER};

/// Replace each `{}` in `template` with the next replacement, in order.
///
/// Placeholders left over once the replacements run out are kept verbatim.
/// Replacements beyond the number of placeholders are ignored. There is no
/// escape syntax, so a literal `{}` in the template is always treated as a
/// placeholder when a replacement is still available.
///
/// ```
/// use simplelog2file::format;
///
/// assert_eq!(format("a={} b={}", &["1", "2"]), "a=1 b=2");
/// assert_eq!(format("a={} b={}", &["1"]), "a=1 b={}");
/// ```
pub fn format<S: AsRef<str>>(template: &str, replacements: &[S]) -> String {
    if template.is_empty() || replacements.is_empty() {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len());
    let mut remaining = replacements.iter();
    let mut rest = template;

    while let Some(pos) = rest.find(PLACEHOLDER) {
        result.push_str(&rest[..pos]);
        match remaining.next() {
            Some(replacement) => result.push_str(replacement.as_ref()),
            None => result.push_str(PLACEHOLDER),
        }
        rest = &rest[pos + PLACEHOLDER.len()..];
    }
    result.push_str(rest);

    result
}

/// Displays the wrapped value, or `null` when there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrNull<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for OrNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NULL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_all_placeholders_filled() {
        assert_eq!(format("a={} b={}", &["1", "2"]), "a=1 b=2");
    }

    #[test]
    fn test_missing_replacements_keep_placeholder() {
        assert_eq!(format("a={} b={}", &["1"]), "a=1 b={}");
        assert_eq!(format("{}{}{}", &["x"]), "x{}{}");
    }

    #[test]
    fn test_extra_replacements_ignored() {
        assert_eq!(format("no placeholders", &["1", "2"]), "no placeholders");
        assert_eq!(format("one {}", &["1", "2"]), "one 1");
    }

    #[test]
    fn test_empty_inputs_return_template() {
        assert_eq!(format("", &["1"]), "");
        assert_eq!(format("a={}", &NONE), "a={}");
    }

    #[test]
    fn test_lone_braces_untouched() {
        assert_eq!(format("{ } {x} }{ {", &["1"]), "{ } {x} }{ {");
        assert_eq!(format("{{}}", &["1"]), "{1}");
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        assert_eq!(format("{} and {}", &["{}", "b"]), "{} and b");
    }

    #[test]
    fn test_multibyte_template() {
        assert_eq!(format("größe={}€", &["3"]), "größe=3€");
    }

    #[test]
    fn test_accepts_owned_strings() {
        let args = vec!["peter".to_string()];
        assert_eq!(format("Set name to '{}'", &args), "Set name to 'peter'");
    }

    #[test]
    fn test_or_null() {
        assert_eq!(OrNull(Some(42)).to_string(), "42");
        assert_eq!(OrNull::<i32>(None).to_string(), "null");
    }
}
