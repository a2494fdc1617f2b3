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

//! Identification of the code that issued a log call.
//!
//! The caller is always passed explicitly. The [`caller!`](crate::caller!)
//! macro builds one from the enclosing function at the call site, so no
//! stack walking is needed at runtime.

use std::fmt;

use crate::constants::{METHOD_BRACKETS, METHOD_DELIMITER};

/// Name of the local marker item planted by `caller!()`.
#[doc(hidden)]
pub const MARKER_FN: &str = "__log_call_site";

const CLOSURE_SEGMENT: &str = "{{closure}}";

/// Rendered as `Class.method()` in the log line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Caller {
    class: String,
    method: String,
}

impl Caller {
    pub fn new(class: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            method: method.into(),
        }
    }

    /// Caller that renders as `.()`.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn is_unknown(&self) -> bool {
        self.class.is_empty() && self.method.is_empty()
    }

    /// Derive a caller from a Rust item path such as
    /// `my_app::orders::OrderService::submit`.
    ///
    /// The last segment is the method and the one before it the class. For
    /// free functions that is the module name. Trailing closure segments and
    /// the `caller!()` marker are skipped, generic arguments are dropped and
    /// `<Type as Trait>` resolves to `Type`. A path that yields no method
    /// degrades to [`Caller::unknown`] with a warning on stderr.
    pub fn from_function_path(path: &str) -> Self {
        let mut segments = split_path(path);
        while let Some(last) = segments.last() {
            if *last == MARKER_FN || *last == CLOSURE_SEGMENT || last.is_empty() {
                segments.pop();
            } else {
                break;
            }
        }

        let Some(method) = segments.pop() else {
            eprintln!("Warning: Could not resolve log caller from '{}'", path);
            return Self::unknown();
        };
        let class = segments.pop().map(simple_name).unwrap_or_default();

        Self::new(class, simple_name(method))
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.class, METHOD_DELIMITER, self.method, METHOD_BRACKETS
        )
    }
}

impl std::str::FromStr for Caller {
    type Err = String;

    /// Parses `Class.method` (an optional trailing `()` is accepted).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix(METHOD_BRACKETS).unwrap_or(s);
        match s.rsplit_once(METHOD_DELIMITER) {
            Some((class, method)) if !method.is_empty() => Ok(Self::new(class, method)),
            Some(_) => Err(format!("Invalid caller (missing method): {}", s)),
            None if !s.is_empty() => Ok(Self::new("", s)),
            None => Err("Invalid caller: empty".to_string()),
        }
    }
}

/// Split on `::` outside of angle brackets.
fn split_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let bytes = path.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);

    segments
}

/// `<a::Foo as b::Bar>` -> `Foo`, `a::Foo<T>` -> `Foo`
fn simple_name(segment: &str) -> String {
    let mut name = segment.trim();
    if let Some(inner) = name.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
        name = inner.split(" as ").next().unwrap_or(inner);
    }
    let name = name.split('<').next().unwrap_or(name);
    name.rsplit("::").next().unwrap_or(name).to_string()
}

/// Capture the enclosing function as a [`Caller`].
///
/// ```
/// use simplelog2file::{caller, Caller};
///
/// struct Checkout;
///
/// impl Checkout {
///     fn pay(&self) -> Caller {
///         caller!()
///     }
/// }
///
/// assert_eq!(Checkout.pay().to_string(), "Checkout.pay()");
/// ```
#[macro_export]
macro_rules! caller {
    () => {{
        fn __log_call_site() {}
        $crate::Caller::from_function_path(::std::any::type_name_of_val(&__log_call_site))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OrderService;

    impl OrderService {
        fn submit(&self) -> Caller {
            crate::caller!()
        }

        fn submit_later(&self) -> Caller {
            let f = || crate::caller!();
            f()
        }
    }

    fn free_function() -> Caller {
        crate::caller!()
    }

    #[test]
    fn test_render() {
        assert_eq!(Caller::new("Main", "main").to_string(), "Main.main()");
        assert_eq!(Caller::unknown().to_string(), ".()");
    }

    #[test]
    fn test_from_method_path() {
        let caller = Caller::from_function_path("app::orders::OrderService::submit");
        assert_eq!(caller, Caller::new("OrderService", "submit"));
        assert_eq!(caller.class(), "OrderService");
        assert_eq!(caller.method(), "submit");
    }

    #[test]
    fn test_from_free_function_path() {
        let caller = Caller::from_function_path("app::orders::submit::__log_call_site");
        assert_eq!(caller.to_string(), "orders.submit()");
    }

    #[test]
    fn test_generic_and_trait_impl_paths() {
        let caller = Caller::from_function_path("app::Repo<app::User>::load");
        assert_eq!(caller.to_string(), "Repo.load()");

        let caller = Caller::from_function_path("<app::Repo as app::Store>::save::{{closure}}");
        assert_eq!(caller.to_string(), "Repo.save()");
    }

    #[test]
    fn test_single_segment_has_empty_class() {
        let caller = Caller::from_function_path("main");
        assert_eq!(caller.class(), "");
        assert_eq!(caller.method(), "main");
        assert_eq!(caller.to_string(), ".main()");
    }

    #[test]
    fn test_unresolvable_path() {
        assert!(Caller::from_function_path("").is_unknown());
        assert!(Caller::from_function_path("__log_call_site").is_unknown());
    }

    #[test]
    fn test_macro_in_method() {
        assert_eq!(OrderService.submit().to_string(), "OrderService.submit()");
    }

    #[test]
    fn test_macro_skips_closure() {
        assert_eq!(OrderService.submit_later().to_string(), "OrderService.submit_later()");
    }

    #[test]
    fn test_macro_in_free_function() {
        assert_eq!(free_function().to_string(), "tests.free_function()");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Main.main()".parse::<Caller>(), Ok(Caller::new("Main", "main")));
        assert_eq!("a.b.Run.go".parse::<Caller>(), Ok(Caller::new("a.b.Run", "go")));
        assert_eq!("go".parse::<Caller>(), Ok(Caller::new("", "go")));
        assert!("Main.".parse::<Caller>().is_err());
        assert!("".parse::<Caller>().is_err());
    }
}
