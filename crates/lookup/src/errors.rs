// Copyright 2026 Thunderbolt Labs
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

use thiserror::Error;

/// Errors that carry a stable, greppable code in log output.
pub trait CodedError: std::error::Error {
    fn code(&self) -> &str;
}

/// Derives a `Debug` impl that prefixes the error's code, so `{:?}` renders in
/// logs match the code index.
#[macro_export]
macro_rules! impl_coded_debug {
    ($name:ident) => {
        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let code = $crate::errors::CodedError::code(self);
                write!(f, "{code} {self}")
            }
        }
    };
}

/// Terminal failures of one search run. Soft conditions (a refresh already in
/// progress, a failed rewards sub-fetch) are reported through the status sink
/// or inline in the report instead.
#[derive(Error)]
pub enum SearchError {
    #[error("\"{0}\" is not a valid BTC address format")]
    InvalidAddress(String),
    #[error("failed to fetch ranking data")]
    RefreshFailed,
}

impl_coded_debug!(SearchError);

impl CodedError for SearchError {
    fn code(&self) -> &str {
        match self {
            SearchError::InvalidAddress(_) => "[L-SRC-1001]",
            SearchError::RefreshFailed => "[L-SRC-1002]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_renders_code_and_message() {
        let err = SearchError::RefreshFailed;
        let rendered = format!("{err:?}");
        assert!(rendered.starts_with("[L-SRC-1002]"));
        assert!(rendered.contains("failed to fetch ranking data"));
    }
}
