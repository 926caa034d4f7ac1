// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Canonical request of SigV4.
//!
//! ```text
//! METHOD
//! URI
//! QUERY
//! HEADERS (each terminated by a newline)
//!
//! SIGNED_HEADERS
//! PAYLOAD_HASH
//! ```

use crate::constants::{AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET};
use http::Method;
use percent_encoding::utf8_percent_encode;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use upsign_core::hash::hex_sha256;

/// The normalized request the object store rebuilds and verifies.
///
/// Two equal `CanonicalRequest`s always render to the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: Method,
    uri: String,
    query: String,
    // BTreeMap keeps header names in ascii order.
    headers: BTreeMap<String, String>,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Start a canonical request for `path`.
    ///
    /// `path` is the raw object path. It is uri-encoded here exactly once,
    /// so callers must not pass an already encoded path.
    pub fn new(method: Method, path: &str, payload_hash: &str) -> Self {
        Self {
            method,
            uri: encode_path(path),
            query: String::new(),
            headers: BTreeMap::new(),
            payload_hash: payload_hash.to_string(),
        }
    }

    /// Set the query component from raw parameters.
    pub fn with_query<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.query = canonical_query(params);
        self
    }

    /// Add a signed header.
    ///
    /// Names are lower-cased, values trimmed with inner whitespace runs
    /// collapsed to one space.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.trim().to_ascii_lowercase(), normalize_header_value(value));
        self
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Encoded uri path, always starting with `/`.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Canonical query string, sorted and encoded.
    ///
    /// This is also the exact query a presigned url carries before its
    /// signature.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Signed headers as (name, value) pairs in signing order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `;` joined list of signed header names.
    pub fn signed_headers(&self) -> String {
        self.headers
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Lower-case hex SHA256 of the rendered request.
    pub fn hex_digest(&self) -> String {
        hex_sha256(self.to_string().as_bytes())
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.uri)?;
        writeln!(f, "{}", self.query)?;
        for (name, value) in &self.headers {
            writeln!(f, "{name}:{value}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers())?;
        f.write_str(&self.payload_hash)
    }
}

/// Uri-encode a raw path, keeping `/` between segments.
pub fn encode_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("/{}", utf8_percent_encode(path, &AWS_URI_ENCODE_SET))
}

/// Encode every name and value, then sort by name and value.
pub fn canonical_query<K, V>(params: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut encoded = params
        .into_iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k.as_ref(), &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v.as_ref(), &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    encoded.sort();

    encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn normalize_header_value(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
