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

use http::uri::{Authority, Scheme};
use http::Uri;
use upsign_core::{Error, Result};

/// Where the bucket is addressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Endpoint {
    /// `https://{bucket}.s3.{region}.amazonaws.com/{key}`
    #[default]
    VirtualHosted,
    /// `{scheme}://{authority}/{bucket}/{key}`, used by S3 compatible stores.
    PathStyle {
        /// Scheme of the endpoint.
        scheme: Scheme,
        /// Host and optional port of the endpoint.
        authority: Authority,
    },
}

impl Endpoint {
    /// Parse a custom endpoint like `http://127.0.0.1:9000`.
    ///
    /// The endpoint must carry a scheme and a host, and nothing else.
    pub fn parse(endpoint: &str) -> Result<Self> {
        let uri: Uri = endpoint.trim().trim_end_matches('/').parse()?;
        let parts = uri.into_parts();

        let scheme = parts
            .scheme
            .ok_or_else(|| Error::config_invalid(format!("endpoint {endpoint} has no scheme")))?;
        let authority = parts
            .authority
            .ok_or_else(|| Error::config_invalid(format!("endpoint {endpoint} has no host")))?;
        if let Some(paq) = parts.path_and_query {
            if !matches!(paq.as_str(), "" | "/") {
                return Err(Error::config_invalid(format!(
                    "endpoint {endpoint} must not carry a path or query"
                )));
            }
        }

        Ok(Endpoint::PathStyle { scheme, authority })
    }

    /// Value of the signed `host` header.
    pub fn host(&self, bucket: &str, region: &str) -> String {
        match self {
            Endpoint::VirtualHosted => format!("{bucket}.s3.{region}.amazonaws.com"),
            Endpoint::PathStyle { authority, .. } => authority.to_string(),
        }
    }

    /// Scheme and host, without a trailing slash.
    pub fn origin(&self, bucket: &str, region: &str) -> String {
        match self {
            Endpoint::VirtualHosted => format!("https://{}", self.host(bucket, region)),
            Endpoint::PathStyle { scheme, authority } => format!("{scheme}://{authority}"),
        }
    }

    /// Raw, not yet encoded, request path of an object.
    pub fn object_path(&self, bucket: &str, key: &str) -> String {
        match self {
            Endpoint::VirtualHosted => format!("/{key}"),
            Endpoint::PathStyle { .. } => format!("/{bucket}/{key}"),
        }
    }
}
