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

use crate::canonical::{encode_path, CanonicalRequest};
use crate::constants::*;
use crate::sign::{string_to_sign, CredentialScope, SigningKey};
use crate::SigningRequest;
use http::Method;
use log::debug;
use upsign_core::time::{format_iso8601, DateTime};
use upsign_core::{Error, Result};

/// A url that authorizes one `PUT` of one object until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedUrl {
    url: String,
    headers: Vec<(String, String)>,
    expires_in: u64,
}

impl PresignedUrl {
    /// The url as a string.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Consume and return the url string.
    pub fn into_string(self) -> String {
        self.url
    }

    /// Headers the uploader must send unchanged, since they are signed.
    ///
    /// `host` is left out: every http client derives it from the url.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Lifetime of the url in seconds.
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    /// Build the upload request a client would send, without a body.
    pub fn into_request(self) -> Result<http::Request<()>> {
        let mut builder = http::Request::builder()
            .method(Method::PUT)
            .uri(self.url.as_str());
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        Ok(builder.body(())?)
    }
}

/// Presign a single object `PUT`.
///
/// The `X-Amz-*` parameters are part of the canonical query, as SigV4
/// query-string signing requires; the resulting url carries that same
/// query followed by `X-Amz-Signature`.
pub fn presign_put(req: &SigningRequest) -> Result<PresignedUrl> {
    if !req.credential.is_valid() {
        return Err(Error::config_invalid(
            "access key and secret key are required for signing",
        ));
    }
    if req.bucket.trim().is_empty() {
        return Err(Error::config_invalid("bucket is required for signing"));
    }
    if req.key.is_empty() {
        return Err(Error::request_invalid("object key is required for signing"));
    }

    // Scope: "20220313/<region>/s3/aws4_request"
    let scope = CredentialScope::new(req.time, &req.region, SERVICE);
    debug!("calculated scope: {scope}");

    let creq = CanonicalRequest::new(Method::PUT, &req.object_path(), UNSIGNED_PAYLOAD)
        .with_header(CONTENT_TYPE, &req.content_type)
        .with_header(HOST, &req.host())
        .with_header(X_AMZ_CONTENT_SHA_256, UNSIGNED_PAYLOAD);
    let signed_headers = creq.signed_headers();
    let creq = creq.with_query(presign_query(
        &req.credential.access_key_id,
        &scope,
        req.time,
        req.expires_in,
        &signed_headers,
    ));
    debug!("calculated canonical request: {creq}");

    let string_to_sign = string_to_sign(req.time, &scope, &creq);
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = SigningKey::derive(&req.credential.secret_access_key, &scope)?;
    let signature = signing_key.sign(&string_to_sign)?;

    let url = format!(
        "{}{}?{}&{X_AMZ_SIGNATURE}={signature}",
        req.endpoint.origin(&req.bucket, &req.region),
        creq.uri(),
        creq.query(),
    );
    let headers = creq
        .headers()
        .filter(|(name, _)| *name != HOST)
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Ok(PresignedUrl {
        url,
        headers,
        expires_in: req.expires_in,
    })
}

/// Unsigned url the object is reachable at once uploaded.
pub fn public_url(req: &SigningRequest) -> String {
    format!(
        "{}{}",
        req.endpoint.origin(&req.bucket, &req.region),
        encode_path(&req.object_path())
    )
}

/// Raw query parameters of a presigned url, without the signature.
pub fn presign_query(
    access_key_id: &str,
    scope: &CredentialScope,
    time: DateTime,
    expires_in: u64,
    signed_headers: &str,
) -> Vec<(&'static str, String)> {
    vec![
        (X_AMZ_ALGORITHM, ALGORITHM.to_string()),
        (X_AMZ_CREDENTIAL, format!("{access_key_id}/{scope}")),
        (X_AMZ_DATE, format_iso8601(time)),
        (X_AMZ_EXPIRES, expires_in.to_string()),
        (X_AMZ_SIGNED_HEADERS, signed_headers.to_string()),
    ]
}
