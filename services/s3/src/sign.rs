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

//! String-to-sign and signing key derivation.

use crate::canonical::CanonicalRequest;
use crate::constants::{ALGORITHM, AWS4_REQUEST};
use std::fmt::{self, Debug, Display, Formatter};
use upsign_core::hash::{hex_hmac_sha256, hmac_sha256, SHA256_LEN};
use upsign_core::time::{format_date, format_iso8601, DateTime};
use upsign_core::Result;

/// Scope a signing key is valid for: `{date8}/{region}/{service}/aws4_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialScope {
    date: String,
    region: String,
    service: String,
}

impl CredentialScope {
    /// Build the scope for the day of `time`.
    pub fn new(time: DateTime, region: &str, service: &str) -> Self {
        Self {
            date: format_date(time),
            region: region.to_string(),
            service: service.to_string(),
        }
    }

    /// Date part, `YYYYMMDD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Region part.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Service part.
    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Display for CredentialScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{AWS4_REQUEST}",
            self.date, self.region, self.service
        )
    }
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
///
/// `time` must be the instant the scope was built from.
pub fn string_to_sign(time: DateTime, scope: &CredentialScope, creq: &CanonicalRequest) -> String {
    format!(
        "{ALGORITHM}\n{}\n{scope}\n{}",
        format_iso8601(time),
        creq.hex_digest()
    )
}

/// Key derived from a secret for exactly one credential scope.
///
/// It lives for a single signing call and is never cached. `Debug` does not
/// print the key bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey([u8; SHA256_LEN]);

impl SigningKey {
    /// Fold the secret through the four round HMAC chain:
    ///
    /// ```text
    /// k1 = HMAC("AWS4" + secret, date8)
    /// k2 = HMAC(k1, region)
    /// k3 = HMAC(k2, service)
    /// k4 = HMAC(k3, "aws4_request")
    /// ```
    ///
    /// Each round's raw bytes key the next round.
    pub fn derive(secret: &str, scope: &CredentialScope) -> Result<Self> {
        let secret = format!("AWS4{secret}");
        let sign_date = hmac_sha256(secret.as_bytes(), scope.date.as_bytes())?;
        let sign_region = hmac_sha256(&sign_date, scope.region.as_bytes())?;
        let sign_service = hmac_sha256(&sign_region, scope.service.as_bytes())?;
        let sign_request = hmac_sha256(&sign_service, AWS4_REQUEST.as_bytes())?;

        Ok(Self(sign_request))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; SHA256_LEN] {
        &self.0
    }

    /// Lower-case hex HMAC of `string_to_sign` under this key.
    pub fn sign(&self, string_to_sign: &str) -> Result<String> {
        hex_hmac_sha256(&self.0, string_to_sign.as_bytes())
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(***)")
    }
}
