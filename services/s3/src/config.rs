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

use crate::constants::*;
use std::fmt::{Debug, Formatter};
use upsign_core::utils::Redact;
use upsign_core::{Context, Error, Result};

/// Config for presigned uploads.
///
/// Every field is optional here; [`UploadSigner::new`](crate::UploadSigner::new)
/// applies defaults and rejects incomplete values before any signing happens.
#[derive(Clone, Default)]
pub struct Config {
    /// Access key id used in `X-Amz-Credential`.
    pub access_key_id: Option<String>,
    /// Secret access key, the seed of every signing key.
    pub secret_access_key: Option<String>,
    /// Bucket receiving the uploads.
    pub bucket: Option<String>,
    /// Region of the bucket, defaults to `us-east-1`.
    pub region: Option<String>,
    /// Lifetime of the presigned url in seconds, defaults to 3600.
    pub expires_in: Option<u64>,
    /// Endpoint of an S3 compatible store such as `http://127.0.0.1:9000`.
    ///
    /// When set, urls are built path-style against this endpoint instead of
    /// the virtual-hosted AWS host.
    pub endpoint: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("expires_in", &self.expires_in)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Load config from environment variables.
    ///
    /// Empty values are treated as unset. An expiry that is not a whole
    /// number of seconds is rejected as [`ErrorKind::ConfigInvalid`](upsign_core::ErrorKind).
    pub fn from_env(ctx: &Context) -> Result<Self> {
        let var = |key: &str| ctx.env_var(key).filter(|v| !v.trim().is_empty());

        let expires_in = match var(AWS_PRESIGN_EXPIRES) {
            None => None,
            Some(v) => Some(v.trim().parse::<u64>().map_err(|e| {
                Error::config_invalid(format!(
                    "{AWS_PRESIGN_EXPIRES} must be a number of seconds, got {v:?}"
                ))
                .with_source(e)
            })?),
        };

        Ok(Self {
            access_key_id: var(AWS_ACCESS_KEY).or_else(|| var(AWS_ACCESS_KEY_ID)),
            secret_access_key: var(AWS_SECRET_KEY).or_else(|| var(AWS_SECRET_ACCESS_KEY)),
            bucket: var(AWS_BUCKET_NAME),
            region: var(AWS_REGION).or_else(|| var(AWS_DEFAULT_REGION)),
            expires_in,
            endpoint: var(AWS_ENDPOINT_URL),
        })
    }
}
