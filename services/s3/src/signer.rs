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

use crate::constants::{DEFAULT_EXPIRES_IN, DEFAULT_REGION, MAX_EXPIRES_IN};
use crate::presign::{presign_put, public_url, PresignedUrl};
use crate::upload::{object_key, UploadRequest, UploadTicket};
use crate::{Config, Credential, Endpoint, SigningRequest};
use log::debug;
use upsign_core::time::{now, unix_millis, DateTime};
use upsign_core::{Error, Result};

/// UploadSigner issues presigned upload urls for one bucket.
///
/// It holds only validated configuration and keeps no per-request state,
/// so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct UploadSigner {
    credential: Credential,
    bucket: String,
    region: String,
    endpoint: Endpoint,
    expires_in: u64,
}

impl UploadSigner {
    /// Create a signer from config.
    ///
    /// Fails with a config error if the credential or bucket is missing, or
    /// the expiry is outside `1..=604800` seconds.
    pub fn new(config: Config) -> Result<Self> {
        let non_empty = |v: Option<String>| v.filter(|v| !v.trim().is_empty());

        let (Some(access_key_id), Some(secret_access_key)) = (
            non_empty(config.access_key_id),
            non_empty(config.secret_access_key),
        ) else {
            return Err(Error::config_invalid("access key and secret key are required"));
        };
        let bucket =
            non_empty(config.bucket).ok_or_else(|| Error::config_invalid("bucket is required"))?;
        let region = non_empty(config.region).unwrap_or_else(|| DEFAULT_REGION.to_string());

        let expires_in = config.expires_in.unwrap_or(DEFAULT_EXPIRES_IN);
        if expires_in == 0 || expires_in > MAX_EXPIRES_IN {
            return Err(Error::config_invalid(format!(
                "expires_in must be within 1..={MAX_EXPIRES_IN} seconds, got {expires_in}"
            )));
        }

        let endpoint = match non_empty(config.endpoint) {
            Some(ep) => Endpoint::parse(&ep)?,
            None => Endpoint::VirtualHosted,
        };

        Ok(Self {
            credential: Credential::new(access_key_id, secret_access_key),
            bucket,
            region,
            endpoint,
            expires_in,
        })
    }

    /// Bucket uploads go to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Region of the bucket.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Lifetime of issued urls in seconds.
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    /// Build the signing request for `key` at `time`.
    pub fn signing_request(&self, key: &str, content_type: &str, time: DateTime) -> SigningRequest {
        SigningRequest {
            credential: self.credential.clone(),
            bucket: self.bucket.clone(),
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
            key: key.to_string(),
            content_type: content_type.to_string(),
            expires_in: self.expires_in,
            time,
        }
    }

    /// Presign a `PUT` of `key` at `time`.
    pub fn presign(&self, key: &str, content_type: &str, time: DateTime) -> Result<PresignedUrl> {
        presign_put(&self.signing_request(key, content_type, time))
    }

    /// Presign an upload for an already authenticated caller.
    ///
    /// The current time is read once and used for both the object key and
    /// the signature.
    pub fn presign_upload(&self, caller_id: &str, req: &UploadRequest) -> Result<UploadTicket> {
        self.presign_upload_at(caller_id, req, now())
    }

    /// Same as [`UploadSigner::presign_upload`] with an explicit signing time.
    pub fn presign_upload_at(
        &self,
        caller_id: &str,
        req: &UploadRequest,
        time: DateTime,
    ) -> Result<UploadTicket> {
        req.validate()?;
        let file_name = req.file_name.as_deref().unwrap_or_default();
        let key = object_key(caller_id, unix_millis(time), file_name)?;

        let signing_req = self.signing_request(&key, req.content_type(), time);
        let presigned_url = presign_put(&signing_req)?;
        debug!(
            "presigned upload of {key} to bucket {} valid for {}s",
            self.bucket, self.expires_in
        );

        Ok(UploadTicket {
            presigned_url: presigned_url.into_string(),
            public_url: public_url(&signing_req),
            key,
        })
    }
}
