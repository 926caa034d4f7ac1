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

use crate::endpoint::Endpoint;
use crate::Credential;
use upsign_core::time::DateTime;

/// Everything needed to presign one object upload.
///
/// The value is immutable once built. `time` is captured once by the caller
/// and reused by every signing stage, so the canonical request, the string
/// to sign and the url parameters all agree on it.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// Credential used to sign.
    pub credential: Credential,
    /// Target bucket.
    pub bucket: String,
    /// Region of the bucket.
    pub region: String,
    /// How the bucket is addressed.
    pub endpoint: Endpoint,
    /// Raw object key, for example `{caller_id}/{millis}_{file_name}`.
    pub key: String,
    /// Content type the uploader must send.
    pub content_type: String,
    /// Lifetime of the presigned url in seconds.
    pub expires_in: u64,
    /// Signing time.
    pub time: DateTime,
}

impl SigningRequest {
    /// Value of the signed `host` header.
    pub fn host(&self) -> String {
        self.endpoint.host(&self.bucket, &self.region)
    }

    /// Raw request path of the object.
    pub fn object_path(&self) -> String {
        self.endpoint.object_path(&self.bucket, &self.key)
    }
}
