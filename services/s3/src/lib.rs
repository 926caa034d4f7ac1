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

//! Presigned direct-to-S3 uploads.
//!
//! A caller that has already authenticated a user hands [`UploadSigner`] an
//! [`UploadRequest`] and receives an [`UploadTicket`]: a time-limited url the
//! client `PUT`s the file to, the public url of the object and its key.
//! The secret key never leaves the signer and the upload bytes never pass
//! through it.
//!
//! The signature is AWS SigV4 query-string signing, computed in four pure
//! stages: [`CanonicalRequest`], [`string_to_sign`], [`SigningKey`] and
//! url assembly in [`presign_put`].
//!
//! ## Example
//!
//! ```
//! use upsign_s3::{Config, UploadRequest, UploadSigner};
//!
//! let signer = UploadSigner::new(Config {
//!     access_key_id: Some("AKIDEXAMPLE".to_string()),
//!     secret_access_key: Some("wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY".to_string()),
//!     bucket: Some("my-bucket".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let req = UploadRequest::from_slice(
//!     br#"{"fileName":"photo.png","contentType":"image/png","fileSize":1024}"#,
//! )?;
//! let ticket = signer.presign_upload("user-42", &req)?;
//!
//! assert!(ticket.key.starts_with("user-42/"));
//! assert!(ticket.presigned_url.contains("X-Amz-Signature="));
//! # Ok::<(), upsign_core::Error>(())
//! ```

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod endpoint;
pub use endpoint::Endpoint;

mod request;
pub use request::SigningRequest;

mod canonical;
pub use canonical::{canonical_query, encode_path, CanonicalRequest};

mod sign;
pub use sign::{string_to_sign, CredentialScope, SigningKey};

mod presign;
pub use presign::{presign_put, presign_query, public_url, PresignedUrl};

mod upload;
pub use upload::{object_key, UploadRequest, UploadTicket};

mod signer;
pub use signer::UploadSigner;

mod constants;
pub use constants::{
    ALGORITHM, DEFAULT_EXPIRES_IN, DEFAULT_REGION, MAX_EXPIRES_IN, SERVICE, UNSIGNED_PAYLOAD,
};
