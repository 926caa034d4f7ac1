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

use serde::{Deserialize, Serialize};
use upsign_core::{Error, Result};

/// Upload request sent by a client: `{fileName, contentType, fileSize}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadRequest {
    /// Name of the file, without any directory part.
    pub file_name: Option<String>,
    /// MIME type of the file.
    pub content_type: Option<String>,
    /// Size of the file in bytes.
    pub file_size: Option<i64>,
}

impl UploadRequest {
    /// Parse a JSON request body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Check the request before it reaches the signer.
    pub fn validate(&self) -> Result<()> {
        let file_name = self.file_name.as_deref().unwrap_or_default();
        if file_name.trim().is_empty() {
            return Err(Error::request_invalid("fileName is required"));
        }
        if file_name.contains('/') || file_name.chars().any(char::is_control) {
            return Err(Error::request_invalid(format!(
                "fileName {file_name:?} must not contain '/' or control characters"
            )));
        }

        // The content type is signed, so the client must send exactly this value.
        let content_type = self.content_type();
        if content_type.is_empty() {
            return Err(Error::request_invalid("contentType is required"));
        }
        if content_type.chars().any(char::is_control) {
            return Err(Error::request_invalid(format!(
                "contentType {content_type:?} must not contain control characters"
            )));
        }

        match self.file_size {
            None => Err(Error::request_invalid("fileSize is required")),
            Some(size) if size <= 0 => Err(Error::request_invalid(format!(
                "fileSize must be positive, got {size}"
            ))),
            Some(_) => Ok(()),
        }
    }

    /// Content type to sign, trimmed. Empty when absent.
    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// Build the namespaced object key `{caller_id}/{unix_millis}_{file_name}`.
pub fn object_key(caller_id: &str, unix_millis: i64, file_name: &str) -> Result<String> {
    if caller_id.trim().is_empty() {
        return Err(Error::request_invalid("caller id is required"));
    }
    if caller_id.contains('/') {
        return Err(Error::request_invalid("caller id must not contain '/'"));
    }

    Ok(format!("{caller_id}/{unix_millis}_{file_name}"))
}

/// Response returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTicket {
    /// Url the client uploads to with `PUT`.
    pub presigned_url: String,
    /// Url the object is reachable at once uploaded.
    pub public_url: String,
    /// Object key, echoed back unchanged.
    pub key: String,
}

impl UploadTicket {
    /// Serialize into the JSON response body.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
