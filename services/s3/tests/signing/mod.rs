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

mod golden;

use chrono::TimeZone;
use chrono::Utc;
use upsign_core::time::DateTime;
use upsign_s3::{Credential, Endpoint, SigningRequest};

pub const ACCESS_KEY: &str = "AKIDEXAMPLE";
pub const SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 2015-08-30T12:36:00Z
pub fn test_time() -> DateTime {
    Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap()
}

pub fn signing_request() -> SigningRequest {
    SigningRequest {
        credential: Credential::new(ACCESS_KEY, SECRET_KEY),
        bucket: "my-bucket".to_string(),
        region: "us-east-1".to_string(),
        endpoint: Endpoint::VirtualHosted,
        key: "user-42/1440938160000_photo.png".to_string(),
        content_type: "image/png".to_string(),
        expires_in: 3600,
        time: test_time(),
    }
}

/// Decoded query parameters of a url.
pub fn query_params(url: &str) -> Vec<(String, String)> {
    let uri: http::Uri = url.parse().expect("url must be valid");
    form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn query_param(url: &str, name: &str) -> Option<String> {
    query_params(url)
        .into_iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v)
}
