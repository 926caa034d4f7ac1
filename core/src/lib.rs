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

//! Core components for presigning object store uploads.
//!
//! This crate provides the foundational pieces shared by the upsign
//! services: the error type, the hashing primitives every signature is
//! built from, SigV4 time formatting and helpers to keep secrets out of
//! logs.
//!
//! ## Overview
//!
//! - **Error**: a single [`Error`] carrying an [`ErrorKind`] so callers can
//!   tell configuration problems from invalid requests and internal faults.
//! - **Context**: a container for the [`Env`] implementation used by
//!   configuration loaders. Signers never read the environment themselves.
//!
//! ## Example
//!
//! ```
//! use upsign_core::hash::{hex_hmac_sha256, hex_sha256};
//!
//! let digest = hex_sha256(b"");
//! assert_eq!(
//!     digest,
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//!
//! let mac = hex_hmac_sha256(b"key", b"message").expect("key is not empty");
//! assert_eq!(mac.len(), 64);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 and HMAC-SHA256 helpers
//! - [`time`]: SigV4 timestamp formatting
//! - [`utils`]: data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::NoopEnv;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
