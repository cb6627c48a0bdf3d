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

use std::fmt::{Debug, Formatter};

use modo2auth_core::{utils::Redact, SigningCredential};

/// Credential for MODO2 APIs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// API identifier, embedded in every token payload.
    pub api_identifier: String,
    /// API secret, the HMAC key. Never leaves the process.
    pub api_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(api_identifier: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_identifier: api_identifier.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_identifier", &Redact::from(&self.api_identifier))
            .field("api_secret", &Redact::from(&self.api_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.api_identifier.is_empty() && !self.api_secret.is_empty()
    }
}
