// ABOUTME: Employee domain types as stored in tbl_funcionarios
// ABOUTME: Read records never carry the password; write payloads redact it in Debug output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

use std::fmt;

/// Stored employee, without the password column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Storage-assigned identifier
    pub id: i64,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// 11-digit taxpayer identifier, unique per employee
    pub cpf: String,
    /// Job title
    pub role: Option<String>,
}

/// Insert payload; `id` is assigned by storage
#[derive(Clone, PartialEq, Eq)]
pub struct NewEmployee {
    /// Full name
    pub name: String,
    /// Plaintext password
    pub password: String,
    /// Contact email
    pub email: String,
    /// 11-digit taxpayer identifier
    pub cpf: String,
    /// Job title
    pub role: Option<String>,
}

impl fmt::Debug for NewEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewEmployee")
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .field("cpf", &self.cpf)
            .field("role", &self.role)
            .finish()
    }
}

/// Full-replace update; the password is not updatable through this path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeUpdate {
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// 11-digit taxpayer identifier
    pub cpf: String,
    /// Job title
    pub role: Option<String>,
}

/// Login credentials
#[derive(Clone)]
pub struct EmployeeCredentials {
    /// Login email
    pub email: String,
    /// Plaintext password
    pub password: String,
}

impl fmt::Debug for EmployeeCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_prints_password() {
        let new = NewEmployee {
            name: "Ana".into(),
            password: "hunter2".into(),
            email: "ana@lugia.com".into(),
            cpf: "12345678901".into(),
            role: None,
        };
        let credentials = EmployeeCredentials {
            email: "ana@lugia.com".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{new:?}").contains("hunter2"));
        assert!(!format!("{credentials:?}").contains("hunter2"));
    }
}
