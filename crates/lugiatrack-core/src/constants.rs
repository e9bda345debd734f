// ABOUTME: Field length limits and pagination defaults shared across the workspace
// ABOUTME: Values mirror the column definitions of the registry tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

/// Employee column limits
pub mod employee {
    /// Maximum characters in an employee name
    pub const NAME_MAX_LEN: usize = 70;
    /// Maximum characters in an employee password
    pub const PASSWORD_MAX_LEN: usize = 256;
    /// Maximum characters in an employee email
    pub const EMAIL_MAX_LEN: usize = 50;
    /// Exact number of digits in a CPF
    pub const CPF_LEN: usize = 11;
    /// Maximum characters in an employee role
    pub const ROLE_MAX_LEN: usize = 30;
}

/// Motorcycle column limits
pub mod motorcycle {
    /// Exact characters in a chassis number
    pub const CHASSIS_LEN: usize = 17;
    /// Exact characters in a license plate
    pub const PLATE_LEN: usize = 7;
    /// Maximum characters in a model name
    pub const MODEL_MAX_LEN: usize = 30;
    /// Maximum characters in a free-text description
    pub const DESCRIPTION_MAX_LEN: usize = 1000;
}

/// Pagination defaults
pub mod pagination {
    /// Page returned when the client omits `page`
    pub const DEFAULT_PAGE: i64 = 1;
    /// Page size used when the client omits `pageSize`
    pub const DEFAULT_PAGE_SIZE: i64 = 10;
    /// Upper bound applied to motorcycle listings
    pub const MAX_MOTORCYCLE_PAGE_SIZE: i64 = 100;
}
