// ABOUTME: Domain records for the registry: employees and motorcycles
// ABOUTME: Storage-facing shapes passed between services and the database layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

/// Employee records and write payloads
pub mod employee;

/// Motorcycle records, composite keys, and lookups
pub mod motorcycle;

pub use employee::{Employee, EmployeeCredentials, EmployeeUpdate, NewEmployee};
pub use motorcycle::{Motorcycle, MotorcycleKey, MotorcycleLookup, MotorcycleUpdate};
