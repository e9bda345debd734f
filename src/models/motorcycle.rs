// ABOUTME: Motorcycle domain types as stored in tbl_moto
// ABOUTME: Composite (chassis, plate) keys and inclusive-or lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

use crate::validation::is_blank;

/// Stored motorcycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motorcycle {
    /// 17-character chassis number
    pub chassis: String,
    /// 7-character license plate
    pub plate: String,
    /// Parking slot the bike occupies
    pub slot_id: i32,
    /// Model name
    pub model: String,
    /// Availability code
    pub status: i32,
    /// Free-text notes
    pub description: Option<String>,
}

impl Motorcycle {
    /// Composite key of this record
    #[must_use]
    pub fn key(&self) -> MotorcycleKey {
        MotorcycleKey {
            chassis: self.chassis.clone(),
            plate: self.plate.clone(),
        }
    }
}

/// Composite primary key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MotorcycleKey {
    /// Chassis number
    pub chassis: String,
    /// License plate
    pub plate: String,
}

/// Fields overwritten by a full update; the key itself is immutable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotorcycleUpdate {
    /// Parking slot
    pub slot_id: i32,
    /// Model name
    pub model: String,
    /// Availability code
    pub status: i32,
    /// Free-text notes
    pub description: Option<String>,
}

/// Match on chassis OR plate, whichever are supplied
///
/// Supplying both does not narrow the search: a row matching either one is
/// a hit. Blank filters are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotorcycleLookup {
    chassis: Option<String>,
    plate: Option<String>,
}

impl MotorcycleLookup {
    /// Build from raw query values
    #[must_use]
    pub fn new(chassis: Option<String>, plate: Option<String>) -> Self {
        Self {
            chassis: chassis.filter(|c| !is_blank(c)),
            plate: plate.filter(|p| !is_blank(p)),
        }
    }

    /// No usable filter was supplied
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chassis.is_none() && self.plate.is_none()
    }

    /// Chassis filter
    #[must_use]
    pub fn chassis(&self) -> Option<&str> {
        self.chassis.as_deref()
    }

    /// Plate filter
    #[must_use]
    pub fn plate(&self) -> Option<&str> {
        self.plate.as_deref()
    }
}
