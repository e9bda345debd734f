// ABOUTME: Motorcycle registry service: listing, chassis-or-plate lookup, and keyed writes
// ABOUTME: Enforces fixed-length identifiers and reports chassis and plate collisions separately
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

use lugiatrack_core::constants::motorcycle::DESCRIPTION_MAX_LEN;
use lugiatrack_core::constants::pagination::MAX_MOTORCYCLE_PAGE_SIZE;
use lugiatrack_core::errors::{AppError, AppResult};
use lugiatrack_core::pagination::{Page, PageRequest};
use tracing::{debug, info};

use super::ensure_max_len_opt;
use crate::database_plugins::factory::Database;
use crate::database_plugins::DatabaseProvider;
use crate::models::{Motorcycle, MotorcycleKey, MotorcycleLookup, MotorcycleUpdate};
use crate::validation::motorcycle_fields_valid;

const INVALID_FIELDS: &str = "Chassis (17), plate (7) and model are required and must be valid";
const MISSING_FILTER: &str = "Provide at least the chassis or the plate";

fn motorcycle_not_found() -> AppError {
    AppError::not_found("Motorcycle")
}

fn validate_motorcycle(motorcycle: &Motorcycle) -> AppResult<()> {
    if !motorcycle_fields_valid(&motorcycle.chassis, &motorcycle.plate, &motorcycle.model) {
        return Err(AppError::invalid_input(INVALID_FIELDS));
    }
    ensure_max_len_opt(
        motorcycle.description.as_deref(),
        DESCRIPTION_MAX_LEN,
        "Description",
    )
}

/// One page of motorcycles ordered by chassis; page size is capped at 100
///
/// # Errors
///
/// Returns database errors from the count or page query.
pub async fn list_motorcycles(
    database: &Database,
    request: PageRequest,
) -> AppResult<Page<Motorcycle>> {
    let request = request.clamp_page_size(MAX_MOTORCYCLE_PAGE_SIZE);
    let total = database.count_motorcycles().await?;
    let items = database
        .list_motorcycles(request.offset(), request.limit())
        .await?;
    debug!(page = request.page(), total, returned = items.len(), "Listed motorcycles");
    Ok(Page::new(request, total, items))
}

/// First motorcycle whose chassis OR plate matches
///
/// # Errors
///
/// Returns `InvalidInput` when neither filter is supplied and
/// `ResourceNotFound` when nothing matches.
pub async fn find_motorcycle(database: &Database, lookup: &MotorcycleLookup) -> AppResult<Motorcycle> {
    if lookup.is_empty() {
        return Err(AppError::invalid_input(MISSING_FILTER));
    }
    database
        .find_motorcycle(lookup)
        .await?
        .ok_or_else(motorcycle_not_found)
}

/// Register a motorcycle under its caller-assigned key
///
/// # Errors
///
/// Returns `InvalidInput` for bad fields and `ResourceAlreadyExists` when the
/// chassis or the plate is already registered.
pub async fn create_motorcycle(database: &Database, motorcycle: &Motorcycle) -> AppResult<()> {
    validate_motorcycle(motorcycle)?;

    if database
        .motorcycle_chassis_exists(&motorcycle.chassis)
        .await?
    {
        return Err(AppError::conflict(
            "A motorcycle with this chassis already exists",
        ));
    }
    if database.motorcycle_plate_exists(&motorcycle.plate).await? {
        return Err(AppError::conflict(
            "A motorcycle with this plate already exists",
        ));
    }

    database.create_motorcycle(motorcycle).await?;
    info!(chassis = %motorcycle.chassis, plate = %motorcycle.plate, "Motorcycle created");
    Ok(())
}

/// Overwrite slot, model, status and description of the row at `key`
///
/// # Errors
///
/// Returns `InvalidInput` for bad fields or when the body key differs from
/// `key`, and `ResourceNotFound` when no row has that key.
pub async fn update_motorcycle(
    database: &Database,
    key: &MotorcycleKey,
    motorcycle: &Motorcycle,
) -> AppResult<()> {
    validate_motorcycle(motorcycle)?;
    if motorcycle.chassis != key.chassis || motorcycle.plate != key.plate {
        return Err(AppError::invalid_input(
            "Body chassis and plate must equal the ones in the URL",
        ));
    }

    if database.get_motorcycle(key).await?.is_none() {
        return Err(motorcycle_not_found());
    }

    let update = MotorcycleUpdate {
        slot_id: motorcycle.slot_id,
        model: motorcycle.model.clone(),
        status: motorcycle.status,
        description: motorcycle.description.clone(),
    };
    if !database.update_motorcycle(key, &update).await? {
        return Err(motorcycle_not_found());
    }
    info!(chassis = %key.chassis, plate = %key.plate, "Motorcycle updated");
    Ok(())
}

/// Delete the first motorcycle matching chassis OR plate
///
/// # Errors
///
/// Returns `InvalidInput` when neither filter is supplied and
/// `ResourceNotFound` when nothing matches.
pub async fn delete_motorcycle(database: &Database, lookup: &MotorcycleLookup) -> AppResult<()> {
    let target = find_motorcycle(database, lookup).await?;
    let key = target.key();
    if !database.delete_motorcycle(&key).await? {
        return Err(motorcycle_not_found());
    }
    info!(chassis = %key.chassis, plate = %key.plate, "Motorcycle deleted");
    Ok(())
}
