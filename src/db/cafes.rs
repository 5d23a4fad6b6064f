//! Data access for the `cafes` table
//!
//! Each operation is a single statement, committed immediately. Columns
//! are always named explicitly so the row-to-struct mapping stays static.

use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::{Cafe, NewCafe};

const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
     has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

/// Insert a new cafe, returning the generated id
///
/// Fails with `DuplicateName` if a cafe with the same name exists.
pub async fn insert(pool: &SqlitePool, cafe: &NewCafe) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO cafes \
         (name, map_url, img_url, location, seats, has_toilet, has_wifi, \
          has_sockets, can_take_calls, coffee_price) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&cafe.name)
    .bind(&cafe.map_url)
    .bind(&cafe.img_url)
    .bind(&cafe.location)
    .bind(&cafe.seats)
    .bind(cafe.has_toilet)
    .bind(cafe.has_wifi)
    .bind(cafe.has_sockets)
    .bind(cafe.can_take_calls)
    .bind(&cafe.coffee_price)
    .execute(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateName,
        _ => AppError::Database(e),
    })?;

    Ok(result.last_insert_rowid())
}

/// Every cafe, ordered by name ascending
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(&format!(
        "SELECT {CAFE_COLUMNS} FROM cafes ORDER BY name ASC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(cafes)
}

/// Cafes whose location equals the given string. Exact match, case-sensitive.
pub async fn find_by_location(pool: &SqlitePool, location: &str) -> Result<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(&format!(
        "SELECT {CAFE_COLUMNS} FROM cafes WHERE location = ? ORDER BY name ASC"
    ))
    .bind(location)
    .fetch_all(pool)
    .await?;

    Ok(cafes)
}

/// Look up a single cafe by id
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(&format!(
        "SELECT {CAFE_COLUMNS} FROM cafes WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(cafe)
}

/// Set a new coffee price. The only column mutable after creation.
pub async fn update_price(pool: &SqlitePool, id: i64, new_price: &str) -> Result<()> {
    let result = sqlx::query("UPDATE cafes SET coffee_price = ? WHERE id = ?")
        .bind(new_price)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::CafeNotFound);
    }

    Ok(())
}

/// Remove a cafe by id
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM cafes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::CafeNotFound);
    }

    Ok(())
}
