//! Transactional bulk loader for generated employee records.
//!
//! The whole batch is one atomic unit: a single transaction wraps every
//! insert, and any failure rolls the entire run back before surfacing a
//! [`EmployeeDbError::Load`] with the offending batch position. Rows go in
//! parent-before-child order: each employee chunk is inserted first (its
//! generated ids captured via `RETURNING`), then the three dependent tables
//! referencing those ids.

use crate::error::EmployeeDbError;
use employee_generator::EmployeeRecord;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Transaction};
use tracing::{debug, info};
use uuid::Uuid;

/// Default number of records per multi-row INSERT.
pub const DEFAULT_BATCH_SIZE: usize = 100;

pub const EMPLOYEE_COLUMNS: [&str; 8] = [
    "first_name",
    "last_name",
    "middle_name",
    "date_of_birth",
    "gender",
    "nationality",
    "marital_status",
    "social_security_number",
];

pub const CONTACT_COLUMNS: [&str; 13] = [
    "employee_id",
    "email",
    "phone_primary",
    "phone_secondary",
    "address_line1",
    "address_line2",
    "city",
    "state",
    "postal_code",
    "country",
    "emergency_contact_name",
    "emergency_contact_phone",
    "emergency_contact_relation",
];

pub const EMPLOYMENT_COLUMNS: [&str; 13] = [
    "employee_id",
    "employee_number",
    "department",
    "position",
    "job_level",
    "employment_type",
    "hire_date",
    "termination_date",
    "employment_status",
    "manager_id",
    "work_location",
    "salary",
    "currency",
];

pub const DETAILS_COLUMNS: [&str; 14] = [
    "employee_id",
    "education_level",
    "university",
    "degree",
    "graduation_year",
    "skills",
    "certifications",
    "languages",
    "previous_experience_years",
    "employee_photo_url",
    "notes",
    "performance_rating",
    "last_promotion_date",
    "next_review_date",
];

/// Build a multi-row INSERT statement with `$n` placeholders.
pub fn multi_row_insert(table: &str, columns: &[&str], rows: usize) -> String {
    let mut placeholders = Vec::with_capacity(rows);
    let mut param = 1;
    for _ in 0..rows {
        let row: Vec<String> = (0..columns.len())
            .map(|_| {
                let p = format!("${param}");
                param += 1;
                p
            })
            .collect();
        placeholders.push(format!("({})", row.join(", ")));
    }
    format!(
        "INSERT INTO {table} ({}) VALUES {}",
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Load generated records inside a single transaction.
///
/// Returns the number of employees inserted. On any failure the transaction
/// is rolled back in full and the error reports the starting position of the
/// failing batch.
pub async fn load(
    client: &mut Client,
    records: &[EmployeeRecord],
    batch_size: usize,
) -> Result<u64, EmployeeDbError> {
    if records.is_empty() {
        return Ok(0);
    }
    let batch_size = batch_size.max(1);

    let tx = client
        .transaction()
        .await
        .map_err(|e| EmployeeDbError::Load { index: 0, source: e })?;

    match load_records(&tx, records, batch_size).await {
        Ok(count) => {
            tx.commit().await.map_err(|e| EmployeeDbError::Load {
                index: records.len(),
                source: e,
            })?;
            info!("Successfully inserted {count} employees");
            Ok(count)
        }
        Err((index, source)) => {
            if let Err(e) = tx.rollback().await {
                tracing::warn!("Rollback after load failure also failed: {e}");
            }
            Err(EmployeeDbError::Load { index, source })
        }
    }
}

async fn load_records(
    tx: &Transaction<'_>,
    records: &[EmployeeRecord],
    batch_size: usize,
) -> Result<u64, (usize, tokio_postgres::Error)> {
    let mut inserted = 0u64;
    let mut offset = 0usize;
    for chunk in records.chunks(batch_size) {
        insert_chunk(tx, chunk).await.map_err(|e| (offset, e))?;
        inserted += chunk.len() as u64;
        offset += chunk.len();
        debug!("Inserted {offset}/{} employees", records.len());
    }
    Ok(inserted)
}

/// Insert one chunk: employees first, then the dependent rows keyed by the
/// returned employee ids.
async fn insert_chunk(
    tx: &Transaction<'_>,
    chunk: &[EmployeeRecord],
) -> Result<(), tokio_postgres::Error> {
    let ids = insert_employees(tx, chunk).await?;
    insert_contact_info(tx, chunk, &ids).await?;
    insert_employment_info(tx, chunk, &ids).await?;
    insert_employee_details(tx, chunk, &ids).await?;
    Ok(())
}

async fn insert_employees(
    tx: &Transaction<'_>,
    chunk: &[EmployeeRecord],
) -> Result<Vec<Uuid>, tokio_postgres::Error> {
    let sql = format!(
        "{} RETURNING employee_id",
        multi_row_insert("employee", &EMPLOYEE_COLUMNS, chunk.len())
    );

    let mut params: Vec<&(dyn ToSql + Sync)> =
        Vec::with_capacity(chunk.len() * EMPLOYEE_COLUMNS.len());
    for record in chunk {
        let p = &record.person;
        params.push(&p.first_name);
        params.push(&p.last_name);
        params.push(&p.middle_name);
        params.push(&p.date_of_birth);
        params.push(&p.gender);
        params.push(&p.nationality);
        params.push(&p.marital_status);
        params.push(&p.social_security_number);
    }

    // RETURNING preserves insertion order, so ids[i] belongs to chunk[i].
    let rows = tx.query(&sql, &params).await?;
    Ok(rows.iter().map(|row| row.get(0)).collect())
}

async fn insert_contact_info(
    tx: &Transaction<'_>,
    chunk: &[EmployeeRecord],
    ids: &[Uuid],
) -> Result<(), tokio_postgres::Error> {
    let sql = multi_row_insert("contact_info", &CONTACT_COLUMNS, chunk.len());

    let mut params: Vec<&(dyn ToSql + Sync)> =
        Vec::with_capacity(chunk.len() * CONTACT_COLUMNS.len());
    for (id, record) in ids.iter().zip(chunk) {
        let c = &record.contact;
        params.push(id);
        params.push(&c.email);
        params.push(&c.phone_primary);
        params.push(&c.phone_secondary);
        params.push(&c.address_line1);
        params.push(&c.address_line2);
        params.push(&c.city);
        params.push(&c.state);
        params.push(&c.postal_code);
        params.push(&c.country);
        params.push(&c.emergency_contact_name);
        params.push(&c.emergency_contact_phone);
        params.push(&c.emergency_contact_relation);
    }

    tx.execute(&sql, &params).await?;
    Ok(())
}

async fn insert_employment_info(
    tx: &Transaction<'_>,
    chunk: &[EmployeeRecord],
    ids: &[Uuid],
) -> Result<(), tokio_postgres::Error> {
    let sql = multi_row_insert("employment_info", &EMPLOYMENT_COLUMNS, chunk.len());

    // Generated records carry no manager assignment.
    let manager_id: Option<Uuid> = None;

    let mut params: Vec<&(dyn ToSql + Sync)> =
        Vec::with_capacity(chunk.len() * EMPLOYMENT_COLUMNS.len());
    for (id, record) in ids.iter().zip(chunk) {
        let e = &record.employment;
        params.push(id);
        params.push(&e.employee_number);
        params.push(&e.department);
        params.push(&e.position);
        params.push(&e.job_level);
        params.push(&e.employment_type);
        params.push(&e.hire_date);
        params.push(&e.termination_date);
        params.push(&e.employment_status);
        params.push(&manager_id);
        params.push(&e.work_location);
        params.push(&e.salary);
        params.push(&e.currency);
    }

    tx.execute(&sql, &params).await?;
    Ok(())
}

async fn insert_employee_details(
    tx: &Transaction<'_>,
    chunk: &[EmployeeRecord],
    ids: &[Uuid],
) -> Result<(), tokio_postgres::Error> {
    let sql = multi_row_insert("employee_details", &DETAILS_COLUMNS, chunk.len());

    let photo_url: Option<String> = None;
    let notes: Option<String> = None;

    let mut params: Vec<&(dyn ToSql + Sync)> =
        Vec::with_capacity(chunk.len() * DETAILS_COLUMNS.len());
    for (id, record) in ids.iter().zip(chunk) {
        let d = &record.details;
        params.push(id);
        params.push(&d.education_level);
        params.push(&d.university);
        params.push(&d.degree);
        params.push(&d.graduation_year);
        params.push(&d.skills);
        params.push(&d.certifications);
        params.push(&d.languages);
        params.push(&d.previous_experience_years);
        params.push(&photo_url);
        params.push(&notes);
        params.push(&d.performance_rating);
        params.push(&d.last_promotion_date);
        params.push(&d.next_review_date);
    }

    tx.execute(&sql, &params).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_row_insert_single_row() {
        let sql = multi_row_insert("employee", &["a", "b"], 1);
        assert_eq!(sql, "INSERT INTO employee (a, b) VALUES ($1, $2)");
    }

    #[test]
    fn test_multi_row_insert_numbers_placeholders_across_rows() {
        let sql = multi_row_insert("t", &["x", "y", "z"], 2);
        assert_eq!(
            sql,
            "INSERT INTO t (x, y, z) VALUES ($1, $2, $3), ($4, $5, $6)"
        );
    }

    #[test]
    fn test_full_batch_placeholder_count() {
        // 100 employee rows at 8 columns each.
        let sql = multi_row_insert("employee", &EMPLOYEE_COLUMNS, 100);
        assert!(sql.contains("$800"));
        assert!(!sql.contains("$801"));
    }

    #[test]
    fn test_dependent_tables_lead_with_foreign_key() {
        for columns in [
            CONTACT_COLUMNS.as_slice(),
            EMPLOYMENT_COLUMNS.as_slice(),
            DETAILS_COLUMNS.as_slice(),
        ] {
            assert_eq!(columns[0], "employee_id");
        }
    }
}
