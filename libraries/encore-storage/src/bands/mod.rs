use encore_core::error::{CoreError, Result};
use encore_core::query::{BandQuery, PagedList, SortDirection, SortInstruction};
use encore_core::types::*;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const BAND_COLUMNS: &str = "id, name, main_genre, founded_year, created_at, updated_at";

fn read_band(row: &SqliteRow) -> Band {
    Band {
        id: row.get("id"),
        name: row.get("name"),
        main_genre: row.get("main_genre"),
        founded_year: row.get("founded_year"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Translate a sort instruction's column name into a known column.
///
/// Instruction fields come from the property-mapping registry, never raw
/// client input, so a miss here means a mapping targets a column the
/// schema does not have.
fn sort_column(field: &str) -> Result<&'static str> {
    match field {
        "id" => Ok("id"),
        "name" => Ok("name"),
        "main_genre" => Ok("main_genre"),
        "founded_year" => Ok("founded_year"),
        _ => Err(CoreError::InvalidSortField(field.to_string())),
    }
}

fn order_by_clause(sort: &[SortInstruction]) -> Result<String> {
    let mut terms = Vec::with_capacity(sort.len() + 1);

    for instruction in sort {
        let column = sort_column(&instruction.field)?;
        let direction = match instruction.direction {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        };
        terms.push(format!("{column} {direction}"));
    }

    if terms.is_empty() {
        terms.push("name ASC".to_string());
    }

    // Deterministic order for rows tied on every requested key.
    terms.push("id ASC".to_string());

    Ok(terms.join(", "))
}

/// One page of bands: filters, property-mapped ordering, and paging
/// evaluated in SQL against the same filtered set.
///
/// The genre filter is an exact match and the search query a
/// case-sensitive substring match on the name (`instr`, since `LIKE`
/// ignores case); both are trimmed and AND together.
pub async fn list(
    pool: &SqlitePool,
    query: &BandQuery,
    sort: &[SortInstruction],
) -> Result<PagedList<Band>> {
    let main_genre = query
        .main_genre
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let search_query = query
        .search_query
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut conditions = Vec::new();
    if main_genre.is_some() {
        conditions.push("main_genre = ?");
    }
    if search_query.is_some() {
        conditions.push("instr(name, ?) > 0");
    }
    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    let count_sql = format!("SELECT COUNT(*) FROM bands{where_clause}");
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    if let Some(genre) = main_genre {
        count_query = count_query.bind(genre);
    }
    if let Some(search) = search_query {
        count_query = count_query.bind(search);
    }
    let total_count = count_query.fetch_one(pool).await?;

    let page = query.page();
    let page_size = query.size();
    let offset = i64::from(page - 1) * i64::from(page_size);

    let rows_sql = format!(
        "SELECT {BAND_COLUMNS} FROM bands{where_clause} ORDER BY {} LIMIT ? OFFSET ?",
        order_by_clause(sort)?
    );
    let mut rows_query = sqlx::query(&rows_sql);
    if let Some(genre) = main_genre {
        rows_query = rows_query.bind(genre);
    }
    if let Some(search) = search_query {
        rows_query = rows_query.bind(search);
    }
    let rows = rows_query
        .bind(i64::from(page_size))
        .bind(offset)
        .fetch_all(pool)
        .await?;

    let items = rows.iter().map(read_band).collect();
    Ok(PagedList::new(items, total_count as u64, page, page_size))
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Band>> {
    let rows = sqlx::query(&format!(
        "SELECT {BAND_COLUMNS} FROM bands ORDER BY name, id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(read_band).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: &BandId) -> Result<Option<Band>> {
    let row = sqlx::query(&format!("SELECT {BAND_COLUMNS} FROM bands WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(read_band))
}

/// Fetch a set of bands by id, ordered by name.
pub async fn get_many(pool: &SqlitePool, ids: &[BandId]) -> Result<Vec<Band>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!(
        "SELECT {BAND_COLUMNS} FROM bands WHERE id IN ({placeholders}) ORDER BY name, id"
    );
    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(id);
    }
    let rows = query.fetch_all(pool).await?;

    Ok(rows.iter().map(read_band).collect())
}

pub async fn exists(pool: &SqlitePool, id: &BandId) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bands WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}

pub async fn create(pool: &SqlitePool, band: CreateBand) -> Result<Band> {
    let id = BandId::generate();

    sqlx::query("INSERT INTO bands (id, name, main_genre, founded_year) VALUES (?, ?, ?, ?)")
        .bind(&id)
        .bind(&band.name)
        .bind(&band.main_genre)
        .bind(band.founded_year)
        .execute(pool)
        .await?;

    get_by_id(pool, &id)
        .await?
        .ok_or_else(|| CoreError::database("failed to retrieve created band"))
}

pub async fn create_many(pool: &SqlitePool, bands: Vec<CreateBand>) -> Result<Vec<Band>> {
    let mut created = Vec::with_capacity(bands.len());
    for band in bands {
        created.push(create(pool, band).await?);
    }
    Ok(created)
}

/// Delete a band. Albums cascade at the schema level. Returns whether a
/// row was actually removed.
pub async fn delete(pool: &SqlitePool, id: &BandId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM bands WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
