//! Integration tests for the bands vertical slice
//!
//! Covers CRUD plus the paged list query: filtering, property-mapped
//! ordering (including reverted keys), and pagination metadata.


use encore_core::query::{
    build_sort, BandQuery, PropertyMapping, PropertyMappingValue, SortDirection, SortInstruction,
};
use encore_core::types::*;
use test_helpers::*;

fn band_mapping() -> PropertyMapping {
    let mut mapping = PropertyMapping::new();
    mapping.insert("id", PropertyMappingValue::to(vec!["id"]));
    mapping.insert("name", PropertyMappingValue::to(vec!["name"]));
    mapping.insert("mainGenre", PropertyMappingValue::to(vec!["main_genre"]));
    mapping.insert(
        "foundedYearsAgo",
        PropertyMappingValue::reverted(vec!["founded_year"]),
    );
    mapping
}

async fn seed_seven_bands(pool: &sqlx::SqlitePool) {
    for (name, genre, year) in [
        ("Arcade Fire", "Indie Rock", 2001),
        ("Black Sabbath", "Heavy Metal", 1968),
        ("Can", "Krautrock", 1968),
        ("Daft Punk", "Electronic", 1993),
        ("Earth, Wind & Fire", "Funk", 1969),
        ("Fugazi", "Post-Hardcore", 1986),
        ("Goat", "Psychedelic Rock", 2012),
    ] {
        create_test_band(pool, name, genre, year).await;
    }
}

// ============================================================================
// CRUD
// ============================================================================

#[tokio::test]
async fn test_create_and_get_band() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let band = create_test_band(pool, "King Crimson", "Progressive Rock", 1968).await;
    assert_eq!(band.name, "King Crimson");
    assert_eq!(band.main_genre, "Progressive Rock");
    assert_eq!(band.founded_year, 1968);

    let retrieved = encore_storage::bands::get_by_id(pool, &band.id)
        .await
        .expect("Failed to get band")
        .expect("Band not found");

    assert_eq!(retrieved.id, band.id);
    assert_eq!(retrieved.name, "King Crimson");
}

#[tokio::test]
async fn test_exists_and_delete() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let band = create_test_band(pool, "Slint", "Post-Rock", 1986).await;
    assert!(encore_storage::bands::exists(pool, &band.id).await.unwrap());

    let deleted = encore_storage::bands::delete(pool, &band.id).await.unwrap();
    assert!(deleted);
    assert!(!encore_storage::bands::exists(pool, &band.id).await.unwrap());

    // Deleting again reports nothing removed
    let deleted = encore_storage::bands::delete(pool, &band.id).await.unwrap();
    assert!(!deleted);
}

#[tokio::test]
async fn test_deleting_a_band_cascades_to_its_albums() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let band = create_test_band(pool, "Neu!", "Krautrock", 1971).await;
    create_test_album(pool, &band.id, "Neu!", Some("Debut")).await;
    create_test_album(pool, &band.id, "Neu! 2", Some("Second record")).await;

    encore_storage::bands::delete(pool, &band.id).await.unwrap();

    let albums = encore_storage::albums::get_for_band(pool, &band.id)
        .await
        .unwrap();
    assert!(albums.is_empty(), "Albums should cascade with their band");
}

#[tokio::test]
async fn test_get_many_returns_requested_bands_sorted_by_name() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let zappa = create_test_band(pool, "Zappa", "Experimental", 1964).await;
    let abba = create_test_band(pool, "ABBA", "Pop", 1972).await;
    create_test_band(pool, "Muse", "Alternative Rock", 1994).await;

    let bands = encore_storage::bands::get_many(pool, &[zappa.id.clone(), abba.id.clone()])
        .await
        .unwrap();

    assert_eq!(bands.len(), 2);
    assert_eq!(bands[0].name, "ABBA");
    assert_eq!(bands[1].name, "Zappa");

    let unknown = BandId::new("missing");
    let bands = encore_storage::bands::get_many(pool, &[abba.id.clone(), unknown])
        .await
        .unwrap();
    assert_eq!(bands.len(), 1, "Unknown ids are simply absent");
}

// ============================================================================
// Paged list
// ============================================================================

#[tokio::test]
async fn test_list_third_page_of_seven() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    seed_seven_bands(pool).await;

    let query = BandQuery {
        page_number: 3,
        page_size: 3,
        ..BandQuery::default()
    };
    let page = encore_storage::bands::list(pool, &query, &[]).await.unwrap();

    assert_eq!(page.total_count, 7);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 1);
    assert!(page.has_previous());
    assert!(!page.has_next());
    assert_eq!(page.items[0].name, "Goat");
}

#[tokio::test]
async fn test_list_page_beyond_the_end_is_empty() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    seed_seven_bands(pool).await;

    let query = BandQuery {
        page_number: 9,
        page_size: 3,
        ..BandQuery::default()
    };
    let page = encore_storage::bands::list(pool, &query, &[]).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 7);
    assert!(page.has_previous());
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_list_clamps_page_size() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    seed_seven_bands(pool).await;

    // page_size 0 clamps to 1
    let query = BandQuery {
        page_size: 0,
        ..BandQuery::default()
    };
    let page = encore_storage::bands::list(pool, &query, &[]).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.page_size, 1);
    assert_eq!(page.total_pages, 7);
}

#[tokio::test]
async fn test_list_filters_by_genre_exactly() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    seed_seven_bands(pool).await;

    let query = BandQuery {
        main_genre: Some("  Krautrock  ".to_string()),
        ..BandQuery::default()
    };
    let page = encore_storage::bands::list(pool, &query, &[]).await.unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].name, "Can");

    // Genre matching is exact, not substring
    let query = BandQuery {
        main_genre: Some("Rock".to_string()),
        ..BandQuery::default()
    };
    let page = encore_storage::bands::list(pool, &query, &[]).await.unwrap();
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 0);
    assert!(!page.has_previous());
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_list_search_is_case_sensitive_substring() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    seed_seven_bands(pool).await;

    let query = BandQuery {
        search_query: Some("Fire".to_string()),
        ..BandQuery::default()
    };
    let page = encore_storage::bands::list(pool, &query, &[]).await.unwrap();
    let names: Vec<_> = page.items.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Arcade Fire", "Earth, Wind & Fire"]);

    let query = BandQuery {
        search_query: Some("fire".to_string()),
        ..BandQuery::default()
    };
    let page = encore_storage::bands::list(pool, &query, &[]).await.unwrap();
    assert_eq!(page.total_count, 0, "Search should be case-sensitive");
}

#[tokio::test]
async fn test_list_filters_combine() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    seed_seven_bands(pool).await;

    let query = BandQuery {
        main_genre: Some("Krautrock".to_string()),
        search_query: Some("Fugazi".to_string()),
        ..BandQuery::default()
    };
    let page = encore_storage::bands::list(pool, &query, &[]).await.unwrap();
    assert_eq!(page.total_count, 0, "Filters AND together");
}

#[tokio::test]
async fn test_list_orders_by_mapped_sort_instructions() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    seed_seven_bands(pool).await;

    let mapping = band_mapping();
    let sort = build_sort("mainGenre desc, name", &mapping).unwrap();

    let query = BandQuery {
        page_size: 7,
        ..BandQuery::default()
    };
    let page = encore_storage::bands::list(pool, &query, &sort).await.unwrap();

    let genres: Vec<_> = page.items.iter().map(|b| b.main_genre.as_str()).collect();
    let mut expected = genres.clone();
    expected.sort_unstable();
    expected.reverse();
    assert_eq!(genres, expected);
}

#[tokio::test]
async fn test_list_reverted_key_flips_direction() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    seed_seven_bands(pool).await;

    // "foundedYearsAgo desc" means most-years-ago first, i.e. the oldest
    // bands. Years-ago runs opposite to the stored founding year, so the
    // reverted mapping turns this into founded_year ascending.
    let sort = build_sort("foundedYearsAgo desc", &band_mapping()).unwrap();
    assert_eq!(sort[0].direction, SortDirection::Ascending);

    let query = BandQuery {
        page_size: 7,
        ..BandQuery::default()
    };
    let page = encore_storage::bands::list(pool, &query, &sort).await.unwrap();

    let years: Vec<_> = page.items.iter().map(|b| b.founded_year).collect();
    let mut expected = years.clone();
    expected.sort_unstable();
    assert_eq!(years, expected);
}

#[tokio::test]
async fn test_list_ties_break_deterministically() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    seed_seven_bands(pool).await;

    // Black Sabbath and Can are tied on founded_year
    let sort = vec![SortInstruction {
        field: "founded_year".to_string(),
        direction: SortDirection::Ascending,
    }];

    let query = BandQuery {
        page_size: 7,
        ..BandQuery::default()
    };
    let first = encore_storage::bands::list(pool, &query, &sort).await.unwrap();
    let second = encore_storage::bands::list(pool, &query, &sort).await.unwrap();

    let first_names: Vec<_> = first.items.iter().map(|b| b.name.clone()).collect();
    let second_names: Vec<_> = second.items.iter().map(|b| b.name.clone()).collect();
    assert_eq!(first_names, second_names);
}

#[tokio::test]
async fn test_list_rejects_unknown_sort_column() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    seed_seven_bands(pool).await;

    let sort = vec![SortInstruction {
        field: "favorite_color".to_string(),
        direction: SortDirection::Ascending,
    }];

    let query = BandQuery::default();
    let result = encore_storage::bands::list(pool, &query, &sort).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_create_many_creates_all() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let created = encore_storage::bands::create_many(
        pool,
        vec![
            CreateBand {
                name: "Om".to_string(),
                main_genre: "Doom Metal".to_string(),
                founded_year: 2003,
            },
            CreateBand {
                name: "Sleep".to_string(),
                main_genre: "Doom Metal".to_string(),
                founded_year: 1990,
            },
        ],
    )
    .await
    .unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(encore_storage::bands::get_all(pool).await.unwrap().len(), 2);
}
