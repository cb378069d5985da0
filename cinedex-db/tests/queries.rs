use cinedex_catalog::NewMovie;
use cinedex_db::*;
use rusqlite::Connection;

fn setup_db() -> Connection {
    let conn = open_memory().unwrap();
    insert_movies(
        &conn,
        &[
            NewMovie::new("Inception", "Nolan", "Sci-Fi", 2010, 8.8),
            NewMovie::new("Interstellar", "Nolan", "Sci-Fi", 2014, 8.6),
            NewMovie::new("The Prestige", "Nolan", "Drama", 2006, 8.5),
            NewMovie::new("100% Wolf", "Stadermann", "Animation", 2020, 5.6),
            NewMovie::new("花樣年華", "王家衛", "Drama", 2000, 8.1),
        ],
    )
    .unwrap();
    conn
}

fn titles(conn: &Connection, filter: Option<&str>) -> Vec<String> {
    search_movies(conn, filter)
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect()
}

#[test]
fn search_without_filter_returns_all() {
    let conn = setup_db();
    assert_eq!(search_movies(&conn, None).unwrap().len(), 5);
}

#[test]
fn empty_filter_equals_no_filter() {
    let conn = setup_db();
    assert_eq!(
        search_movies(&conn, Some("")).unwrap(),
        search_movies(&conn, None).unwrap()
    );
}

#[test]
fn search_matches_substring() {
    let conn = setup_db();
    assert_eq!(titles(&conn, Some("Incep")), vec!["Inception"]);
    assert_eq!(titles(&conn, Some("st")), vec!["Interstellar", "The Prestige"]);
}

#[test]
fn search_is_case_sensitive() {
    let conn = setup_db();
    assert!(titles(&conn, Some("incep")).is_empty());
    assert_eq!(titles(&conn, Some("In")), vec!["Inception", "Interstellar"]);
}

#[test]
fn search_matches_non_ascii() {
    let conn = setup_db();
    assert_eq!(titles(&conn, Some("年華")), vec!["花樣年華"]);
}

#[test]
fn search_not_found_is_empty() {
    let conn = setup_db();
    assert!(search_movies(&conn, Some("Dunkirk")).unwrap().is_empty());
}

#[test]
fn search_treats_like_metacharacters_as_wildcards() {
    let conn = setup_db();
    // '_' matches any single character
    assert_eq!(titles(&conn, Some("Inc_p")), vec!["Inception"]);
    // '%' matches any run, so "100%" also matches everything starting with "100"
    assert_eq!(titles(&conn, Some("100%")), vec!["100% Wolf"]);
    assert_eq!(titles(&conn, Some("%")).len(), 5);
}

#[test]
fn search_results_ordered_by_id() {
    let conn = setup_db();
    let ids: Vec<i64> = search_movies(&conn, None)
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn find_movie_by_id() {
    let conn = setup_db();
    let first = &search_movies(&conn, Some("Prestige")).unwrap()[0];
    let found = find_movie(&conn, first.id).unwrap();
    assert_eq!(found.as_ref(), Some(first));
    assert_eq!(find_movie(&conn, 9999).unwrap(), None);
}

#[test]
fn count_matches_rows() {
    let conn = setup_db();
    assert_eq!(count_movies(&conn).unwrap(), 5);
}

#[test]
fn search_on_dropped_table_is_storage_error() {
    let conn = setup_db();
    conn.execute_batch("DROP TABLE movies;").unwrap();
    assert!(matches!(
        search_movies(&conn, None),
        Err(StoreError::Storage(_))
    ));
}
