use cinedex_catalog::*;
use cinedex_db::*;

fn inception() -> NewMovie {
    NewMovie::new("Inception", "Nolan", "Sci-Fi", 2010, 8.8)
}

fn sample_movies() -> Vec<NewMovie> {
    vec![
        NewMovie::new("Inception", "Nolan", "Sci-Fi", 2010, 8.8),
        NewMovie::new("Interstellar", "Nolan", "Sci-Fi", 2014, 8.6),
        NewMovie::new("千と千尋の神隠し", "宮崎駿", "Animation", 2001, 8.6),
    ]
}

#[test]
fn insert_assigns_distinct_ids() {
    let conn = open_memory().unwrap();
    let a = insert_movie(&conn, &inception()).unwrap();
    let b = insert_movie(&conn, &inception()).unwrap();
    assert_ne!(a, b);
    assert_eq!(count_movies(&conn).unwrap(), 2);
}

#[test]
fn insert_rating_boundaries() {
    let conn = open_memory().unwrap();
    for rating in [1.0, 10.0] {
        let mut movie = inception();
        movie.rating = rating;
        insert_movie(&conn, &movie).unwrap();
    }
    for rating in [0.99, 10.01] {
        let mut movie = inception();
        movie.rating = rating;
        assert!(matches!(
            insert_movie(&conn, &movie),
            Err(StoreError::Validation(ValidationError::RatingOutOfRange(_)))
        ));
    }
    assert_eq!(count_movies(&conn).unwrap(), 2);
}

#[test]
fn insert_rejects_empty_title() {
    let conn = open_memory().unwrap();
    let movie = NewMovie::new("", "Nolan", "Sci-Fi", 2010, 8.8);
    assert!(matches!(
        insert_movie(&conn, &movie),
        Err(StoreError::Validation(ValidationError::EmptyField("title")))
    ));
}

#[test]
fn insert_many_commits_all() {
    let conn = open_memory().unwrap();
    let inserted = insert_movies(&conn, &sample_movies()).unwrap();
    assert_eq!(inserted, 3);
    assert_eq!(count_movies(&conn).unwrap(), 3);
}

#[test]
fn insert_many_is_all_or_nothing() {
    let conn = open_memory().unwrap();
    let mut movies = sample_movies();
    movies[2].rating = 42.0;
    assert!(insert_movies(&conn, &movies).is_err());
    assert_eq!(count_movies(&conn).unwrap(), 0);
}

#[test]
fn update_changes_only_present_fields() {
    let conn = open_memory().unwrap();
    let id = insert_movie(&conn, &inception()).unwrap();

    let outcome = update_movie(&conn, id, &MovieUpdate::new().with_rating(9.0)).unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated(1));

    let movie = find_movie(&conn, id).unwrap().unwrap();
    assert_eq!(movie.rating, 9.0);
    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.director, "Nolan");
    assert_eq!(movie.genre, "Sci-Fi");
    assert_eq!(movie.year, 2010);
}

#[test]
fn update_several_fields() {
    let conn = open_memory().unwrap();
    let id = insert_movie(&conn, &inception()).unwrap();

    let update = MovieUpdate::new()
        .with_title("全面啟動")
        .with_genre("Thriller")
        .with_year(2011);
    update_movie(&conn, id, &update).unwrap();

    let movie = find_movie(&conn, id).unwrap().unwrap();
    assert_eq!(movie.title, "全面啟動");
    assert_eq!(movie.genre, "Thriller");
    assert_eq!(movie.year, 2011);
    assert_eq!(movie.director, "Nolan");
    assert_eq!(movie.rating, 8.8);
}

#[test]
fn empty_update_is_noop() {
    let conn = open_memory().unwrap();
    let id = insert_movie(&conn, &inception()).unwrap();
    let before = find_movie(&conn, id).unwrap();

    let outcome = update_movie(&conn, id, &MovieUpdate::new()).unwrap();
    assert_eq!(outcome, UpdateOutcome::NothingToUpdate);
    assert_eq!(find_movie(&conn, id).unwrap(), before);
}

#[test]
fn update_rejects_bad_rating() {
    let conn = open_memory().unwrap();
    let id = insert_movie(&conn, &inception()).unwrap();
    let result = update_movie(&conn, id, &MovieUpdate::new().with_rating(0.5));
    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert_eq!(find_movie(&conn, id).unwrap().unwrap().rating, 8.8);
}

#[test]
fn update_unknown_id_affects_nothing() {
    let conn = open_memory().unwrap();
    insert_movie(&conn, &inception()).unwrap();
    let outcome = update_movie(&conn, 9999, &MovieUpdate::new().with_year(1999)).unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated(0));
}

#[test]
fn delete_by_ids_removes_exactly_those() {
    let conn = open_memory().unwrap();
    insert_movies(&conn, &sample_movies()).unwrap();
    let all = search_movies(&conn, None).unwrap();
    let doomed: Vec<i64> = all.iter().take(2).map(|m| m.id).collect();

    let removed = delete_movies_by_ids(&conn, &doomed).unwrap();
    assert_eq!(removed, 2);

    let remaining = search_movies(&conn, None).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0], all[2]);
}

#[test]
fn delete_by_ids_skips_unknown() {
    let conn = open_memory().unwrap();
    let id = insert_movie(&conn, &inception()).unwrap();
    let removed = delete_movies_by_ids(&conn, &[id, id + 100]).unwrap();
    assert_eq!(removed, 1);
    assert_eq!(count_movies(&conn).unwrap(), 0);
}

#[test]
fn delete_all_empties_store() {
    let conn = open_memory().unwrap();
    insert_movies(&conn, &sample_movies()).unwrap();
    assert_eq!(delete_all_movies(&conn).unwrap(), 3);
    assert_eq!(count_movies(&conn).unwrap(), 0);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_memory().unwrap();
    let first = insert_movie(&conn, &inception()).unwrap();
    delete_all_movies(&conn).unwrap();
    let second = insert_movie(&conn, &inception()).unwrap();
    assert!(second > first);
}

#[test]
fn store_inception_scenario() {
    let store = MovieStore::open_memory().unwrap();
    let id = store.insert_one(&inception()).unwrap();

    let found = store.search(Some("Incep")).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, id);

    store
        .update_by_id(id, &MovieUpdate::new().with_rating(9.0))
        .unwrap();
    let found = store.search(Some("Incep")).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rating, 9.0);
    assert_eq!(found[0].title, "Inception");
    assert_eq!(found[0].director, "Nolan");
    assert_eq!(found[0].genre, "Sci-Fi");
    assert_eq!(found[0].year, 2010);
}
