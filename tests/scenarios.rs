// tests/scenarios.rs

//! End-to-end command sessions against the library API.

use pixel_matrix::{
    CommandError, CommandRouter, Config, FileSink, Grid, MemorySink, Pixel, RouterStatus,
};

fn session(lines: &[&str]) -> CommandRouter<MemorySink> {
    let mut router = CommandRouter::new(MemorySink::new());
    for line in lines {
        router
            .execute(line)
            .unwrap_or_else(|e| panic!("'{}' failed: {}", line, e));
    }
    router
}

#[test_log::test]
fn test_new_matrix_has_default_pixels() {
    let router = session(&["I 5 6"]);
    let grid = router.grid().unwrap();
    let rows: Vec<&[Pixel]> = grid.rows().collect();
    assert_eq!(rows.len(), 6);
    for row in rows {
        assert_eq!(row.len(), 5);
        assert!(row.iter().all(|p| *p == grid.default_pixel()));
    }
}

#[test_log::test]
fn test_set_pixel_scenario() {
    let router = session(&["I 5 6", "L 2 3 A"]);
    assert_eq!(
        router.grid().unwrap().to_string(),
        "OOOOO\nOOOOO\nOAOOO\nOOOOO\nOOOOO\nOOOOO"
    );
}

#[test_log::test]
fn test_draw_and_fill_scenario() {
    let router = session(&["I 5 6", "L 2 3 A", "V 2 3 4 W", "H 3 4 2 Z", "F 3 3 J", "S out.bmp"]);
    let expected = "JJJJJ\nJJZZJ\nJWJJJ\nJWJJJ\nJJJJJ\nJJJJJ";
    assert_eq!(router.grid().unwrap().render(), expected);
    assert_eq!(router.sink().contents("out.bmp"), Some(expected.as_bytes()));
}

#[test_log::test]
fn test_drawing_before_init_fails() {
    let mut router = CommandRouter::new(MemorySink::new());
    let err = router.execute("L 2 3 A").unwrap_err();
    assert!(matches!(err, CommandError::NoActiveGrid { .. }));
    assert!(err.to_string().contains("I X Y"));
}

#[test_log::test]
fn test_init_with_non_integers_fails() {
    let mut router = CommandRouter::new(MemorySink::new());
    let err = router.execute("I a 6").unwrap_err();
    assert!(matches!(err, CommandError::InvalidArguments { .. }));
    assert!(err.to_string().contains("I W H"));
}

#[test_log::test]
fn test_errors_do_not_end_session() {
    let mut router = CommandRouter::new(MemorySink::new());
    assert!(router.execute("Z").is_err());
    assert!(router.execute("I 2 2").is_ok());
    assert!(router.execute("L 9 9 A").is_err());
    assert!(router.execute("L 1 1").is_err());
    assert!(router.execute("L 2 2 A").is_ok());
    assert_eq!(router.grid().unwrap().render(), "OO\nOA");
    assert_eq!(router.execute("X").unwrap(), RouterStatus::Exit);
}

#[test_log::test]
fn test_fill_never_crosses_border() {
    // A closed box: filling outside must leave the inside untouched.
    let router = session(&["I 7 7", "K 2 2 6 6 #", "K 3 3 5 5 O", "F 1 1 ."]);
    assert_eq!(
        router.grid().unwrap().render(),
        [".......", ".#####.", ".#OOO#.", ".#OOO#.", ".#OOO#.", ".#####.", "......."].join("\n")
    );
}

#[test]
fn test_save_to_file_system() {
    let path = std::env::temp_dir().join(format!("pixel-matrix-scenario-{}.txt", std::process::id()));
    let mut router = CommandRouter::with_config(FileSink, Config::default());
    router.execute("I 3 2").unwrap();
    router.execute("K 1 1 2 2 W").unwrap();
    router
        .execute(&format!("S {}", path.display()))
        .unwrap();
    let saved = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(saved, "WWO\nWWO");
}

#[test]
fn test_grid_api_matches_router() {
    let mut grid = Grid::new(5, 6).unwrap();
    grid.set(1, 2, Pixel::new('A').unwrap()).unwrap();
    let router = session(&["I 5 6", "L 2 3 A"]);
    assert_eq!(router.grid(), Some(&grid));
}
