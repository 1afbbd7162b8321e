//! Test-only schema and seed data.
//!
//! The shipped library owns no DDL — the archive schema belongs to the
//! external store. Tests build it here against an in-memory connection.
//! Every mapping table carries an AUTOINCREMENT id that doubles as the
//! stable insertion-sequence key the panel/guest ordering contract needs.

use rusqlite::{Connection, params};

use super::Database;

const SCHEMA: &str = "
    CREATE TABLE hosts (
        id      INTEGER PRIMARY KEY,
        name    TEXT NOT NULL,
        slug    TEXT NOT NULL UNIQUE,
        gender  TEXT
    );

    CREATE TABLE scorekeepers (
        id      INTEGER PRIMARY KEY,
        name    TEXT NOT NULL,
        slug    TEXT NOT NULL UNIQUE,
        gender  TEXT
    );

    CREATE TABLE panelists (
        id      INTEGER PRIMARY KEY,
        name    TEXT NOT NULL,
        slug    TEXT NOT NULL UNIQUE,
        gender  TEXT
    );

    CREATE TABLE guests (
        id      INTEGER PRIMARY KEY,
        name    TEXT NOT NULL,
        slug    TEXT NOT NULL UNIQUE
    );

    CREATE TABLE locations (
        id      INTEGER PRIMARY KEY,
        city    TEXT,
        state   TEXT,
        venue   TEXT
    );

    CREATE TABLE shows (
        id          INTEGER PRIMARY KEY,
        date        TEXT NOT NULL UNIQUE,
        best_of     INTEGER NOT NULL DEFAULT 0,
        repeat_of   INTEGER REFERENCES shows(id)
    );

    CREATE TABLE show_locations (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        show_id     INTEGER NOT NULL REFERENCES shows(id),
        location_id INTEGER NOT NULL REFERENCES locations(id)
    );

    CREATE TABLE show_hosts (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        show_id INTEGER NOT NULL REFERENCES shows(id),
        host_id INTEGER NOT NULL REFERENCES hosts(id),
        guest   INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE show_scorekeepers (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        show_id         INTEGER NOT NULL REFERENCES shows(id),
        scorekeeper_id  INTEGER NOT NULL REFERENCES scorekeepers(id),
        guest           INTEGER NOT NULL DEFAULT 0,
        description     TEXT
    );

    CREATE TABLE show_panelists (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        show_id         INTEGER NOT NULL REFERENCES shows(id),
        panelist_id     INTEGER NOT NULL REFERENCES panelists(id),
        start_score     INTEGER,
        correct_answers INTEGER,
        score           INTEGER,
        rank            TEXT
    );

    CREATE TABLE show_guests (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        show_id         INTEGER NOT NULL REFERENCES shows(id),
        guest_id        INTEGER NOT NULL REFERENCES guests(id),
        score           INTEGER,
        score_exception INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE show_bluffs (
        id                  INTEGER PRIMARY KEY AUTOINCREMENT,
        show_id             INTEGER NOT NULL REFERENCES shows(id),
        chosen_panelist_id  INTEGER REFERENCES panelists(id),
        correct_panelist_id INTEGER REFERENCES panelists(id)
    );

    CREATE TABLE show_descriptions (
        show_id     INTEGER PRIMARY KEY REFERENCES shows(id),
        description TEXT
    );

    CREATE TABLE show_notes (
        show_id INTEGER PRIMARY KEY REFERENCES shows(id),
        notes   TEXT
    );
";

/// An in-memory archive with the schema but no rows.
pub(crate) fn empty_archive() -> Database {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    Database::from_connection(conn)
}

pub(crate) fn seed_show(db: &Database, id: i64, date: &str, best_of: bool, repeat_of: Option<i64>) {
    db.conn
        .execute(
            "INSERT INTO shows (id, date, best_of, repeat_of) VALUES (?1, ?2, ?3, ?4)",
            params![id, date, best_of, repeat_of],
        )
        .unwrap();
}

/// Attach the full core-stage row set (location, host, scorekeeper,
/// description, notes) to a show so the detail assembler can run on it.
pub(crate) fn seed_core(
    db: &Database,
    show_id: i64,
    host_id: i64,
    host_guest: bool,
    description: Option<&str>,
    notes: Option<&str>,
) {
    let c = &db.conn;
    c.execute(
        "INSERT INTO show_locations (show_id, location_id) VALUES (?1, 1)",
        params![show_id],
    )
    .unwrap();
    c.execute(
        "INSERT INTO show_hosts (show_id, host_id, guest) VALUES (?1, ?2, ?3)",
        params![show_id, host_id, host_guest],
    )
    .unwrap();
    c.execute(
        "INSERT INTO show_scorekeepers (show_id, scorekeeper_id, guest, description)
         VALUES (?1, 1, 0, ?2)",
        params![show_id, if show_id == 1 { Some("Keeping score tonight.") } else { None }],
    )
    .unwrap();
    c.execute(
        "INSERT INTO show_descriptions (show_id, description) VALUES (?1, ?2)",
        params![show_id, description],
    )
    .unwrap();
    c.execute(
        "INSERT INTO show_notes (show_id, notes) VALUES (?1, ?2)",
        params![show_id, notes],
    )
    .unwrap();
}

pub(crate) fn seed_panel(
    db: &Database,
    show_id: i64,
    panelist_id: i64,
    start_score: Option<i64>,
    correct_answers: Option<i64>,
    score: Option<i64>,
    rank: Option<&str>,
) {
    db.conn
        .execute(
            "INSERT INTO show_panelists (show_id, panelist_id, start_score, correct_answers, score, rank)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![show_id, panelist_id, start_score, correct_answers, score, rank],
        )
        .unwrap();
}

/// The canonical seed dataset shared across test modules.
///
/// Shows (all hosted by host 1 except the best-of, with scorekeeper 1 and
/// location 1 throughout):
///
/// | id | date       | kind          | panel (insertion order)               |
/// |----|------------|---------------|---------------------------------------|
/// | 1  | 2006-08-19 | regular       | p2 (5, '1'), p3 (4, null), p1 (2, '3')|
/// | 2  | 2006-08-26 | regular       | p2 (4, '1t'), p1 (4, '1t')            |
/// | 3  | 2006-09-02 | regular       | p1 (4, '2')                           |
/// | 4  | 2006-09-09 | regular       | p1 (6, '1')                           |
/// | 5  | 2006-11-11 | regular       | p1 (null, '2t')                       |
/// | 6  | 2006-10-07 | best-of       | p1 (9, '1'), guest host 2             |
/// | 7  | 2006-10-14 | repeat of 1   | p1 (8, '1')                           |
/// | 8  | 2007-03-03 | regular       | (no panel, no bluff, no guests)       |
///
/// Panelist 1's regular-show score series is therefore [2, 4, 4, 6] with
/// five rank codes ('3', '1t', '2', '1', '2t'). Panelist 3 has one score but
/// no rank; panelist 4 never appears.
pub(crate) fn archive() -> Database {
    let db = empty_archive();
    let c = &db.conn;

    c.execute_batch(
        "
        INSERT INTO hosts (id, name, slug, gender) VALUES
            (1, 'Evan Corliss', 'evan-corliss', 'M'),
            (2, 'Tamsin Lowe', 'tamsin-lowe', 'F');

        INSERT INTO scorekeepers (id, name, slug, gender) VALUES
            (1, 'Lena Ortiz', 'lena-ortiz', 'F');

        INSERT INTO panelists (id, name, slug, gender) VALUES
            (1, 'Dana Whitfield', 'dana-whitfield', 'F'),
            (2, 'Marcus Teal', 'marcus-teal', 'M'),
            (3, 'Priya Raman', 'priya-raman', 'F'),
            (4, 'Wes Calloway', 'wes-calloway', 'M');

        INSERT INTO guests (id, name, slug) VALUES
            (1, 'Corinne Vasquez', 'corinne-vasquez'),
            (2, 'Hollis Breen', 'hollis-breen');

        INSERT INTO locations (id, city, state, venue) VALUES
            (1, 'Chicago', 'IL', 'Harbor Theater');
        ",
    )
    .unwrap();

    seed_show(&db, 1, "2006-08-19", false, None);
    seed_show(&db, 2, "2006-08-26", false, None);
    seed_show(&db, 3, "2006-09-02", false, None);
    seed_show(&db, 4, "2006-09-09", false, None);
    seed_show(&db, 5, "2006-11-11", false, None);
    seed_show(&db, 6, "2006-10-07", true, None);
    seed_show(&db, 7, "2006-10-14", false, Some(1));
    seed_show(&db, 8, "2007-03-03", false, None);

    seed_core(&db, 1, 1, false, Some("  A live taping from the Harbor Theater.  "), None);
    seed_core(&db, 2, 1, false, Some("Back in Chicago."), Some("Pledge week."));
    seed_core(&db, 3, 1, false, None, None);
    seed_core(&db, 4, 1, false, None, None);
    seed_core(&db, 5, 1, false, None, None);
    seed_core(&db, 6, 2, true, Some("Best-of compilation."), None);
    seed_core(&db, 7, 1, false, Some("Encore presentation."), None);
    seed_core(&db, 8, 1, false, Some("   "), Some("Season opener."));

    // Show 1: three panelists, inserted in a deliberate non-score order.
    seed_panel(&db, 1, 2, Some(2), Some(4), Some(5), Some("1"));
    seed_panel(&db, 1, 3, Some(1), Some(3), Some(4), None);
    seed_panel(&db, 1, 1, Some(0), Some(1), Some(2), Some("3"));

    // Show 2: a scoring tie — insertion order breaks it (p2 before p1).
    seed_panel(&db, 2, 2, Some(2), Some(3), Some(4), Some("1t"));
    seed_panel(&db, 2, 1, Some(1), Some(2), Some(4), Some("1t"));

    seed_panel(&db, 3, 1, Some(2), Some(3), Some(4), Some("2"));
    seed_panel(&db, 4, 1, Some(3), Some(5), Some(6), Some("1"));
    seed_panel(&db, 5, 1, Some(1), Some(1), None, Some("2t"));
    seed_panel(&db, 6, 1, Some(0), Some(0), Some(9), Some("1"));
    seed_panel(&db, 7, 1, Some(0), Some(0), Some(8), Some("1"));

    // Show 1 guests: Hollis inserted first, so he leads the guest list even
    // though his id is higher.
    c.execute(
        "INSERT INTO show_guests (show_id, guest_id, score, score_exception) VALUES (1, 2, 14, 0)",
        [],
    )
    .unwrap();
    c.execute(
        "INSERT INTO show_guests (show_id, guest_id, score, score_exception) VALUES (1, 1, NULL, 1)",
        [],
    )
    .unwrap();

    // Bluffs: show 1 has both sides, show 2 only the correct panelist.
    c.execute(
        "INSERT INTO show_bluffs (show_id, chosen_panelist_id, correct_panelist_id) VALUES (1, 2, 3)",
        [],
    )
    .unwrap();
    c.execute(
        "INSERT INTO show_bluffs (show_id, chosen_panelist_id, correct_panelist_id) VALUES (2, NULL, 1)",
        [],
    )
    .unwrap();

    db
}
