use std::fs;
use std::path::{Path, PathBuf};

use hoops_ingest::{IngestError, load_boxscores, load_games, load_players, read_csv_frame};
use polars::prelude::*;
use tempfile::TempDir;

fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_frame_with_dates() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        dir.path(),
        "games.csv",
        "boxscore_link,date,playoffs\ng1,2021-04-01,false\ng2,2021-04-03,true\n",
    );
    let df = read_csv_frame(&path).expect("read csv");
    assert_eq!(df.shape(), (2, 3));
    assert_eq!(df.column("date").unwrap().dtype(), &DataType::Date);
    assert_eq!(df.column("playoffs").unwrap().dtype(), &DataType::Boolean);
}

#[test]
fn load_boxscores_drops_duplicate_rows() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        dir.path(),
        "boxscores.csv",
        "game_url,player_link,team,minutes,pts\n\
         g1,p1,A,30,12\n\
         g1,p1,A,28,12\n\
         g1,p2,B,20,4\n\
         g2,p1,A,33,21\n",
    );
    let df = load_boxscores(&path).expect("load boxscores");
    assert_eq!(df.height(), 3);
    assert!(df.column("boxscore_link").is_ok());
    assert!(df.column("game_url").is_err());
}

#[test]
fn load_games_resolves_playoff_conflicts() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        dir.path(),
        "games.csv",
        "boxscore_link,season_link,date,playoffs,location\n\
         g1,s21,2021-04-01,false,home\n\
         g1,s21,2021-04-01,false,away\n\
         g2,s21,2021-05-20,false,home\n\
         g2,s21,2021-05-20,true,away\n",
    );
    let df = load_games(&path).expect("load games");
    assert_eq!(df.height(), 2);
    assert!(df.column("location").is_err());
    let playoffs: Vec<_> = df
        .column("playoffs")
        .unwrap()
        .bool()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(playoffs, vec![Some(false), Some(true)]);
}

#[test]
fn load_players_normalises_attributes() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        dir.path(),
        "players.csv",
        "player_link,birth_date,height,pos\n\
         p1,1990-01-02,6-6,G-F\n\
         p2,1991-03-04,7-0,C\n",
    );
    let df = load_players(&path).expect("load players");
    assert_eq!(df.column("birth_date").unwrap().dtype(), &DataType::Date);
    let height: Vec<_> = df
        .column("height")
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(height, vec![Some(6.5), Some(7.0)]);
    for column in ["pos_f", "pos_c", "pos_g", "n_pos", "pos_f_scaled"] {
        assert!(df.column(column).is_ok(), "{column} missing");
    }
}

#[test]
fn missing_required_column_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(dir.path(), "players.csv", "player_link,height\np1,6-6\n");
    let err = load_players(&path).unwrap_err();
    assert!(matches!(
        err,
        IngestError::MissingColumn { ref column, table: "player" } if column == "birth_date"
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_games(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
