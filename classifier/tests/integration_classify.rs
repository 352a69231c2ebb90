use classifier::{classify, nearest, search, stats, ClassifyOptions};
use songsim_core::NormalizerKind;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_songs(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("small_songdata.csv");
    fs::write(
        &path,
        "index,song,year,artist,genre,lyrics
0,Pistol,2018,J. Cole,Hip-Hop,\"Money in your palm don't make you real
Pistol in your hand don't make you real\"
1,Fields,1972,Old Band,Country,\"Rolling down the dusty road
the fields are gold\"
2,Unknown,2000,Nobody,Not Available,money money money
3,Noche,2010,Grupo,Latin,\"la noche, corazón
bailando\"
",
    )
    .unwrap();
    path
}

#[test]
fn classify_returns_category_of_nearest_song() {
    let dir = tempdir().unwrap();
    let path = write_songs(dir.path());
    let opts = ClassifyOptions::default();

    let genre = classify(&path, "I got money in my palm, for real", &opts).unwrap();
    assert_eq!(genre, "Hip-Hop");
    let genre = classify(&path, "dusty fields", &opts).unwrap();
    assert_eq!(genre, "Country");
}

#[test]
fn nearest_reports_score_and_metadata() {
    let dir = tempdir().unwrap();
    let path = write_songs(dir.path());
    let hit = nearest(&path, "bailando", &ClassifyOptions::default()).unwrap();
    assert_eq!(hit.title, "Noche");
    assert_eq!(hit.year, 2010);
    assert_eq!(hit.doc_id, 2);
    assert!(hit.similarity > 0.0);
}

#[test]
fn unicode_normalizer_matches_accented_words() {
    let dir = tempdir().unwrap();
    let path = write_songs(dir.path());
    let opts = ClassifyOptions { normalizer: NormalizerKind::Unicode, ..Default::default() };
    let hits = search(&path, "corazón", 3, &opts).unwrap();
    assert_eq!(hits[0].category, "Latin");
    assert_eq!(hits.len(), 3);
}

#[test]
fn sentinel_is_configurable() {
    let dir = tempdir().unwrap();
    let path = write_songs(dir.path());

    let s = stats(&path, &ClassifyOptions::default()).unwrap();
    assert_eq!(s.num_docs, 3);
    assert_eq!(s.skipped, 1);

    let opts = ClassifyOptions { sentinel: "Latin".into(), ..Default::default() };
    let s = stats(&path, &opts).unwrap();
    assert_eq!(s.num_docs, 3);
    assert_eq!(s.skipped, 1);
    assert_eq!(classify(&path, "money money", &opts).unwrap(), "Not Available");
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    let err = classify(&dir.path().join("absent.csv"), "anything", &ClassifyOptions::default());
    assert!(err.is_err());
}
