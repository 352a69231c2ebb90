use std::fs;

use songsim_core::{
    compute_idf, nearest_neighbor, vectorize_corpus, CorpusBuilder, CsvSource, DataSourceError, Error,
    SongIndex, Tokenizer,
};
use tempfile::tempdir;

const SONGS: &str = "\
index,song,year,artist,genre,lyrics
0,Bark,2001,The Pack,Hip-Hop,the dog bit
1,Stranger,1984,Crooners,Not Available,the dog bit the man
2,Bitten,1999,Crooners,Country,the man
";

#[test]
fn csv_to_nearest_neighbor() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("songs.csv");
    fs::write(&path, SONGS).unwrap();

    let source = CsvSource::open(&path).unwrap();
    let corpus = CorpusBuilder::default().build(source.records()).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.skipped(), 1);
    assert_eq!(corpus.get(1).unwrap().title(), "Bitten");

    let idf = compute_idf(&corpus);
    assert_eq!(idf.get("the"), Some(0.0));
    assert_eq!(idf.get("man"), Some(2f64.ln()));

    let table = vectorize_corpus(&corpus, &idf);
    let doc = nearest_neighbor("dog bit the man", &corpus, &table, &idf).unwrap();
    assert_eq!(doc.category(), "Hip-Hop");
}

#[test]
fn malformed_row_yields_no_corpus() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("songs.csv");
    fs::write(&path, format!("{SONGS}3,Short,2000,Nobody\n")).unwrap();

    let source = CsvSource::open(&path).unwrap();
    let err = CorpusBuilder::default().build(source.records()).unwrap_err();
    match err {
        Error::DataSource(DataSourceError::Csv { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn index_reports_scores() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("songs.csv");
    fs::write(&path, SONGS).unwrap();

    let corpus = CorpusBuilder::default()
        .build(CsvSource::open(&path).unwrap().records())
        .unwrap();
    let index = SongIndex::build(corpus, Tokenizer::default());
    let hits = index.search("a man", 10).unwrap();
    assert_eq!(hits[0].0.title(), "Bitten");
    assert_eq!(hits[0].1.similarity, 1.0);
    assert_eq!(hits[1].1.similarity, 0.0);
}

#[test]
fn every_document_carries_a_label() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("songs.csv");
    fs::write(&path, format!("{SONGS}3,Blank,2003,Nobody,,la la\n4,Spaces,2004,Nobody,  ,la\n")).unwrap();

    let corpus = CorpusBuilder::default()
        .build(CsvSource::open(&path).unwrap().records())
        .unwrap();
    assert_eq!(corpus.skipped(), 3);
    assert!(corpus.documents().iter().all(|d| !d.category().trim().is_empty()));
    for (i, doc) in corpus.documents().iter().enumerate() {
        assert_eq!(doc.id() as usize, i);
    }
}
