use papergraph::{
    load_json_lines, Author, AuthorId, Paper, PaperId, PaperStore, StoreConfig,
};
use std::io::Cursor;

fn three_papers() -> PaperStore {
    let mut store = PaperStore::with_config(StoreConfig::compact().with_current_year(2024));
    store.insert_paper(Paper::new(1u64, "One", "V", 2000)).unwrap();
    store
        .insert_paper(Paper::new(2u64, "Two", "V", 1990).with_references([1u64]))
        .unwrap();
    store
        .insert_paper(Paper::new(3u64, "Three", "V", 1990).with_references([1u64]))
        .unwrap();
    store
}

#[test]
fn test_concrete_scenario() {
    let store = three_papers();
    let query = store.query();

    assert_eq!(query.oldest_influence(PaperId::new(2)), Some("One"));
    assert_eq!(query.influenced_count(PaperId::new(1), 1), 2);
    assert_eq!(query.count_between(1990, 2000), 3);
    assert_eq!(query.venue_impact("V"), 2.0 / 3.0);
}

#[test]
fn test_insertion_order_does_not_matter() {
    let papers = vec![
        Paper::new(1u64, "A", "X", 2005).with_references([2u64]).with_fields(["f"]),
        Paper::new(2u64, "B", "X", 1999).with_fields(["f"]),
        Paper::new(3u64, "C", "Y", 2010).with_references([1u64, 2]).with_fields(["f"]),
        Paper::new(4u64, "D", "Y", 1999).with_references([3u64]).with_fields(["f"]),
    ];

    let mut forward = PaperStore::with_config(StoreConfig::compact());
    for p in papers.iter().cloned() {
        forward.insert_paper(p).unwrap();
    }
    let mut backward = PaperStore::with_config(StoreConfig::compact());
    for p in papers.iter().rev().cloned() {
        backward.insert_paper(p).unwrap();
    }

    let (f, b) = (forward.query(), backward.query());
    for id in 1..=4u64 {
        let id = PaperId::new(id);
        assert_eq!(f.oldest_influence(id), b.oldest_influence(id));
        for d in -1..4 {
            assert_eq!(f.influenced_count(id, d), b.influenced_count(id, d));
        }
    }
    assert_eq!(f.top_cited_by_field("f", 4), b.top_cited_by_field("f", 4));
    assert_eq!(f.venue_impact("X"), b.venue_impact("X"));
    assert_eq!(f.influenced_count(PaperId::new(2), 1), 2);
}

#[test]
fn test_unknown_keys_yield_empty_results() {
    let store = three_papers();
    let query = store.query();

    assert_eq!(query.oldest_influence(PaperId::new(404)), None);
    assert_eq!(query.influenced_count(PaperId::new(404), 5), 0);
    assert_eq!(query.venue_impact("missing"), 0.0);
    assert_eq!(query.venue_impact(""), 0.0);
    assert!(query.top_cited_by_field("", 3).is_empty());
    assert_eq!(query.authors_with_field("MIT", "missing"), 0);
    assert!(query.citation_histogram(AuthorId::new(404)).is_empty());
    assert_eq!(query.count_between(2100, 2200), 0);
}

#[test]
fn test_loaded_corpus_end_to_end() {
    let corpus = r#"
{"id": 100, "title": "MapReduce", "venue": "OSDI", "year": 2004, "authors": [{"name": "Jeff", "id": 1, "org": "Google"}, {"name": "Sanjay", "id": 2, "org": "Google"}], "fields": ["systems"]}
{"id": 101, "title": "Spark", "venue": "NSDI", "year": 2012, "authors": [{"name": "Matei", "id": 3, "org": "Berkeley"}], "fields": ["systems"], "references": [100]}
{"id": 102, "title": "Dryad", "venue": "EuroSys", "year": 2007, "authors": [{"name": "Michael", "id": 4, "org": "Microsoft"}], "fields": ["systems"], "references": [100]}
{"id": 103, "title": "Naiad", "venue": "SOSP", "year": 2013, "authors": [{"name": "Michael", "id": 4, "org": "Microsoft"}], "fields": ["systems", "streams"], "references": [101, 102, 100]}
"#;
    let mut store = PaperStore::with_config(StoreConfig::compact().with_current_year(2014));
    assert_eq!(load_json_lines(Cursor::new(corpus), &mut store).unwrap(), 4);

    let query = store.query();
    assert_eq!(query.oldest_influence(PaperId::new(103)), Some("MapReduce"));
    assert_eq!(query.influenced_count(PaperId::new(100), 1), 3);
    assert_eq!(query.top_cited_by_field("systems", 2), vec!["MapReduce", "Spark"]);
    assert_eq!(query.venue_impact("OSDI"), 3.0);
    assert_eq!(query.authors_with_field("Google", "systems"), 2);
    assert_eq!(query.authors_with_field("Microsoft", "systems"), 1);
    // Michael: Dryad (2007, 1 citation), Naiad (2013, 0 citations)
    assert_eq!(query.citation_histogram(AuthorId::new(4)), vec![0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(query.count_between(2005, 2013), 3);

    let stats = store.statistics();
    assert_eq!(stats.papers, 4);
    assert_eq!(stats.references, 5);
    assert_eq!(stats.dangling_references, 0);
}

#[test]
fn test_authors_are_per_paper_copies() {
    let mut store = PaperStore::with_config(StoreConfig::compact());
    store
        .insert_paper(
            Paper::new(1u64, "Early", "V", 2000)
                .with_fields(["ml"])
                .with_authors(vec![Author::new("Y. LeCun", 9u64, "Bell Labs")]),
        )
        .unwrap();
    store
        .insert_paper(
            Paper::new(2u64, "Late", "V", 2015)
                .with_fields(["ml"])
                .with_authors(vec![Author::new("Yann LeCun", 9u64, "NYU")]),
        )
        .unwrap();

    let query = store.query();
    assert_eq!(query.authors_with_field("Bell Labs", "ml"), 1);
    assert_eq!(query.authors_with_field("NYU", "ml"), 1);
    assert_eq!(store.indices().authors().papers(&AuthorId::new(9)).count(), 2);
}
