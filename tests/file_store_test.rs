use std::fs;
use tempfile::TempDir;
use wisesaying::api::{QuoteUpdate, WiseApi};
use wisesaying::config::WiseConfig;
use wisesaying::store::fs::FileStore;
use wisesaying::store::QuoteStore;

fn setup() -> (TempDir, WiseApi<FileStore>) {
    let dir = TempDir::new().unwrap();
    let api = open_api(&dir);
    (dir, api)
}

fn open_api(dir: &TempDir) -> WiseApi<FileStore> {
    let store = FileStore::open(dir.path().join("db/wiseSaying")).unwrap();
    WiseApi::new(store, WiseConfig::default())
}

fn listed_ids(api: &WiseApi<FileStore>, page: i64) -> Vec<u64> {
    api.list(None, None, page)
        .unwrap()
        .listed_quotes
        .unwrap()
        .items
        .iter()
        .map(|q| q.id.unwrap())
        .collect()
}

#[test]
fn test_register_and_list_example() {
    let (_dir, mut api) = setup();
    assert_eq!(
        api.register("현재를 사랑하라.", "작자미상").unwrap().affected_id(),
        Some(1)
    );
    assert_eq!(
        api.register("과거에 집착하지 마라.", "작자미상")
            .unwrap()
            .affected_id(),
        Some(2)
    );

    let paged = api.list(None, None, 1).unwrap().listed_quotes.unwrap();
    assert_eq!(paged.page, 1);
    assert_eq!(paged.total_pages, 1);
    assert_eq!(listed_ids(&api, 1), vec![2, 1]);
}

#[test]
fn test_ids_never_reused_across_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut api = open_api(&dir);
        api.seed(3).unwrap();
        api.delete(3).unwrap();
    }

    let mut api = open_api(&dir);
    let result = api.register("다시", "누군가").unwrap();
    assert_eq!(result.affected_id(), Some(4));
    assert_eq!(api.get(3).unwrap(), None);
}

#[test]
fn test_persistence_across_restart() {
    let dir = TempDir::new().unwrap();
    let before = {
        let mut api = open_api(&dir);
        api.seed(4).unwrap();
        api.modify(2, &QuoteUpdate::new(Some("바뀐 명언".into()), None))
            .unwrap();
        api.store().find_all().unwrap()
    };

    let api = open_api(&dir);
    let after = api.store().find_all().unwrap();
    assert_eq!(before, after);
    assert_eq!(after[2].content, "바뀐 명언");
}

#[test]
fn test_pagination_over_files() {
    let (_dir, mut api) = setup();
    api.seed(10).unwrap();

    assert_eq!(listed_ids(&api, 1), vec![10, 9, 8, 7, 6]);
    assert_eq!(listed_ids(&api, 2), vec![5, 4, 3, 2, 1]);
    let paged = api.list(None, None, 2).unwrap().listed_quotes.unwrap();
    assert_eq!(paged.total_pages, 2);
}

#[test]
fn test_malformed_record_does_not_break_listing() {
    let (dir, mut api) = setup();
    api.seed(2).unwrap();
    fs::write(dir.path().join("db/wiseSaying/1.json"), "{ \"id\": 1 }").unwrap();

    assert_eq!(listed_ids(&api, 1), vec![2]);
    assert_eq!(api.get(1).unwrap(), None);
}

#[test]
fn test_non_utf8_record_does_not_break_list_or_export() {
    let (dir, mut api) = setup();
    api.seed(2).unwrap();
    fs::write(dir.path().join("db/wiseSaying/1.json"), [0xff, 0xfe, b'{']).unwrap();

    assert_eq!(listed_ids(&api, 1), vec![2]);
    assert_eq!(api.get(1).unwrap(), None);

    let path = dir.path().join("data.json");
    api.build_export(Some(&path)).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"id\": 2"));
    assert!(!written.contains("\"id\": 1"));
}

#[test]
fn test_export_is_ascending() {
    let (dir, mut api) = setup();
    api.seed(3).unwrap();
    let path = dir.path().join("data.json");
    api.build_export(Some(&path)).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "[");
    assert_eq!(
        lines[1],
        "  { \"id\": 1, \"content\": \"명언 1\", \"author\": \"작자미상 1\" },"
    );
    assert_eq!(
        lines[3],
        "  { \"id\": 3, \"content\": \"명언 3\", \"author\": \"작자미상 3\" }"
    );
    assert_eq!(lines[4], "]");
    assert!(written.ends_with("]\n"));
}

#[test]
fn test_reset_removes_files() {
    let (dir, mut api) = setup();
    api.seed(2).unwrap();
    api.reset().unwrap();

    let root = dir.path().join("db/wiseSaying");
    assert!(!root.join("1.json").exists());
    assert_eq!(fs::read_to_string(root.join("lastId.txt")).unwrap(), "0");
}
