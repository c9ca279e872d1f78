use ragcheck_cache::{FileCache, PromptCache};

#[tokio::test]
async fn put_get_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path());

    cache.put("some prompt", "some response").await.unwrap();
    let result = cache.get("some prompt").await.unwrap();
    assert_eq!(result.as_deref(), Some("some response"));
}

#[tokio::test]
async fn miss_on_unknown_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path());

    assert!(cache.get("never stored").await.unwrap().is_none());
}

#[tokio::test]
async fn miss_before_directory_exists() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path().join("not-yet-created"));

    assert!(cache.get("anything").await.unwrap().is_none());
}

#[tokio::test]
async fn same_prompt_maps_to_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path());

    cache.put("prompt", "first").await.unwrap();
    cache.put("prompt", "second").await.unwrap();

    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
    assert_eq!(cache.get("prompt").await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn different_prompts_map_to_different_files() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path());

    cache.put("prompt a", "ra").await.unwrap();
    cache.put("prompt b", "rb").await.unwrap();

    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 2);
    assert_eq!(cache.get("prompt a").await.unwrap().as_deref(), Some("ra"));
    assert_eq!(cache.get("prompt b").await.unwrap().as_deref(), Some("rb"));
}

#[tokio::test]
async fn entries_are_inspectable_json() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path());

    cache.put("the prompt", "the response").await.unwrap();

    let entry_path = std::fs::read_dir(dir.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(entry_path).unwrap()).unwrap();
    assert_eq!(parsed["prompt"], "the prompt");
    assert_eq!(parsed["response"], "the response");
}

#[tokio::test]
async fn corrupt_entry_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path());

    cache.put("prompt", "response").await.unwrap();
    let entry_path = std::fs::read_dir(dir.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    std::fs::write(&entry_path, "{corrupt").unwrap();

    let err = cache.get("prompt").await.unwrap_err();
    assert!(err.to_string().contains("cache error"));
}

#[tokio::test]
async fn clear_removes_entries() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path());

    cache.put("a", "va").await.unwrap();
    cache.put("b", "vb").await.unwrap();
    cache.clear().await.unwrap();

    assert!(cache.get("a").await.unwrap().is_none());
    assert!(cache.get("b").await.unwrap().is_none());
}
