use starrank::extract::{extract_urls, github_repos};
use starrank::models::RepoRef;

#[test]
fn test_extracts_scheme_prefixed_url() {
    let urls = extract_urls("See https://github.com/rust-lang/rust for details.");
    assert_eq!(urls, vec!["https://github.com/rust-lang/rust"]);
}

#[test]
fn test_extracts_www_and_bare_host_forms() {
    let text = "Visit www.example.com/page or example.org/docs/index today";
    let urls = extract_urls(text);
    assert_eq!(urls, vec!["www.example.com/page", "example.org/docs/index"]);
}

#[test]
fn test_markdown_link_does_not_swallow_parens() {
    let urls = extract_urls("Check out [Tokio](https://github.com/tokio-rs/tokio)!");
    assert_eq!(urls, vec!["https://github.com/tokio-rs/tokio"]);
}

#[test]
fn test_markdown_brackets_and_trailing_punctuation() {
    let text = "<https://github.com/serde-rs/serde>, then https://github.com/serde-rs/json.";
    let urls = extract_urls(text);
    assert_eq!(
        urls,
        vec![
            "https://github.com/serde-rs/serde",
            "https://github.com/serde-rs/json",
        ]
    );
}

#[test]
fn test_duplicates_preserved_at_extraction_stage() {
    let text = "https://github.com/foo/bar and again https://github.com/foo/bar";
    assert_eq!(extract_urls(text).len(), 2);
}

#[test]
fn test_filter_accepts_repo_urls() {
    let repo = RepoRef::from_url("https://github.com/rust-lang/rust").expect("repo URL");
    assert_eq!(repo.owner, "rust-lang");
    assert_eq!(repo.repo, "rust");
}

#[test]
fn test_filter_uses_first_two_path_segments() {
    let repo = RepoRef::from_url("https://github.com/tokio-rs/tokio/issues/42").expect("repo URL");
    assert_eq!(repo.owner, "tokio-rs");
    assert_eq!(repo.repo, "tokio");
}

#[test]
fn test_filter_rejects_non_repo_urls() {
    // Organization/user pages have fewer than two path segments
    assert!(RepoRef::from_url("https://github.com/rust-lang").is_none());
    assert!(RepoRef::from_url("https://github.com/").is_none());
    // Other hosts
    assert!(RepoRef::from_url("https://gitlab.com/foo/bar").is_none());
    assert!(RepoRef::from_url("https://www.github.com/foo/bar").is_none());
    // Scheme-less strings never parse as absolute URLs
    assert!(RepoRef::from_url("github.com/foo/bar").is_none());
}

#[test]
fn test_normalization_is_case_insensitive_and_idempotent() {
    let mixed = RepoRef::from_url("https://github.com/Rust-Lang/Rust").expect("repo URL");
    let lower = RepoRef::from_url("https://github.com/rust-lang/rust").expect("repo URL");

    assert_eq!(mixed.key(), "rust-lang/rust");
    assert_eq!(mixed.key(), lower.key());
    assert_eq!(mixed.key().to_lowercase(), mixed.key());
}

#[test]
fn test_dedupe_collapses_case_variants() {
    // Same repo referenced twice in different case resolves to one entry
    let text = "https://github.com/foo/Bar plus https://github.com/FOO/bar";
    let repos = github_repos(&extract_urls(text));

    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].key(), "foo/bar");
    // Original casing of the first occurrence is retained
    assert_eq!(repos[0].owner, "foo");
    assert_eq!(repos[0].repo, "Bar");
}

#[test]
fn test_dedupe_preserves_first_seen_order() {
    let text = "https://github.com/b/b https://github.com/a/a https://github.com/b/b";
    let repos = github_repos(&extract_urls(text));

    let keys: Vec<String> = repos.iter().map(|r| r.key()).collect();
    assert_eq!(keys, vec!["b/b", "a/a"]);
}

#[test]
fn test_mixed_document_end_to_end() {
    let markdown = r#"
# Awesome list

- [rust](https://github.com/rust-lang/rust)
- [the same repo](https://github.com/Rust-Lang/Rust)
- [an org page](https://github.com/tokio-rs)
- [elsewhere](https://example.com/rust-lang/rust)
"#;

    let repos = github_repos(&extract_urls(markdown));
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].key(), "rust-lang/rust");
}
