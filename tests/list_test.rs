// tests/list_test.rs
//
// Public-API tests driven through the mock runner, no git binary required.

use git_tags::command::MockCommandRunner;
use git_tags::{GitTagsError, TagLister, TagQuery};

const SCENARIO: &str = "\
HEAD -> master, tag: v1.2.0;f6bf4485cb7a4b40e7d77098671b85a00b8aad3e;
tag: v1.1.1;b65623897a1e4bed9a0c2bb3b26a9cbf4a4cba0d;
tag: v1.1.0;1d56b88e5a634aacbce8e2bc3b4ba1696dcb1be1;
tag: v1.0.0;06743d3eab5e4adcae3cb8a5a2e2e6a3a7b91d4e;
";

fn scenario_lister() -> TagLister<MockCommandRunner> {
    TagLister::new(MockCommandRunner::with_stdout(SCENARIO))
}

fn versions(tags: &[git_tags::Tag]) -> Vec<String> {
    tags.iter().map(|t| t.version.to_string()).collect()
}

#[test]
fn test_unfiltered_list() {
    let tags = scenario_lister().list(TagQuery::new()).unwrap();

    assert_eq!(versions(&tags), vec!["1.2.0", "1.1.1", "1.1.0", "1.0.0"]);
    assert_eq!(tags[0].tag, "v1.2.0");
    assert_eq!(tags[0].hash, "f6bf4485cb7a4b40e7d77098671b85a00b8aad3e");
    assert_eq!(tags[3].tag, "v1.0.0");
}

#[test]
fn test_list_is_never_ascending() {
    let tags = scenario_lister().list(TagQuery::new()).unwrap();
    for pair in tags.windows(2) {
        assert!(
            pair[0].version >= pair[1].version,
            "{} listed before {}",
            pair[0].version,
            pair[1].version
        );
    }
}

#[test]
fn test_caret_range_filter() {
    let tags = scenario_lister().list("^1.1.0").unwrap();
    assert_eq!(versions(&tags), vec!["1.2.0", "1.1.1", "1.1.0"]);
}

#[test]
fn test_filter_agrees_with_unfiltered_list() {
    let lister = scenario_lister();
    let all = lister.list(TagQuery::new()).unwrap();
    let filtered = lister.list("~1.1").unwrap();

    let req = semver::VersionReq::parse("~1.1").unwrap();
    let expected: Vec<_> = all
        .iter()
        .filter(|t| req.matches(&t.version))
        .cloned()
        .collect();
    assert_eq!(filtered, expected);
}

#[test]
fn test_latest_with_tilde_range() {
    let latest = scenario_lister().latest("~1.1").unwrap().unwrap();
    assert_eq!(latest.version.to_string(), "1.1.1");
    assert_eq!(latest.tag, "v1.1.1");
}

#[test]
fn test_latest_equals_list_head() {
    let lister = scenario_lister();
    let latest = lister.latest(TagQuery::new()).unwrap();
    let list = lister.list(TagQuery::new()).unwrap();
    assert_eq!(latest.as_ref(), list.first());
}

#[test]
fn test_multi_tag_commit_selects_semver() {
    let lister = TagLister::new(MockCommandRunner::with_stdout(
        " (tag: latest, tag: v1.0.0);0123456789abcdef0123456789abcdef01234567;\n",
    ));
    let tags = lister.list(TagQuery::new()).unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].tag, "v1.0.0");
    assert_eq!(tags[0].version.to_string(), "1.0.0");
}

#[test]
fn test_empty_output() {
    let lister = TagLister::new(MockCommandRunner::with_stdout(""));
    assert!(lister.list(TagQuery::new()).unwrap().is_empty());
    assert_eq!(lister.latest(TagQuery::new()).unwrap(), None);
}

#[test]
fn test_command_failure_is_whole_call_failure() {
    let lister = TagLister::new(MockCommandRunner::failing("exec failed"));
    assert!(lister.list(TagQuery::new()).is_err());
}

#[test]
fn test_invalid_range_reported() {
    let err = scenario_lister().list("^^nope").unwrap_err();
    match err {
        GitTagsError::Range(message) => assert!(message.contains("^^nope")),
        other => panic!("expected Range error, got {:?}", other),
    }
}
