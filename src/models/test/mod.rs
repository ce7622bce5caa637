use crate::models::{encode, Operation, OperationKind};
use crate::ErrorKind;

const BASE: &str = "https://cloud.feedly.com";

#[test]
fn search_url_encodes_query_and_appends_locale() {
    let op = Operation::search("python programming", 10, Some("en")).unwrap();
    assert_eq!(op.request_url(BASE),
        "https://cloud.feedly.com/v3/search/feeds?query=python%20programming&count=10&locale=en");
}

#[test]
fn search_url_omits_unset_locale() {
    let op = Operation::search("rust", 15, None).unwrap();
    assert_eq!(op.request_url(BASE), "https://cloud.feedly.com/v3/search/feeds?query=rust&count=15");
}

#[test]
fn stream_url_escapes_slash() {
    let op = Operation::stream("feed/abc", 5).unwrap();
    assert_eq!(op.request_url(BASE), "https://cloud.feedly.com/v3/streams/contents?streamId=feed%2Fabc&count=5");
}

#[test]
fn entry_url_puts_id_in_path() {
    let op = Operation::entry("entry123").unwrap();
    assert_eq!(op.request_url(BASE), "https://cloud.feedly.com/v3/entries/entry123");
}

#[test]
fn trailing_slash_on_base_is_ignored() {
    let op = Operation::entry("entry123").unwrap();
    assert_eq!(op.request_url("https://cloud.feedly.com/"), "https://cloud.feedly.com/v3/entries/entry123");
    assert_eq!(op.request_url("http://127.0.0.1:8080/api/"), "http://127.0.0.1:8080/api/v3/entries/entry123");
}

#[test]
fn reserved_characters_are_escaped() {
    let op = Operation::search("a&b=c/d?e#f g+h", 3, None).unwrap();
    let url = op.request_url(BASE);
    let query = url.split_once("query=").unwrap().1.split_once("&count=").unwrap().0;

    assert_eq!(query, "a%26b%3Dc%2Fd%3Fe%23f%20g%2Bh");
    for reserved in [' ', '&', '/', '?', '#', '=', '+'] {
        assert!(!query.contains(reserved), "query {} contains unescaped {:?}", query, reserved);
    }
}

#[test]
fn unicode_is_percent_encoded_as_utf8() {
    assert_eq!(encode("café"), "caf%C3%A9");
    assert_eq!(encode("日本"), "%E6%97%A5%E6%9C%AC");
    assert_eq!(encode("safe-._~"), "safe-._~");
}

#[test]
fn entry_id_with_slashes_stays_one_segment() {
    let op = Operation::entry("feed/http://example.com/rss_1").unwrap();
    assert_eq!(op.request_url(BASE),
        "https://cloud.feedly.com/v3/entries/feed%2Fhttp%3A%2F%2Fexample.com%2Frss_1");
}

#[test]
fn zero_count_is_rejected() {
    let err = Operation::search("rust", 0, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UsageError);
    assert!(err.to_string().contains("positive integer"), "message was {}", err);

    let err = Operation::stream("feed/abc", 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UsageError);
}

#[test]
fn empty_identifiers_are_rejected() {
    assert_eq!(Operation::search("", 15, None).unwrap_err().kind(), ErrorKind::UsageError);
    assert_eq!(Operation::search("rust", 15, Some("")).unwrap_err().kind(), ErrorKind::UsageError);
    assert_eq!(Operation::stream("", 15).unwrap_err().kind(), ErrorKind::UsageError);
    assert_eq!(Operation::entry("").unwrap_err().kind(), ErrorKind::UsageError);
}

#[test]
fn kind_matches_variant() {
    assert_eq!(Operation::search("q", 1, None).unwrap().kind(), OperationKind::Search);
    assert_eq!(Operation::stream("f", 1).unwrap().kind(), OperationKind::Stream);
    assert_eq!(Operation::entry("e").unwrap().kind(), OperationKind::Entry);
    assert_eq!(OperationKind::Stream.to_string(), "feed stream");
}
