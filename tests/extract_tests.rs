use cert_hunter::extract::{extract_subdomains, parse_records};

#[test]
fn extract_is_deduplicated_and_sorted() {
    let body = r#"[
        {"name_value":"zeta.example.com"},
        {"name_value":"*.alpha.example.com"},
        {"name_value":"alpha.example.com"},
        {"name_value":"zeta.example.com"}
    ]"#;
    let records = parse_records(body).unwrap();
    let subdomains = extract_subdomains(&records);
    assert_eq!(subdomains, vec!["alpha.example.com", "zeta.example.com"]);
}

#[test]
fn wildcard_prefix_is_stripped_once() {
    let records = parse_records(r#"[{"name_value":"*.sub.example.com"}]"#).unwrap();
    assert_eq!(extract_subdomains(&records), vec!["sub.example.com"]);
}

#[test]
fn empty_response_yields_empty_list() {
    let records = parse_records("[]").unwrap();
    assert!(extract_subdomains(&records).is_empty());
}

#[test]
fn malformed_body_is_a_parse_error() {
    assert!(parse_records("502 Bad Gateway").is_err());
    assert!(parse_records(r#"{"not":"an array"}"#).is_err());
}
