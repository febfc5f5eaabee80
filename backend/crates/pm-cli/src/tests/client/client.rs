use crate::{Client, Identity};

use std::time::Duration;

use googletest::prelude::*;

#[test]
fn given_trailing_slash_when_creating_client_then_trimmed() {
    let client = Client::new("http://localhost:8000/");

    assert_that!(client.base_url.as_str(), eq("http://localhost:8000"));
}

#[test]
fn given_no_trailing_slash_when_creating_client_then_unchanged() {
    let client = Client::new("http://localhost:8000");

    assert_that!(client.base_url.as_str(), eq("http://localhost:8000"));
}

#[test]
fn given_new_client_when_no_identity_set_then_anonymous() {
    let client = Client::new("http://localhost:8000");

    assert_that!(client.identity, eq(&Identity::Anonymous));
}

#[test]
fn given_token_when_building_client_then_identity_stored() {
    let client = Client::new("http://localhost:8000")
        .with_identity(Identity::Token("abc".to_string()))
        .with_timeout(Duration::from_secs(3));

    assert_that!(client.identity, eq(&Identity::Token("abc".to_string())));
}
