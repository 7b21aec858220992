//! Canned GitHub payloads shared by the integration tests.

use serde_json::{Value, json};

pub const ORG: &str = "google";

pub fn org_payload(repos_url: &str) -> Value {
    json!({
        "login": ORG,
        "id": 1342004,
        "url": "https://api.github.com/orgs/google",
        "repos_url": repos_url,
        "description": "Google ❤️ Open Source",
        "public_repos": 4,
        "type": "Organization"
    })
}

pub fn repos_payload() -> Value {
    json!([
        {
            "id": 7697149,
            "name": "episodes.dart",
            "full_name": "google/episodes.dart",
            "private": false,
            "fork": false,
            "license": null
        },
        {
            "id": 7776515,
            "name": "cpp-netlib",
            "full_name": "google/cpp-netlib",
            "private": false,
            "fork": true,
            "license": {
                "key": "bsl-1.0",
                "name": "Boost Software License 1.0",
                "spdx_id": "BSL-1.0"
            }
        },
        {
            "id": 7968417,
            "name": "dagger",
            "full_name": "google/dagger",
            "private": false,
            "fork": true,
            "license": {
                "key": "apache-2.0",
                "name": "Apache License 2.0",
                "spdx_id": "Apache-2.0"
            }
        },
        {
            "id": 8566972,
            "name": "kratu",
            "full_name": "google/kratu",
            "private": false,
            "fork": false,
            "license": {
                "key": "apache-2.0",
                "name": "Apache License 2.0",
                "spdx_id": "Apache-2.0"
            }
        }
    ])
}

pub fn expected_repos() -> Vec<&'static str> {
    vec!["episodes.dart", "cpp-netlib", "dagger", "kratu"]
}

pub fn apache2_repos() -> Vec<&'static str> {
    vec!["dagger", "kratu"]
}
