use serde_json::{Value, json};

/// People, friends, tilde test values and three levels of nested family arrays.
pub const PEOPLE: &str = r#"{
    "name": {"first": "Tom", "last": "Anderson"},
    "age": 37,
    "children": ["Sara", "Alex", "Jack"],
    "fav.movie": "Deer Hunter",
    "friends": [
        {"first": "Dale", "last": "Murphy", "age": 44, "nets": ["ig", "fb", "tw"]},
        {"first": "Roger", "last": "Craig", "age": 68, "nets": ["fb", "tw"]},
        {"first": "Jane", "last": "Murphy", "age": 47, "nets": ["ig", "tw"]}
    ],
    "vals": [
        {"a": 1, "b": "data"},
        {"a": 2, "b": true},
        {"a": 3, "b": false},
        {"a": 4, "b": "0"},
        {"a": 5, "b": 0},
        {"a": 6, "b": "1"},
        {"a": 7, "b": 1},
        {"a": 8, "b": "true"},
        {"a": 9, "b": false},
        {"a": 10, "b": null},
        {"a": 11}
    ],
    "families": [
        {
            "surname": "Smith",
            "members": [
                {
                    "name": "John",
                    "age": 45,
                    "hobbies": [
                        {"name": "reading", "locations": ["library", "home", "cafe"]},
                        {"name": "cycling", "locations": ["park", "trail"]}
                    ]
                },
                {
                    "name": "Jane",
                    "age": 42,
                    "hobbies": [
                        {"name": "cooking", "locations": ["kitchen", "restaurant"]},
                        {"name": "gardening", "locations": ["backyard", "greenhouse", "community garden"]}
                    ]
                }
            ]
        },
        {
            "surname": "Johnson",
            "members": [
                {
                    "name": "Mike",
                    "age": 38,
                    "hobbies": [
                        {"name": "fishing", "locations": ["lake", "river", "ocean"]},
                        {"name": "photography", "locations": ["studio", "nature", "city"]}
                    ]
                },
                {
                    "name": "Sarah",
                    "age": 35,
                    "hobbies": [
                        {"name": "yoga", "locations": ["studio", "home", "beach"]},
                        {"name": "traveling", "locations": ["mountains", "cities", "beaches", "forests"]}
                    ]
                }
            ]
        },
        {
            "surname": "Williams",
            "members": [
                {
                    "name": "David",
                    "age": 50,
                    "hobbies": [
                        {"name": "woodworking", "locations": ["garage", "workshop"]},
                        {"name": "hiking", "locations": ["mountains", "trails", "national parks"]}
                    ]
                }
            ]
        }
    ]
}"#;

/// The small array document used by the entry-contract scenarios.
pub const XS: &str = r#"{"a":[{"x":1},{"x":2},{"x":3}]}"#;

/// A document of `width` records, each with `depth` nested `items` arrays.
pub fn wide_document(width: usize, depth: usize) -> Value {
    fn nested(depth: usize) -> Value {
        if depth == 0 {
            return json!({"id": 1, "tag": "leaf"});
        }
        json!({"items": [nested(depth - 1), nested(depth - 1)], "tag": "node"})
    }
    Value::Array((0..width).map(|i| json!({"n": i, "node": nested(depth)})).collect())
}
