use crate::config::DEFAULT_GO_CHANNEL;
use serde_json::{Value, json};

pub const GO_BUILDTAGS: &str = "go-buildtags";
pub const GO_CHANNEL: &str = "go-channel";
pub const GO_IMPORTPATH: &str = "go-importpath";
pub const GO_PACKAGES: &str = "go-packages";

fn unique_strings() -> Value {
    json!({
        "type": "array",
        "minItems": 1,
        "uniqueItems": true,
        "items": {
            "type": "string"
        },
        "default": []
    })
}

/// JSON schema of the part properties understood by the Go plugin.
/// The `source` property itself is defined by the host's main schema.
pub fn schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            GO_CHANNEL: {
                "type": "string",
                "default": DEFAULT_GO_CHANNEL
            },
            GO_PACKAGES: unique_strings(),
            GO_IMPORTPATH: {
                "type": "string",
                "default": ""
            },
            GO_BUILDTAGS: unique_strings()
        },
        "anyOf": [
            { "required": ["source"] },
            { "required": [GO_PACKAGES] }
        ]
    })
}

/// Properties that, when changed, require the part to be pulled again.
pub fn pull_properties() -> Vec<&'static str> {
    vec![GO_PACKAGES, GO_CHANNEL]
}

/// Properties that, when changed, require the part to be built again.
pub fn build_properties() -> Vec<&'static str> {
    vec![GO_PACKAGES, GO_BUILDTAGS, GO_CHANNEL]
}
