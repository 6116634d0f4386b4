use serde_json::{json, Map, Value};

const CLOCK_PATTERN: &str = "^([0-1][0-9]|2[0-3]):[0-5][0-9]$";

/// OpenAPI 3 description of the HTTP surface
pub fn openapi_document(host: &str) -> Value {
    let mut paths = Map::new();
    for (path, item) in collection_paths("store-times", "StoreTime", "Store time")
        .into_iter()
        .chain(collection_paths("store-overwrites", "StoreOverwrite", "Store overwrite"))
        .chain(auth_paths())
    {
        paths.insert(path, item);
    }

    paths.insert(
        "/store-times/day/{day_of_week}".to_string(),
        json!({
            "get": {
                "tags": ["store-times"],
                "summary": "Get store times for a day of the week",
                "parameters": [path_param("day_of_week", "Day of week (0-6)")],
                "responses": {
                    "200": array_response("StoreTime"),
                    "400": error_response("Non-numeric day"),
                    "404": error_response("No store time for that day")
                }
            }
        }),
    );
    paths.insert(
        "/store-overwrites/date/{month}/{day}".to_string(),
        json!({
            "get": {
                "tags": ["store-overwrites"],
                "summary": "Get store overwrites for a calendar date",
                "parameters": [
                    path_param("month", "Month (1-12)"),
                    path_param("day", "Day (1-31)")
                ],
                "responses": {
                    "200": array_response("StoreOverwrite"),
                    "400": error_response("Non-numeric month or day"),
                    "404": error_response("No overwrite for that date")
                }
            }
        }),
    );

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Store Hours API",
            "description": "Weekly opening hours and date-specific overwrites",
            "version": env!("CARGO_PKG_VERSION")
        },
        "servers": [{ "url": format!("http://{}", host) }],
        "tags": [
            { "name": "store-times", "description": "Weekly recurring opening hours" },
            { "name": "store-overwrites", "description": "Date-specific exceptions" },
            { "name": "authentication", "description": "Demo JWT authentication" }
        ],
        "paths": paths,
        "components": {
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }
            },
            "schemas": schemas()
        }
    })
}

fn collection_paths(segment: &str, schema: &str, label: &str) -> Vec<(String, Value)> {
    let tag = segment;
    let input = format!("{}Input", schema);
    let patch = format!("{}Patch", schema);

    vec![
        (
            format!("/{}", segment),
            json!({
                "get": {
                    "tags": [tag],
                    "summary": format!("List all {}s", label.to_lowercase()),
                    "responses": { "200": array_response(schema) }
                },
                "post": {
                    "tags": [tag],
                    "summary": format!("Create a {}", label.to_lowercase()),
                    "requestBody": request_body(&input),
                    "responses": {
                        "201": object_response(schema),
                        "400": error_response("Invalid body")
                    }
                }
            }),
        ),
        (
            format!("/{}/{{id}}", segment),
            json!({
                "get": {
                    "tags": [tag],
                    "summary": format!("Get a {} by id", label.to_lowercase()),
                    "parameters": [path_param("id", &format!("{} id", label))],
                    "responses": {
                        "200": object_response(schema),
                        "404": error_response("Not found")
                    }
                },
                "put": {
                    "tags": [tag],
                    "summary": format!("Partially update a {}", label.to_lowercase()),
                    "parameters": [path_param("id", &format!("{} id", label))],
                    "requestBody": request_body(&patch),
                    "responses": {
                        "200": object_response(schema),
                        "400": error_response("Invalid body"),
                        "404": error_response("Not found")
                    }
                },
                "delete": {
                    "tags": [tag],
                    "summary": format!("Delete a {}", label.to_lowercase()),
                    "parameters": [path_param("id", &format!("{} id", label))],
                    "responses": {
                        "200": message_response("Deleted"),
                        "404": error_response("Not found")
                    }
                }
            }),
        ),
    ]
}

fn auth_paths() -> Vec<(String, Value)> {
    vec![
        (
            "/auth".to_string(),
            json!({
                "post": {
                    "tags": ["authentication"],
                    "summary": "Authenticate user and return JWT token",
                    "requestBody": request_body("Credentials"),
                    "responses": {
                        "200": {
                            "description": "Signed token valid for one hour",
                            "content": { "application/json": { "schema": {
                                "type": "object",
                                "properties": { "token": { "type": "string" } }
                            }}}
                        },
                        "400": error_response("Invalid body"),
                        "401": error_response("Invalid email or password")
                    }
                }
            }),
        ),
        (
            "/auth/verify".to_string(),
            json!({
                "get": {
                    "tags": ["authentication"],
                    "summary": "Verify JWT token",
                    "security": [{ "bearerAuth": [] }],
                    "responses": {
                        "200": object_response("VerifiedUser"),
                        "401": error_response("Invalid token")
                    }
                }
            }),
        ),
    ]
}

fn schemas() -> Value {
    let clock = json!({ "type": "string", "pattern": CLOCK_PATTERN });
    let nullable_clock = json!({ "type": "string", "pattern": CLOCK_PATTERN, "nullable": true });

    json!({
        "StoreTime": {
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "day_of_week": { "type": "integer", "minimum": 0, "maximum": 6 },
                "is_open": { "type": "boolean" },
                "start_time": nullable_clock,
                "end_time": nullable_clock
            }
        },
        "StoreTimeInput": {
            "type": "object",
            "required": ["day_of_week", "is_open"],
            "properties": {
                "day_of_week": { "type": "integer", "minimum": 0, "maximum": 6 },
                "is_open": { "type": "boolean" },
                "start_time": nullable_clock,
                "end_time": nullable_clock
            }
        },
        "StoreTimePatch": {
            "type": "object",
            "properties": {
                "day_of_week": { "type": "integer", "minimum": 0, "maximum": 6 },
                "is_open": { "type": "boolean" },
                "start_time": nullable_clock,
                "end_time": nullable_clock
            }
        },
        "StoreOverwrite": {
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "day": { "type": "integer", "minimum": 1, "maximum": 31 },
                "month": { "type": "integer", "minimum": 1, "maximum": 12 },
                "is_open": { "type": "boolean" },
                "start_time": clock,
                "end_time": clock
            }
        },
        "StoreOverwriteInput": {
            "type": "object",
            "required": ["day", "month", "is_open", "start_time", "end_time"],
            "properties": {
                "day": { "type": "integer", "minimum": 1, "maximum": 31 },
                "month": { "type": "integer", "minimum": 1, "maximum": 12 },
                "is_open": { "type": "boolean" },
                "start_time": clock,
                "end_time": clock
            }
        },
        "StoreOverwritePatch": {
            "type": "object",
            "properties": {
                "day": { "type": "integer", "minimum": 1, "maximum": 31 },
                "month": { "type": "integer", "minimum": 1, "maximum": 12 },
                "is_open": { "type": "boolean" },
                "start_time": clock,
                "end_time": clock
            }
        },
        "Credentials": {
            "type": "object",
            "required": ["email", "password"],
            "properties": {
                "email": { "type": "string", "format": "email" },
                "password": { "type": "string", "minLength": 6 }
            }
        },
        "VerifiedUser": {
            "type": "object",
            "properties": {
                "email": { "type": "string" },
                "iat": { "type": "integer" },
                "exp": { "type": "integer" },
                "name": { "type": "string" },
                "role": { "type": "string" },
                "permissions": { "type": "array", "items": { "type": "string" } }
            }
        },
        "Error": {
            "type": "object",
            "properties": {
                "error": { "type": "boolean" },
                "message": { "type": "string" },
                "code": { "type": "string" }
            }
        }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn path_param(name: &str, description: &str) -> Value {
    json!({
        "name": name,
        "in": "path",
        "required": true,
        "description": description,
        "schema": { "type": "string" }
    })
}

fn request_body(schema: &str) -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": schema_ref(schema) } }
    })
}

fn object_response(schema: &str) -> Value {
    json!({
        "description": schema,
        "content": { "application/json": { "schema": schema_ref(schema) } }
    })
}

fn array_response(schema: &str) -> Value {
    json!({
        "description": format!("{} list", schema),
        "content": { "application/json": { "schema": {
            "type": "array",
            "items": schema_ref(schema)
        }}}
    })
}

fn message_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": {
            "type": "object",
            "properties": { "message": { "type": "string" } }
        }}}
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema_ref("Error") } }
    })
}
