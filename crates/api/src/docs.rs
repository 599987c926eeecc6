//! OpenAPI description of the person API, served as a JSON document at
//! `/api-docs`.

use serde_json::{json, Value};

use crate::handlers::person::DELETED_MESSAGE;

/// Build the OpenAPI 3.1 document. `port` only affects the advertised
/// server URL.
pub fn openapi_document(port: u16) -> Value {
    let id_or_name = json!({
        "in": "path",
        "name": "idOrName",
        "schema": { "type": "string" },
        "required": true,
        "description": "The person id or name"
    });

    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Person API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "CRUD API over a single person resource, addressed by id or by name",
            "license": {
                "name": "MIT",
                "url": "https://spdx.org/licenses/MIT.html"
            }
        },
        "servers": [{ "url": format!("http://localhost:{port}") }],
        "tags": [{ "name": "Persons", "description": "The persons managing API" }],
        "paths": paths(id_or_name),
        "components": { "schemas": schemas() }
    })
}

fn paths(id_or_name: Value) -> Value {
    json!({
        "/api": {
            "post": {
                "summary": "Add a new person",
                "tags": ["Persons"],
                "requestBody": {
                    "required": true,
                    "content": { "application/json": { "schema": schema_ref("CreatePersonDto") } }
                },
                "responses": {
                    "201": json_response("The created person", "Person"),
                    "500": json_response("Store failure", "Error")
                }
            }
        },
        "/api/{idOrName}": {
            "get": {
                "summary": "Get the person by id or name",
                "tags": ["Persons"],
                "parameters": [id_or_name.clone()],
                "responses": {
                    "200": json_response("The person matching the id or name", "Person"),
                    "404": json_response("The person was not found", "Error"),
                    "500": json_response("Store failure", "Error")
                }
            },
            "patch": {
                "summary": "Update a person; omitted fields are left unchanged, null clears a field",
                "tags": ["Persons"],
                "parameters": [id_or_name.clone()],
                "requestBody": {
                    "required": false,
                    "content": { "application/json": { "schema": schema_ref("CreatePersonDto") } }
                },
                "responses": {
                    "200": json_response("The updated person", "Person"),
                    "404": json_response("The person was not found", "Error"),
                    "500": json_response("Store failure", "Error")
                }
            },
            "delete": {
                "summary": "Delete a person",
                "tags": ["Persons"],
                "parameters": [id_or_name],
                "responses": {
                    "200": json_response("The person was deleted", "Success"),
                    "404": json_response("The person was not found", "Error"),
                    "500": json_response("Store failure", "Error")
                }
            }
        }
    })
}

fn schemas() -> Value {
    json!({
        "Person": {
            "type": "object",
            "required": ["_id", "name", "age"],
            "properties": {
                "_id": { "type": "string", "description": "The auto-generated id of the person" },
                "name": { "type": ["string", "null"], "description": "The name of the person" },
                "age": { "type": ["number", "null"], "description": "The age of the person" }
            },
            "example": { "_id": "507f1f77bcf86cd799439011", "name": "Alexander K. Dewdney", "age": 23 }
        },
        "CreatePersonDto": {
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "The name of the person" },
                "age": { "type": "number", "description": "The age of the person" }
            },
            "example": { "name": "Alexander K. Dewdney", "age": 23 }
        },
        "Success": {
            "type": "object",
            "required": ["message"],
            "properties": { "message": { "type": "string" } },
            "example": { "message": DELETED_MESSAGE }
        },
        "Error": {
            "type": "object",
            "required": ["error"],
            "properties": { "error": { "type": "string" } },
            "example": { "error": "Person not found" }
        }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn json_response(description: &str, schema: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema_ref(schema) } }
    })
}
