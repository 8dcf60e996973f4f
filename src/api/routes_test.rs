use serde_json::Value;
use utoipa::OpenApi;

use super::routes::ApiDoc;

fn schema_properties(doc: &Value, schema: &str) -> Vec<String> {
    let mut names: Vec<_> = doc["components"]["schemas"][schema]["properties"]
        .as_object()
        .unwrap_or_else(|| panic!("schema {} should have properties", schema))
        .keys()
        .cloned()
        .collect();
    names.sort();
    names
}

#[test]
fn request_schemas_use_wire_field_names() {
    let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

    assert_eq!(
        schema_properties(&doc, "CreateBoardRequest"),
        vec!["adminUserId", "name"]
    );
    assert_eq!(
        schema_properties(&doc, "CreateListRequest"),
        vec!["boardId", "name"]
    );
    assert_eq!(
        schema_properties(&doc, "CreateCardRequest"),
        vec!["description", "due_date", "listId", "title", "userId"]
    );
    assert_eq!(
        schema_properties(&doc, "CardUserLink"),
        vec!["cardId", "isOwner", "userId"]
    );
}

#[test]
fn every_route_is_documented() {
    let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
    let paths = doc["paths"].as_object().unwrap();

    for path in [
        "/health",
        "/users",
        "/boards",
        "/boards/{boardId}/lists",
        "/lists",
        "/cards",
        "/cards/{cardId}/creator",
        "/cards/{cardId}/users",
        "/card-users",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}
