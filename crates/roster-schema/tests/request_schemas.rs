//! Behaviour of the built-in request schemas through the registry.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use roster_schema::documents::{CREATE_USER, GET_USER_BY_ID_PARAMS, PAGINATION_QUERY, UPDATE_USER};
use roster_schema::{SchemaError, SchemaRegistry};

#[fixture]
fn registry() -> SchemaRegistry {
    SchemaRegistry::new().expect("built-in schemas compile")
}

fn valid_user() -> Value {
    json!({
        "email": "test@example.com",
        "firstName": "John",
        "lastName": "Doe"
    })
}

// ---------------------------------------------------------------------------
// createUser
// ---------------------------------------------------------------------------

#[rstest]
fn create_user_accepts_valid_payload(registry: SchemaRegistry) {
    let mut data = valid_user();
    let result = registry.validate(CREATE_USER, &mut data).unwrap();
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(data, valid_user());
}

#[rstest]
fn create_user_strips_unknown_fields(registry: SchemaRegistry) {
    let mut data = json!({
        "email": "test@example.com",
        "firstName": "John",
        "lastName": "Doe",
        "extraField": "should be removed"
    });
    let result = registry.validate(CREATE_USER, &mut data).unwrap();
    assert!(result.is_valid);
    assert!(data.get("extraField").is_none());
    assert_eq!(data, valid_user());
}

#[rstest]
fn create_user_rejects_bad_email(registry: SchemaRegistry) {
    let mut data = json!({"email": "invalid-email", "firstName": "John", "lastName": "Doe"});
    let result = registry.validate(CREATE_USER, &mut data).unwrap();
    assert!(!result.is_valid);
    assert!(result.errors[0].contains("email"), "got {:?}", result.errors);
}

#[rstest]
fn create_user_rejects_invalid_name_pattern(registry: SchemaRegistry) {
    let mut data = json!({"email": "test@example.com", "firstName": "123Invalid", "lastName": "Doe"});
    let result = registry.validate(CREATE_USER, &mut data).unwrap();
    assert!(!result.is_valid);
    assert!(result.has_error_for("firstName"), "got {:?}", result.errors);
    assert!(result.errors[0].starts_with("firstName: "));
}

#[rstest]
#[case::email("email")]
#[case::first_name("firstName")]
#[case::last_name("lastName")]
fn create_user_reports_missing_required_field(registry: SchemaRegistry, #[case] field: &str) {
    let mut data = valid_user();
    data.as_object_mut().unwrap().remove(field);
    let result = registry.validate(CREATE_USER, &mut data).unwrap();
    assert!(!result.is_valid);
    assert!(
        result.errors.iter().any(|e| e.contains(field)),
        "no error mentions {field}: {:?}",
        result.errors
    );
}

#[rstest]
#[case::number_for_string(json!({"email": "a@b.co", "firstName": 42, "lastName": "Doe"}))]
#[case::null_for_string(json!({"email": "a@b.co", "firstName": null, "lastName": "Doe"}))]
#[case::too_long(json!({"email": "a@b.co", "firstName": "a".repeat(101), "lastName": "Doe"}))]
#[case::empty(json!({"email": "a@b.co", "firstName": "", "lastName": "Doe"}))]
#[case::not_an_object(json!(["a@b.co", "John", "Doe"]))]
fn create_user_rejects_shape_violations(registry: SchemaRegistry, #[case] data: Value) {
    let mut data = data;
    let result = registry.validate(CREATE_USER, &mut data).unwrap();
    assert!(!result.is_valid);
}

#[rstest]
fn names_allow_spaces_and_hyphens(registry: SchemaRegistry) {
    let mut data = json!({"email": "a@b.co", "firstName": "Mary Ann", "lastName": "Smith-Jones"});
    assert!(registry.validate(CREATE_USER, &mut data).unwrap().is_valid);
}

// ---------------------------------------------------------------------------
// updateUser
// ---------------------------------------------------------------------------

#[rstest]
#[case::partial(json!({"firstName": "UpdatedName"}))]
#[case::complete(json!({"email": "updated@example.com", "firstName": "Updated", "lastName": "Name"}))]
fn update_user_accepts_partial_and_complete(registry: SchemaRegistry, #[case] data: Value) {
    let mut data = data;
    assert!(registry.validate(UPDATE_USER, &mut data).unwrap().is_valid);
}

#[rstest]
fn update_user_requires_one_property(registry: SchemaRegistry) {
    let result = registry.validate(UPDATE_USER, &mut json!({})).unwrap();
    assert!(!result.is_valid);
    assert!(
        result.errors.iter().any(|e| e.contains("minProperties")),
        "got {:?}",
        result.errors
    );
}

#[rstest]
fn update_user_with_only_unknown_fields_fails_after_stripping(registry: SchemaRegistry) {
    let mut data = json!({"nickname": "jd"});
    let result = registry.validate(UPDATE_USER, &mut data).unwrap();
    assert!(!result.is_valid);
    assert_eq!(data, json!({}));
}

// ---------------------------------------------------------------------------
// getUserByIdParams
// ---------------------------------------------------------------------------

#[rstest]
#[case::positive("123", true)]
#[case::one("1", true)]
#[case::zero("0", false)]
#[case::leading_zero("0123", false)]
#[case::alpha("abc", false)]
#[case::negative("-1", false)]
fn user_id_param_pattern(registry: SchemaRegistry, #[case] id: &str, #[case] valid: bool) {
    let mut data = json!({ "id": id });
    let result = registry.validate(GET_USER_BY_ID_PARAMS, &mut data).unwrap();
    assert_eq!(result.is_valid, valid, "id={id} errors={:?}", result.errors);
}

#[rstest]
fn user_id_param_is_not_coerced_from_number(registry: SchemaRegistry) {
    let result = registry
        .validate(GET_USER_BY_ID_PARAMS, &mut json!({"id": 123}))
        .unwrap();
    assert!(!result.is_valid);
    assert!(result.has_error_for("id"));
}

// ---------------------------------------------------------------------------
// paginationQuery
// ---------------------------------------------------------------------------

#[rstest]
fn pagination_defaults_are_applied(registry: SchemaRegistry) {
    let mut data = json!({});
    let result = registry.validate(PAGINATION_QUERY, &mut data).unwrap();
    assert!(result.is_valid);
    assert_eq!(
        data,
        json!({"page": "1", "limit": "10", "sortBy": "id", "sortOrder": "asc"})
    );
}

#[rstest]
fn pagination_keeps_supplied_values(registry: SchemaRegistry) {
    let mut data = json!({"page": "3", "sortOrder": "desc"});
    assert!(registry.validate(PAGINATION_QUERY, &mut data).unwrap().is_valid);
    assert_eq!(data["page"], "3");
    assert_eq!(data["limit"], "10");
    assert_eq!(data["sortOrder"], "desc");
}

#[rstest]
#[case::bad_sort_field(json!({"sortBy": "password"}), "sortBy")]
#[case::bad_order(json!({"sortOrder": "up"}), "sortOrder")]
#[case::zero_page(json!({"page": "0"}), "page")]
#[case::numeric_limit(json!({"limit": 10}), "limit")]
fn pagination_rejects_bad_values(
    registry: SchemaRegistry,
    #[case] data: Value,
    #[case] field: &str,
) {
    let mut data = data;
    let result = registry.validate(PAGINATION_QUERY, &mut data).unwrap();
    assert!(!result.is_valid);
    assert!(result.has_error_for(field), "got {:?}", result.errors);
}

// ---------------------------------------------------------------------------
// Registry-level properties
// ---------------------------------------------------------------------------

#[rstest]
#[case::create(CREATE_USER, json!({"email": "a@b.co", "firstName": "A", "lastName": "B", "x": 1}))]
#[case::update(UPDATE_USER, json!({"lastName": "B", "y": true}))]
#[case::pagination(PAGINATION_QUERY, json!({"limit": "5", "z": "1"}))]
fn normalization_is_idempotent(
    registry: SchemaRegistry,
    #[case] name: &str,
    #[case] data: Value,
) {
    let mut data = data;
    assert!(registry.validate(name, &mut data).unwrap().is_valid);
    let normalized = data.clone();
    assert!(registry.validate(name, &mut data).unwrap().is_valid);
    assert_eq!(data, normalized);
}

#[rstest]
fn unknown_schema_is_a_configuration_error_not_a_failed_validation(registry: SchemaRegistry) {
    let outcome = registry.validate("createUsr", &mut valid_user());
    match outcome {
        Err(SchemaError::NotFound(name)) => assert_eq!(name, "createUsr"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
