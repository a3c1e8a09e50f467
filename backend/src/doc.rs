//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers the lookup and health paths plus the schema wrappers
//! from [`crate::inbound::http::schemas`]. Swagger UI serves it in debug
//! builds and `openapi-dump` prints it for external tooling.

use crate::inbound::http::schemas::{FailureSchema, UserSchema};
use utoipa::OpenApi;

/// OpenAPI document for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User lookup API",
        description = "Fetch user records by username, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, FailureSchema)),
    tags(
        (name = "users", description = "User record lookups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const USER_SCHEMA_NAME: &str = "crate.domain.User";
    const FAILURE_SCHEMA_NAME: &str = "crate.domain.ports.UserPersistenceError";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn registers_lookup_and_health_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/users/{username}", "/health/ready", "/health/live"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[rstest]
    #[case(USER_SCHEMA_NAME, &["id", "username", "email"])]
    #[case(FAILURE_SCHEMA_NAME, &["message"])]
    fn schemas_have_expected_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }
}
