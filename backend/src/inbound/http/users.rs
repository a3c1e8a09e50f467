//! User lookup handler.
//!
//! ```text
//! GET /users/{username}
//! ```

use actix_web::{HttpResponse, get, web};
use tracing::{debug, error};

use crate::domain::{LookupOutcome, TraceId, Username};
use crate::inbound::http::state::HttpState;

/// Fetch a user record by exact username.
///
/// Responds `200` with the record, `404` with an empty body when no record
/// matches, and `500` when the store fails. The 500 body depends on the
/// configured [`FailurePolicy`](super::FailurePolicy).
///
/// Percent-encoded segments are decoded before lookup, so `a%2Fb` asks for
/// `a/b`. A segment that does not decode to UTF-8 never reaches the store:
/// the path extractor rejects it with actix's default 404 and a plain-text
/// reason.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_lookup::inbound::http::users::get_user;
///
/// let app = App::new().service(get_user);
/// ```
#[utoipa::path(
    get,
    path = "/users/{username}",
    params(("username" = String, Path, description = "Exact username to look up")),
    responses(
        (status = 200, description = "User found", body = crate::inbound::http::schemas::UserSchema),
        (status = 404, description = "No user has this username"),
        (status = 500, description = "The user store failed", body = crate::inbound::http::schemas::FailureSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{username}")]
pub async fn get_user(state: web::Data<HttpState>, path: web::Path<String>) -> HttpResponse {
    let username = Username::from(path.into_inner());
    let trace_id = TraceId::current().map(tracing::field::display);

    match state.users.lookup(&username).await {
        LookupOutcome::Found(user) => HttpResponse::Ok().json(user),
        LookupOutcome::NotFound => {
            debug!(%username, trace_id, "user not found");
            HttpResponse::NotFound().finish()
        }
        LookupOutcome::Failed(cause) => {
            error!(%username, trace_id, error = %cause, "user lookup failed");
            state.failure_policy.failure_response(&cause)
        }
    }
}
