//! `/users` handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users        {"name":"Alice","email":"alice@x.com","department":{"id":1}}
//! PUT    /users/{id}   {"name":"A","email":"a@x.com","department":null}
//! PATCH  /users/{id}   {"email":"new@x.com"}
//! DELETE /users/{id}
//! ```
//!
//! Handler spans record the path id only; request bodies stay out of the logs.

use crate::http::{ApiError, ApiResult};
use crate::model::{User, UserId, UserPatch, UserPayload, UserView};
use crate::resource::UserResource;
use actix_web::{delete, get, patch, post, put, web, HttpResponse};

/// Registers the `/users` scope. The app must carry `web::Data<UserResource>`.
///
/// # Examples
/// ```no_run
/// use actix_web::{web, App};
/// use userdept::http;
/// use userdept::lifecycle::UserDeptSystem;
///
/// # async fn build() {
/// let system = UserDeptSystem::new(32);
/// let app = App::new()
///     .app_data(web::Data::new(system.resource(false)))
///     .configure(http::configure);
/// # }
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(list_users)
            .service(get_user)
            .service(insert_user)
            .service(delete_user)
            .service(replace_user)
            .service(patch_user),
    );
}

#[get("")]
#[tracing::instrument(skip_all)]
pub async fn list_users(resource: web::Data<UserResource>) -> ApiResult<web::Json<Vec<UserView>>> {
    let users = resource.list().await?;
    Ok(web::Json(resource.render_all(users).await?))
}

#[get("/{id}")]
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn get_user(
    resource: web::Data<UserResource>,
    id: web::Path<u64>,
) -> ApiResult<web::Json<UserView>> {
    let user = resource
        .get(UserId(id.into_inner()))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(web::Json(resource.render(user).await?))
}

#[post("")]
#[tracing::instrument(skip_all)]
pub async fn insert_user(
    resource: web::Data<UserResource>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let saved = resource.insert(User::from(payload.into_inner())).await?;
    Ok(HttpResponse::Created().json(resource.render(saved).await?))
}

#[delete("/{id}")]
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn delete_user(
    resource: web::Data<UserResource>,
    id: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    resource.delete(UserId(id.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[put("/{id}")]
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn replace_user(
    resource: web::Data<UserResource>,
    id: web::Path<u64>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<UserView>> {
    let updated = resource
        .replace(UserId(id.into_inner()), User::from(payload.into_inner()))
        .await?;
    Ok(web::Json(resource.render(updated).await?))
}

#[patch("/{id}")]
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn patch_user(
    resource: web::Data<UserResource>,
    id: web::Path<u64>,
    patch: web::Json<UserPatch>,
) -> ApiResult<web::Json<UserView>> {
    let updated = resource
        .patch(UserId(id.into_inner()), patch.into_inner())
        .await?;
    Ok(web::Json(resource.render(updated).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::UserDeptSystem;
    use crate::seed::Seed;
    use actix_web::http::StatusCode;
    use actix_web::test::{self, TestRequest};
    use actix_web::App;
    use serde_json::json;
    use tracing_test::traced_test;

    #[actix_web::test]
    #[traced_test]
    async fn user_payloads_stay_out_of_logs() {
        let system = UserDeptSystem::with_seed(8, Seed::builtin()).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(system.resource(false)))
                .configure(configure),
        )
        .await;

        let created = test::call_service(
            &app,
            TestRequest::post()
                .uri("/users")
                .set_json(json!({"name": "Alice", "email": "alice@private.example"}))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);

        let patched = test::call_service(
            &app,
            TestRequest::patch()
                .uri("/users/1")
                .set_json(json!({"email": "alicia@private.example", "department": {"id": 99}}))
                .to_request(),
        )
        .await;
        assert_eq!(patched.status(), StatusCode::OK);

        assert!(logs_contain("User inserted"));
        assert!(logs_contain("Unknown department"));
        assert!(!logs_contain("private.example"));
    }
}
