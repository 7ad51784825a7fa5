use axum::{
    extract::DefaultBodyLimit,
    handler::Handler,
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use contracts::domain::a001_carpet::aggregate::CarpetDirection;
use contracts::system::access::ApiResource;
use std::path::Path;
use tower_http::services::ServeDir;

use crate::shared::upload::UPLOAD_BODY_LIMIT;
use crate::system::auth::middleware::{require_admin, require_auth, require_resource};
use crate::{handlers, system};

/// `/api/<resource>` and `/api/<resource>/:id`, both behind the resource guard
fn resource_routes<S>(
    resource: ApiResource,
    collection: MethodRouter<S>,
    item: MethodRouter<S>,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let base = format!("/api/{}", resource.path());
    Router::new()
        .route(&base, collection)
        .route(&format!("{}/:id", base), item)
        .route_layer(middleware::from_fn_with_state(resource, require_resource))
}

/// Import and export carpets share handlers; the direction travels as router state
fn carpet_routes(direction: CarpetDirection, resource: ApiResource) -> Router {
    use handlers::a001_carpet as h;
    resource_routes(
        resource,
        get(h::list).post(h::create),
        get(h::get_by_id).patch(h::update).delete(h::delete),
    )
    .with_state(direction)
}

fn crud<L, C, G, U, D, T1, T2, T3, T4, T5>(
    resource: ApiResource,
    list: L,
    create: C,
    get_by_id: G,
    update: U,
    delete: D,
) -> Router
where
    L: Handler<T1, ()>,
    C: Handler<T2, ()>,
    G: Handler<T3, ()>,
    U: Handler<T4, ()>,
    D: Handler<T5, ()>,
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
{
    resource_routes(
        resource,
        get(list).post(create),
        get(get_by_id).patch(update).delete(delete),
    )
}

/// Application routes
pub fn configure_routes(media_dir: &Path) -> Router {
    use handlers::*;

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user).layer(middleware::from_fn(require_auth)),
        )
        // User management (Full tier)
        .route(
            "/api/system/users",
            get(system::handlers::users::list)
                .post(system::handlers::users::create)
                .layer(middleware::from_fn(require_admin)),
        )
        .route(
            "/api/system/users/:id",
            get(system::handlers::users::get_by_id)
                .put(system::handlers::users::update)
                .patch(system::handlers::users::update)
                .delete(system::handlers::users::delete)
                .layer(middleware::from_fn(require_admin)),
        )
        .route(
            "/api/system/users/:id/change-password",
            post(system::handlers::users::change_password)
                .layer(middleware::from_fn(require_auth)),
        )
        // ========================================
        // BUSINESS ROUTES
        // ========================================
        .merge(carpet_routes(CarpetDirection::Import, ApiResource::ImportCarpets))
        .merge(carpet_routes(CarpetDirection::Export, ApiResource::ExportCarpets))
        .merge(
            crud(
                ApiResource::Workers,
                a002_worker::list_all,
                a002_worker::create,
                a002_worker::get_by_id,
                a002_worker::update,
                a002_worker::delete,
            )
            .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .merge(crud(
            ApiResource::ProcessingCarpets,
            a003_processing_carpet::list_all,
            a003_processing_carpet::create,
            a003_processing_carpet::get_by_id,
            a003_processing_carpet::update,
            a003_processing_carpet::delete,
        ))
        .merge(crud(
            ApiResource::Staff,
            a004_staff::list_all,
            a004_staff::create,
            a004_staff::get_by_id,
            a004_staff::update,
            a004_staff::delete,
        ))
        .merge(crud(
            ApiResource::Salaries,
            a005_salary::list_all,
            a005_salary::create,
            a005_salary::get_by_id,
            a005_salary::update,
            a005_salary::delete,
        ))
        .merge(crud(
            ApiResource::Expenditure,
            a006_expenditure::list_all,
            a006_expenditure::create,
            a006_expenditure::get_by_id,
            a006_expenditure::update,
            a006_expenditure::delete,
        ))
        .merge(crud(
            ApiResource::Income,
            a007_income::list_all,
            a007_income::create,
            a007_income::get_by_id,
            a007_income::update,
            a007_income::delete,
        ))
        .merge(crud(
            ApiResource::Finances,
            a008_finance::list_all,
            a008_finance::create,
            a008_finance::get_by_id,
            a008_finance::update,
            a008_finance::delete,
        ))
        .merge(
            crud(
                ApiResource::Customers,
                a009_customer::list_all,
                a009_customer::create,
                a009_customer::get_by_id,
                a009_customer::update,
                a009_customer::delete,
            )
            .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .merge(crud(
            ApiResource::Agreements,
            a010_agreement::list_all,
            a010_agreement::create,
            a010_agreement::get_by_id,
            a010_agreement::update,
            a010_agreement::delete,
        ))
        .merge(crud(
            ApiResource::Rent,
            a011_rent::list_all,
            a011_rent::create,
            a011_rent::get_by_id,
            a011_rent::update,
            a011_rent::delete,
        ))
        .merge(crud(
            ApiResource::Services,
            a012_service::list_all,
            a012_service::create,
            a012_service::get_by_id,
            a012_service::update,
            a012_service::delete,
        ))
        .merge(crud(
            ApiResource::Units,
            a013_unit::list_all,
            a013_unit::create,
            a013_unit::get_by_id,
            a013_unit::update,
            a013_unit::delete,
        ))
        .merge(crud(
            ApiResource::UnitBills,
            a014_unit_bill::list_all,
            a014_unit_bill::create,
            a014_unit_bill::get_by_id,
            a014_unit_bill::update,
            a014_unit_bill::delete,
        ))
        // ========================================
        // DASHBOARDS
        // ========================================
        .merge(
            Router::new()
                .route(
                    &format!("/api/{}", ApiResource::Summary.path()),
                    get(d400_summary::get_summary),
                )
                .route_layer(middleware::from_fn_with_state(
                    ApiResource::Summary,
                    require_resource,
                )),
        )
        // Uploaded documents
        .nest_service("/media", ServeDir::new(media_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;
    use axum::body::Body;
    use crate::domain::a002_worker::service::NIC_FIELD;
    use crate::system::auth::jwt;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    const BOUNDARY: &str = "worker-form-boundary";

    fn worker_form(file_size: usize) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in [
            ("name", "ظاهر"),
            ("father_name", "نور"),
            ("permanent_residency", "بلخ"),
            ("current_residency", "کابل"),
        ] {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                    BOUNDARY, name, value
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"nic.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n",
                BOUNDARY, NIC_FIELD
            )
            .as_bytes(),
        );
        body.resize(body.len() + file_size, 0xab);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    async fn post_worker(file_size: usize) -> StatusCode {
        let token = jwt::generate_access_token("upload-tester", "upload-tester", 0)
            .await
            .unwrap();
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/{}", ApiResource::Workers.path()))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(worker_form(file_size)))
            .unwrap();
        configure_routes(Path::new("target/media"))
            .oneshot(request)
            .await
            .unwrap()
            .status()
    }

    async fn status(method: &str, uri: &str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        configure_routes(Path::new("target/media"))
            .oneshot(request)
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn test_health_is_public() {
        run(async {
            assert_eq!(status("GET", "/health").await, StatusCode::OK);
        });
    }

    #[test]
    fn test_business_routes_need_a_token() {
        run(async {
            for resource in [
                ApiResource::Workers,
                ApiResource::Customers,
                ApiResource::Salaries,
                ApiResource::Services,
                ApiResource::Units,
                ApiResource::UnitBills,
                ApiResource::Summary,
            ] {
                let uri = format!("/api/{}", resource.path());
                assert_eq!(status("GET", &uri).await, StatusCode::UNAUTHORIZED, "{}", uri);
            }
            let item = format!("/api/{}/{}", ApiResource::Units.path(), uuid::Uuid::new_v4());
            assert_eq!(status("DELETE", &item).await, StatusCode::UNAUTHORIZED);
            assert_eq!(
                status("POST", "/api/system/users").await,
                StatusCode::UNAUTHORIZED
            );
        });
    }

    #[test]
    fn test_uploads_above_the_default_limit_are_accepted_up_to_the_cap() {
        run(async {
            assert_eq!(post_worker(3 * 1024 * 1024).await, StatusCode::OK);
            assert_eq!(
                post_worker(UPLOAD_BODY_LIMIT + 1024).await,
                StatusCode::PAYLOAD_TOO_LARGE
            );
        });
    }
}
