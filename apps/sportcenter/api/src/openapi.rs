use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDoc;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::errors::DomainErrorBody)
    ),
    info(
        title = "Sportcenter API",
        version = "0.1.0",
        description = "Member accounts, addresses and the facility catalog of the sports center"
    ),
    servers(
        (url = "/api", description = "API base path")
    )
)]
struct BaseDoc;

/// Base document with every domain's paths merged in.
///
/// Domain routes sit at the root of `/api`, so the domain documents are
/// merged rather than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> OpenApiDoc {
        let mut doc = BaseDoc::openapi();
        doc.merge(domain_users::handlers::ApiDoc::openapi());
        doc.merge(domain_locations::handlers::ApiDoc::openapi());
        doc.merge(domain_booking::handlers::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_paths_are_merged() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/auth/login",
            "/admin/users/{id}",
            "/profile/address",
            "/localities/{id}",
            "/halls/{id}/fields",
            "/me/reservations",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert_eq!(doc.info.title, "Sportcenter API");
    }
}
