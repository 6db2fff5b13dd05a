use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RecordDoc {
    pub name: String,
    pub price: i64,
    #[schema(default = "")]
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub status_code: u16, pub detail: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::records::get_data,
        crate::routes::records::query_data,
        crate::routes::records::add_data,
        crate::routes::records::update_data,
        crate::routes::records::delete_data,
    ),
    components(schemas(HealthResponse, RecordDoc, ErrorDoc)),
    tags((name = "health"), (name = "records"))
)]
pub struct ApiDoc;
