use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct EmpRequestDoc { pub name: String }

#[derive(ToSchema)]
pub struct CarRequestDoc {
    pub make: String,
    pub model: String,
    pub color: String,
    pub number_plate: String,
}

#[derive(ToSchema)]
pub struct RegisterRequestDoc {
    pub number_plate: Option<String>,
    pub owner_id: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::create,
        crate::routes::employees::list,
        crate::routes::cars::create,
        crate::routes::cars::list,
        crate::routes::cars::list_by_make,
        crate::routes::cars::update,
        crate::routes::cars::delete,
        crate::routes::registration::register,
        crate::routes::registration::list,
    ),
    components(
        schemas(
            HealthResponse,
            EmpRequestDoc,
            CarRequestDoc,
            RegisterRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employee"),
        (name = "car"),
        (name = "registration")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in ["/healthy", "/emp", "/car", "/car/{make}", "/car/{car_id}", "/car/register/{number_plate}", "/car/register/"] {
            assert!(paths.contains(&p), "missing {p}");
        }
    }
}
