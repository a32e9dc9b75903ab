use crate::application::http::{
    detection::router::DetectionApiDoc, health::__path_health,
    suggestion::router::SuggestionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mealsnap API"
    ),
    paths(health),
    nest(
        (path = "/ingredients", api = DetectionApiDoc),
        (path = "/recipes", api = SuggestionApiDoc),
    )
)]
pub struct ApiDoc;
