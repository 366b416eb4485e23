use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use schemascore_core::{FieldDescriptor, ScoringConfig, ScoringEngine};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::error;

#[derive(Deserialize)]
struct ScoreSchemaRequest {
    /// Kept as raw JSON so a missing key and a non-list value map to
    /// different status codes.
    schema: Option<serde_json::Value>,
    similarity_threshold: Option<f32>,
    doc_similarity_meaningful_min: Option<f32>,
    doc_similarity_placeholder_max: Option<f32>,
    weights_override: Option<HashMap<String, f64>>,
}

impl ScoreSchemaRequest {
    /// Core defaults, overridden only by the keys actually present in the
    /// request body.
    fn scoring_config(&self) -> ScoringConfig {
        let mut config = ScoringConfig::default();
        if let Some(threshold) = self.similarity_threshold {
            config.similarity_threshold = threshold;
        }
        if let Some(min) = self.doc_similarity_meaningful_min {
            config.meaningful_min = min;
        }
        if let Some(max) = self.doc_similarity_placeholder_max {
            config.placeholder_max = max;
        }
        if let Some(overrides) = &self.weights_override {
            config.weights.apply_overrides(overrides);
        }
        config
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(engine: Arc<ScoringEngine>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .route("/score_schema", web::post().to(score_schema))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn score_schema(
    engine: web::Data<Arc<ScoringEngine>>,
    req: web::Json<ScoreSchemaRequest>,
) -> ActixResult<HttpResponse> {
    let schema_value = match &req.schema {
        Some(value) => value,
        None => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Bad Request",
                "message": "No schema provided in the request body"
            })));
        }
    };

    if !schema_value.is_array() {
        return Ok(HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Invalid Format",
            "message": "The \"schema\" field must be a list"
        })));
    }

    let schema: Vec<FieldDescriptor> = match serde_json::from_value(schema_value.clone()) {
        Ok(schema) => schema,
        Err(e) => {
            return Ok(HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": "Invalid Format",
                "message": format!("Each schema entry must be an object of field properties: {}", e)
            })));
        }
    };

    let config = req.scoring_config();

    match engine.evaluate(&schema, &config) {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(err) if err.is_caller_error() => {
            Ok(HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": err.kind(),
                "message": err.to_string()
            })))
        }
        Err(err) => {
            error!("schema scoring failed: {}", err);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal Server Error",
                "message": "An internal error has occurred. Please try again later."
            })))
        }
    }
}
