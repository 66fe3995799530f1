use actix_web::error::InternalError;
use actix_web::http::{header, StatusCode};
use actix_web::{middleware, web, App, HttpResponse, HttpServer, ResponseError, Result};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::assign::{assign_lines, AssignmentResult};
use crate::display::write_results_csv;
use crate::error::LineBidError;
use crate::parser::parse_bid_data;

/// Largest urlencoded form body the bid routes accept
pub const FORM_LIMIT: usize = 2 * 1024 * 1024;

/// Form posted by the bid page
#[derive(Deserialize)]
pub struct BidForm {
    #[serde(default)]
    bid_data: String,
}

/// Results posted back for CSV download, as the JSON the page received
#[derive(Deserialize)]
pub struct ResultsForm {
    #[serde(default)]
    results_data: String,
}

#[derive(Serialize)]
pub struct ProcessResponse {
    results: Vec<AssignmentResult>,
}

impl ResponseError for LineBidError {
    fn status_code(&self) -> StatusCode {
        match self {
            LineBidError::ParseFailure(_) | LineBidError::InvalidResults(_) => {
                StatusCode::BAD_REQUEST
            }
            LineBidError::Csv(_) | LineBidError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        json_error(self.status_code(), self.to_string())
    }
}

fn json_error(status: StatusCode, message: String) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({ "error": message }))
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(FORM_LIMIT)
        .error_handler(|err, _req| {
            warn!("Rejected form body: {}", err);
            let response = json_error(err.status_code(), err.to_string());
            InternalError::from_response(err, response).into()
        })
}

async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

async fn process_bids(form: web::Form<BidForm>) -> Result<HttpResponse, LineBidError> {
    let bids = parse_bid_data(&form.bid_data)
        .inspect_err(|e| warn!("Rejected bid submission: {}", e))?;
    let results = assign_lines(&bids);

    Ok(HttpResponse::Ok().json(ProcessResponse { results }))
}

async fn download_csv(form: web::Form<ResultsForm>) -> Result<HttpResponse, LineBidError> {
    let results: Vec<AssignmentResult> = serde_json::from_str(&form.results_data)?;

    let mut body = Vec::new();
    write_results_csv(&results, &mut body)
        .inspect_err(|e| error!("Error generating CSV: {}", e))?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((header::CONTENT_DISPOSITION, "attachment; filename=bid_results.csv"))
        .body(body))
}

/// Registers the bid routes on an app
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .route("/", web::get().to(index))
        .route("/process-bids", web::post().to(process_bids))
        .route("/download-csv", web::post().to(download_csv));
}

pub async fn start_server(host: &str, port: u16) -> std::io::Result<()> {
    info!("Listening on http://{}:{}", host, port);

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}
