use crate::canvas;

use super::Data;

use actix_web::{ web, HttpRequest, HttpResponse };

/// Serves the canvas JPEG at `/image` for any method; the request body is
/// ignored. A `fid` query parameter selects a cast's color when the
/// per-cast scope is active and is meaningless otherwise.
pub async fn handler(req: HttpRequest, data: web::Data<Data>) -> HttpResponse {
    log::info!("Received request: {} {}", req.method(), req.path());

    let color = match data.store.get(cast_from_query(req.query_string())) {
        Ok(color) => color,
        Err(err) => {
            log::error!("Error reading the stored color: {}", err);
            return HttpResponse::InternalServerError().body("Internal Server Error");
        }
    };

    match canvas::render_jpeg(color, data.frame.width, data.frame.height, data.frame.quality) {
        Ok(bytes) => {
            log::debug!("Served {}x{} frame image", data.frame.width, data.frame.height);
            HttpResponse::Ok()
                .content_type("image/jpeg")
                .body(bytes)
        }
        Err(err) => {
            log::error!("Error encoding the frame image: {}", err);
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

/// Pulls a cast fid out of the raw query string. Anything that does not
/// parse is treated as absent rather than an error.
fn cast_from_query(query: &str) -> Option<u64> {
    query.split('&').find_map(|pair| {
        let mut parts = pair.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some("fid"), Some(value)) => value.parse().ok(),
            _ => None,
        }
    })
}
