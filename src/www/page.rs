use crate::{
    frame::FramePayload,
    palette::{ self, ColorScope },
};

use super::Data;

use actix_web::{ http::Method, web, HttpRequest, HttpResponse };

/// Serves the frame page at `/` for any method. POST bodies carry an
/// interaction callback; a selector in the palette range repaints the
/// stored color before the page is rendered.
pub async fn handler(req: HttpRequest, body: web::Bytes, data: web::Data<Data>) -> HttpResponse {
    log::info!("Received request: {} {}", req.method(), req.path());

    let mut cast = None;
    if req.method() == Method::POST {
        let payload: FramePayload = match serde_json::from_slice(&body) {
            Ok(payload) => payload,
            Err(err) => {
                log::error!("Error decoding interaction payload: {}", err);
                return HttpResponse::BadRequest().body("Bad Request");
            }
        };

        let interaction = payload.untrusted_data;
        log::info!("Interaction received: {:?}", interaction);

        if let Some(color) = palette::color_for(interaction.button_index) {
            log::info!("Setting color {}", interaction.button_index);
            if let Err(err) = data.store.set(interaction.cast_id.fid, color) {
                log::error!("Error updating the stored color: {}", err);
                return HttpResponse::InternalServerError().body("Internal Server Error");
            }
        }

        if data.store.scope() == ColorScope::PerCast {
            cast = Some(interaction.cast_id.fid);
        }

        for pair in req.query_string().split('&').filter(|pair| !pair.is_empty()) {
            log::debug!("Query parameter: {}", pair);
        }
    }

    match data.render_page(cast) {
        Ok(page) => {
            log::debug!("Served the frame page");
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(page)
        }
        Err(err) => {
            log::error!("Error rendering the frame page: {}", err);
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        palette::{ ColorScope, DEFAULT_COLOR, PALETTE },
        www::test_data,
    };

    use super::*;

    use actix_web::{ http::StatusCode, test, App };

    #[actix_web::test]
    async fn page_carries_a_different_uuid_each_time() {
        let data = test_data(ColorScope::Shared);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(data))
                .route("/", web::to(handler)),
        ).await;

        let uuid_re = regex::Regex::new(
            r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
        ).unwrap();

        let mut pages = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
            assert_eq!(content_type, "text/html; charset=utf-8");

            let bytes = test::read_body(resp).await;
            pages.push(String::from_utf8(bytes.to_vec()).unwrap());
        }

        assert!(uuid_re.is_match(&pages[0]), "no uuid in: {}", pages[0]);
        assert_ne!(pages[0], pages[1]);
    }

    #[actix_web::test]
    async fn valid_selector_repaints_the_store() {
        let data = test_data(ColorScope::Shared);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(data.clone()))
                .route("/", web::to(handler)),
        ).await;

        let req = test::TestRequest::post()
            .uri("/")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"untrustedData": {"fid": 244761, "buttonIndex": 3}}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(data.store.get(None).unwrap(), PALETTE[2]);
    }

    #[actix_web::test]
    async fn out_of_range_selectors_change_nothing() {
        let data = test_data(ColorScope::Shared);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(data.clone()))
                .route("/", web::to(handler)),
        ).await;

        data.store.set(0, PALETTE[0]).unwrap();

        for body in &[
            r#"{"untrustedData": {"buttonIndex": 0}}"#,
            r#"{"untrustedData": {"buttonIndex": 5}}"#,
            r#"{"untrustedData": {"buttonIndex": -2}}"#,
            r#"{"untrustedData": {}}"#,
            r#"{}"#,
        ] {
            let req = test::TestRequest::post()
                .uri("/")
                .insert_header(("content-type", "application/json"))
                .set_payload(*body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "body: {}", body);
            assert_eq!(data.store.get(None).unwrap(), PALETTE[0], "body: {}", body);
        }
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let data = test_data(ColorScope::Shared);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(data.clone()))
                .route("/", web::to(handler)),
        ).await;

        for body in &["", "not json", r#"{"untrustedData": {"buttonIndex": "three"}}"#] {
            let req = test::TestRequest::post()
                .uri("/")
                .insert_header(("content-type", "application/json"))
                .set_payload(*body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {:?}", body);
            assert_eq!(data.store.get(None).unwrap(), DEFAULT_COLOR);
        }
    }

    #[actix_web::test]
    async fn per_cast_interactions_name_their_cast_in_the_image_url() {
        let data = test_data(ColorScope::PerCast);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(data.clone()))
                .route("/", web::to(handler)),
        ).await;

        let req = test::TestRequest::post()
            .uri("/")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"untrustedData": {"buttonIndex": 2, "castId": {"fid": 77, "hash": "0x01"}}}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = test::read_body(resp).await;
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("/image?fid=77&v="), "unexpected page: {}", page);

        assert_eq!(data.store.get(Some(77)).unwrap(), PALETTE[1]);
        assert_eq!(data.store.get(Some(78)).unwrap(), DEFAULT_COLOR);
    }
}
