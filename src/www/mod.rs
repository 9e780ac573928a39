mod data;
mod image;
mod page;

pub use data::Data;

use std::sync::Arc;

use crate::{
    config::Config,
    error::{ Error, ErrorKind, Result },
    palette::ColorStore,
};

use actix_web::{ middleware, web, App, HttpServer };

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::to(page::handler))
        .route("/image", web::to(image::handler));
}

pub fn start(config: Config) -> Result<()> {
    let template = std::fs::read_to_string(&config.frame.template)
        .map_err(|err| Error::from(ErrorKind::TemplateLoad, err))?;

    let data = web::Data::new(Data {
        store: Arc::new(ColorStore::new(config.frame.scope)),
        template,
        base_url: config.www.base_url.clone(),
        frame: config.frame.clone(),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .workers(config.www.workers)
    .bind(format!("{}:{}", config.www.bind_host, config.www.bind_port))?;

    actix_web::rt::System::new().block_on(server.run())?;

    Ok(())
}

#[cfg(test)]
pub(crate) fn test_data(scope: crate::palette::ColorScope) -> Data {
    use crate::config::FrameConfig;

    Data {
        store: Arc::new(ColorStore::new(scope)),
        template: "<html><head>\
                   <meta property=\"fc:frame:image\" content=\"{base_url}/image?{image_query}v={uuid}\">\
                   </head><body>{uuid}</body></html>".to_string(),
        base_url: "http://localhost:8080".to_string(),
        frame: FrameConfig::default(),
    }
}
