use std::{
    collections::HashMap,
    sync::Arc,
};

use crate::{
    config::FrameConfig,
    error::{ Error, ErrorKind, Result },
    palette::ColorStore,
};

/// State shared by both handlers, built once at server start.
#[derive(Clone)]
pub struct Data {
    pub store: Arc<ColorStore>,
    pub template: String,
    pub base_url: String,
    pub frame: FrameConfig,
}

impl Data {
    /// Renders the frame page with a fresh UUID so clients re-fetch the
    /// image on every interaction. `cast` carries the interacting cast's
    /// fid into the image URL when the per-cast scope is active.
    pub fn render_page(&self, cast: Option<u64>) -> Result<String> {
        let image_query = match cast {
            Some(fid) => format!("fid={}&", fid),
            None => String::new(),
        };

        let mut args = HashMap::new();
        args.insert("uuid".to_string(), uuid::Uuid::new_v4().to_string());
        args.insert("base_url".to_string(), self.base_url.clone());
        args.insert("image_query".to_string(), image_query);

        strfmt::strfmt(&self.template, &args).map_err(|err| Error::from(ErrorKind::RenderPage, err))
    }
}
