use crate::error::{ Error, ErrorKind, Result };

use image::{ codecs::jpeg::JpegEncoder, Rgb, RgbImage, Rgba };

/// Renders a `width` x `height` canvas uniformly filled with `color` and
/// encodes it as a JPEG at the given quality. Opacity is dropped on encode;
/// the palette only carries opaque colors anyway.
pub fn render_jpeg(color: Rgba<u8>, width: u32, height: u32, quality: u8) -> Result<Vec<u8>> {
    let Rgba([r, g, b, _]) = color;
    let canvas = RgbImage::from_pixel(width, height, Rgb([r, g, b]));

    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    encoder.encode_image(&canvas).map_err(|err| Error::from(ErrorKind::EncodeImage, err))?;

    Ok(bytes)
}
