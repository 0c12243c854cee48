use crate::refs::{ObjectReferences, RefType};
use base64::Engine;
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use thiserror::Error;

/// Failures decoding an image handed to the engine. These are usually recovered
/// from locally: a signature that can't be decoded is replaced by blank space.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("image data is empty")]
    Empty,

    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Decode(#[from] image::ImageError),
}

/// How the pixels of a raster image are carried into the PDF
pub enum RasterImageType {
    /// An RGB JPEG, embedded byte-for-byte with the DCT filter
    DirectlyEmbeddableJpeg(Vec<u8>),
    /// Anything else, re-encoded as Flate-compressed RGB with an optional alpha mask
    Image(DynamicImage),
}

/// A decoded raster image, stored in a [Document](crate::Document) and placed on
/// pages by id. `width` and `height` are in pixels.
pub struct Image {
    pub image: RasterImageType,
    pub width: f32,
    pub height: f32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Decode an image from base64, accepting either bare base64 or a
    /// `data:image/png;base64,...` URL as produced by browser signature pads
    pub fn from_base64(data: &str) -> Result<Image, ImageError> {
        let payload = match data.split_once(',') {
            Some((header, payload)) if header.starts_with("data:") => payload,
            _ => data,
        };
        let payload: String = payload.chars().filter(|ch| !ch.is_whitespace()).collect();
        if payload.is_empty() {
            return Err(ImageError::Empty);
        }

        let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
        Self::from_bytes(bytes)
    }

    /// Decode an image from its encoded bytes (PNG, JPEG, ...)
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Image, ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }

        let format = image::guess_format(&bytes)?;
        let image = image::load_from_memory_with_format(&bytes, format)?;
        let width = image.width() as f32;
        let height = image.height() as f32;

        let image = match (format, image.color()) {
            (ImageFormat::Jpeg, ColorType::Rgb8) => RasterImageType::DirectlyEmbeddableJpeg(bytes),
            _ => RasterImageType::Image(image),
        };

        Ok(Image {
            image,
            width,
            height,
        })
    }

    /// Scale the image to fit within `max_width` x `max_height`, preserving its
    /// aspect ratio and never enlarging it. Returns the (width, height) to draw at.
    pub fn fit_within(&self, max_width: f32, max_height: f32) -> (f32, f32) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return (0.0, 0.0);
        }
        let scale = (max_width / self.width)
            .min(max_height / self.height)
            .min(1.0);
        (self.width * scale, self.height * scale)
    }

    fn encode(&self) -> EncodeOutput {
        match &self.image {
            RasterImageType::DirectlyEmbeddableJpeg(bytes) => EncodeOutput {
                filter: Filter::DctDecode,
                bytes: bytes.clone(),
                mask: None,
            },
            RasterImageType::Image(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                }
            }
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}
