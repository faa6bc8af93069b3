//! Image loading and channel normalization.

use std::io::Cursor;

use image::{DynamicImage, ImageReader};
use ndarray::{s, Array2, Array3, ArrayD, Axis, Ix2, Ix3, ShapeError};
use thiserror::Error;

use crate::download::{HttpFetcher, DEFAULT_USER_AGENT};
use crate::error::{Error, Result};
use crate::media::source::ImageSource;

/// A decoded image: shape (height, width, 3), channels in BGR order.
pub type Image = Array3<u8>;

/// Pixel array whose shape has no 3-channel BGR interpretation.
#[derive(Debug, Error)]
#[error("unsupported image shape {0:?}, expected (H, W), (H, W, 1), (H, W, 3) or (H, W, 4)")]
pub struct UnsupportedShape(pub Vec<usize>);

/// Load an image from any supported source as a BGR array.
///
/// Files, byte buffers and URLs are decoded with the `image` crate; arrays
/// are taken as already decoded. The result always has three channels:
/// alpha is dropped and grayscale is replicated. Any failure is reported as
/// [`Error::ImageLoad`] naming the source.
pub async fn load_image(source: impl Into<ImageSource>) -> Result<Image> {
    let source = source.into();
    let label = source.to_string();

    let decoded = match source {
        ImageSource::Url(url) => {
            let bytes = fetch_bytes(url.as_str())
                .await
                .map_err(|e| Error::image_load(&label, e))?;
            decode_bytes(&bytes).map_err(|e| Error::image_load(&label, e))?
        }
        ImageSource::Path(path) => {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| Error::image_load(&label, e))?;
            decode_bytes(&bytes).map_err(|e| Error::image_load(&label, e))?
        }
        ImageSource::Bytes(bytes) => {
            decode_bytes(&bytes).map_err(|e| Error::image_load(&label, e))?
        }
        ImageSource::Array(array) => array,
    };

    normalize_channels(decoded).map_err(|e| Error::image_load(label, e))
}

/// Blocking variant of [`load_image`] for local sources.
///
/// URL sources are rejected; use [`load_image`] for those.
pub fn load_image_blocking(source: impl Into<ImageSource>) -> Result<Image> {
    let source = source.into();
    let label = source.to_string();

    if source.is_remote() {
        return Err(Error::image_load(
            label,
            "remote sources need the async loader",
        ));
    }

    let decoded = match source {
        ImageSource::Url(_) => unreachable!("remote sources are rejected above"),
        ImageSource::Path(path) => {
            let bytes = std::fs::read(&path).map_err(|e| Error::image_load(&label, e))?;
            decode_bytes(&bytes).map_err(|e| Error::image_load(&label, e))?
        }
        ImageSource::Bytes(bytes) => {
            decode_bytes(&bytes).map_err(|e| Error::image_load(&label, e))?
        }
        ImageSource::Array(array) => array,
    };

    normalize_channels(decoded).map_err(|e| Error::image_load(label, e))
}

/// Bring a decoded BGR(A) or grayscale array to three BGR channels.
///
/// - (H, W) and (H, W, 1): gray is copied into all three channels
/// - (H, W, 4): alpha is dropped
/// - (H, W, 3): returned unchanged
pub fn normalize_channels(array: ArrayD<u8>) -> std::result::Result<Image, UnsupportedShape> {
    let shape = array.shape().to_vec();
    let unsupported = |_: ShapeError| UnsupportedShape(shape.clone());

    match *shape.as_slice() {
        [_, _] => {
            let gray = array.into_dimensionality::<Ix2>().map_err(unsupported)?;
            Ok(replicate_gray(&gray))
        }
        [_, _, 1] => {
            let gray = array
                .into_dimensionality::<Ix3>()
                .map_err(unsupported)?
                .index_axis_move(Axis(2), 0);
            Ok(replicate_gray(&gray))
        }
        [_, _, 3] => array.into_dimensionality::<Ix3>().map_err(unsupported),
        [_, _, 4] => {
            let bgra = array.into_dimensionality::<Ix3>().map_err(unsupported)?;
            Ok(bgra.slice(s![.., .., ..3]).to_owned())
        }
        _ => Err(UnsupportedShape(shape.clone())),
    }
}

fn replicate_gray(gray: &Array2<u8>) -> Image {
    let (height, width) = gray.dim();
    Array3::from_shape_fn((height, width, 3), |(y, x, _)| gray[[y, x]])
}

/// Decode an encoded image, guessing the format from its content.
fn decode_bytes(bytes: &[u8]) -> std::result::Result<ArrayD<u8>, image::ImageError> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    image_to_array(image).map_err(|e| {
        image::ImageError::Decoding(image::error::DecodingError::new(
            image::error::ImageFormatHint::Unknown,
            e,
        ))
    })
}

/// Convert a decoded image into a BGR(A) or grayscale array.
///
/// The `image` crate decodes to RGB(A); red and blue are swapped so every
/// array that reaches [`normalize_channels`] shares the same channel order.
fn image_to_array(image: DynamicImage) -> std::result::Result<ArrayD<u8>, ShapeError> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let color = image.color();

    if !color.has_color() && !color.has_alpha() {
        let gray = image.into_luma8();
        return Ok(Array2::from_shape_vec((height, width), gray.into_raw())?.into_dyn());
    }

    let mut array = if color.has_alpha() {
        Array3::from_shape_vec((height, width, 4), image.into_rgba8().into_raw())?
    } else {
        Array3::from_shape_vec((height, width, 3), image.into_rgb8().into_raw())?
    };

    for mut pixel in array.lanes_mut(Axis(2)) {
        pixel.swap(0, 2);
    }

    Ok(array.into_dyn())
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = HttpFetcher::new(DEFAULT_USER_AGENT)?.get(url).await?;
    Ok(response.bytes().await?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::test_support::serve_once;
    use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};
    use ndarray::{arr2, s, Array};

    fn encode_png(image: DynamicImage) -> Vec<u8> {
        let mut buf = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_grayscale_array_becomes_three_channels() {
        let gray = arr2(&[[1u8, 2, 3], [4, 5, 6]]).into_dyn();
        let image = normalize_channels(gray).unwrap();

        assert_eq!(image.dim(), (2, 3, 3));
        assert_eq!(image.slice(s![1, 2, ..]).to_vec(), vec![6, 6, 6]);
    }

    #[test]
    fn test_single_channel_array_becomes_three_channels() {
        let gray = Array::from_shape_vec((2, 2, 1), vec![9u8, 8, 7, 6])
            .unwrap()
            .into_dyn();
        let image = normalize_channels(gray).unwrap();

        assert_eq!(image.dim(), (2, 2, 3));
        assert_eq!(image.slice(s![0, 1, ..]).to_vec(), vec![8, 8, 8]);
    }

    #[test]
    fn test_alpha_is_discarded() {
        let bgra = Array::from_shape_fn((3, 2, 4), |(y, x, c)| (y * 100 + x * 10 + c) as u8);
        let image = normalize_channels(bgra.clone().into_dyn()).unwrap();

        assert_eq!(image.dim(), (3, 2, 3));
        assert_eq!(image, bgra.slice(s![.., .., ..3]));
    }

    #[test]
    fn test_three_channels_pass_through() {
        let bgr = Array::from_shape_fn((4, 5, 3), |(y, x, c)| (y + x * 7 + c * 31) as u8);
        let image = normalize_channels(bgr.clone().into_dyn()).unwrap();
        assert_eq!(image, bgr);
    }

    #[test]
    fn test_unsupported_shapes() {
        let two_channel = ArrayD::<u8>::zeros(vec![2, 2, 2]);
        assert!(normalize_channels(two_channel).is_err());

        let flat = ArrayD::<u8>::zeros(vec![16]);
        let err = normalize_channels(flat).unwrap_err();
        assert_eq!(err.0, vec![16]);
    }

    #[test]
    fn test_decoded_png_is_bgr_without_alpha() {
        let png = encode_png(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            4,
            3,
            Rgba([10, 20, 30, 40]),
        )));
        let image = load_image_blocking(png).unwrap();

        assert_eq!(image.dim(), (3, 4, 3));
        assert_eq!(image.slice(s![2, 3, ..]).to_vec(), vec![30, 20, 10]);
    }

    #[test]
    fn test_decoded_rgb_png_is_reordered() {
        let png = encode_png(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            2,
            2,
            Rgb([200, 100, 0]),
        )));
        let image = load_image_blocking(png).unwrap();
        assert_eq!(image.slice(s![0, 0, ..]).to_vec(), vec![0, 100, 200]);
    }

    #[test]
    fn test_decoded_gray_png_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(5, 2, Luma([77])).save(&path).unwrap();

        let image = tokio_test::block_on(load_image(&path)).unwrap();
        assert_eq!(image.dim(), (2, 5, 3));
        assert!(image.iter().all(|&v| v == 77));
    }

    #[test]
    fn test_array_source_through_async_loader() {
        let gray = arr2(&[[0u8, 255]]).into_dyn();
        let image = tokio_test::block_on(load_image(gray)).unwrap();
        assert_eq!(image.dim(), (1, 2, 3));
    }

    #[test]
    fn test_missing_file_reports_source() {
        let err = load_image_blocking("/nonexistent/face.png").unwrap_err();
        match err {
            Error::ImageLoad { input, .. } => assert_eq!(input, "/nonexistent/face.png"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_corrupt_bytes_fail_with_image_load() {
        let err = load_image_blocking(vec![0u8, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::ImageLoad { ref input, .. } if input == "<4 bytes>"));
        assert!(err.to_string().starts_with("Could not load image <4 bytes>"));
    }

    #[test]
    fn test_unsupported_array_fails_with_image_load() {
        let err = load_image_blocking(ArrayD::<u8>::zeros(vec![2, 2, 2])).unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }

    #[test]
    fn test_blocking_loader_rejects_urls() {
        let err = load_image_blocking("https://example.com/face.png").unwrap_err();
        assert!(
            matches!(err, Error::ImageLoad { ref input, .. } if input == "https://example.com/face.png")
        );
        assert!(err.to_string().contains("async loader"));
    }

    #[tokio::test]
    async fn test_url_source_is_fetched_and_decoded() {
        let png = encode_png(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            4,
            3,
            Rgba([10, 20, 30, 40]),
        )));
        let url = serve_once("200 OK", "face.png", png).await;

        let image = load_image(url.as_str()).await.unwrap();

        assert_eq!(image.dim(), (3, 4, 3));
        assert_eq!(image.slice(s![0, 0, ..]).to_vec(), vec![30, 20, 10]);
    }

    #[tokio::test]
    async fn test_url_error_status_reports_source() {
        let url = serve_once("404 Not Found", "face.png", b"missing".as_slice()).await;

        let err = load_image(url.as_str()).await.unwrap_err();
        match err {
            Error::ImageLoad { input, .. } => assert_eq!(input, url),
            other => panic!("unexpected error: {}", other),
        }
    }
}
