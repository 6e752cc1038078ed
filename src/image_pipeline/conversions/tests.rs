use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use image::ImageEncoder;

use crate::image_pipeline::common::{ClockSkew, ConversionError, ConversionStage, Result, Timestamp};
use crate::image_pipeline::conversions::{ConversionConfig, ImageResponseConverter};
use crate::image_pipeline::decode::{DecodedPixels, ImageDecoder, PixelEncoding, PixelLayout};
use crate::image_pipeline::sources::{ImageSourceName, SpotCamera, SpotImageType};
use crate::image_pipeline::transforms::FramePolicy;
use crate::image_pipeline::wire::{
    FrameTreeSnapshot, GetImageResponse, Image, ImageCapture, ImageFormat, ImageResponse,
    ImageSource, PinholeIntrinsics, PixelFormat, SE3Pose, Vec2, WireTimestamp,
};

struct MockDecoder {
    fail_on_call: Option<usize>,
    calls: Arc<AtomicUsize>,
}

impl ImageDecoder for MockDecoder {
    fn decode(&self, _image: &Image, layout: PixelLayout) -> Result<DecodedPixels> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on_call == Some(call) {
            return Err(ConversionError::DecodeFailed("Mock decode error".to_string()));
        }
        Ok(DecodedPixels {
            width: 2,
            height: 2,
            layout,
            encoding: PixelEncoding::Mono16,
            step: 4,
            data: vec![0u8; 8],
        })
    }
}

fn mock_converter(fail_on_call: Option<usize>) -> (ImageResponseConverter<MockDecoder>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let decoder = MockDecoder {
        fail_on_call,
        calls: calls.clone(),
    };
    (
        ImageResponseConverter::with_custom(decoder, ConversionConfig::default()),
        calls,
    )
}

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([90, 120, 200]));
    let mut buffer = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut buffer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

fn odom_snapshot(sensor_frame: &str, sensor_parent: &str) -> FrameTreeSnapshot {
    FrameTreeSnapshot::default()
        .with_edge("body", "odom", SE3Pose::default())
        .with_edge("odom", "vision", SE3Pose::default())
        .with_edge(sensor_frame, sensor_parent, SE3Pose::default())
}

fn response(source_name: &str, sensor_frame: &str, image: Image, seconds: i64) -> ImageResponse {
    ImageResponse {
        shot: ImageCapture {
            acquisition_time: WireTimestamp { seconds, nanos: 0 },
            transforms_snapshot: odom_snapshot(sensor_frame, "body"),
            frame_name_image_sensor: sensor_frame.to_string(),
            image,
        },
        source: ImageSource {
            name: source_name.to_string(),
            rows: 0,
            cols: 0,
            depth_scale: 1000.0,
            pinhole: PinholeIntrinsics {
                focal_length: Vec2 { x: 300.0, y: 301.0 },
                principal_point: Vec2 { x: 160.0, y: 120.0 },
                skew: Vec2::default(),
            },
        },
    }
}

fn depth_response(source_name: &str, cols: i32, rows: i32, seconds: i64) -> ImageResponse {
    let image = Image {
        cols,
        rows,
        data: vec![0x01; (cols * rows * 2) as usize],
        format: ImageFormat::Raw as i32,
        pixel_format: PixelFormat::DepthU16 as i32,
    };
    response(source_name, &format!("{source_name}_sensor"), image, seconds)
}

fn jpeg_response(source_name: &str, width: u32, height: u32, seconds: i64) -> ImageResponse {
    let data = jpeg_bytes(width, height);
    let image = Image {
        cols: data.len() as i32,
        rows: 1,
        data,
        format: ImageFormat::Jpeg as i32,
        pixel_format: PixelFormat::RgbU8 as i32,
    };
    let mut out = response(source_name, "hand_color_image_sensor", image, seconds);
    out.shot.transforms_snapshot = odom_snapshot("hand_color_image_sensor", "arm0.link_wr1")
        .with_edge("arm0.link_wr1", "body", SE3Pose::default());
    out
}

fn batch(responses: Vec<ImageResponse>) -> GetImageResponse {
    GetImageResponse {
        image_responses: responses,
    }
}

#[test]
fn test_config_builder() {
    let config = ConversionConfig::builder()
        .robot_name("spot")
        .frame_policy(FramePolicy::empty())
        .compress_rgb(false)
        .jpeg_quality_percent(50.0)
        .build();

    assert_eq!(config.robot_name, "spot");
    assert_eq!(config.frame_policy, FramePolicy::empty());
    assert!(!config.compress_rgb);
    assert_eq!(config.jpeg_quality_percent, 50.0);
}

#[test]
fn test_config_defaults() {
    let config = ConversionConfig::builder().build();

    assert_eq!(config.robot_name, "");
    assert_eq!(config.frame_policy, FramePolicy::default());
    assert!(config.compress_rgb);
}

#[test]
fn test_depth_and_jpeg_batch_end_to_end() {
    let converter = ImageResponseConverter::new(ConversionConfig::default());
    let input = batch(vec![
        depth_response("frontleft_depth", 640, 480, 1_000),
        jpeg_response("hand_color_image", 1280, 720, 2_000),
    ]);

    let result = converter.convert(&input, ClockSkew::from_millis(50)).unwrap();

    assert_eq!(result.images.len(), 2);

    let depth = &result.images[&ImageSourceName::new(SpotCamera::FrontLeft, SpotImageType::Depth)];
    assert_eq!((depth.image.width, depth.image.height), (640, 480));
    assert_eq!(depth.image.encoding, PixelEncoding::Mono16);
    assert!(depth.image.is_depth());
    assert_eq!(depth.image.stamp, Timestamp::from_secs_nanos(999, 950_000_000));
    assert_eq!(depth.info.stamp, depth.image.stamp);

    let hand = &result.images[&ImageSourceName::new(SpotCamera::Hand, SpotImageType::Rgb)];
    assert_eq!((hand.image.width, hand.image.height), (1280, 720));
    assert_eq!(hand.image.encoding, PixelEncoding::Bgr8);
    assert_eq!(hand.image.stamp, Timestamp::from_secs_nanos(1_999, 950_000_000));
    assert_eq!((hand.info.width, hand.info.height), (1280, 720));
    assert_eq!(hand.info.k[0], 300.0);

    for tf in &result.transforms {
        assert!(!["body", "odom", "vision", "arm0.link_wr1"].contains(&tf.child_frame_id.as_str()));
    }
    let children: Vec<&str> = result.transforms.iter().map(|tf| tf.child_frame_id.as_str()).collect();
    assert_eq!(children, vec!["frontleft_depth_sensor", "hand_color_image_sensor"]);
    assert_eq!(result.transforms[1].parent_frame_id, "link_wr1");
    assert_eq!(result.transforms[0].stamp, depth.image.stamp);
    assert_eq!(result.transforms[1].stamp, hand.image.stamp);
}

#[test]
fn test_robot_name_namespaces_frames() {
    let config = ConversionConfig::builder().robot_name("spot").build();
    let converter = ImageResponseConverter::new(config);

    let result = converter
        .convert(&batch(vec![depth_response("back_depth", 4, 4, 10)]), ClockSkew::ZERO)
        .unwrap();

    let back = &result.images[&ImageSourceName::new(SpotCamera::Back, SpotImageType::Depth)];
    assert_eq!(back.image.frame_id, "spot/back_depth_sensor");
    assert_eq!(back.info.frame_id, "spot/back_depth_sensor");
    assert_eq!(result.transforms.len(), 1);
    assert_eq!(result.transforms[0].child_frame_id, "spot/back_depth_sensor");
    assert_eq!(result.transforms[0].parent_frame_id, "spot/body");
}

#[test]
fn test_unknown_source_fails_whole_batch() {
    let converter = ImageResponseConverter::new(ConversionConfig::default());
    let input = batch(vec![
        depth_response("frontleft_depth", 4, 4, 10),
        depth_response("frontleft_thermal", 4, 4, 10),
    ]);

    let err = converter.convert(&input, ClockSkew::ZERO).unwrap_err();

    assert_eq!(err.stage(), Some(ConversionStage::SourceResolution));
    assert!(matches!(err.root(), ConversionError::UnknownSource(name) if name == "frontleft_thermal"));
}

#[test]
fn test_duplicate_source_fails() {
    let converter = ImageResponseConverter::new(ConversionConfig::default());
    let input = batch(vec![
        depth_response("left_depth", 4, 4, 10),
        depth_response("left_depth", 4, 4, 11),
    ]);

    let err = converter.convert(&input, ClockSkew::ZERO).unwrap_err();

    assert!(matches!(err.root(), ConversionError::DuplicateSource(name) if name == "left_depth"));
}

#[test]
fn test_unknown_pixel_format_fails_before_decode() {
    let (converter, calls) = mock_converter(None);
    let mut bad = depth_response("right_depth", 4, 4, 10);
    bad.shot.image.pixel_format = PixelFormat::Unknown as i32;

    let err = converter.convert(&batch(vec![bad]), ClockSkew::ZERO).unwrap_err();

    assert_eq!(err.stage(), Some(ConversionStage::PixelFormatResolution));
    assert!(matches!(err.root(), ConversionError::UnknownPixelFormat(0)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_decode_failure_stops_remaining_sources() {
    let (converter, calls) = mock_converter(Some(0));
    let input = batch(vec![
        depth_response("frontleft_depth", 4, 4, 10),
        depth_response("frontright_depth", 4, 4, 10),
    ]);

    let err = converter.convert(&input, ClockSkew::ZERO).unwrap_err();

    assert_eq!(err.stage(), Some(ConversionStage::ImageDecode));
    assert!(matches!(err.root(), ConversionError::DecodeFailed(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_late_failure_discards_earlier_sources() {
    let (converter, calls) = mock_converter(Some(2));
    let input = batch(vec![
        depth_response("frontleft_depth", 4, 4, 10),
        depth_response("frontright_depth", 4, 4, 10),
        depth_response("back_depth", 4, 4, 10),
    ]);

    let result = converter.convert(&input, ClockSkew::ZERO);

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_real_decoder_errors_are_staged() {
    let converter = ImageResponseConverter::new(ConversionConfig::default());
    let mut short = depth_response("hand_depth", 8, 8, 10);
    short.shot.image.data.pop();

    let err = converter.convert(&batch(vec![short]), ClockSkew::ZERO).unwrap_err();

    assert_eq!(err.stage(), Some(ConversionStage::ImageDecode));
    assert!(matches!(err.root(), ConversionError::DecodeFailed(_)));
}

#[test]
fn test_greyscale_u16_keeps_semantic_tag() {
    let converter = ImageResponseConverter::new(ConversionConfig::default());
    let mut grey = depth_response("frontleft_depth", 4, 4, 10);
    grey.shot.image.pixel_format = PixelFormat::GreyscaleU16 as i32;

    let result = converter.convert(&batch(vec![grey]), ClockSkew::ZERO).unwrap();

    let image = &result.images[&ImageSourceName::new(SpotCamera::FrontLeft, SpotImageType::Depth)].image;
    assert_eq!(image.pixel_format, PixelFormat::GreyscaleU16);
    assert!(!image.is_depth());
}

#[test]
fn test_empty_batch() {
    let (converter, _) = mock_converter(None);

    let result = converter.convert(&batch(Vec::new()), ClockSkew::from_millis(5)).unwrap();

    assert!(result.images.is_empty());
    assert!(result.transforms.is_empty());
}

#[test]
fn test_set_config_changes_frame_policy() {
    let (mut converter, _) = mock_converter(None);
    converter.set_config(ConversionConfig::builder().frame_policy(FramePolicy::empty()).build());

    let result = converter
        .convert(&batch(vec![depth_response("left_depth", 4, 4, 10)]), ClockSkew::ZERO)
        .unwrap();

    assert_eq!(converter.config().frame_policy, FramePolicy::empty());
    assert_eq!(result.transforms.len(), 3);
}
