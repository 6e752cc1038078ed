use anyhow::Context;
use spot_image_rs::image_pipeline::wire::{GetImageResponse, ImageResponse};
use spot_image_rs::image_pipeline::{ClockSkew, ConversionConfig, ImageResponseConverter};
use spot_image_rs::logger;

use tracing::{error, info};

const USAGE: &str = "usage: spot_image_rs <jpeg-file> [wire-source-name] [robot-name]";

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context(USAGE)?;
    let source_name = args.next().unwrap_or_else(|| "hand_color_image".to_string());
    let robot_name = args.next().unwrap_or_default();

    info!("Starting spot_image_rs...");

    let config = ConversionConfig::builder().robot_name(robot_name).build();
    let converter = ImageResponseConverter::new(config);

    info!("Image response converter initialized");
    info!(
        "Frame namespace: {}",
        if converter.config().robot_name.is_empty() {
            "<none>"
        } else {
            converter.config().robot_name.as_str()
        }
    );

    let response = ImageResponse::from_jpeg_file(&path, &source_name)
        .with_context(|| format!("loading {path}"))?;
    let batch = GetImageResponse {
        image_responses: vec![response],
    };

    match converter.convert(&batch, ClockSkew::ZERO) {
        Ok(result) => {
            for (source, entry) in &result.images {
                info!(
                    source = %source,
                    frame_id = %entry.image.frame_id,
                    width = entry.image.width,
                    height = entry.image.height,
                    encoding = entry.image.encoding.as_str(),
                    "Conversion successful!"
                );
            }
        }
        Err(e) => error!("Conversion failed: {}", e),
    }

    Ok(())
}
