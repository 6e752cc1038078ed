use tracing::{debug, instrument};

use crate::image_pipeline::{
    client::api::{ImageRetriever, TimeSyncApi},
    common::error::{ConversionError, Result},
    conversions::{ConversionConfig, ConversionResult, ImageResponseConverter},
    decode::{ImageDecoder, StandardImageDecoder},
    sources::ImageSourceName,
    wire::ImageRequest,
};

/// Runs one image retrieval cycle: fetch, read the clock skew, convert.
pub struct ImageClient<R: ImageRetriever, T: TimeSyncApi, D: ImageDecoder = StandardImageDecoder> {
    retriever: R,
    time_sync: T,
    converter: ImageResponseConverter<D>,
}

impl<R: ImageRetriever, T: TimeSyncApi> ImageClient<R, T> {
    pub fn new(retriever: R, time_sync: T, config: ConversionConfig) -> Self {
        Self {
            retriever,
            time_sync,
            converter: ImageResponseConverter::new(config),
        }
    }
}

impl<R: ImageRetriever, T: TimeSyncApi, D: ImageDecoder> ImageClient<R, T, D> {
    pub fn with_converter(retriever: R, time_sync: T, converter: ImageResponseConverter<D>) -> Self {
        Self {
            retriever,
            time_sync,
            converter,
        }
    }

    /// Fetches the requested images and converts them.
    ///
    /// The clock skew is read once, after the images arrive, and applied to
    /// every timestamp of the cycle.
    #[instrument(skip(self, request), fields(requested = request.len()))]
    pub fn get_images(&self, request: ImageRequest) -> Result<ConversionResult> {
        let response = self
            .retriever
            .get_images(&request)
            .map_err(|e| ConversionError::TransportFailure(format!("{e:#}")))?;
        debug!(responses = response.image_responses.len(), "Images received");

        let clock_skew = self
            .time_sync
            .clock_skew()
            .map_err(|e| ConversionError::ClockSkewUnavailable(format!("{e:#}")))?;
        debug!(skew_ns = clock_skew.as_nanos(), "Clock skew");

        self.converter.convert(&response, clock_skew)
    }

    pub fn config(&self) -> &ConversionConfig {
        self.converter.config()
    }

    /// Builds the request for `sources` using this client's configuration.
    pub fn request_for<I>(&self, sources: I) -> ImageRequest
    where
        I: IntoIterator<Item = ImageSourceName>,
    {
        ImageRequest::for_sources(sources, self.config())
    }
}
