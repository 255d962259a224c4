//! Live microphone capture with `cpal`

use std::sync::{Arc, Mutex};
use std::time::Duration;

use application::{error::ApplicationError, ports::AudioCapturePort};
use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleFormat, SupportedStreamConfig};
use domain::{AudioClip, AudioFormat};
use tracing::{debug, instrument, warn};

use super::{CAPTURE_GRACE, CaptureError, encode_wav, f32_to_i16, remix};
use crate::config::CaptureConfig;

/// Records from a local input device and returns 16-bit PCM WAV
#[derive(Debug, Clone)]
pub struct MicrophoneCapture {
    config: CaptureConfig,
}

impl MicrophoneCapture {
    /// Create a capture adapter
    pub const fn new(config: CaptureConfig) -> Self {
        Self { config }
    }

    /// Check that the configured input device can be opened
    ///
    /// # Errors
    ///
    /// Returns an error if no matching device exists.
    pub fn check_device(&self) -> Result<String, CaptureError> {
        let device = select_device(self.config.device.as_deref())?;
        Ok(device.name().unwrap_or_else(|_| "unknown".to_string()))
    }
}

#[async_trait]
impl AudioCapturePort for MicrophoneCapture {
    #[instrument(skip(self))]
    async fn capture(&self, duration: Duration) -> Result<AudioClip, ApplicationError> {
        let config = self.config.clone();
        let task = tokio::task::spawn_blocking(move || record_blocking(&config, duration));

        let clip = tokio::time::timeout(duration + CAPTURE_GRACE, task)
            .await
            .map_err(|_| CaptureError::Timeout(duration + CAPTURE_GRACE))?
            .map_err(|e| CaptureError::Stream(format!("recording task failed: {e}")))??;

        debug!(bytes = clip.size_bytes(), "Recording finished");
        Ok(clip)
    }
}

fn select_device(name: Option<&str>) -> Result<Device, CaptureError> {
    let host = cpal::default_host();
    match name {
        Some(name) => host
            .input_devices()
            .map_err(|e| CaptureError::Config(e.to_string()))?
            .find(|d| d.name().is_ok_and(|n| n == name))
            .ok_or_else(|| CaptureError::DeviceNotFound(name.to_string())),
        None => host.default_input_device().ok_or(CaptureError::NoDevice),
    }
}

/// Prefer the configured layout; fall back to the device default
fn stream_config(device: &Device, config: &CaptureConfig) -> Result<SupportedStreamConfig, CaptureError> {
    let wanted = cpal::SampleRate(config.sample_rate);
    let matching = device.supported_input_configs().ok().and_then(|mut ranges| {
        ranges.find(|r| {
            r.channels() == config.channels
                && r.min_sample_rate() <= wanted
                && wanted <= r.max_sample_rate()
        })
    });

    match matching {
        Some(range) => Ok(range.with_sample_rate(wanted)),
        None => {
            let fallback = device
                .default_input_config()
                .map_err(|e| CaptureError::Config(e.to_string()))?;
            warn!(
                sample_rate = fallback.sample_rate().0,
                channels = fallback.channels(),
                "Requested input layout unsupported, using device default"
            );
            Ok(fallback)
        },
    }
}

fn record_blocking(config: &CaptureConfig, duration: Duration) -> Result<AudioClip, CaptureError> {
    let device = select_device(config.device.as_deref())?;
    let supported = stream_config(&device, config)?;
    let device_channels = supported.channels();
    let sample_rate = supported.sample_rate().0;
    let stream_config = supported.config();

    let samples: Arc<Mutex<Vec<i16>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&samples);
    let push = move |chunk: &mut dyn Iterator<Item = i16>| {
        if let Ok(mut buffer) = sink.lock() {
            buffer.extend(chunk);
        }
    };
    let on_error = |err: cpal::StreamError| warn!(error = %err, "Audio stream error");

    let stream = match supported.sample_format() {
        SampleFormat::F32 => device.build_input_stream(
            &stream_config,
            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                push(&mut data.iter().map(|s| f32_to_i16(*s)));
            },
            on_error,
            None,
        ),
        SampleFormat::I16 => device.build_input_stream(
            &stream_config,
            move |data: &[i16], _: &cpal::InputCallbackInfo| {
                push(&mut data.iter().copied());
            },
            on_error,
            None,
        ),
        SampleFormat::U16 => device.build_input_stream(
            &stream_config,
            move |data: &[u16], _: &cpal::InputCallbackInfo| {
                #[allow(clippy::cast_possible_truncation)]
                push(&mut data.iter().map(|s| (i32::from(*s) - 32_768) as i16));
            },
            on_error,
            None,
        ),
        other => {
            return Err(CaptureError::Config(format!(
                "Unsupported sample format: {other:?}"
            )));
        },
    }
    .map_err(|e| CaptureError::Stream(e.to_string()))?;

    stream
        .play()
        .map_err(|e| CaptureError::Stream(e.to_string()))?;
    std::thread::sleep(duration);
    drop(stream);

    let recorded = samples
        .lock()
        .map(|mut buffer| std::mem::take(&mut *buffer))
        .map_err(|_| CaptureError::Stream("sample buffer poisoned".to_string()))?;
    if recorded.is_empty() {
        return Err(CaptureError::Stream("no samples recorded".to_string()));
    }

    let recorded = remix(&recorded, device_channels, config.channels);
    let data = encode_wav(&recorded, sample_rate, config.channels)?;

    #[allow(clippy::cast_possible_truncation)]
    let duration_ms = duration.as_millis() as u64;
    Ok(AudioClip::new(data, AudioFormat::Wav).with_duration(duration_ms))
}
