//! WAV encoding and inspection with `hound`

use std::io::Cursor;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

/// Encode interleaved 16-bit PCM samples as a WAV file
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn encode_wav(samples: &[i16], sample_rate: u32, channels: u16) -> Result<Vec<u8>, hound::Error> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut cursor, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(cursor.into_inner())
}

/// Playback length of a WAV file, or `None` if it cannot be parsed
pub fn wav_duration_ms(bytes: &[u8]) -> Option<u64> {
    let reader = WavReader::new(Cursor::new(bytes)).ok()?;
    let sample_rate = u64::from(reader.spec().sample_rate);
    if sample_rate == 0 {
        return None;
    }
    Some(u64::from(reader.duration()) * 1000 / sample_rate)
}

/// Convert interleaved samples between channel layouts
///
/// Downmixing averages each frame; upmixing repeats the first channel.
pub fn remix(samples: &[i16], from: u16, to: u16) -> Vec<i16> {
    if from == to || from == 0 || to == 0 {
        return samples.to_vec();
    }

    let from = usize::from(from);
    let to = usize::from(to);
    samples
        .chunks(from)
        .flat_map(|frame| {
            let value = if to == 1 {
                let sum: i32 = frame.iter().copied().map(i32::from).sum();
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let avg = (sum / frame.len() as i32) as i16;
                avg
            } else {
                frame[0]
            };
            std::iter::repeat_n(value, to)
        })
        .collect()
}

/// Convert a normalized float sample to 16-bit PCM
#[allow(clippy::cast_possible_truncation)]
pub fn f32_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16
}
