//! Integration tests for ai_speech crate
//!
//! Exercises the Whisper provider against a mocked OpenAI-compatible API.

use ai_speech::{ResponseFormat, SpeechConfig, SpeechError, SpeechToText, WhisperProvider};
use domain::{AudioClip, AudioFormat};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test configuration pointing to mock server
fn test_config(base_url: &str) -> SpeechConfig {
    SpeechConfig {
        api_key: Some("test-api-key".to_string()),
        base_url: base_url.to_string(),
        language: Some("en".to_string()),
        timeout_ms: 5000,
        ..Default::default()
    }
}

/// Minimal 8-bit mono WAV; every byte stays ASCII so body matchers can read it
fn mock_wav_audio() -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&44u32.to_le_bytes());
    bytes.extend_from_slice(b"WAVEfmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&8_000u32.to_le_bytes());
    bytes.extend_from_slice(&8_000u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&8u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&8u32.to_le_bytes());
    bytes.extend_from_slice(&[0x7f; 8]);
    bytes
}

#[tokio::test]
async fn stt_transcription_uses_configured_language() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(body_string_contains("name=\"language\""))
        .and(body_string_contains("attempt.wav"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task": "transcribe",
            "language": "English",
            "duration": 1.2,
            "text": " Sunday",
            "segments": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = WhisperProvider::new(test_config(&mock_server.uri())).unwrap();
    let clip = AudioClip::new(mock_wav_audio(), AudioFormat::Wav).with_duration(1200);

    let transcription = provider.transcribe(clip).await.unwrap();

    assert_eq!(transcription.text, "Sunday");
    assert_eq!(transcription.language.as_deref(), Some("English"));
    assert_eq!(transcription.duration_ms, Some(1200));
}

#[tokio::test]
async fn stt_json_format_without_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(body_string_contains("json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "text": "pen" })),
        )
        .mount(&mock_server)
        .await;

    let config = SpeechConfig {
        response_format: ResponseFormat::Json,
        language: None,
        ..test_config(&mock_server.uri())
    };
    let provider = WhisperProvider::new(config).unwrap();

    let transcription = provider
        .transcribe(AudioClip::new(mock_wav_audio(), AudioFormat::Wav))
        .await
        .unwrap();

    assert_eq!(transcription.text, "pen");
    assert!(transcription.language.is_none());
    assert!(transcription.duration_ms.is_none());
}

#[tokio::test]
async fn stt_model_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {
                "message": "The model `whisper-9` does not exist",
                "type": "invalid_request_error",
                "code": "model_not_found"
            }
        })))
        .mount(&mock_server)
        .await;

    let config = SpeechConfig {
        model: "whisper-9".to_string(),
        ..test_config(&mock_server.uri())
    };
    let provider = WhisperProvider::new(config).unwrap();

    let result = provider
        .transcribe(AudioClip::new(mock_wav_audio(), AudioFormat::Wav))
        .await;

    assert!(matches!(result, Err(SpeechError::ModelNotAvailable(m)) if m == "whisper-9"));
}

#[tokio::test]
async fn stt_connection_refused() {
    // Nothing listens on this port once the server is dropped
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let provider = WhisperProvider::new(test_config(&uri)).unwrap();
    let result = provider
        .transcribe(AudioClip::new(mock_wav_audio(), AudioFormat::Wav))
        .await;

    assert!(matches!(
        result,
        Err(SpeechError::ConnectionFailed(_) | SpeechError::RequestFailed(_))
    ));
    assert!(!provider.is_available().await);
}
