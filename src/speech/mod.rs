//! Voice output for the advice text.
//!
//! Synthesis talks to a gTTS-compatible `translate_tts` endpoint; playback is
//! delegated to an external player command. Both are optional and their
//! failures never affect the assessment itself.

use crate::domain::ports::{AudioPlayer, SpeechSynthesizer};
use crate::utils::error::{MamaError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// 端點每次請求可接受的最大字元數
pub const MAX_CHUNK_CHARS: usize = 100;

#[derive(Debug, Clone)]
pub struct GoogleTts {
    client: Client,
    endpoint: String,
    lang: String,
    slow: bool,
}

impl GoogleTts {
    pub fn new(endpoint: impl Into<String>, lang: impl Into<String>, slow: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (compatible; mamaai)")
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            lang: lang.into(),
            slow,
        })
    }

    async fn fetch_chunk(&self, index: usize, total: usize, chunk: &str) -> Result<Vec<u8>> {
        let speed = if self.slow { "0.3" } else { "1" };
        let idx = index.to_string();
        let total_str = total.to_string();
        let textlen = chunk.chars().count().to_string();

        tracing::debug!("Requesting TTS chunk {}/{} ({} chars)", index + 1, total, textlen);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", self.lang.as_str()),
                ("client", "tw-ob"),
                ("ttsspeed", speed),
                ("total", total_str.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MamaError::SpeechServiceError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let chunks = split_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(MamaError::ConfigError {
                message: "No text to speak".to_string(),
            });
        }

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let bytes = self.fetch_chunk(index, chunks.len(), chunk).await?;
            audio.extend_from_slice(&bytes);
        }

        tracing::debug!("Synthesized {} bytes of audio", audio.len());
        Ok(audio)
    }
}

/// 以外部指令播放音訊檔，例如 `mpg123`
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    /// `command` 以空白分隔，第一段為程式名稱
    pub fn from_command_line(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| MamaError::MissingConfigError {
            field: "player".to_string(),
        })?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

#[async_trait]
impl AudioPlayer for CommandPlayer {
    async fn play(&self, path: &str) -> Result<()> {
        tracing::debug!("Playing {} with {}", path, self.program);

        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .await
            .map_err(|e| MamaError::PlaybackError {
                message: format!("failed to start '{}': {}", self.program, e),
            })?;

        if !status.success() {
            return Err(MamaError::PlaybackError {
                message: format!("'{}' exited with {}", self.program, status),
            });
        }
        Ok(())
    }
}

/// 依空白切分文字，每段不超過 `max_chars` 個字元；過長的單字會被硬切
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };
        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_text_respects_limit() {
        let text = "Risk Level: LOW RISK. Your symptoms appear to be within normal range. \
                    Continue with your regular prenatal care and attend all scheduled appointments.";
        let chunks = split_text(text, 40);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 40, "chunk too long: {:?}", chunk);
        }
        assert_eq!(chunks.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_split_text_hard_splits_long_words() {
        let chunks = split_text("abcdefghij xy", 4);
        assert_eq!(chunks, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_split_text_zero_limit_splits_per_char() {
        assert_eq!(split_text("hi yo", 0), vec!["h", "i", "y", "o"]);
    }

    #[test]
    fn test_split_text_empty() {
        assert!(split_text("   \n ", 100).is_empty());
    }

    #[test]
    fn test_player_command_line_parsing() {
        assert!(CommandPlayer::from_command_line("   ").is_err());
        let player = CommandPlayer::from_command_line("mpg123 -q").unwrap();
        assert_eq!(player.program, "mpg123");
        assert_eq!(player.args, vec!["-q".to_string()]);
    }
}
