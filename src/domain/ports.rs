use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// 將文字轉成音訊位元組
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;
}

/// 播放已存檔的音訊，並等待播放結束
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    async fn play(&self, path: &str) -> Result<()>;
}
