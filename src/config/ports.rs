use async_trait::async_trait;
use crate::error::Result;
use crate::models::conversion::ConversionRequest;
use crate::models::invocation::{Invocation, ProcessOutput};

// 程序啟動的 Port
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// 啟動程序、寫入 stdin、收集 stdout/stderr 並等待結束
    /// # 回傳
    /// - 程序有結束即回傳 `ProcessOutput`（不論結束碼）
    /// - 無法啟動時回傳 `ConvertError::LaunchFailure`
    async fn launch(&self, invocation: Invocation) -> Result<ProcessOutput>;
}

// 轉換請求來源的 Port（命令列、互動模式）
pub trait RequestPort {
    fn get_request(&self) -> std::io::Result<ConversionRequest>;
}
