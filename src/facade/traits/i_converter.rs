use async_trait::async_trait;
use crate::error::Result;
use crate::models::conversion::{ConversionRequest, ConversionResult};

// Facade 接口，負責呼叫外部轉換程式
#[async_trait]
pub trait ConverterTrait: Send + Sync {
    /// 執行一次轉換
    /// # 參數
    /// - request: 轉換請求
    /// # 回傳
    /// - 成功時返回 stdout 內容（寫入檔案時為空字串），失敗時返回 `ConvertError`
    async fn execute(&self, request: ConversionRequest) -> Result<ConversionResult>;
}
