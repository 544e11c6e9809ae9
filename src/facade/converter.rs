use std::path::PathBuf;
use async_trait::async_trait;
use log::{debug, info, warn};
use crate::config::ports::ProcessLauncher;
use crate::error::{ConvertError, Result};
use crate::facade::traits::i_converter::ConverterTrait;
use crate::models::conversion::{ConversionRequest, ConversionResult};
use crate::models::invocation::{Invocation, ProcessOutput};
use crate::service::args;
use crate::service::process_service::TokioProcessLauncher;

/// 預設的轉換程式
pub const DEFAULT_COMMAND: &str = "pandoc";

/// 外部轉換程式的呼叫器，每次 `execute` 啟動一個獨立的程序
pub struct Converter {
    command: String,
    launcher: Box<dyn ProcessLauncher>,
}

impl Converter {
    /// 使用 `pandoc` 與 tokio launcher
    pub fn new() -> Self {
        Self::with_command(DEFAULT_COMMAND)
    }

    /// 指定轉換程式名稱或路徑
    pub fn with_command(command: impl Into<String>) -> Self {
        Converter {
            command: command.into(),
            launcher: Box::new(TokioProcessLauncher::new()),
        }
    }

    /// 替換程序啟動方式
    pub fn with_launcher(command: impl Into<String>, launcher: Box<dyn ProcessLauncher>) -> Self {
        Converter {
            command: command.into(),
            launcher,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// 在 PATH 中尋找轉換程式
    pub fn locate(&self) -> Option<PathBuf> {
        which::which(&self.command).ok()
    }

    /// 執行 `<command> --version`，返回第一行非空輸出
    pub async fn version(&self) -> Result<String> {
        let invocation = Invocation {
            program: self.command.clone(),
            args: vec!["--version".into()],
            stdin: None,
            spawn_options: None,
        };
        let output = self.launcher.launch(invocation).await?;
        let stdout = finish(&self.command, output)?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConverterTrait for Converter {
    async fn execute(&self, request: ConversionRequest) -> Result<ConversionResult> {
        let assembled = args::assemble(&request)?;
        let invocation = Invocation {
            program: self.command.clone(),
            args: assembled.args,
            stdin: assembled.stdin,
            spawn_options: request.spawn_options,
        };

        info!(
            "開始轉換：{} -> {}，輸入方式：{}",
            request.source_format,
            request.destination_format,
            if invocation.stdin.is_some() { "stdin" } else { "檔案" }
        );
        debug!("指令：{}", invocation.command_line());

        let output = self.launcher.launch(invocation).await?;
        let result = finish(&self.command, output)?;
        info!("轉換完成，輸出 {} 位元組", result.len());
        Ok(result)
    }
}

// 依結束碼決定成功或失敗
fn finish(engine: &str, output: ProcessOutput) -> Result<String> {
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    match output.exit_code {
        Some(0) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
        Some(code) => {
            warn!("{} 結束碼為 {}", engine, code);
            Err(ConvertError::NonZeroExit {
                engine: engine.to_string(),
                code,
                stderr,
            })
        }
        None => {
            warn!("{} 被訊號終止", engine);
            Err(ConvertError::Terminated {
                engine: engine.to_string(),
                stderr,
            })
        }
    }
}
