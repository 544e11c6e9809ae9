use dialoguer::{Confirm, Input};
use std::io;
use std::path::{Path, PathBuf};

use crate::action::cli::run_conversion;
use crate::config::ports::RequestPort;
use crate::facade::converter::{Converter, DEFAULT_COMMAND};
use crate::models::conversion::ConversionRequest;
use crate::service::config_service::RequestService;
use crate::utils::utils::setup_logging;

pub async fn process_interactive_mode() -> io::Result<Option<PathBuf>> {
    println!("=== 歡迎使用互動模式 ===");
    setup_logging("warn")?;

    let engine = get_engine()?;
    let request_service = RequestService::new(Box::new(InteractiveRequestAdapter));
    let request = request_service.get_request()?;

    let converter = Converter::with_command(engine);
    run_conversion(&converter, request, false).await
}

pub fn get_engine() -> io::Result<String> {
    Input::new()
        .with_prompt("轉換程式名稱或路徑")
        .default(DEFAULT_COMMAND.to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("轉換程式輸入失敗: {}", e)))
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入來源檔案路徑（例如：./README.md）")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_file() { Ok(()) } else { Err(format!("檔案 '{}' 不存在", input)) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_format(prompt: &str, default: &str) -> io::Result<String> {
    Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() { Err("格式不可為空".to_string()) } else { Ok(()) }
        })
        .interact_text()
        .map(|s| s.trim().to_string())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("格式輸入失敗: {}", e)))
}

pub fn get_output_path() -> io::Result<Option<String>> {
    let to_file = Confirm::new()
        .with_prompt("是否將結果寫入檔案？（否則輸出到終端）")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出選項選擇失敗: {}", e)))?;
    if !to_file {
        return Ok(None);
    }
    Input::new()
        .with_prompt("輸入輸出檔案路徑（例如：./README.html）")
        .interact_text()
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_extra_args() -> io::Result<Vec<String>> {
    let raw: String = Input::new()
        .with_prompt("額外參數（以空白分隔，預設為空）")
        .default("".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("額外參數輸入失敗: {}", e)))?;
    Ok(split_extra_args(&raw))
}

pub fn split_extra_args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

// 互動請求適配器
pub struct InteractiveRequestAdapter;

impl RequestPort for InteractiveRequestAdapter {
    fn get_request(&self) -> io::Result<ConversionRequest> {
        let input = get_input_path()?;
        let from = get_format("來源格式", "markdown")?;
        let to = get_format("目標格式", "html")?;
        let output = get_output_path()?;
        let extra_args = get_extra_args()?;

        let mut request = ConversionRequest::new(from, to)
            .source_file(input)
            .extra_args(extra_args);
        if let Some(output) = output {
            request = request.output_file(output);
        }
        Ok(request)
    }
}
