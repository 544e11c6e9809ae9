use std::ffi::OsString;
use std::path::Path;
use crate::error::{ConvertError, Result};
use crate::models::conversion::ConversionRequest;
use crate::models::encoding::SourceEncoding;

/// 組好的參數列與要寫入 stdin 的資料
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledArgs {
    pub args: Vec<OsString>,
    pub stdin: Option<Vec<u8>>,
}

/// 驗證請求並依來源選擇參數組裝方式，`source_text` 優先
pub fn assemble(request: &ConversionRequest) -> Result<AssembledArgs> {
    if request.output_to_file && dest_path(request).is_none() {
        return Err(ConvertError::invalid_request("no file destination provided"));
    }

    if let Some(text) = &request.source_text {
        text_input_args(request, text)
    } else if let Some(path) = &request.source_file_path {
        Ok(file_input_args(request, path))
    } else {
        Err(ConvertError::invalid_request("no input provided"))
    }
}

fn dest_path(request: &ConversionRequest) -> Option<&Path> {
    request
        .dest_file_path
        .as_deref()
        .filter(|path| !path.as_os_str().is_empty())
}

// -f <from> -t <to> [-o <dest>]
fn base_args(request: &ConversionRequest) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-f".into(),
        request.source_format.clone().into(),
        "-t".into(),
        request.destination_format.clone().into(),
    ];
    if request.output_to_file {
        if let Some(dest) = dest_path(request) {
            args.push("-o".into());
            args.push(dest.as_os_str().to_os_string());
        }
    }
    args
}

fn file_input_args(request: &ConversionRequest, path: &Path) -> AssembledArgs {
    let mut args = base_args(request);
    args.push(path.as_os_str().to_os_string());
    args.extend(request.extra_args.iter().map(OsString::from));
    AssembledArgs { args, stdin: None }
}

fn text_input_args(request: &ConversionRequest, text: &str) -> Result<AssembledArgs> {
    let encoding = match request.source_encoding.as_deref() {
        Some(name) => name.parse::<SourceEncoding>()?,
        None => SourceEncoding::default(),
    };
    let stdin = encoding.encode(text)?;
    log::debug!("以 {} 編碼寫入 stdin，共 {} 位元組", encoding, stdin.len());

    let mut args = base_args(request);
    args.extend(request.extra_args.iter().map(OsString::from));
    Ok(AssembledArgs { args, stdin: Some(stdin) })
}
