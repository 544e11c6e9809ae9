use std::path::PathBuf;
use crate::models::spawn::SpawnOptions;

/// 一次轉換的結果：寫入檔案時為空字串，否則為轉換程式的 stdout
pub type ConversionResult = String;

/// 單次轉換請求，每次呼叫建立、結束後丟棄
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source_format: String,
    pub destination_format: String,
    pub output_to_file: bool,
    /// 附加在參數列尾端，原樣傳遞
    pub extra_args: Vec<String>,
    pub spawn_options: Option<SpawnOptions>,
    /// 優先於 `source_file_path`
    pub source_text: Option<String>,
    pub source_file_path: Option<PathBuf>,
    /// 僅用於 `source_text`，預設 "utf8"
    pub source_encoding: Option<String>,
    /// `output_to_file` 為 true 時必填
    pub dest_file_path: Option<PathBuf>,
}

impl ConversionRequest {
    pub fn new(source_format: impl Into<String>, destination_format: impl Into<String>) -> Self {
        ConversionRequest {
            source_format: source_format.into(),
            destination_format: destination_format.into(),
            ..Default::default()
        }
    }

    pub fn source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn source_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_file_path = Some(path.into());
        self
    }

    pub fn source_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.source_encoding = Some(encoding.into());
        self
    }

    /// 將結果寫入檔案而非回傳
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_to_file = true;
        self.dest_file_path = Some(path.into());
        self
    }

    pub fn extra_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    pub fn extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn spawn_options(mut self, options: SpawnOptions) -> Self {
        self.spawn_options = Some(options);
        self
    }
}
