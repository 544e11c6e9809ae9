use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use crate::models::encoding::SourceEncoding;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "pandoc_bridge",
    about = "呼叫外部文件轉換程式（預設 pandoc）轉換文件格式",
    long_about = "組合 `-f <from> -t <to> [-o <output>] [<input>] [...extra]` 指令列並啟動轉換程式。\n未指定 --input 或 --text 時從 stdin 讀取來源文字；未指定 --output 時結果輸出到 stdout。\n不帶任何參數執行時進入互動模式。\n額外的轉換程式參數請放在 `--` 之後。",
    version
)]
pub struct Cli {
    /// 來源格式，例如 markdown
    #[arg(short = 'f', long = "from", required_unless_present = "check")]
    pub from: Option<String>,
    /// 目標格式，例如 html
    #[arg(short = 't', long = "to", required_unless_present = "check")]
    pub to: Option<String>,
    /// 來源檔案，直接作為指令列參數傳給轉換程式
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// 來源文字，經由 stdin 傳給轉換程式；同時指定 --input 時以此為準
    #[arg(long)]
    pub text: Option<String>,
    /// 輸出檔案；未指定時輸出到 stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(long, default_value = "utf8")]
    pub encoding: String,
    #[arg(long, env = "PANDOC_BRIDGE_ENGINE", default_value = "pandoc")]
    pub engine: String,
    /// 轉換程式的工作目錄
    #[arg(long)]
    pub cwd: Option<PathBuf>,
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    #[arg(long, default_value = "warn", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    /// 顯示轉換程式的位置與版本後結束
    #[arg(long, default_value_t = false)]
    pub check: bool,
    #[arg(last = true)]
    pub extra_args: Vec<String>,
}

pub fn validate_cli_args(cli: &Cli) -> io::Result<()> {
    if cli.text.is_none() {
        if let Some(input) = &cli.input {
            validate_input_path(input)?;
        }
    }
    validate_encoding(&cli.encoding)?;
    if cli.timeout_secs == Some(0) {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "--timeout-secs 必須大於 0"));
    }
    Ok(())
}

pub fn validate_input_path(input: &Path) -> io::Result<&Path> {
    if !input.is_file() {
        log::error!("輸入檔案不存在：{}", input.display());
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入檔案 '{}' 不存在", input.display())
        ));
    }
    Ok(input)
}

pub fn validate_encoding(encoding: &str) -> io::Result<SourceEncoding> {
    encoding.parse::<SourceEncoding>().map_err(io::Error::from)
}
