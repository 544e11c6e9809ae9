use std::io::{self, IsTerminal};
use std::path::PathBuf;
use clap::Parser;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{validate_cli_args, Cli};
use crate::facade::converter::Converter;
use crate::facade::traits::i_converter::ConverterTrait;
use crate::models::conversion::ConversionRequest;
use crate::service::config_service::{CliRequestAdapter, RequestService};
use crate::utils::utils::{describe_location, format_output_size, setup_logging, ProgressManager};

/// 依參數數量選擇互動模式或命令列模式；回傳寫入的輸出檔案（若有）
pub async fn process_args(args: Vec<String>) -> io::Result<Option<PathBuf>> {
    if args.len() == 1 {
        process_interactive_mode().await
    } else {
        process_cli_mode().await
    }
}

pub async fn process_cli_mode() -> io::Result<Option<PathBuf>> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let converter = Converter::with_command(cli.engine.clone());
    if cli.check {
        report_engine(&converter).await?;
        return Ok(None);
    }

    validate_cli_args(&cli)?;

    let piped_text = if cli.text.is_none() && cli.input.is_none() {
        Some(read_stdin().await?)
    } else {
        None
    };

    let no_progress = cli.no_progress;
    let request_service = RequestService::new(Box::new(CliRequestAdapter::new(cli, piped_text)));
    let request = request_service.get_request()?;

    run_conversion(&converter, request, no_progress).await
}

/// 執行轉換；結果非空時寫到 stdout
pub async fn run_conversion(
    converter: &dyn ConverterTrait,
    request: ConversionRequest,
    no_progress: bool,
) -> io::Result<Option<PathBuf>> {
    let dest = if request.output_to_file { request.dest_file_path.clone() } else { None };
    let progress = ProgressManager::new(
        &format!("轉換中：{} -> {}", request.source_format, request.destination_format),
        no_progress,
    );

    let result = converter.execute(request).await;
    progress.finish(result.is_ok());
    let output = result.map_err(|e| {
        log::error!("轉換失敗：{}", e);
        io::Error::from(e)
    })?;

    if !output.is_empty() {
        log::info!("輸出大小：{}", format_output_size(output.len()));
        let mut stdout = tokio::io::stdout();
        stdout.write_all(output.as_bytes()).await?;
        stdout.flush().await?;
    }
    Ok(dest)
}

async fn report_engine(converter: &Converter) -> io::Result<()> {
    let location = converter.locate();
    println!("轉換程式：{}", converter.command());
    println!("位置：{}", describe_location(location.as_deref()));
    let version = converter.version().await.map_err(io::Error::from)?;
    println!("版本：{}", version);
    Ok(())
}

async fn read_stdin() -> io::Result<String> {
    if io::stdin().is_terminal() {
        eprintln!("從 stdin 讀取來源文字，輸入完成後按 Ctrl-D");
    }
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text)
}
