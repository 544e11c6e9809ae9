use pandoc_bridge::action::cli::process_args;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args).await {
        Ok(Some(output)) => {
            log::info!("程式執行完成，輸出檔案：{}", output.display());
            eprintln!("轉換完成！輸出檔案位於：{}", output.display());
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("錯誤：{}", e);
            std::process::exit(1);
        }
    }
}
