use std::io;
use std::time::Duration;
use crate::config::config::Cli;
use crate::config::ports::RequestPort;
use crate::models::conversion::ConversionRequest;
use crate::models::spawn::SpawnOptions;

// 請求服務，負責從適當的來源取得轉換請求
pub struct RequestService {
    request_port: Box<dyn RequestPort>,
}

impl RequestService {
    pub fn new(request_port: Box<dyn RequestPort>) -> Self {
        RequestService { request_port }
    }

    pub fn get_request(&self) -> io::Result<ConversionRequest> {
        let request = self.request_port.get_request()?;
        log::debug!("轉換請求：{:?}", request);
        Ok(request)
    }
}

// 命令列參數適配器
pub struct CliRequestAdapter {
    cli: Cli,
    piped_text: Option<String>,
}

impl CliRequestAdapter {
    /// `piped_text` 為未指定 --input/--text 時從 stdin 讀到的內容
    pub fn new(cli: Cli, piped_text: Option<String>) -> Self {
        CliRequestAdapter { cli, piped_text }
    }
}

impl RequestPort for CliRequestAdapter {
    fn get_request(&self) -> io::Result<ConversionRequest> {
        let cli = &self.cli;
        let (Some(from), Some(to)) = (&cli.from, &cli.to) else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "必須指定 --from 與 --to"));
        };

        let mut request = ConversionRequest::new(from.clone(), to.clone())
            .source_encoding(cli.encoding.clone())
            .extra_args(cli.extra_args.iter().cloned());

        request.source_text = cli.text.clone().or_else(|| {
            if cli.input.is_none() { self.piped_text.clone() } else { None }
        });
        request.source_file_path = cli.input.clone();

        if let Some(output) = &cli.output {
            request = request.output_file(output.clone());
        }

        let mut options = SpawnOptions::new();
        if let Some(cwd) = &cli.cwd {
            options = options.current_dir(cwd.clone());
        }
        if let Some(secs) = cli.timeout_secs {
            options = options.timeout(Duration::from_secs(secs)).kill_on_drop(true);
        }
        if options != SpawnOptions::default() {
            request = request.spawn_options(options);
        }

        Ok(request)
    }
}
