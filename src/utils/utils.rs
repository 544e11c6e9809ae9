use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .parse_default_env()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

/// 轉換期間顯示的 spinner，輸出到 stderr
pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(message: &str, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]") {
                pb.set_style(style);
            }
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        };
        pb.set_message(message.to_string());
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn finish(&self, ok: bool) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        if ok {
            self.pb.finish_with_message(format!("轉換完成，耗時 {:.2} 秒", elapsed));
        } else {
            self.pb.abandon_with_message(format!("轉換失敗，耗時 {:.2} 秒", elapsed));
        }
    }
}

pub fn format_output_size(size: usize) -> String {
    if size < 1024 {
        format!("{} B", size)
    } else if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

/// 描述轉換程式位置，找不到時回傳說明文字
pub fn describe_location(location: Option<&Path>) -> String {
    match location {
        Some(path) => path.display().to_string(),
        None => "未在 PATH 中找到".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sizes() {
        assert_eq!(format_output_size(512), "512 B");
        assert_eq!(format_output_size(2048), "2.00 KB");
        assert_eq!(format_output_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn describes_missing_engine() {
        assert_eq!(describe_location(None), "未在 PATH 中找到");
        assert_eq!(describe_location(Some(Path::new("/usr/bin/pandoc"))), "/usr/bin/pandoc");
    }
}
