use std::fmt;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// 轉換呼叫可能產生的所有錯誤
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 請求在啟動程序前即驗證失敗
    #[error("{0}")]
    InvalidRequest(String),

    /// 作業系統無法啟動轉換程式（找不到、權限不足等）
    #[error("{0}")]
    LaunchFailure(#[source] io::Error),

    #[error("{engine} exited with code {code}{}", StderrSuffix(.stderr))]
    NonZeroExit {
        engine: String,
        code: i32,
        stderr: String,
    },

    /// 程序沒有結束碼（被訊號終止）
    #[error("{engine} exited with code null{}", StderrSuffix(.stderr))]
    Terminated { engine: String, stderr: String },

    #[error("{engine} timed out after {timeout:?}")]
    TimedOut { engine: String, timeout: Duration },

    /// 啟動後寫入 stdin 或讀取輸出時的 IO 錯誤
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ConvertError::InvalidRequest(message.into())
    }

    /// 結束碼；僅 `NonZeroExit` 有值
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ConvertError::NonZeroExit { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<ConvertError> for io::Error {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::InvalidRequest(msg) => io::Error::new(io::ErrorKind::InvalidInput, msg),
            ConvertError::LaunchFailure(e) | ConvertError::Io(e) => e,
            timed_out @ ConvertError::TimedOut { .. } => {
                io::Error::new(io::ErrorKind::TimedOut, timed_out.to_string())
            }
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}

struct StderrSuffix<'a>(&'a str);

impl fmt::Display for StderrSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str(".")
        } else {
            write!(f, ": {}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_zero_exit_with_stderr() {
        let err = ConvertError::NonZeroExit {
            engine: "pandoc".to_string(),
            code: 64,
            stderr: "Unknown input format nope\n".to_string(),
        };
        assert_eq!(err.to_string(), "pandoc exited with code 64: Unknown input format nope\n");
        assert_eq!(err.exit_code(), Some(64));
    }

    #[test]
    fn non_zero_exit_without_stderr() {
        let err = ConvertError::NonZeroExit {
            engine: "pandoc".to_string(),
            code: 1,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "pandoc exited with code 1.");
    }

    #[test]
    fn terminated_reports_null_code() {
        let err = ConvertError::Terminated {
            engine: "pandoc".to_string(),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "pandoc exited with code null.");
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn launch_failure_keeps_os_message() {
        let err = ConvertError::LaunchFailure(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"));
        assert_eq!(err.to_string(), "No such file or directory");
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }
}
