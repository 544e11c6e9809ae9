use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// 啟動轉換程式時使用的程序設定，原封不動交給 launcher
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnOptions {
    /// 子程序的工作目錄，未設定時沿用目前目錄
    pub current_dir: Option<PathBuf>,
    /// 新增或覆寫的環境變數
    pub env: Vec<(OsString, OsString)>,
    pub env_remove: Vec<OsString>,
    /// 先清空繼承的環境，再套用 `env`
    pub env_clear: bool,
    /// 超過時間即終止子程序；未設定則無限等待
    pub timeout: Option<Duration>,
    /// 轉換 future 被丟棄時終止子程序
    pub kill_on_drop: bool,
}

impl SpawnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn env_remove(mut self, key: impl Into<OsString>) -> Self {
        self.env_remove.push(key.into());
        self
    }

    pub fn env_clear(mut self, clear: bool) -> Self {
        self.env_clear = clear;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn kill_on_drop(mut self, kill: bool) -> Self {
        self.kill_on_drop = kill;
        self
    }
}
