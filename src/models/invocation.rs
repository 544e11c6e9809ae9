use std::ffi::OsString;
use crate::models::spawn::SpawnOptions;

/// 交給 launcher 的完整指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    /// 文字模式下一次寫入 stdin 後立即關閉；`None` 表示不寫入
    pub stdin: Option<Vec<u8>>,
    pub spawn_options: Option<SpawnOptions>,
}

impl Invocation {
    /// 以空白串接的指令列，僅供日誌使用
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|arg| arg.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// 程序結束後收集到的結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` 表示程序被訊號終止
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}
