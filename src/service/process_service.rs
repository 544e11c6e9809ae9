use std::io;
use std::process::Stdio;
use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::{Child, Command};
use crate::config::ports::ProcessLauncher;
use crate::error::{ConvertError, Result};
use crate::models::invocation::{Invocation, ProcessOutput};
use crate::models::spawn::SpawnOptions;

/// 以 tokio 子程序實作的 launcher
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessLauncher;

impl TokioProcessLauncher {
    pub fn new() -> Self {
        TokioProcessLauncher
    }
}

#[async_trait]
impl ProcessLauncher for TokioProcessLauncher {
    async fn launch(&self, invocation: Invocation) -> Result<ProcessOutput> {
        let options = invocation.spawn_options.clone().unwrap_or_default();
        let mut command = build_command(&invocation, &options);

        debug!("啟動程序：{}", invocation.command_line());
        let mut child = command.spawn().map_err(ConvertError::LaunchFailure)?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let input = invocation.stdin;

        let collect = async {
            let (_, stdout, stderr) = tokio::try_join!(
                feed_stdin(stdin, input),
                drain(stdout),
                drain(stderr),
            )?;
            let status = child.wait().await?;
            Ok::<_, io::Error>((status, stdout, stderr))
        };

        let collected = match options.timeout {
            Some(limit) => {
                let outcome = tokio::time::timeout(limit, collect).await;
                match outcome {
                    Ok(collected) => collected,
                    Err(_) => {
                        warn!("{} 超過時間限制 {:?}，終止程序", invocation.program, limit);
                        if let Err(e) = child.kill().await {
                            warn!("終止程序失敗：{}", e);
                        }
                        return Err(ConvertError::TimedOut {
                            engine: invocation.program,
                            timeout: limit,
                        });
                    }
                }
            }
            None => collect.await,
        };
        let (status, stdout, stderr) = match collected {
            Ok(collected) => collected,
            Err(e) => return Err(abort_child(&mut child, e).await),
        };

        debug!(
            "程序結束，結束碼：{:?}，stdout {} 位元組，stderr {} 位元組",
            status.code(),
            stdout.len(),
            stderr.len()
        );

        Ok(ProcessOutput {
            exit_code: status.code(),
            stdout,
            stderr,
        })
    }
}

// 與程序通訊失敗時終止並回收子程序，避免留在背景執行
async fn abort_child(child: &mut Child, err: io::Error) -> ConvertError {
    warn!("與程序通訊失敗：{}，終止程序", err);
    if let Err(e) = child.kill().await {
        warn!("終止程序失敗：{}", e);
    }
    ConvertError::Io(err)
}

fn build_command(invocation: &Invocation, options: &SpawnOptions) -> Command {
    let mut command = Command::new(&invocation.program);
    command
        .args(&invocation.args)
        .stdin(if invocation.stdin.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(options.kill_on_drop);

    if let Some(dir) = &options.current_dir {
        command.current_dir(dir);
    }
    if options.env_clear {
        command.env_clear();
    }
    for key in &options.env_remove {
        command.env_remove(key);
    }
    command.envs(options.env.iter().map(|(k, v)| (k, v)));
    command
}

// 單次寫入後關閉 stdin；程序未讀取就結束時忽略 BrokenPipe，由結束碼決定結果
async fn feed_stdin<W: AsyncWrite + Unpin>(stdin: Option<W>, input: Option<Vec<u8>>) -> io::Result<()> {
    let (Some(mut stdin), Some(input)) = (stdin, input) else {
        return Ok(());
    };
    match stdin.write_all(&input).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
        Err(e) => return Err(e),
    }
    match stdin.shutdown().await {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
        _ => Ok(()),
    }
}

async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buffer).await?;
    }
    Ok(buffer)
}
