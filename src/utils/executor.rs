//! 外部命令执行器
//!
//! 以子进程方式执行外部工具，继承父进程的 stdin/stdout/stderr，
//! 等待结束并返回退出码。
//! 通过 CommandRunner 能力抽象注入，测试可以换成记录型替身

use std::process::{Command, Stdio};

use crate::error::{PullError, Result};

/// 外部命令能力：接受完整参数列表，返回子进程退出码
pub trait CommandRunner {
    fn call(&self, command: &[String]) -> Result<i32>;
}

/// 子进程实现
pub struct CommandExecutor;

impl CommandRunner for CommandExecutor {
    fn call(&self, command: &[String]) -> Result<i32> {
        if command.is_empty() {
            return Err(PullError::CommandExecutionFailed(
                "命令不能为空".to_string(),
            ));
        }

        let (program, args) = command.split_first().unwrap();

        let mut cmd = Command::new(program);
        cmd.args(args);

        // 继承标准流，外部工具的输出和进度直接可见
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // 执行并等待
        let status = cmd.status().map_err(|e| {
            PullError::CommandNotFound(format!(
                "{}: {} (请确保命令在 PATH 中或使用完整路径)",
                program, e
            ))
        })?;

        // 被信号终止时没有退出码，按失败处理
        Ok(status.code().unwrap_or(1))
    }
}
