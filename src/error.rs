//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error as _;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PullError {
    #[error("缺少必需的环境变量: {0}")]
    MissingVariable(String),

    #[error("命令未找到: {0}")]
    CommandNotFound(String),

    #[error("命令执行失败: {0}")]
    CommandExecutionFailed(String),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

/// 详细的错误报告函数 (透明原则)
impl PullError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息，安静模式
    pub fn report(&self, verbose: bool) {
        if verbose {
            // 详细模式：打印完整错误链
            eprintln!("❌ 错误: {}", self);

            // 如果有源错误，打印级联信息
            // (thiserror 支持自动的 source() 链)
            if let Some(source) = self.source() {
                eprintln!("  └─ 原因: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }
        } else {
            // 安静模式：只打印关键信息
            match self {
                PullError::MissingVariable(key) => eprintln!("缺少变量: {}", key),
                PullError::CommandNotFound(cmd) => eprintln!("命令未找到: {}", cmd),
                _ => eprintln!("错误: {}", self),
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, PullError>;
