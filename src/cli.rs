//! CLI 参数定义

use clap::{Parser, Subcommand};

/// gocd-pull - GoCD 包仓库镜像拉取工具
#[derive(Parser)]
#[command(
    name = "gocd-pull",
    version = "0.1.0",
    about = "按 GoCD 包仓库命名约定拉取 Docker 镜像",
    long_about = "扫描环境变量中的 GoCD 包仓库命名约定 (GO_REPO_*_DOCKER_REGISTRY_NAME)，\n为每个声明的包拼装镜像引用 registry/repository:tag 并调用外部工具拉取"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 外部拉取工具的名称或路径
    #[arg(long, global = true, default_value = "docker")]
    pub docker: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 拉取环境中声明的全部镜像
    Pull,

    /// 列出发现的包及其镜像引用
    List {
        /// 输出格式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// 诊断环境与外部工具
    Doctor,
}
