//! gocd-pull 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - 安静模式：默认无输出，拉取成功静默
//! - 显式环境：启动时对进程环境做一次快照，之后只传递只读映射

mod cli;
mod core;
mod error;
mod types;
mod utils;

use std::collections::HashMap;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::core::{discovery, image, pull};
use crate::error::Result;
use crate::types::{Config, OutputFormat, PackageImage};
use crate::utils::executor::{CommandExecutor, CommandRunner};

fn main() {
    // 解析 CLI 参数
    let cli = Cli::parse();

    // 配置初始化
    let config = Config {
        verbose: cli.verbose,
        docker_bin: cli.docker.clone(),
    };

    // 进程环境快照（唯一一次读取全局状态）
    let env: HashMap<String, String> = std::env::vars().collect();

    // 执行命令，统一错误处理
    match run_command(cli.command, &env, &config) {
        Ok(exit_code) => {
            if exit_code != 0 {
                // 外部工具的非零退出码原样透传
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            e.report(config.verbose);
            std::process::exit(1);
        }
    }
}

/// 运行具体命令，返回要透传的退出码
fn run_command(command: Commands, env: &HashMap<String, String>, config: &Config) -> Result<i32> {
    let runner = CommandExecutor;

    match command {
        // 拉取系列
        Commands::Pull => {
            let exit_code = pull::pull_provided(env, &runner, config)?;
            return Ok(exit_code);
        }

        // 列出系列
        Commands::List { format } => {
            let output_format = OutputFormat::from(format.as_str());
            let images = list_images(env)?;

            match output_format {
                OutputFormat::Text => {
                    for image in &images {
                        println!("{}={}", image.package, image.reference());
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&images)?);
                }
            }
        }

        // 问题诊断
        Commands::Doctor => {
            diagnose(env, &runner, config)?;
        }
    }

    Ok(0)
}

/// 收集全部镜像描述（按包名排序，保证列出输出的确定性）
fn list_images(env: &HashMap<String, String>) -> Result<Vec<PackageImage>> {
    let mut packages = discovery::provided_packages(env);
    packages.sort();

    packages
        .iter()
        .map(|package| image::describe(env, package))
        .collect()
}

/// 诊断环境与外部工具（发现的问题只报告，不视为命令失败）
fn diagnose(env: &HashMap<String, String>, runner: &dyn CommandRunner, config: &Config) -> Result<()> {
    println!("🔍 gocd-pull 诊断\n");
    println!("平台: {} | 外部工具: {}", std::env::consts::OS, config.docker_bin);
    println!("──────────────────────────────────────────────\n");

    let mut issues = 0;

    // 1. 包发现
    println!("📦 1. 包发现");
    let mut packages = discovery::provided_packages(env);
    packages.sort();
    if packages.is_empty() {
        println!("   ○ 未发现任何包声明 (GO_REPO_*_DOCKER_REGISTRY_NAME)");
    } else {
        println!("   ✓ 发现 {} 个包", packages.len());
    }

    // 2. 逐包检查三个必需变量
    println!("\n📄 2. 必需变量检查");
    for package in &packages {
        let missing = image::missing_variables(env, package);
        if missing.is_empty() {
            let reference = image::image_name(env, package)?;
            println!("   ✓ {}: {}", package, reference);
        } else {
            for key in &missing {
                println!("   ❌ {}: 缺少 {}", package, key);
            }
            issues += missing.len();
        }
    }

    // 3. 外部工具可用性
    println!("\n🖥️ 3. 外部工具");
    match runner.call(&[config.docker_bin.clone(), "--version".to_string()]) {
        Ok(0) => {}
        Ok(code) => {
            println!("   ⚠️  {} --version 退出码 {}", config.docker_bin, code);
            issues += 1;
        }
        Err(e) => {
            println!("   ❌ 无法执行 {}: {}", config.docker_bin, e);
            issues += 1;
        }
    }

    // 总结
    println!("\n──────────────────────────────────────────────");
    if issues == 0 {
        println!("✅ 所有检查通过");
    } else {
        println!("❌ 发现 {} 个问题", issues);
    }

    Ok(())
}
