//! 拉取调度器
//!
//! 按发现顺序逐个包拼装引用并调用外部工具，严格串行。
//! 外部工具的非零退出码不拦截、不重试，最后一个非零码透传给进程退出状态

use std::collections::HashMap;

use crate::core::discovery::provided_packages;
use crate::core::image::image_name;
use crate::error::Result;
use crate::types::Config;
use crate::utils::executor::CommandRunner;

/// 调用外部工具拉取单个镜像：<tool> pull <image>
pub fn docker_pull(runner: &dyn CommandRunner, docker_bin: &str, image: &str) -> Result<i32> {
    runner.call(&[
        docker_bin.to_string(),
        "pull".to_string(),
        image.to_string(),
    ])
}

/// 拉取环境中声明的全部镜像
///
/// 返回要透传的退出码：全部成功为 0，否则为最后一个非零的子进程退出码。
/// 缺少必需变量时立即失败，不再处理后续的包
pub fn pull_provided(
    env: &HashMap<String, String>,
    runner: &dyn CommandRunner,
    config: &Config,
) -> Result<i32> {
    let mut exit_code = 0;

    for package in provided_packages(env) {
        let image = image_name(env, &package)?;

        if config.verbose {
            println!("拉取 {} -> {}", package, image);
        }

        let code = docker_pull(runner, &config.docker_bin, &image)?;
        if code != 0 {
            exit_code = code;
        }
    }

    Ok(exit_code)
}
