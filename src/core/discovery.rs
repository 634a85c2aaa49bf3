//! 包发现器
//!
//! 从环境变量名中提取 GoCD 包仓库命名约定声明的包标识：
//! GO_REPO_<标识>_DOCKER_REGISTRY_NAME
//!
//! 扫描方式与约定保持一致：所有变量名用单个空格连接成一行，
//! 再用贪婪的非空白捕获组匹配。标识以空白为界，
//! 内嵌下划线的标识会被整体捕获

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// 包声明的命名模式（整个进程只编译一次）
static PACKAGE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn package_pattern() -> &'static Regex {
    PACKAGE_PATTERN.get_or_init(|| Regex::new(r"GO_REPO_([^ ]+)_DOCKER_REGISTRY_NAME").unwrap())
}

/// 发现环境中声明的全部包标识
///
/// 结果按扫描顺序排列，是序列而不是集合，理论上可能含重复；
/// 需要确定顺序的调用方应自行排序
pub fn provided_packages(env: &HashMap<String, String>) -> Vec<String> {
    let joined = env.keys().cloned().collect::<Vec<_>>().join(" ");

    package_pattern()
        .captures_iter(&joined)
        .map(|cap| cap[1].to_string())
        .collect()
}
