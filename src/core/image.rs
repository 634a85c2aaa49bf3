//! 镜像引用拼装器
//!
//! 对单个包标识做三次精确键查找，拼装 registry/repository:tag。
//! 任何一个键缺失都是致命错误，不会返回部分拼装的引用

use std::collections::HashMap;

use crate::error::{PullError, Result};
use crate::types::PackageImage;

/// 注册表地址变量名
fn registry_key(package: &str) -> String {
    format!("GO_REPO_{}_DOCKER_REGISTRY_NAME", package)
}

/// 镜像仓库路径变量名
fn repository_key(package: &str) -> String {
    format!("GO_PACKAGE_{}_DOCKER_IMAGE", package)
}

/// 标签变量名
fn tag_key(package: &str) -> String {
    format!("GO_PACKAGE_{}_LABEL", package)
}

/// 精确键查找，缺失时报出完整键名
fn lookup(env: &HashMap<String, String>, key: String) -> Result<String> {
    match env.get(&key) {
        Some(value) => Ok(value.clone()),
        None => Err(PullError::MissingVariable(key)),
    }
}

/// 拼装包的完整镜像引用 registry/repository:tag
pub fn image_name(env: &HashMap<String, String>, package: &str) -> Result<String> {
    Ok(describe(env, package)?.reference())
}

/// 构建包的结构化镜像描述
pub fn describe(env: &HashMap<String, String>, package: &str) -> Result<PackageImage> {
    let registry = lookup(env, registry_key(package))?;
    let repository = lookup(env, repository_key(package))?;
    let tag = lookup(env, tag_key(package))?;

    Ok(PackageImage {
        package: package.to_string(),
        registry,
        repository,
        tag,
    })
}

/// 列出包缺失的必需变量（诊断用，缺失不视为错误）
pub fn missing_variables(env: &HashMap<String, String>, package: &str) -> Vec<String> {
    [
        registry_key(package),
        repository_key(package),
        tag_key(package),
    ]
    .into_iter()
    .filter(|key| !env.contains_key(key))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_env() -> HashMap<String, String> {
        [
            ("GO_REPO_DKR_PK_G_DOCKER_REGISTRY_NAME", "reg"),
            ("GO_PACKAGE_DKR_PK_G_DOCKER_IMAGE", "pk/g"),
            ("GO_PACKAGE_DKR_PK_G_LABEL", "1"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_image_name() {
        let env = full_env();

        let image = image_name(&env, "DKR_PK_G").unwrap();

        assert_eq!(image, "reg/pk/g:1");
    }

    #[test]
    fn test_describe_fields() {
        let env = full_env();

        let image = describe(&env, "DKR_PK_G").unwrap();

        assert_eq!(image.package, "DKR_PK_G");
        assert_eq!(image.registry, "reg");
        assert_eq!(image.repository, "pk/g");
        assert_eq!(image.tag, "1");
    }

    #[test]
    fn test_each_missing_variable_is_fatal() {
        // 三个必需变量逐个移除，每次都必须报出被移除的键名
        for key in [
            "GO_REPO_DKR_PK_G_DOCKER_REGISTRY_NAME",
            "GO_PACKAGE_DKR_PK_G_DOCKER_IMAGE",
            "GO_PACKAGE_DKR_PK_G_LABEL",
        ] {
            let mut env = full_env();
            env.remove(key);

            match image_name(&env, "DKR_PK_G") {
                Err(PullError::MissingVariable(missing)) => assert_eq!(missing, key),
                other => panic!("缺少 {} 时应当报错，实际得到 {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_missing_variables_report() {
        let mut env = full_env();
        env.remove("GO_PACKAGE_DKR_PK_G_LABEL");

        let missing = missing_variables(&env, "DKR_PK_G");

        assert_eq!(missing, vec!["GO_PACKAGE_DKR_PK_G_LABEL".to_string()]);
    }

    #[test]
    fn test_unknown_package_reports_registry_key_first() {
        let env = full_env();

        match image_name(&env, "NOPE") {
            Err(PullError::MissingVariable(key)) => {
                assert_eq!(key, "GO_REPO_NOPE_DOCKER_REGISTRY_NAME")
            }
            other => panic!("未声明的包应当报错，实际得到 {:?}", other),
        }
    }
}
