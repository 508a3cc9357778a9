use regex::Regex;

use crate::rbac::{RbacConfigError, Resource};

/// 代表全部操作的特殊名称
pub const ALL_ACTIONS: &str = "ALL";

/// 资源值匹配器
/// 必须完整匹配目标值，而不是包含
#[derive(Debug, Clone)]
struct ValuePattern {
    source: String,
    regex: Regex,
}

impl ValuePattern {
    fn compile(source: &str) -> Result<Self, RbacConfigError> {
        let regex = Regex::new(&format!("^(?:{})$", source)).map_err(|e| {
            RbacConfigError::InvalidPattern {
                pattern: source.to_string(),
                source: e,
            }
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }
}

/// Permission是角色内的一条授权：资源类型 + 可选的值匹配器 + 操作集合
#[derive(Debug, Clone)]
pub struct Permission {
    resource: Resource,
    value: Option<ValuePattern>,
    actions: Vec<String>,
}

impl Permission {
    /// 创建权限
    /// 操作名称规范化为大写，`ALL`展开为该资源的全部操作，未知操作会被拒绝
    pub fn new<I, S>(resource: Resource, value: Option<&str>, actions: I) -> Result<Self, RbacConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let value = value.map(ValuePattern::compile).transpose()?;

        let mut normalized: Vec<String> = Vec::new();
        for action in actions {
            let action = action.as_ref().trim().to_uppercase();
            if action == ALL_ACTIONS {
                for name in resource.actions() {
                    if !normalized.iter().any(|a| a == name) {
                        normalized.push(name.to_string());
                    }
                }
                continue;
            }
            if !resource.supports_action(&action) {
                return Err(RbacConfigError::UnknownAction { resource, action });
            }
            if !normalized.contains(&action) {
                normalized.push(action);
            }
        }

        Ok(Self {
            resource,
            value,
            actions: normalized,
        })
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// 值匹配器的原始表达式
    pub fn value(&self) -> Option<&str> {
        self.value.as_ref().map(|v| v.source.as_str())
    }

    /// 大写的操作名称
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// 检查目标值是否通过值过滤
    /// 目标值缺失或没有声明匹配器时都视为通配
    pub fn matches_value(&self, target: Option<&str>) -> bool {
        match (target, &self.value) {
            (None, _) | (_, None) => true,
            (Some(target), Some(pattern)) => pattern.regex.is_match(target),
        }
    }
}
