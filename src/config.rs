//! 演示程序的配置
//!
//! JSON 配置文件描述一个下拉选择：主题、菜单高度上限、行高策略与选项。

use crate::error::ConfigError;
use crate::menu_height::DEFAULT_MAX_HEIGHT;
use crate::option::{DEFAULT_LABEL_KEY, DEFAULT_VALUE_KEY, SelectOption};
use crate::row_height::{DEFAULT_OPTION_HEIGHT, RowHeight};
use crate::select::SelectProps;
use crate::theme::theme_from_name;
use crate::virtualized_select::VirtualizedSelectProps;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_max_height")]
    pub max_height: u16,
    #[serde(default)]
    pub option_height: OptionHeightSpec,
    #[serde(default = "default_label_key")]
    pub label_key: String,
    #[serde(default = "default_value_key")]
    pub value_key: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub multi: bool,
    #[serde(default = "default_true")]
    pub searchable: bool,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    /// 额外的选项文件（JSON 数组），相对路径按配置文件所在目录解析
    #[serde(default)]
    pub options_file: Option<String>,
}

/// `12` 表示固定行高；`{"field": "rows", "default": 1}` 表示从选项字段读取。
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum OptionHeightSpec {
    Fixed(u16),
    Field {
        field: String,
        #[serde(default = "default_option_height")]
        default: u16,
    },
}

impl Default for OptionHeightSpec {
    fn default() -> Self {
        Self::Fixed(DEFAULT_OPTION_HEIGHT)
    }
}

impl OptionHeightSpec {
    pub fn to_row_height(&self) -> RowHeight {
        match self {
            Self::Fixed(height) => RowHeight::Fixed(*height),
            Self::Field { field, default } => RowHeight::from_field(field.clone(), *default),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            max_height: default_max_height(),
            option_height: OptionHeightSpec::default(),
            label_key: default_label_key(),
            value_key: default_value_key(),
            placeholder: default_placeholder(),
            multi: false,
            searchable: true,
            is_async: false,
            options: Vec::new(),
            options_file: None,
        }
    }
}

impl DemoConfig {
    pub fn select_props(&self) -> SelectProps {
        SelectProps {
            placeholder: self.placeholder.clone(),
            label_key: self.label_key.clone(),
            value_key: self.value_key.clone(),
            multi: self.multi,
            searchable: self.searchable,
            options: self.options.clone(),
            ..SelectProps::default()
        }
    }

    /// 组装组件配置；主题名无效时报错。
    pub fn to_props(&self) -> Result<VirtualizedSelectProps, ConfigError> {
        let theme = theme_from_name(&self.theme)?;
        Ok(VirtualizedSelectProps::default()
            .async_options(self.is_async)
            .max_height(self.max_height)
            .option_height(self.option_height.to_row_height())
            .select(self.select_props())
            .theme(theme))
    }
}

/// `VSELECT_CONFIG` 优先，其次 `~/.config/vselect/config.json`（存在时）。
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("VSELECT_CONFIG")
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    let home = env::var("HOME").ok()?;
    let path = PathBuf::from(home)
        .join(".config")
        .join("vselect")
        .join("config.json");
    path.is_file().then_some(path)
}

pub fn load_config(path: &Path) -> Result<DemoConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    let mut cfg: DemoConfig = serde_json::from_str(&text)?;
    normalize_config_paths(path, &mut cfg);
    if let Some(file) = cfg.options_file.as_deref() {
        let extra = load_options(Path::new(file))?;
        cfg.options.extend(extra);
    }
    apply_env_overrides(&mut cfg);
    validate_config(&cfg)?;
    tracing::debug!(path = %path.display(), options = cfg.options.len(), "config loaded");
    Ok(cfg)
}

/// 读取选项数组文件。
pub fn load_options(path: &Path) -> Result<Vec<SelectOption>, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn validate_config(cfg: &DemoConfig) -> Result<(), ConfigError> {
    if cfg.max_height == 0 {
        return Err(invalid("max_height 必须大于 0"));
    }
    match &cfg.option_height {
        OptionHeightSpec::Fixed(0) => return Err(invalid("option_height 必须大于 0")),
        OptionHeightSpec::Field { field, .. } if field.trim().is_empty() => {
            return Err(invalid("option_height.field 不能为空"));
        }
        OptionHeightSpec::Field { default: 0, .. } => {
            return Err(invalid("option_height.default 必须大于 0"));
        }
        _ => {}
    }
    if cfg.label_key.trim().is_empty() {
        return Err(invalid("label_key 不能为空"));
    }
    if cfg.value_key.trim().is_empty() {
        return Err(invalid("value_key 不能为空"));
    }
    theme_from_name(&cfg.theme)?;
    Ok(())
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::Invalid(msg.to_string())
}

fn normalize_config_paths(path: &Path, cfg: &mut DemoConfig) {
    let (Some(parent), Some(file)) = (path.parent(), cfg.options_file.as_mut()) else {
        return;
    };
    if Path::new(file.as_str()).is_relative() {
        *file = parent.join(file.as_str()).to_string_lossy().to_string();
    }
}

fn apply_env_overrides(cfg: &mut DemoConfig) {
    if let Ok(theme) = env::var("VSELECT_THEME")
        && !theme.trim().is_empty()
    {
        cfg.theme = theme;
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_max_height() -> u16 {
    DEFAULT_MAX_HEIGHT
}

fn default_option_height() -> u16 {
    DEFAULT_OPTION_HEIGHT
}

fn default_label_key() -> String {
    DEFAULT_LABEL_KEY.to_string()
}

fn default_value_key() -> String {
    DEFAULT_VALUE_KEY.to_string()
}

fn default_placeholder() -> String {
    SelectProps::default().placeholder
}

fn default_true() -> bool {
    true
}
