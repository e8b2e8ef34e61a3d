use crate::option::SelectOption;
use std::fmt;
use std::rc::Rc;

pub const DEFAULT_OPTION_HEIGHT: u16 = 1;

/// 每行高度策略：固定值，或按选项计算。
///
/// 计算函数会在不同帧、不同滚动位置被重复调用，必须是纯函数。
#[derive(Clone)]
pub enum RowHeight {
    Fixed(u16),
    Dynamic(Rc<dyn Fn(&SelectOption) -> u16>),
}

impl RowHeight {
    pub fn dynamic(f: impl Fn(&SelectOption) -> u16 + 'static) -> Self {
        Self::Dynamic(Rc::new(f))
    }

    /// 从选项的数值属性读取高度，缺失或无法解析时使用 `fallback`。
    pub fn from_field(field: impl Into<String>, fallback: u16) -> Self {
        let field = field.into();
        Self::dynamic(move |option| {
            option
                .attr(&field)
                .and_then(|v| v.trim().parse::<u16>().ok())
                .unwrap_or(fallback)
        })
    }

    pub fn height_of(&self, option: &SelectOption) -> u16 {
        match self {
            RowHeight::Fixed(height) => *height,
            RowHeight::Dynamic(f) => f(option),
        }
    }
}

impl Default for RowHeight {
    fn default() -> Self {
        RowHeight::Fixed(DEFAULT_OPTION_HEIGHT)
    }
}

impl From<u16> for RowHeight {
    fn from(height: u16) -> Self {
        RowHeight::Fixed(height)
    }
}

impl fmt::Debug for RowHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowHeight::Fixed(height) => f.debug_tuple("Fixed").field(height).finish(),
            RowHeight::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}
