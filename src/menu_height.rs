use crate::option::SelectOption;
use crate::row_height::RowHeight;

pub const DEFAULT_MAX_HEIGHT: u16 = 8;

/// 按顺序累加选项高度，一旦超过 `max_height` 立即返回上限，不再计算后续选项。
pub fn calculate_list_height(
    options: &[SelectOption],
    option_height: &RowHeight,
    max_height: u16,
) -> u16 {
    let cap = u32::from(max_height);
    let mut height: u32 = 0;
    for option in options {
        height = height.saturating_add(u32::from(option_height.height_of(option)));
        if height > cap {
            tracing::trace!(max_height, "menu height capped");
            return max_height;
        }
    }
    height as u16
}
