use ratatui::layout::Rect;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasuredSize {
    pub width: Option<u16>,
    pub height: Option<u16>,
}

/// 测量容器可用尺寸并交给子组件；被禁用的维度返回 `None`，由调用方自行决定。
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoSizer {
    pub disable_height: bool,
    pub disable_width: bool,
}

impl AutoSizer {
    pub fn width_only() -> Self {
        Self {
            disable_height: true,
            disable_width: false,
        }
    }

    pub fn measure(&self, container: Rect) -> MeasuredSize {
        MeasuredSize {
            width: (!self.disable_width).then_some(container.width),
            height: (!self.disable_height).then_some(container.height),
        }
    }
}
