use super::sizes::CellSizeCache;
use ratatui::layout::Rect;
use ratatui::style::Style;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScrollAlignment {
    /// 最小滚动，使目标行完全可见
    #[default]
    Auto,
    Start,
    End,
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListConfig {
    pub row_count: usize,
    pub height: u16,
    pub width: u16,
    pub scroll_to_index: Option<usize>,
    pub scroll_to_alignment: ScrollAlignment,
    pub style: Style,
}

impl ListConfig {
    pub fn new(row_count: usize, height: u16, width: u16) -> Self {
        Self {
            row_count,
            height,
            width,
            scroll_to_index: None,
            scroll_to_alignment: ScrollAlignment::Auto,
            style: Style::default(),
        }
    }
}

/// 调用方透传的列表配置，最后合并，可覆盖任何默认值。
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListProps {
    pub height: Option<u16>,
    pub width: Option<u16>,
    pub scroll_to_index: Option<Option<usize>>,
    pub scroll_to_alignment: Option<ScrollAlignment>,
    pub style: Option<Style>,
}

impl ListProps {
    pub fn apply(&self, mut config: ListConfig) -> ListConfig {
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(target) = self.scroll_to_index {
            config.scroll_to_index = target;
        }
        if let Some(alignment) = self.scroll_to_alignment {
            config.scroll_to_alignment = alignment;
        }
        if let Some(style) = self.style {
            config.style = style;
        }
        config
    }
}

/// 可见行的位置信息。`clip_top` 为被视口上沿裁掉的行数。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowPlacement {
    pub index: usize,
    pub key: String,
    pub area: Rect,
    pub clip_top: u16,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct ScrollTarget {
    index: Option<usize>,
    row_count: usize,
    alignment: ScrollAlignment,
}

/// 窗口化列表的持久状态：行高缓存、滚动偏移、上一次绘制的视口。
#[derive(Clone, Debug, Default)]
pub struct WindowedListState {
    sizes: CellSizeCache,
    scroll_offset: u32,
    applied_target: Option<ScrollTarget>,
    viewport: Rect,
}

impl WindowedListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn sizes(&self) -> &CellSizeCache {
        &self.sizes
    }

    /// 行高可能随时间变化，清除 `index` 之后的缓存，下次布局时重新测量并重新滚动到目标行。
    pub fn recompute_row_heights(&mut self, index: usize) {
        tracing::debug!(index, "recompute row heights");
        self.sizes.invalidate_from(index);
        self.applied_target = None;
    }

    /// 按配置布局，返回与视口相交的行。
    pub fn layout(
        &mut self,
        config: &ListConfig,
        area: Rect,
        height_of: &dyn Fn(usize) -> u16,
    ) -> Vec<RowPlacement> {
        self.viewport = Rect {
            x: area.x,
            y: area.y,
            width: config.width.min(area.width),
            height: config.height.min(area.height),
        };
        if self.sizes.row_count() != config.row_count {
            self.sizes.set_row_count(config.row_count);
        }
        self.apply_scroll_target(config, height_of);
        self.clamp_offset();
        self.visible_rows(height_of)
    }

    fn apply_scroll_target(&mut self, config: &ListConfig, height_of: &dyn Fn(usize) -> u16) {
        let target = ScrollTarget {
            index: config.scroll_to_index,
            row_count: config.row_count,
            alignment: config.scroll_to_alignment,
        };
        if self.applied_target == Some(target) {
            return;
        }
        self.applied_target = Some(target);
        let Some(index) = target.index else {
            return;
        };
        let Some((start, end)) = self.sizes.bounds_of(index, height_of) else {
            return;
        };
        self.scroll_offset = aligned_offset(
            start,
            end,
            self.scroll_offset,
            u32::from(self.viewport.height),
            target.alignment,
        );
    }

    fn max_offset(&self) -> u32 {
        self.sizes
            .total_size()
            .saturating_sub(u32::from(self.viewport.height))
    }

    fn clamp_offset(&mut self) {
        let max = self.max_offset();
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
    }

    fn visible_rows(&mut self, height_of: &dyn Fn(usize) -> u16) -> Vec<RowPlacement> {
        let mut out = Vec::new();
        let view_end = self.view_end();
        let Some(first) = self.sizes.row_at_offset(self.scroll_offset, height_of) else {
            return out;
        };
        let mut index = first;
        while let Some((start, end)) = self.sizes.bounds_of(index, height_of) {
            if start >= view_end {
                break;
            }
            if let Some(placement) = self.place(index, start, end) {
                out.push(placement);
            }
            index += 1;
        }
        out
    }

    fn view_end(&self) -> u32 {
        self.scroll_offset
            .saturating_add(u32::from(self.viewport.height))
    }

    fn place(&self, index: usize, start: u32, end: u32) -> Option<RowPlacement> {
        let view_start = self.scroll_offset;
        let top = start.max(view_start);
        let bottom = end.min(self.view_end());
        if bottom <= top {
            return None;
        }
        Some(RowPlacement {
            index,
            key: index.to_string(),
            area: Rect {
                x: self.viewport.x,
                y: self.viewport.y + (top - view_start) as u16,
                width: self.viewport.width,
                height: (bottom - top) as u16,
            },
            clip_top: (top - start) as u16,
        })
    }

    /// 已测量且在视口内的行的位置
    pub fn placement_of(&self, index: usize) -> Option<RowPlacement> {
        let (start, end) = self.sizes.measured_bounds(index)?;
        self.place(index, start, end)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll_offset = if delta.is_negative() {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta as u32)
        };
        self.clamp_offset();
    }

    /// 命中测试，只使用上一次布局已测量的行。
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        let view = self.viewport;
        if x < view.x || x >= view.x + view.width || y < view.y || y >= view.y + view.height {
            return None;
        }
        let offset = self.scroll_offset + u32::from(y - view.y);
        self.sizes.measured_row_at(offset)
    }
}

fn aligned_offset(
    start: u32,
    end: u32,
    current: u32,
    viewport: u32,
    alignment: ScrollAlignment,
) -> u32 {
    match alignment {
        ScrollAlignment::Start => start,
        ScrollAlignment::End => end.saturating_sub(viewport),
        ScrollAlignment::Center => {
            let row = end - start;
            (start + row / 2).saturating_sub(viewport / 2)
        }
        ScrollAlignment::Auto => {
            if start < current {
                start
            } else if end > current.saturating_add(viewport) {
                end.saturating_sub(viewport)
            } else {
                current
            }
        }
    }
}
