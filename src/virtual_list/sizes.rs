/// 行高缓存：按需测量，保存每行的结束偏移（前缀和）。
///
/// 未测量的行按已测量行的平均高度估算，避免为了求总高度测量整张列表。
#[derive(Clone, Debug, Default)]
pub struct CellSizeCache {
    row_count: usize,
    ends: Vec<u32>,
}

impl CellSizeCache {
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            ends: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn measured_count(&self) -> usize {
        self.ends.len()
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.ends.truncate(row_count);
    }

    /// 丢弃 `index` 及之后的测量结果
    pub fn invalidate_from(&mut self, index: usize) {
        self.ends.truncate(index);
    }

    fn measured_end(&self) -> u32 {
        self.ends.last().copied().unwrap_or(0)
    }

    fn ensure_measured(&mut self, index: usize, height_of: &dyn Fn(usize) -> u16) {
        if index >= self.row_count {
            return;
        }
        while self.ends.len() <= index {
            let next = self.ends.len();
            let end = self
                .measured_end()
                .saturating_add(u32::from(height_of(next)));
            self.ends.push(end);
        }
    }

    pub fn bounds_of(
        &mut self,
        index: usize,
        height_of: &dyn Fn(usize) -> u16,
    ) -> Option<(u32, u32)> {
        if index >= self.row_count {
            return None;
        }
        self.ensure_measured(index, height_of);
        let start = if index == 0 { 0 } else { self.ends[index - 1] };
        Some((start, self.ends[index]))
    }

    pub fn estimated_row_size(&self) -> u32 {
        if self.ends.is_empty() {
            return 1;
        }
        (self.measured_end() / self.ends.len() as u32).max(1)
    }

    pub fn total_size(&self) -> u32 {
        let unmeasured = self.row_count.saturating_sub(self.ends.len()) as u32;
        self.measured_end()
            .saturating_add(unmeasured.saturating_mul(self.estimated_row_size()))
    }

    /// 返回包含偏移 `offset` 的行，必要时向后测量。
    pub fn row_at_offset(
        &mut self,
        offset: u32,
        height_of: &dyn Fn(usize) -> u16,
    ) -> Option<usize> {
        if self.row_count == 0 {
            return None;
        }
        while self.measured_end() <= offset && self.ends.len() < self.row_count {
            let next = self.ends.len();
            self.ensure_measured(next, height_of);
        }
        self.measured_row_at(offset)
    }

    /// 只在已测量范围内查找，不触发测量
    pub fn measured_row_at(&self, offset: u32) -> Option<usize> {
        let idx = self.ends.partition_point(|end| *end <= offset);
        if idx < self.ends.len() { Some(idx) } else { None }
    }

    pub fn measured_bounds(&self, index: usize) -> Option<(u32, u32)> {
        let end = *self.ends.get(index)?;
        let start = if index == 0 { 0 } else { self.ends[index - 1] };
        Some((start, end))
    }
}
