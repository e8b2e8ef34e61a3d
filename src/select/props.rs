use crate::option::{DEFAULT_LABEL_KEY, DEFAULT_VALUE_KEY, SelectOption};

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// 原样交给选择控件的配置。
#[derive(Clone, Debug)]
pub struct SelectProps {
    pub placeholder: String,
    pub label_key: String,
    pub value_key: String,
    pub multi: bool,
    pub searchable: bool,
    pub clearable: bool,
    pub disabled: bool,
    pub close_on_select: bool,
    pub remove_selected: bool,
    pub backspace_removes: bool,
    pub page_size: usize,
    pub no_results_text: String,
    pub loading_text: String,
    pub min_input_length: usize,
    pub cache: bool,
    pub options: Vec<SelectOption>,
    pub value: Vec<SelectOption>,
}

impl Default for SelectProps {
    fn default() -> Self {
        Self {
            placeholder: "请选择…".to_string(),
            label_key: DEFAULT_LABEL_KEY.to_string(),
            value_key: DEFAULT_VALUE_KEY.to_string(),
            multi: false,
            searchable: true,
            clearable: true,
            disabled: false,
            close_on_select: true,
            remove_selected: true,
            backspace_removes: true,
            page_size: DEFAULT_PAGE_SIZE,
            no_results_text: "无匹配结果".to_string(),
            loading_text: "加载中…".to_string(),
            min_input_length: 0,
            cache: true,
            options: Vec::new(),
            value: Vec::new(),
        }
    }
}

impl SelectProps {
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    pub fn label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = key.into();
        self
    }
}
