use super::async_select::{AsyncSelect, OptionLoader};
use super::props::SelectProps;
use super::standard::StandardSelect;
use super::widget::SelectWidget;
use std::fmt;
use std::rc::Rc;

pub type SelectFactory = Rc<dyn Fn(SelectProps) -> Box<dyn SelectWidget>>;

/// 可渲染的选择控件变体。
#[derive(Clone)]
pub enum SelectComponent {
    Standard,
    Async,
    Custom(SelectFactory),
}

impl SelectComponent {
    pub fn name(&self) -> &'static str {
        match self {
            SelectComponent::Standard => "standard",
            SelectComponent::Async => "async",
            SelectComponent::Custom(_) => "custom",
        }
    }

    pub fn build(
        &self,
        props: SelectProps,
        loader: Option<Box<dyn OptionLoader>>,
    ) -> Box<dyn SelectWidget> {
        match self {
            SelectComponent::Standard => Box::new(StandardSelect::new(props)),
            SelectComponent::Async => Box::new(AsyncSelect::new(props, loader)),
            SelectComponent::Custom(factory) => factory(props),
        }
    }
}

impl fmt::Debug for SelectComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 显式指定的控件优先，其次按 async 标记选择异步或同步变体。
pub fn resolve_select_component(
    select_component: Option<&SelectFactory>,
    is_async: bool,
) -> SelectComponent {
    let resolved = match select_component {
        Some(factory) => SelectComponent::Custom(Rc::clone(factory)),
        None if is_async => SelectComponent::Async,
        None => SelectComponent::Standard,
    };
    tracing::debug!(component = resolved.name(), "select component resolved");
    resolved
}
