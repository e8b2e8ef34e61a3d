use super::select_core::SelectCore;
use super::props::SelectProps;
use super::widget::{MenuRenderer, SelectWidget};
use crate::option::SelectOption;
use crate::theme::RenderTheme;
use crossterm::event::Event;
use ratatui::layout::Rect;
use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedOptions {
    pub query: String,
    pub result: Result<Vec<SelectOption>, String>,
}

/// 异步选项来源。实现可以在后台线程完成加载，通过 `reply` 回传结果。
pub trait OptionLoader {
    fn load(&mut self, query: &str, reply: mpsc::Sender<LoadedOptions>);
}

/// 在调用线程内同步完成加载的适配器。
pub struct FnLoader<F>(pub F);

impl<F> OptionLoader for FnLoader<F>
where
    F: FnMut(&str) -> Result<Vec<SelectOption>, String>,
{
    fn load(&mut self, query: &str, reply: mpsc::Sender<LoadedOptions>) {
        let result = (self.0)(query);
        let sent = reply.send(LoadedOptions {
            query: query.to_string(),
            result,
        });
        if let Err(err) = sent {
            tracing::trace!(query = %err.0.query, "load result dropped, receiver gone");
        }
    }
}

/// 在后台线程按输入过滤固定的选项集合，并模拟网络延迟。
pub struct DelayedLoader {
    options: Vec<SelectOption>,
    label_key: String,
    latency: Duration,
}

impl DelayedLoader {
    pub fn new(
        options: Vec<SelectOption>,
        label_key: impl Into<String>,
        latency: Duration,
    ) -> Self {
        Self {
            options,
            label_key: label_key.into(),
            latency,
        }
    }
}

impl OptionLoader for DelayedLoader {
    fn load(&mut self, query: &str, reply: mpsc::Sender<LoadedOptions>) {
        let needle = query.trim().to_lowercase();
        let matched: Vec<SelectOption> = self
            .options
            .iter()
            .filter(|o| o.label(&self.label_key).to_lowercase().contains(&needle))
            .cloned()
            .collect();
        let latency = self.latency;
        let query = query.to_string();
        thread::spawn(move || {
            thread::sleep(latency);
            let sent = reply.send(LoadedOptions {
                query,
                result: Ok(matched),
            });
            if let Err(err) = sent {
                tracing::trace!(query = %err.0.query, "load result dropped, receiver gone");
            }
        });
    }
}

/// 异步选择控件：输入变化时向加载器请求选项，结果按查询缓存。
pub struct AsyncSelect {
    core: SelectCore,
    loader: Option<Box<dyn OptionLoader>>,
    tx: mpsc::Sender<LoadedOptions>,
    rx: mpsc::Receiver<LoadedOptions>,
    cache: HashMap<String, Vec<SelectOption>>,
    loaded: Vec<SelectOption>,
    pending_query: Option<String>,
    requested_query: Option<String>,
    error: Option<String>,
}

impl AsyncSelect {
    pub fn new(props: SelectProps, loader: Option<Box<dyn OptionLoader>>) -> Self {
        let (tx, rx) = mpsc::channel();
        if loader.is_none() {
            tracing::warn!("async select built without a loader");
        }
        Self {
            core: SelectCore::new(props),
            loader,
            tx,
            rx,
            cache: HashMap::new(),
            loaded: Vec::new(),
            pending_query: None,
            requested_query: None,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_query.is_some()
    }

    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }

    fn status(&self) -> Option<String> {
        if self.loader.is_none() {
            return Some("未配置加载器".to_string());
        }
        if self.is_loading() {
            return Some(self.core.props.loading_text.clone());
        }
        self.error.clone()
    }

    /// 输入变化后按需发起请求；命中缓存时直接使用。
    fn request_for_input(&mut self) {
        let query = self.core.input().to_string();
        if self.requested_query.as_deref() == Some(query.as_str()) {
            return;
        }
        self.requested_query = Some(query.clone());
        if query.chars().count() < self.core.props.min_input_length {
            self.loaded.clear();
            self.pending_query = None;
            return;
        }
        if let Some(hit) = self.cache.get(&query) {
            tracing::trace!(query = %query, "option cache hit");
            self.loaded = hit.clone();
            self.pending_query = None;
            return;
        }
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        tracing::debug!(query = %query, "loading options");
        self.pending_query = Some(query.clone());
        loader.load(&query, self.tx.clone());
    }

    #[cfg(test)]
    pub(crate) fn inject_for_test(&mut self, loaded: LoadedOptions) {
        self.receive(loaded);
    }

    fn receive(&mut self, loaded: LoadedOptions) {
        let current = self.pending_query.as_deref() == Some(loaded.query.as_str());
        match loaded.result {
            Ok(options) => {
                tracing::debug!(query = %loaded.query, count = options.len(), "options loaded");
                if self.core.props.cache {
                    self.cache.insert(loaded.query.clone(), options.clone());
                }
                if current {
                    self.loaded = options;
                    self.error = None;
                }
            }
            Err(err) => {
                tracing::warn!(query = %loaded.query, error = %err, "option load failed");
                if current {
                    self.loaded.clear();
                    self.error = Some(err);
                }
            }
        }
        if current {
            self.pending_query = None;
        }
    }
}

impl SelectWidget for AsyncSelect {
    fn name(&self) -> &'static str {
        "async"
    }

    fn props(&self) -> &SelectProps {
        &self.core.props
    }

    fn render(
        &mut self,
        f: &mut ratatui::Frame<'_>,
        area: Rect,
        theme: &RenderTheme,
        menu: &mut dyn MenuRenderer,
    ) {
        self.tick();
        let visible = self.visible_options();
        let status = self.status();
        self.core
            .render(f, area, theme, menu, &visible, status.as_deref());
    }

    fn handle_event(&mut self, event: &Event, menu: &mut dyn MenuRenderer) -> bool {
        let visible = self.visible_options();
        let consumed = self.core.handle_event(event, menu, &visible);
        if self.core.is_open() {
            self.request_for_input();
        }
        consumed
    }

    fn is_open(&self) -> bool {
        self.core.is_open()
    }

    fn open(&mut self) {
        let visible = self.visible_options();
        self.core.open_menu(&visible);
        self.request_for_input();
    }

    fn close(&mut self) {
        self.core.close();
    }

    fn value(&self) -> &[SelectOption] {
        self.core.value()
    }

    fn input(&self) -> &str {
        self.core.input()
    }

    fn focused_option(&self) -> Option<&SelectOption> {
        self.core.focused()
    }

    fn visible_options(&self) -> Vec<SelectOption> {
        self.core.filter_options(&self.loaded)
    }

    fn tick(&mut self) {
        while let Ok(loaded) = self.rx.try_recv() {
            self.receive(loaded);
        }
    }
}
