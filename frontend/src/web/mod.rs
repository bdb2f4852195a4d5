//! 原生 Web API 封装模块
//!
//! 对浏览器原生 API 的轻量级封装：fetch、History、LocalStorage、FileReader。

mod file;
mod http;
pub mod router;
mod storage;

pub use file::read_data_url;
pub use http::FetchHttpClient;
pub use storage::BrowserStore;

/// 将元素平滑滚动到可视区域
pub fn scroll_into_view(element_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id));

    if let Some(element) = element {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
