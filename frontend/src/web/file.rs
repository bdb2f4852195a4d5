//! FileReader 封装
//!
//! 把用户选择的图片读成 `data:` URL，仅用于本地预览。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

pub async fn read_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(|e| format!("创建 FileReader 失败: {:?}", e))?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let loaded = reader.clone();
        let on_load = Closure::once_into_js(move || {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let on_error = Closure::once_into_js(move || {
            let _ = reject.call0(&JsValue::NULL);
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| format!("读取文件失败: {:?}", e))?;

    let value = JsFuture::from(promise)
        .await
        .map_err(|e| format!("读取文件失败: {:?}", e))?;

    value
        .as_string()
        .ok_or_else(|| "读取结果不是字符串".to_string())
}
