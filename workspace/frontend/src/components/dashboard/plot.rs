use compute::charts::ChartSpec;
use plotly::Trace;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

/// Hands a built chart to the Plotly runtime, replacing whatever the target
/// div currently shows.
pub fn render_chart(div_id: &str, spec: &ChartSpec) {
    let data = js_sys::Array::new();
    for trace in &spec.traces {
        let trace_js = js_sys::JSON::parse(&trace.to_json()).unwrap();
        data.push(&trace_js);
    }

    let layout_json = serde_json::to_string(&spec.layout).unwrap();
    let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

    newPlot(div_id, data.into(), layout_js);
}
