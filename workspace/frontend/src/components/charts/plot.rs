use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Transparent background, hover tooltips only.
pub fn base_layout(height: u32) -> Value {
    serde_json::json!({
        "height": height,
        "margin": {"t": 10, "r": 10, "l": 40, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "showlegend": false,
    })
}

/// Plain JS objects rather than `Map`s, which Plotly does not read.
fn to_js(value: &Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    pub data: Value,
    pub layout: Value,
    pub height: u32,
    /// Plotly measures its container when plotting, so a chart inside a
    /// hidden section is redrawn once the section is shown.
    pub visible: bool,
}

#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (
            chart_ref.clone(),
            props.id.clone(),
            props.data.clone(),
            props.layout.clone(),
            props.visible,
        ),
        move |(chart_ref, div_id, data, layout, visible)| {
            if *visible {
                if let Some(element) = chart_ref.cast::<Element>() {
                    element.set_id(div_id);
                    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                    match (to_js(data), to_js(layout), to_js(&config)) {
                        (Ok(data), Ok(layout), Ok(config)) => {
                            log::trace!("Drawing chart {}", div_id);
                            newPlot(div_id, data, layout, config);
                        }
                        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                            log::error!("Failed to convert chart {} for Plotly: {}", div_id, e);
                        }
                    }
                }
            }
            || ()
        },
    );

    let style = format!("height: {}px;", props.height);
    html! {
        <div ref={chart_ref} id={props.id.clone()} class="chart-container w-full" style={style}></div>
    }
}
