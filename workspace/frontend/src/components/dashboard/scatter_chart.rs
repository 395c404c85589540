use compute::{charts, FilteredView};
use model::Predictor;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::plot::render_chart;

const DIV_ID: &str = "chart-scatter";

#[derive(Properties, PartialEq)]
pub struct ScatterChartProps {
    pub view: FilteredView,
    pub predictor: Predictor,
}

/// Output against the chosen predictor, dates on hover.
#[function_component(ScatterChart)]
pub fn scatter_chart(props: &ScatterChartProps) -> Html {
    let container_ref = use_node_ref();
    let view = props.view.clone();
    let predictor = props.predictor;

    use_effect_with(
        (container_ref.clone(), view, predictor),
        move |(container_ref, view, predictor)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(DIV_ID);
                render_chart(DIV_ID, &charts::scatter_chart(view, *predictor));
            }
            || ()
        },
    );

    if props.view.is_empty() {
        return html! {
            <div class="text-center py-8 text-gray-500">
                <p>{"No rows in the selected date range."}</p>
            </div>
        };
    }

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
