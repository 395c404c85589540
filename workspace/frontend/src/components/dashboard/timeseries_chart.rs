use compute::{charts, FilteredView};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::plot::render_chart;

const DIV_ID: &str = "chart-timeseries";

#[derive(Properties, PartialEq)]
pub struct TimeseriesChartProps {
    pub view: FilteredView,
}

/// Actual vs. predicted output over the filtered date range. Rebuilt from
/// scratch whenever the view changes.
#[function_component(TimeseriesChart)]
pub fn timeseries_chart(props: &TimeseriesChartProps) -> Html {
    let container_ref = use_node_ref();
    let view = props.view.clone();

    use_effect_with((container_ref.clone(), view), move |(container_ref, view)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(DIV_ID);
            render_chart(DIV_ID, &charts::timeseries_chart(view));
        }
        || ()
    });

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
