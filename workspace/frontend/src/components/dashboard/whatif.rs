use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WhatIfProps {
    pub irradiance: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub prediction: f64,
}

/// Ad hoc model evaluation at the current slider values, independent of the
/// dataset's actual rows.
#[function_component(WhatIf)]
pub fn what_if(props: &WhatIfProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"What-if Prediction"}</h2>
                <p>
                    {format!(
                        "For Irradiance={}, Temperature={}, Humidity={}: ",
                        props.irradiance, props.temperature, props.humidity
                    )}
                    <strong>{format!("Predicted Output = {:.3} MWh", props.prediction)}</strong>
                </p>
            </div>
        </div>
    }
}
