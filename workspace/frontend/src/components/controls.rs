use chrono::NaiveDate;
use model::Predictor;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

// What-if slider bounds and steps: (min, max, step).
pub const IRRADIANCE_SLIDER: (f64, f64, f64) = (0.0, 10.0, 0.1);
pub const TEMPERATURE_SLIDER: (f64, f64, f64) = (0.0, 40.0, 0.5);
pub const HUMIDITY_SLIDER: (f64, f64, f64) = (0.0, 100.0, 1.0);

pub const DEFAULT_IRRADIANCE: f64 = 5.0;
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_HUMIDITY: f64 = 50.0;

#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    /// Full span of the loaded table, used to bound the date pickers.
    pub span: (NaiveDate, NaiveDate),
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub predictor: Predictor,
    pub irradiance: f64,
    pub temperature: f64,
    pub humidity: f64,
    /// `None` means the picker holds no parseable date; the filter then
    /// falls back to the full table range.
    pub on_start_change: Callback<Option<NaiveDate>>,
    pub on_end_change: Callback<Option<NaiveDate>>,
    pub on_predictor_change: Callback<Predictor>,
    pub on_irradiance_change: Callback<f64>,
    pub on_temperature_change: Callback<f64>,
    pub on_humidity_change: Callback<f64>,
}

/// Sidebar widgets: date-range pickers, scatter-axis selector, and the three
/// what-if sliders. Pure input surface; all state lives in the parent.
#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let (min_date, max_date) = props.span;

    let on_start = date_callback(props.on_start_change.clone());
    let on_end = date_callback(props.on_end_change.clone());

    let on_predictor = {
        let on_predictor_change = props.on_predictor_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(predictor) = Predictor::from_column_name(&select.value()) {
                    on_predictor_change.emit(predictor);
                }
            }
        })
    };

    html! {
        <div class="flex flex-col gap-4">
            <div class="form-control w-full">
                <label class="label"><span class="label-text">{"Start date"}</span></label>
                <input
                    type="date"
                    class="input input-bordered w-full"
                    value={props.start.to_string()}
                    min={min_date.to_string()}
                    max={max_date.to_string()}
                    onchange={on_start}
                />
            </div>
            <div class="form-control w-full">
                <label class="label"><span class="label-text">{"End date"}</span></label>
                <input
                    type="date"
                    class="input input-bordered w-full"
                    value={props.end.to_string()}
                    min={min_date.to_string()}
                    max={max_date.to_string()}
                    onchange={on_end}
                />
            </div>
            <div class="form-control w-full">
                <label class="label"><span class="label-text">{"Scatter plot X-axis"}</span></label>
                <select class="select select-bordered w-full" onchange={on_predictor}>
                    { for Predictor::ALL.iter().map(|p| html! {
                        <option value={p.column_name()} selected={*p == props.predictor}>
                            {p.column_name()}
                        </option>
                    }) }
                </select>
            </div>
            <div class="divider text-sm">{"Adjust inputs for prediction"}</div>
            { slider(Predictor::Irradiance.column_name(), IRRADIANCE_SLIDER, props.irradiance, props.on_irradiance_change.clone()) }
            { slider(Predictor::Temperature.column_name(), TEMPERATURE_SLIDER, props.temperature, props.on_temperature_change.clone()) }
            { slider(Predictor::Humidity.column_name(), HUMIDITY_SLIDER, props.humidity, props.on_humidity_change.clone()) }
        </div>
    }
}

fn date_callback(on_change: Callback<Option<NaiveDate>>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let value = e
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default();
        on_change.emit(NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok());
    })
}

fn slider(
    label: &'static str,
    (min, max, step): (f64, f64, f64),
    value: f64,
    on_change: Callback<f64>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            if let Ok(parsed) = input.value().parse::<f64>() {
                on_change.emit(parsed);
            }
        }
    });

    html! {
        <div class="form-control w-full">
            <label class="label">
                <span class="label-text">{label}</span>
                <span class="label-text-alt">{value.to_string()}</span>
            </label>
            <input
                type="range"
                class="range range-primary"
                min={min.to_string()}
                max={max.to_string()}
                step={step.to_string()}
                value={value.to_string()}
                {oninput}
            />
        </div>
    }
}
