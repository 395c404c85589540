use chrono::NaiveDate;
use compute::DashboardContext;
use model::Predictor;
use yew::prelude::*;

use super::scatter_chart::ScatterChart;
use super::summary::Summary;
use super::timeseries_chart::TimeseriesChart;
use super::whatif::WhatIf;
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::use_load;
use crate::common::loading::Loading;
use crate::components::controls::{
    Controls, DEFAULT_HUMIDITY, DEFAULT_IRRADIANCE, DEFAULT_TEMPERATURE,
};
use crate::dataset;
use crate::hooks::FetchState;

/// Entry component: drives the one-time load and gates the whole dashboard
/// behind it, so a failed load shows an error page and nothing else.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let load_state = use_load(dataset::load_dashboard);

    match &*load_state {
        FetchState::Loading => html! { <Loading text="Loading dataset..." /> },
        FetchState::Error(message) => html! { <ErrorDisplay message={message.clone()} /> },
        FetchState::Success(context) => html! { <DashboardView context={context.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
struct DashboardViewProps {
    context: DashboardContext,
}

#[function_component(DashboardView)]
fn dashboard_view(props: &DashboardViewProps) -> Html {
    let context = &props.context;
    // The context only exists for a successfully fitted, non-empty table.
    let (min_date, max_date) = context.date_span().expect("fitted table has rows");

    let start = use_state(|| None::<NaiveDate>);
    let end = use_state(|| None::<NaiveDate>);
    let predictor = use_state(|| Predictor::Irradiance);
    let irradiance = use_state(|| DEFAULT_IRRADIANCE);
    let temperature = use_state(|| DEFAULT_TEMPERATURE);
    let humidity = use_state(|| DEFAULT_HUMIDITY);

    // Any widget change lands as a state update and re-runs everything
    // below: filter, chart builds, what-if prediction. The rendered view is
    // always fully consistent with the current widget state.
    let selection_start = (*start).unwrap_or(min_date);
    let selection_end = (*end).unwrap_or(max_date);
    let view = context.filtered(Some((selection_start, selection_end)));
    let prediction = context
        .model()
        .predict_one(*irradiance, *temperature, *humidity);

    let on_start_change = {
        let start = start.clone();
        Callback::from(move |date| start.set(date))
    };
    let on_end_change = {
        let end = end.clone();
        Callback::from(move |date| end.set(date))
    };
    let on_predictor_change = {
        let predictor = predictor.clone();
        Callback::from(move |choice| predictor.set(choice))
    };
    let on_irradiance_change = {
        let irradiance = irradiance.clone();
        Callback::from(move |value| irradiance.set(value))
    };
    let on_temperature_change = {
        let temperature = temperature.clone();
        Callback::from(move |value| temperature.set(value))
    };
    let on_humidity_change = {
        let humidity = humidity.clone();
        Callback::from(move |value| humidity.set(value))
    };

    html! {
        <div class="p-6">
            <h1 class="text-2xl font-bold">{"Solar Output Regression Dashboard"}</h1>
            <div class="mt-2">
                <Summary start={min_date} end={max_date} r_squared={context.model().score()} />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-4 gap-6 mt-6">
                <div class="card bg-base-100 shadow self-start">
                    <div class="card-body">
                        <h2 class="card-title">{"Filters & Inputs"}</h2>
                        <Controls
                            span={(min_date, max_date)}
                            start={selection_start}
                            end={selection_end}
                            predictor={*predictor}
                            irradiance={*irradiance}
                            temperature={*temperature}
                            humidity={*humidity}
                            {on_start_change}
                            {on_end_change}
                            {on_predictor_change}
                            {on_irradiance_change}
                            {on_temperature_change}
                            {on_humidity_change}
                        />
                    </div>
                </div>
                <div class="lg:col-span-3 flex flex-col gap-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"Actual vs Predicted Output over Time"}</h2>
                            <TimeseriesChart view={view.clone()} />
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{format!("Solar Output vs {}", *predictor)}</h2>
                            <ScatterChart {view} predictor={*predictor} />
                        </div>
                    </div>
                    <WhatIf
                        irradiance={*irradiance}
                        temperature={*temperature}
                        humidity={*humidity}
                        {prediction}
                    />
                </div>
            </div>
        </div>
    }
}
