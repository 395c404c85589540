use chrono::NaiveDate;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub r_squared: f64,
}

#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    html! {
        <p class="text-sm text-gray-600">
            {format!(
                "Data from {} to {}. Model R² = {:.2}",
                props.start, props.end, props.r_squared
            )}
        </p>
    }
}
